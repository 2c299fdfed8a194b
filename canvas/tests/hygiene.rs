//! Hygiene: source-level standards, enforced at test time.
//!
//! Scans the production sources under `src/` (side-file unit tests excluded)
//! and fails when a forbidden construct shows up. Budgets only ever shrink.

use std::fs;
use std::path::Path;

/// Pattern, budget, and what to do when the budget is blown.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Crashes.
    (".unwrap()", 0, "propagate the error instead"),
    (".expect(", 0, "propagate the error instead"),
    ("panic!(", 0, "return a SurfaceError"),
    ("unreachable!(", 0, "model the case in the type"),
    ("todo!(", 0, "finish the implementation"),
    ("unimplemented!(", 0, "finish the implementation"),
    // Silent error loss.
    ("let _ =", 0, "handle or log the result"),
    (".ok()", 0, "handle or log the result"),
    // Structure.
    ("#[allow(dead_code)]", 0, "delete the unused item"),
];

fn production_sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    files
}

fn walk(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn forbidden_constructs_stay_within_budget() {
    let files = production_sources();
    let mut report = String::new();

    for (pattern, budget, remedy) in BUDGETS {
        let mut hits = Vec::new();
        for (path, content) in &files {
            for (lineno, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    hits.push(format!("  {path}:{}", lineno + 1));
                }
            }
        }
        if hits.len() > *budget {
            report.push_str(&format!(
                "`{pattern}` over budget ({} found, {budget} allowed); {remedy}:\n{}\n",
                hits.len(),
                hits.join("\n")
            ));
        }
    }

    assert!(report.is_empty(), "\n{report}");
}
