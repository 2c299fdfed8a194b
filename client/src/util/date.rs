//! Timestamp helpers: ISO 8601 production and human-readable display.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Current time as an ISO 8601 string. Native builds return a fixed epoch
/// value, which is fine for fixture data in tests.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}

/// Render an ISO 8601 timestamp as e.g. `May 14, 2024`.
///
/// Falls back to the raw input when it does not look like a date, so a
/// malformed record still displays something.
pub fn format_long(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    let mut parts = date_part.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return iso.to_owned();
    };
    let Some(month_name) = month.checked_sub(1).and_then(|i| MONTHS.get(i)) else {
        return iso.to_owned();
    };
    format!("{month_name} {day}, {year}")
}
