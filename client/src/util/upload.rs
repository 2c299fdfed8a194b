//! Upload validation and file reading for the `FileUploader` component.
//!
//! ERROR HANDLING
//! ==============
//! Validation rejections carry user-facing messages; the component surfaces
//! them as error toasts and never invokes the upload callback for a rejected
//! file.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// What the uploader accepts.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadPolicy {
    /// MIME accept pattern, e.g. `image/*` or an exact type.
    pub accept: String,
    /// Size ceiling in bytes.
    pub max_bytes: f64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self { accept: "image/*".to_owned(), max_bytes: 5.0 * BYTES_PER_MB }
    }
}

/// Why a file was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadError {
    UnsupportedType { accept: String },
    TooLarge { max_mb: u64 },
}

impl UploadError {
    /// Message shown to the user in an error toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedType { accept } => {
                format!("Invalid file type. Please upload {accept} files.")
            }
            Self::TooLarge { max_mb } => {
                format!("File too large. Maximum size is {max_mb}MB.")
            }
        }
    }
}

/// Check `mime` and `size` (bytes) against the policy.
///
/// # Errors
///
/// Returns the rejection reason when the MIME type does not match the accept
/// pattern or the file exceeds the size ceiling.
pub fn validate_file(mime: &str, size: f64, policy: &UploadPolicy) -> Result<(), UploadError> {
    let prefix = policy.accept.trim_end_matches('*');
    if !mime.starts_with(prefix) {
        return Err(UploadError::UnsupportedType { accept: prefix.to_owned() });
    }
    if size > policy.max_bytes {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max_mb = (policy.max_bytes / BYTES_PER_MB) as u64;
        return Err(UploadError::TooLarge { max_mb });
    }
    Ok(())
}

/// Read `file` into a `data:` URL and hand it to `on_loaded`.
///
/// # Errors
///
/// Returns a user-facing message when the browser refuses to start the read.
#[cfg(feature = "hydrate")]
pub fn read_data_url<F>(file: &web_sys::File, on_loaded: F) -> Result<(), String>
where
    F: Fn(String) + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new().map_err(|_| "Could not read the file.".to_owned())?;
    let reader_for_cb = reader.clone();
    let cb = Closure::wrap(Box::new(move |_ev: web_sys::ProgressEvent| {
        if let Ok(value) = reader_for_cb.result() {
            if let Some(url) = value.as_string() {
                on_loaded(url);
            }
        }
    }) as Box<dyn FnMut(web_sys::ProgressEvent)>);
    reader.set_onload(Some(cb.as_ref().unchecked_ref()));
    // One closure leaks per read; reads are user-initiated and rare.
    cb.forget();
    reader
        .read_as_data_url(file)
        .map_err(|_| "Could not read the file.".to_owned())
}
