//! URL scheme normalization and input validation.

use url::Url;

use crate::error_handling::TraceError;

/// Ensures a candidate URL string carries an explicit scheme prefix.
///
/// If the input already starts with `http://` or `https://` (in any letter
/// case) it is returned unchanged; otherwise `http://` is prepended. No other
/// transformation is applied: in particular, a relative `Location` value such
/// as `/login` is *not* resolved against the previous hop's authority, it
/// just gets a scheme bolted on and will fail to parse downstream. That
/// limitation is intentional and documented.
pub fn ensure_scheme(url: &str) -> String {
    if has_scheme(url) {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

fn has_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Validates a trace input URL before any network activity.
///
/// The check is applied to the scheme-normalized form, so bare inputs like
/// `example.com/path` are accepted. Returns the normalized URL string.
///
/// # Errors
///
/// `TraceError::EmptyUrl` for an empty input, `TraceError::InvalidUrl` when
/// the normalized string still fails URL parsing.
pub fn validate(url: &str) -> Result<String, TraceError> {
    if url.is_empty() {
        return Err(TraceError::EmptyUrl);
    }
    let normalized = ensure_scheme(url);
    Url::parse(&normalized)?;
    Ok(normalized)
}
