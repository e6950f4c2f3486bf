//! Result types produced by a trace.

use serde::Serialize;

use crate::error_handling::TraceError;

/// One request/response exchange in the redirect chain.
///
/// A record is fully populated in one step, immediately after the response for
/// its hop is received, and never mutated after being appended to
/// [`TraceResult::hops`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopRecord {
    /// 0-based position in the chain.
    pub number: usize,
    /// HTTP status of this hop's response.
    #[serde(rename = "statuscode", skip_serializing_if = "is_zero")]
    pub status_code: u16,
    /// The URL the response reports it was served for.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// HTTP protocol version reported by the response, e.g. "HTTP/1.1".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol: String,
    /// Negotiated TLS version name for HTTPS hops, else "N/A".
    #[serde(rename = "tlsversion", skip_serializing_if = "String::is_empty")]
    pub tls_version: String,
}

/// The outcome of one full trace.
///
/// Failures are reported in-band (`failed` + `failure_message`) rather than
/// as an `Err`, so the CLI and structured output always have a complete
/// object to render. Hops recorded before the point of failure are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceResult {
    /// The original input URL, unmodified.
    #[serde(rename = "url", skip_serializing_if = "String::is_empty")]
    pub requested_url: String,
    /// Hop records in chronological order; empty if the trace failed before
    /// the first request completed.
    #[serde(rename = "redirects", skip_serializing_if = "Vec::is_empty")]
    pub hops: Vec<HopRecord>,
    /// Whether the trace aborted before reaching a terminal response.
    #[serde(rename = "error", skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    /// Human-readable failure description; set exactly when `failed` is true.
    #[serde(rename = "errormessage", skip_serializing_if = "String::is_empty")]
    pub failure_message: String,
}

fn is_zero(value: &u16) -> bool {
    *value == 0
}

impl TraceResult {
    /// A trace that ran to completion (terminal status or hop-limit cap).
    pub(crate) fn completed(requested_url: &str, hops: Vec<HopRecord>) -> Self {
        TraceResult {
            requested_url: requested_url.to_string(),
            hops,
            failed: false,
            failure_message: String::new(),
        }
    }

    /// A trace that aborted, keeping whatever hops were recorded first.
    pub(crate) fn aborted(requested_url: &str, hops: Vec<HopRecord>, error: &TraceError) -> Self {
        TraceResult {
            requested_url: requested_url.to_string(),
            hops,
            failed: true,
            failure_message: error.to_string(),
        }
    }

    /// Status code of the last recorded hop, if any.
    ///
    /// The trace treats every status outside 301-303 as terminal, so a chain
    /// that "succeeded" may well have ended on a 404 or 500. This exposes the
    /// raw code so callers can tell a clean 200 from a swallowed error.
    pub fn final_status(&self) -> Option<u16> {
        self.hops.last().map(|hop| hop.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hop(number: usize, status_code: u16) -> HopRecord {
        HopRecord {
            number,
            status_code,
            url: format!("http://example.com/{number}"),
            protocol: "HTTP/1.1".to_string(),
            tls_version: "N/A".to_string(),
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let result = TraceResult::completed("example.com", vec![sample_hop(0, 200)]);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["url"], "example.com");
        let hop = &value["redirects"][0];
        assert_eq!(hop["number"], 0);
        assert_eq!(hop["statuscode"], 200);
        assert_eq!(hop["url"], "http://example.com/0");
        assert_eq!(hop["protocol"], "HTTP/1.1");
        assert_eq!(hop["tlsversion"], "N/A");
    }

    #[test]
    fn test_error_fields_omitted_on_success() {
        let result = TraceResult::completed("example.com", vec![sample_hop(0, 200)]);
        let value = serde_json::to_value(&result).unwrap();

        assert!(value.get("error").is_none());
        assert!(value.get("errormessage").is_none());
    }

    #[test]
    fn test_empty_hops_omitted_on_failure() {
        let result =
            TraceResult::aborted("example.com", Vec::new(), &TraceError::MissingLocation);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["error"], true);
        assert_eq!(value["errormessage"], "Location header is empty");
        assert!(value.get("redirects").is_none());
    }

    #[test]
    fn test_final_status() {
        let result =
            TraceResult::completed("example.com", vec![sample_hop(0, 302), sample_hop(1, 404)]);
        assert_eq!(result.final_status(), Some(404));

        let empty = TraceResult::completed("example.com", Vec::new());
        assert_eq!(empty.final_status(), None);
    }
}
