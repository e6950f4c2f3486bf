//! The redirect-following loop.
//!
//! One request per hop, transparent redirect following disabled, so every
//! 3xx response surfaces its raw `Location` header. The loop is an explicit
//! accumulator: each iteration consumes the current URL and produces a hop
//! record plus a step outcome, with no shared state beyond the accumulator.

use log::{debug, warn};
use reqwest::header::LOCATION;
use reqwest::Url;

use crate::config::{Config, MAX_HOPS, TLS_NOT_APPLICABLE};
use crate::error_handling::TraceError;
use crate::initialization::init_client;
use crate::models::{HopRecord, TraceResult};
use crate::normalize::{ensure_scheme, validate};
use crate::tls::negotiated_tls_version;

/// Outcome of a single hop, decided after its record has been built.
enum Step {
    /// Redirect continuation: the next URL, already scheme-normalized.
    Next(String),
    /// Terminal status reached; the trace is complete.
    Terminal,
    /// Redirect-class status without a usable `Location` header.
    MissingLocation,
}

/// Terminal statuses stop the loop; only 301-303 continue it.
///
/// This is a deliberately coarse policy inherited from the tool's origins:
/// 304 and every 4xx/5xx terminate the trace "successfully", and 2xx codes
/// other than 200 fall through to the Location lookup. Callers that care can
/// inspect [`TraceResult::final_status`].
fn is_terminal(status: u16) -> bool {
    status == 200 || status > 303
}

/// Follows the redirect chain for a URL, recording one hop per response.
///
/// Owns an HTTP client configured with redirects disabled. A `Tracer` is
/// immutable once built; concurrent `trace` calls on the same instance are
/// safe and independent.
pub struct Tracer {
    client: reqwest::Client,
}

impl Tracer {
    /// Creates a tracer with default settings.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::from_config(&Config::default())
    }

    /// Creates a tracer from configuration (timeout, User-Agent).
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Tracer {
            client: init_client(config)?,
        })
    }

    /// Traces the redirect chain starting at `url`.
    ///
    /// Failures are reported in-band on the returned [`TraceResult`]; this
    /// method never panics and never returns an `Err`.
    pub async fn trace(&self, url: &str) -> TraceResult {
        let mut hops = Vec::new();
        match self.follow(url, &mut hops).await {
            Ok(()) => TraceResult::completed(url, hops),
            Err(e) => TraceResult::aborted(url, hops, &e),
        }
    }

    /// The bounded loop. Hops recorded before a failure stay in `hops`.
    async fn follow(
        &self,
        requested_url: &str,
        hops: &mut Vec<HopRecord>,
    ) -> Result<(), TraceError> {
        let mut current = validate(requested_url)?;

        for number in 0..MAX_HOPS {
            let (record, step) = self.hop(number, &current).await?;
            hops.push(record);
            match step {
                Step::Next(next) => current = next,
                Step::Terminal => return Ok(()),
                Step::MissingLocation => return Err(TraceError::MissingLocation),
            }
        }

        // The hop cap is a soft cap: a chain that is still redirecting after
        // MAX_HOPS is reported as a successful, truncated trace.
        debug!("Hop limit of {MAX_HOPS} reached for {requested_url}");
        Ok(())
    }

    /// Performs one request and builds the hop record for its response.
    ///
    /// Only the status line and headers are consulted; the response is
    /// dropped without reading the body, releasing the connection before the
    /// next hop.
    async fn hop(&self, number: usize, url: &str) -> Result<(HopRecord, Step), TraceError> {
        debug!("Hop {number}: GET {url}");
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let record = HopRecord {
            number,
            status_code: status,
            url: response.url().to_string(),
            protocol: format!("{:?}", response.version()),
            tls_version: tls_version_of(response.url()).await,
        };

        let step = if is_terminal(status) {
            Step::Terminal
        } else {
            match location_of(&response) {
                Some(location) => Step::Next(ensure_scheme(&location)),
                None => Step::MissingLocation,
            }
        };

        Ok((record, step))
    }
}

/// First non-empty `Location` header value, if any.
///
/// `HeaderMap` name lookups are case-insensitive, so `Location`, `location`,
/// and `LOCATION` all resolve to the same entry.
fn location_of(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// TLS version string for a hop: the negotiated version name for HTTPS
/// request URLs, the "N/A" sentinel otherwise.
async fn tls_version_of(url: &Url) -> String {
    if url.scheme() != "https" {
        return TLS_NOT_APPLICABLE.to_string();
    }
    let Some(host) = url.host_str() else {
        return "Unknown".to_string();
    };
    let port = url.port_or_known_default().unwrap_or(443);
    match negotiated_tls_version(host, port).await {
        Ok(version) => version,
        Err(e) => {
            warn!("TLS version probe failed for {host}:{port}: {e}");
            "Unknown".to_string()
        }
    }
}

/// Traces the redirect chain for `url` with default settings.
///
/// This is the sole entry point most callers need. All failures, including a
/// failure to build the HTTP client, are reported in-band on the result.
pub async fn trace(url: &str) -> TraceResult {
    let config = Config {
        url: url.to_string(),
        ..Config::default()
    };
    trace_with_config(&config).await
}

/// Traces the redirect chain for `config.url` using `config` for the client
/// settings (timeout, User-Agent).
pub async fn trace_with_config(config: &Config) -> TraceResult {
    match Tracer::from_config(config) {
        Ok(tracer) => tracer.trace(&config.url).await,
        Err(e) => TraceResult::aborted(&config.url, Vec::new(), &TraceError::Transport(e)),
    }
}
