//! Command-line options and crate constants.

use clap::{Parser, ValueEnum};

// Redirect handling
/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains. Reaching the
/// cap is reported as a successful (truncated) trace, not an error.
pub const MAX_HOPS: usize = 20;

// Network operation timeouts
/// Per-request timeout in seconds. Bounds each individual hop so one
/// unresponsive server cannot stall the trace indefinitely.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds (TLS version probe)
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds (TLS version probe)
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;

/// Sentinel recorded as the TLS version for plain-HTTP hops.
pub const TLS_NOT_APPLICABLE: &str = "N/A";

/// Default User-Agent string for HTTP requests.
///
/// A fixed identifying string rather than a browser impersonation: this is a
/// diagnostic tool and servers should be able to tell who is asking. Users can
/// override it via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; redirect_status/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options except the URL have defaults and can be overridden via
/// command-line flags. A `Default` impl is provided for programmatic library
/// use.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// redirect_status example.com
///
/// # JSON output with debug logging
/// redirect_status https://example.com --json --log-level debug
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "redirect_status",
    about = "Traces the redirect chain for a URL, one hop at a time."
)]
pub struct Config {
    /// URL to trace (scheme optional; http:// is assumed when missing)
    pub url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Print the full trace result as JSON instead of one line per hop
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            json: false,
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
