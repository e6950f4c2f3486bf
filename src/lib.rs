//! redirect_status library: manual HTTP redirect chain tracing
//!
//! This library follows the redirect chain for a URL one request at a time,
//! with transparent redirect following disabled, and records each hop's URL,
//! status code, HTTP protocol version, and TLS version. It is a diagnostic
//! tool for inspecting how a URL resolves: redirect loops, protocol
//! downgrades, or TLS version changes across hops.
//!
//! Failures never escape the [`trace`] boundary as errors; the returned
//! [`TraceResult`] carries `failed` and `failure_message` instead, so a
//! caller always gets a well-formed result to render.
//!
//! # Example
//!
//! ```no_run
//! use redirect_status::trace;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let result = trace("example.com").await;
//! if result.failed {
//!     eprintln!("trace failed: {}", result.failure_message);
//! }
//! for hop in &result.hops {
//!     println!(
//!         "{} {} {} {} {}",
//!         hop.number, hop.status_code, hop.url, hop.protocol, hop.tls_version
//!     );
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod normalize;
mod tls;
mod tracer;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use models::{HopRecord, TraceResult};
pub use tracer::{trace, trace_with_config, Tracer};
