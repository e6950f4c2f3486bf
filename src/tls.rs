//! Negotiated TLS protocol version probe.
//!
//! `reqwest` does not expose the TLS version negotiated for a response, so
//! HTTPS hops get their version from a separate rustls handshake against the
//! same host and port. The probe stops at the handshake; no request is sent
//! over the connection.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::{TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS};

/// Performs a TLS handshake with `host:port` and returns the negotiated
/// protocol version name (e.g. "TLSv1_3").
///
/// # Errors
///
/// Returns an error if the host name is invalid, the TCP connection or TLS
/// handshake fails, or either step times out.
pub async fn negotiated_tls_version(host: &str, port: u16) -> Result<String> {
    log::debug!("Probing TLS version for {host}:{port}");

    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| anyhow::anyhow!("Invalid host name {}: {}", host, e))?;

    let sock = match tokio::time::timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect((host, port)),
    )
    .await
    {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => {
            return Err(anyhow::anyhow!("Failed to connect to {}:{} - {}", host, port, e));
        }
        Err(_) => {
            return Err(anyhow::anyhow!(
                "TCP connection timeout for {}:{} ({}s)",
                host,
                port,
                TCP_CONNECT_TIMEOUT_SECS
            ));
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = match tokio::time::timeout(
        Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, sock),
    )
    .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            return Err(anyhow::anyhow!("TLS handshake failed for {}: {}", host, e));
        }
        Err(_) => {
            return Err(anyhow::anyhow!(
                "TLS handshake timeout for {} ({}s)",
                host,
                TLS_HANDSHAKE_TIMEOUT_SECS
            ));
        }
    };

    let version = tls_stream
        .get_ref()
        .1
        .protocol_version()
        .map(|v| format!("{v:?}"))
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(version)
}
