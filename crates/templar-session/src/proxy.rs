//! HTTP credential acquisition via a trusted backend intermediary.
//!
//! The editor vendor's auth endpoint wants a client id and a client
//! secret. The secret must never reach the browser-adjacent host process,
//! so real deployments run a tiny backend proxy: the host sends it a user
//! id, the proxy adds the secret, forwards the exchange to the vendor, and
//! returns just the short-lived session token.
//!
//! [`ProxyProvider`] is the host side of that conversation.

use serde::Deserialize;

use crate::{Credential, SessionError, SessionProvider};

/// What the intermediary sends back on success.
///
/// Anything beyond `token` is ignored — proxies are free to add fields.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// A [`SessionProvider`] that exchanges a user id for a credential by
/// calling a trusted intermediary over HTTP.
///
/// The wire contract is deliberately minimal:
///
/// ```text
/// POST {endpoint}
/// {"user_id": "<id>"}
///         →
/// 200 {"token": "<opaque session token>"}
/// ```
///
/// Non-2xx answers map to [`SessionError::Rejected`], transport failures
/// to [`SessionError::Unreachable`], and unparseable bodies to
/// [`SessionError::MalformedResponse`].
///
/// ## Example
///
/// ```rust,no_run
/// use templar_session::{ProxyProvider, SessionProvider};
///
/// # async fn run() -> Result<(), templar_session::SessionError> {
/// let provider = ProxyProvider::new("http://localhost:4000/auth");
/// let credential = provider.acquire("user-1234").await?;
/// # Ok(())
/// # }
/// ```
pub struct ProxyProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl ProxyProvider {
    /// Creates a provider targeting the given intermediary endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a provider with a caller-supplied `reqwest` client.
    ///
    /// Use this to set timeouts or TLS options — the controller imposes
    /// no deadline of its own, so if you want one, configure it here.
    pub fn with_client(
        endpoint: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

impl SessionProvider for ProxyProvider {
    async fn acquire(
        &self,
        user_id: &str,
    ) -> Result<Credential, SessionError> {
        tracing::debug!(user_id, endpoint = %self.endpoint, "requesting session credential");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "user_id": user_id }))
            .send()
            .await
            .map_err(|e| SessionError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The body often carries the intermediary's reason; keep it.
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(user_id, %status, "credential request rejected");
            return Err(SessionError::Rejected(format!("{status}: {body}")));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| SessionError::MalformedResponse(e.to_string()))?;

        tracing::info!(user_id, "session credential acquired");
        Ok(Credential::new(parsed.token))
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Binds a one-shot HTTP server that answers the first request with
    /// a canned response, and returns the endpoint URL to point the
    /// provider at. Just enough HTTP to exercise the real `acquire()`
    /// path over a live socket.
    async fn canned_intermediary(
        status_line: &'static str,
        body: &'static str,
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            // Drain the request until the JSON body's closing brace so
            // the client isn't cut off mid-send.
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request.ends_with(b"}") {
                    break;
                }
            }

            let response = format!(
                "{status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len(),
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });

        format!("http://{addr}/auth")
    }

    #[tokio::test]
    async fn test_acquire_ok_response_returns_credential() {
        let endpoint =
            canned_intermediary("HTTP/1.1 200 OK", r#"{"token":"tok-abc"}"#)
                .await;
        let provider = ProxyProvider::new(endpoint);

        let credential =
            provider.acquire("user-1").await.expect("should succeed");

        assert_eq!(credential.expose(), "tok-abc");
    }

    #[tokio::test]
    async fn test_acquire_non_2xx_returns_rejected_with_status() {
        let endpoint =
            canned_intermediary("HTTP/1.1 403 Forbidden", "unknown user")
                .await;
        let provider = ProxyProvider::new(endpoint);

        let result = provider.acquire("user-1").await;

        match result {
            Err(SessionError::Rejected(msg)) => {
                assert!(msg.contains("403"), "status should be kept: {msg}");
                assert!(
                    msg.contains("unknown user"),
                    "intermediary's reason should be kept: {msg}"
                );
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_acquire_non_json_body_returns_malformed_response() {
        // A 2xx answer whose body isn't the token shape — a proxy
        // misroute serving an HTML page, say.
        let endpoint =
            canned_intermediary("HTTP/1.1 200 OK", "<html>login</html>")
                .await;
        let provider = ProxyProvider::new(endpoint);

        let result = provider.acquire("user-1").await;

        assert!(
            matches!(result, Err(SessionError::MalformedResponse(_))),
            "expected MalformedResponse, got {result:?}"
        );
    }

    #[tokio::test]
    async fn test_acquire_unreachable_endpoint_returns_unreachable() {
        // Port 9 (discard) with nothing listening — connection refused.
        let provider = ProxyProvider::new("http://127.0.0.1:9/auth");

        let result = provider.acquire("user-1").await;

        assert!(
            matches!(result, Err(SessionError::Unreachable(_))),
            "expected Unreachable, got {result:?}"
        );
    }

    #[test]
    fn test_token_response_ignores_extra_fields() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{"token":"abc","expires_in":3600,"scope":"editor"}"#,
        )
        .expect("extra fields should be ignored");

        assert_eq!(parsed.token, "abc");
    }

    #[test]
    fn test_token_response_missing_token_fails() {
        let result: Result<TokenResponse, _> =
            serde_json::from_str(r#"{"access": "abc"}"#);

        assert!(result.is_err());
    }
}
