//! The single request/response exchange with the Ollama server.

use std::env;
use std::time::Duration;

use tracing::{debug, warn};

use crate::buffer::ByteBuffer;
use crate::error::ExchangeError;
use crate::ollama::protocol::{ChatRequest, ChatResponse};

/// Default bound on the whole HTTP exchange (5 minutes). Local models can
/// take a while to produce a full completion.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment variable to override the exchange timeout.
const TIMEOUT_ENV_VAR: &str = "SCRIBA_TIMEOUT";

/// Get the configured timeout duration.
///
/// Reads from SCRIBA_TIMEOUT (seconds) if set, otherwise uses the default
/// of 300 seconds. Logs a warning if the variable is set but not a number.
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Perform the one chat exchange: POST the diff prompt to `endpoint` and
/// return the generated message text.
///
/// The response body is accumulated chunk by chunk before decoding; the
/// transport may deliver it in any number of pieces. Connection failures,
/// timeouts, and non-success statuses map to
/// [`ExchangeError::TransportFailed`]; a body without a `message.content`
/// string maps to [`ExchangeError::MalformedResponse`]. No retry is
/// performed.
pub async fn generate_commit_message(diff: &str, endpoint: &str) -> Result<String, ExchangeError> {
    let request = ChatRequest::for_diff(diff);

    let client = reqwest::Client::builder()
        .timeout(get_timeout())
        .build()
        .map_err(ExchangeError::TransportFailed)?;

    debug!(endpoint, model = request.model.as_str(), "posting chat request");

    let response = client
        .post(endpoint)
        .json(&request)
        .send()
        .await
        .map_err(ExchangeError::TransportFailed)?;

    let mut response = response
        .error_for_status()
        .map_err(ExchangeError::TransportFailed)?;

    let mut body = ByteBuffer::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(ExchangeError::TransportFailed)?
    {
        body.append(&chunk)?;
    }

    debug!(bytes = body.len(), "received chat response");

    let parsed: ChatResponse =
        serde_json::from_slice(body.as_bytes()).map_err(ExchangeError::MalformedResponse)?;

    Ok(parsed.message.content)
}
