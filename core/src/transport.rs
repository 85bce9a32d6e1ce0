//! Blocking execution of an `HttpRequest`.
//!
//! # Design
//! Each `Transport` owns its own `ureq::Agent`, and `RequestSpec` creates a
//! fresh one per dispatch, so no connection outlives the call that opened it.
//! The agent, the response and the body reader are all released by `Drop` on
//! every exit path, whether the body was read completely or not. `Drop`
//! cannot fail, so an error while closing a stream is not reported; write
//! and read errors always are.
//!
//! Status codes are passed through (`http_status_as_error(false)`), so a 4xx
//! or 5xx response yields its body like any other.

use std::io::{self, BufRead, BufReader};

use tracing::{debug, warn};
use ureq::Agent;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, CONNECT_TIMEOUT};

/// Sends requests with the fixed connect timeout and no read timeout.
pub struct Transport {
    agent: Agent,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .timeout_connect(Some(CONNECT_TIMEOUT))
            .http_status_as_error(false)
            .proxy(None)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Perform the round-trip and return the response body with its line
    /// breaks removed (see [`collapse_lines`]).
    pub fn execute(&self, request: HttpRequest) -> Result<String, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        debug!(
            method = method.as_str(),
            url = %url,
            body_len = body.as_ref().map_or(0, String::len),
            "dispatching request"
        );

        let sent = match method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(url.as_str());
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(url.as_str());
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(body.as_deref().unwrap_or_default().as_bytes())
            }
        };

        let response = match sent {
            Ok(response) => response,
            Err(source) => {
                warn!(url = %url, error = %source, "request failed");
                return Err(TransportError::Send { url, source });
            }
        };

        debug!(url = %url, status = response.status().as_u16(), "response received");

        let reader = BufReader::new(response.into_body().into_reader());
        match collapse_lines(reader) {
            Ok(text) => {
                debug!(url = %url, len = text.len(), "response body read");
                Ok(text)
            }
            Err(source) => {
                warn!(url = %url, error = %source, "reading response body failed");
                Err(TransportError::Read { url, source })
            }
        }
    }
}

/// Read `reader` line by line and concatenate the lines without their
/// terminators, so `"line1\nline2"` becomes `"line1line2"`.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The bytes are decoded as
/// UTF-8; malformed sequences become U+FFFD.
pub fn collapse_lines<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut collected = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        collected.extend(line.iter().copied().filter(|b| *b != b'\n' && *b != b'\r'));
    }
    Ok(String::from_utf8_lossy(&collected).into_owned())
}
