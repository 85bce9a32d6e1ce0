//! HTTP request types and the fixed wire settings.
//!
//! # Design
//! `HttpRequest` describes a request as plain data. `RequestSpec::build_*`
//! produces it without touching the network, and `Transport::execute` turns
//! it into an actual round-trip. Keeping the two apart lets the URL and body
//! construction be tested deterministically.

use std::time::Duration;

/// Header sent with every request, as a `(name, value)` pair.
pub const CHARSET_HEADER: (&str, &str) = ("Charset", "UTF-8");

/// Limit on establishing the connection. There is no read timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(6000);

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `body` is `Some` for every POST, including the empty body sent when there
/// are no parameters, and always `None` for GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

pub(crate) fn default_headers() -> Vec<(String, String)> {
    vec![(CHARSET_HEADER.0.to_string(), CHARSET_HEADER.1.to_string())]
}
