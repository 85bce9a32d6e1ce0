//! Builder for a single parameterised GET or POST request.
//!
//! # Design
//! `RequestSpec` holds a base URL and a `Parameters` mapping. Configuration
//! is by chained `add_parameter` calls; `get` and `post` take the spec by
//! value, so each spec is dispatched at most once. The `build_*` methods
//! expose the exact request that would be sent without performing any I/O.

use crate::error::TransportError;
use crate::http::{default_headers, HttpMethod, HttpRequest};
use crate::params::{ParamValue, Parameters};
use crate::transport::Transport;

/// A URL plus the parameters to send with it.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    url: String,
    parameters: Parameters,
}

impl RequestSpec {
    /// The URL is used as given; it is not validated until dispatch.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            parameters: Parameters::new(),
        }
    }

    /// Insert or overwrite the parameter `key`.
    pub fn add_parameter(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(key, value);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The serialized `key=value&key=value` form of the parameters.
    pub fn query_string(&self) -> String {
        self.parameters.serialize()
    }

    /// Base URL with `?` and the parameters appended, or the base URL alone
    /// when there are none.
    ///
    /// Characters a URI cannot carry (space, control characters, `"`, `<`,
    /// `>`, `\`, `^`, `{`, `|`, `}` and the backtick) are percent-escaped in
    /// the appended part only, so a value like `John Smith` still reaches the
    /// server. Everything else, including non-ASCII text, is left as is.
    pub fn build_get(&self) -> HttpRequest {
        let url = if self.parameters.is_empty() {
            self.url.clone()
        } else {
            format!("{}?{}", self.url, escape_query(&self.query_string()))
        };
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: default_headers(),
            body: None,
        }
    }

    /// Base URL unchanged, parameters as the body. No `Content-Type` is set.
    pub fn build_post(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: self.url.clone(),
            headers: default_headers(),
            body: Some(self.query_string()),
        }
    }

    /// Send a GET and return the response body, whatever its status.
    pub fn get(self) -> Result<String, TransportError> {
        Transport::new().execute(self.build_get())
    }

    /// Send a POST and return the response body, whatever its status.
    pub fn post(self) -> Result<String, TransportError> {
        Transport::new().execute(self.build_post())
    }
}

fn escape_query(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        match c {
            ' ' | '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}' => {
                escaped.push_str(&format!("%{:02X}", c as u32));
            }
            c if c.is_ascii_control() => escaped.push_str(&format!("%{:02X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
