//! Minimal blocking HTTP request helper.
//!
//! # Overview
//! Build a GET or POST from a URL and a set of key/value parameters, send
//! it, and get the raw response body back as text:
//!
//! ```no_run
//! use httpreq_core::RequestSpec;
//!
//! let body = RequestSpec::new("http://localhost:3000/search")
//!     .add_parameter("q", "rust")
//!     .add_parameter("page", 2u32)
//!     .get()?;
//! # Ok::<(), httpreq_core::TransportError>(())
//! ```
//!
//! # Design
//! - Parameters serialize to `key=value&key=value`, lists as `a,b,c`. GET
//!   appends them to the URL after `?`, POST sends them as the body.
//! - `RequestSpec::build_*` produces an `HttpRequest` as plain data;
//!   `Transport` performs the round-trip. `get`/`post` do both.
//! - The response status is not inspected. Line breaks in the body are
//!   dropped while reading.
//! - Connect timeout is fixed at 6000 ms and no read timeout is set.

pub mod error;
pub mod http;
pub mod params;
pub mod request;
pub mod transport;

pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, CHARSET_HEADER, CONNECT_TIMEOUT};
pub use params::{ParamValue, Parameters};
pub use request::RequestSpec;
pub use transport::{collapse_lines, Transport};
