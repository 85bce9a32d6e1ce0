//! End-to-end requests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port in a background thread, then
//! drives `RequestSpec::get`/`post` over real HTTP and checks what the
//! server saw and what came back.

use std::net::SocketAddr;

use httpreq_core::{RequestSpec, TransportError};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn spec(addr: SocketAddr, path: &str) -> RequestSpec {
    RequestSpec::new(&format!("http://{addr}{path}"))
}

#[test]
fn get_sends_parameters_in_query_string() {
    let addr = start_server();

    let body = spec(addr, "/echo")
        .add_parameter("a", 1u32)
        .add_parameter("b", "two")
        .add_parameter("tags", ["x", "y"])
        .add_parameter("ids", vec![3u32, 4, 5])
        .get()
        .unwrap();

    assert_eq!(body, "a=1&b=two&tags=x,y&ids=3,4,5");
}

#[test]
fn get_without_parameters_sends_no_query() {
    let addr = start_server();
    let body = spec(addr, "/echo").get().unwrap();
    assert_eq!(body, "");
}

#[test]
fn post_sends_parameters_as_body() {
    let addr = start_server();

    let body = spec(addr, "/echo")
        .add_parameter("q", 42u32)
        .add_parameter("flag", true)
        .post()
        .unwrap();

    assert_eq!(body, "q=42&flag=true");
}

#[test]
fn post_without_parameters_sends_empty_body() {
    let addr = start_server();
    let body = spec(addr, "/echo").post().unwrap();
    assert_eq!(body, "");
}

#[test]
fn get_value_with_space_reaches_the_server() {
    let addr = start_server();

    let body = spec(addr, "/echo").add_parameter("q", "John Smith").get().unwrap();
    assert_eq!(body, "q=John%20Smith");

    let body = spec(addr, "/echo").add_parameter("q", "John Smith").post().unwrap();
    assert_eq!(body, "q=John Smith");
}

#[test]
fn methods_reach_the_server() {
    let addr = start_server();
    assert_eq!(spec(addr, "/method").get().unwrap(), "GET");
    assert_eq!(spec(addr, "/method").post().unwrap(), "POST");
}

#[test]
fn charset_header_sent_without_content_type() {
    let addr = start_server();

    let get = spec(addr, "/headers").get().unwrap();
    assert_eq!(get, "charset=UTF-8;content-type=-");

    let post = spec(addr, "/headers").add_parameter("k", "v").post().unwrap();
    assert_eq!(post, "charset=UTF-8;content-type=-");
}

#[test]
fn multi_line_body_is_collapsed() {
    let addr = start_server();
    let body = spec(addr, "/lines").get().unwrap();
    assert_eq!(body, "line1line2line3");
}

#[test]
fn error_status_still_returns_body() {
    let addr = start_server();

    assert_eq!(spec(addr, "/status/500").get().unwrap(), "status 500");
    assert_eq!(spec(addr, "/status/404").post().unwrap(), "status 404");
}

#[test]
fn refused_connection_is_a_transport_error() {
    // Bind then drop to get a local port nothing listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let url = format!("http://{addr}/echo");
    let err = RequestSpec::new(&url).add_parameter("q", 1u32).get().unwrap_err();

    assert!(matches!(err, TransportError::Send { .. }));
    assert_eq!(err.url(), format!("{url}?q=1"));

    let err = RequestSpec::new(&url).post().unwrap_err();
    assert!(matches!(err, TransportError::Send { .. }));
    assert_eq!(err.url(), url);
}
