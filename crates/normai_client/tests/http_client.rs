use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use normai_client::config::ClientConfig;
use normai_client::query::http::HttpQueryClient;
use normai_client::query::QueryService;
use normai_core::domain::QueryRequest;
use pretty_assertions::assert_eq;

/// Serve exactly one HTTP response on 127.0.0.1, returning the client and the request line seen.
fn serve_once(status_line: &str, body: &str) -> (HttpQueryClient, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");
        let text = String::from_utf8_lossy(&raw).to_string();
        text.lines().next().unwrap_or_default().to_string()
    });

    let config = ClientConfig::new(&format!("http://127.0.0.1:{port}"), 5_000).expect("config");
    (HttpQueryClient::new(config), handle)
}

fn request(q: &str) -> QueryRequest {
    QueryRequest::new(q).expect("request")
}

#[test]
fn success_decodes_output_and_encodes_query() {
    let body = r#"{"query":"what happens if I steal?","response":"Hanging [1].","citations":[{"source":"Law 1","text":"Source 1: Theft is punishable by hanging"}]}"#;
    let (client, server) = serve_once("200 OK", body);

    let out = client.query(&request("what happens if I steal?")).expect("query");
    assert_eq!(out.response, "Hanging [1].");
    assert_eq!(out.citations.len(), 1);
    assert_eq!(out.citations[0].source, "Law 1");

    let request_line = server.join().expect("server");
    assert!(request_line.starts_with("GET /query?query=what"), "{request_line}");
    assert!(!request_line.contains("what happens"), "{request_line}");
}

#[test]
fn client_error_uses_detail_as_message() {
    let (client, server) = serve_once("400 Bad Request", r#"{"detail":"Query string cannot be empty"}"#);

    let err = client.query(&request("x")).expect_err("should error");
    server.join().expect("server");
    assert_eq!(err.code, "QUERY_FAILED");
    assert_eq!(err.message, "Query string cannot be empty");
    assert_eq!(err.details.as_deref(), Some("status=400"));
    assert!(!err.retryable);
}

#[test]
fn server_error_without_detail_is_retryable() {
    let (client, server) = serve_once("503 Service Unavailable", "<html>unavailable</html>");

    let err = client.query(&request("x")).expect_err("should error");
    server.join().expect("server");
    assert_eq!(err.code, "QUERY_FAILED");
    assert_eq!(err.message, "Failed to fetch");
    assert_eq!(err.details.as_deref(), Some("status=503"));
    assert!(err.retryable);
}

#[test]
fn undecodable_success_body_is_invalid_response() {
    let (client, server) = serve_once("200 OK", "not json at all");

    let err = client.query(&request("x")).expect_err("should error");
    server.join().expect("server");
    assert_eq!(err.code, "QUERY_RESPONSE_INVALID");
    assert!(!err.retryable);
}

#[test]
fn closed_port_is_unreachable() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let config = ClientConfig::new(&format!("http://127.0.0.1:{port}"), 2_000).expect("config");
    let client = HttpQueryClient::new(config);

    let err = client.query(&request("x")).expect_err("should error");
    assert_eq!(err.code, "QUERY_UNREACHABLE");
    assert!(err.retryable);
}
