//! HTTP resolution against a mock server.
//!
//! These tests drive `HttpResolver` with `httptest` so redirects, error
//! statuses and timeouts are exercised without touching the network.

mod helpers;

use std::time::Duration;

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use link_resolver::{ErrorKind, Resolve};

use helpers::http_resolver;

const TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn test_resolves_to_final_url_after_redirect() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/start"))
            .respond_with(status_code(301).append_header("Location", "/final/")),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/final/"))
            .respond_with(status_code(200)),
    );

    let resolver = http_resolver(TIMEOUT, 10);
    let resolved = resolver
        .resolve(&format!("http://{}/start", server.addr()))
        .await
        .expect("redirect chain should resolve");

    assert_eq!(resolved, format!("http://{}/final", server.addr()));
}

#[tokio::test]
async fn test_root_url_loses_trailing_slash() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/")).respond_with(status_code(200)),
    );

    let resolver = http_resolver(TIMEOUT, 10);
    let resolved = resolver
        .resolve(&format!("http://{}", server.addr()))
        .await
        .expect("should resolve");

    assert_eq!(resolved, format!("http://{}", server.addr()));
}

#[tokio::test]
async fn test_partial_content_counts_as_live() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/ranged"))
            .respond_with(status_code(206)),
    );

    let resolver = http_resolver(TIMEOUT, 10);
    let resolved = resolver
        .resolve(&format!("http://{}/ranged", server.addr()))
        .await
        .expect("206 is a success");

    assert_eq!(resolved, format!("http://{}/ranged", server.addr()));
}

#[tokio::test]
async fn test_sends_head_with_browser_headers() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("HEAD", "/"),
            request::headers(contains(("range", "bytes=0-50"))),
            request::headers(contains(("accept-encoding", "none"))),
            request::headers(contains(("user-agent", "link_resolver-test/1.0"))),
            request::headers(contains(key("accept-language"))),
        ])
        .respond_with(status_code(200)),
    );

    let resolver = http_resolver(TIMEOUT, 10);
    resolver
        .resolve(&format!("http://{}/", server.addr()))
        .await
        .expect("should resolve");
}

#[tokio::test]
async fn test_not_found_is_broken() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/missing"))
            .respond_with(status_code(404)),
    );

    let url = format!("http://{}/missing", server.addr());
    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver.resolve(&url).await.expect_err("404 is a failure");

    assert_eq!(err.kind(), ErrorKind::Broken);
    assert_eq!(err.url(), url);
    let line = err.to_string();
    assert!(line.starts_with(&format!("Broken: {url} ")), "{line}");
    assert!(line.contains("404"), "{line}");
    assert!(!line.contains('\n'));
}

#[tokio::test]
async fn test_server_error_is_broken() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/boom"))
            .respond_with(status_code(503)),
    );

    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver
        .resolve(&format!("http://{}/boom", server.addr()))
        .await
        .expect_err("503 is a failure");

    assert_eq!(err.kind(), ErrorKind::Broken);
}

#[tokio::test]
async fn test_redirect_loop_is_broken() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/a"))
            .respond_with(status_code(302).append_header("Location", "/b")),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/b"))
            .respond_with(status_code(302).append_header("Location", "/a")),
    );

    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver
        .resolve(&format!("http://{}/a", server.addr()))
        .await
        .expect_err("loop must not resolve");

    assert_eq!(err.kind(), ErrorKind::Broken);
    assert!(err.detail().contains("redirect"), "{}", err.detail());
}

#[tokio::test]
async fn test_redirect_hop_cap_is_broken() {
    let server = Server::run();
    // With a cap of 2, /r0 -> /r1 -> /r2 is followed and the hop to /r3 is refused.
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/r0"))
            .respond_with(status_code(301).append_header("Location", "/r1")),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/r1"))
            .respond_with(status_code(301).append_header("Location", "/r2")),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/r2"))
            .respond_with(status_code(301).append_header("Location", "/r3")),
    );

    let resolver = http_resolver(TIMEOUT, 2);
    let err = resolver
        .resolve(&format!("http://{}/r0", server.addr()))
        .await
        .expect_err("chain exceeds the cap");

    assert_eq!(err.kind(), ErrorKind::Broken);
}

#[tokio::test]
async fn test_unresponsive_server_times_out() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");

    // Accept connections and never answer.
    let holder = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let resolver = http_resolver(Duration::from_millis(200), 10);
    let err = resolver
        .resolve(&format!("http://{addr}/"))
        .await
        .expect_err("no response within the timeout");

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err
        .to_string()
        .starts_with(&format!("Socket timeout exception: http://{addr}/ ")));

    holder.abort();
}

#[tokio::test]
async fn test_closed_port_is_broken() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver
        .resolve(&format!("http://{addr}/"))
        .await
        .expect_err("nothing is listening");

    assert_eq!(err.kind(), ErrorKind::Broken);
}

#[tokio::test]
async fn test_invalid_url_is_not_requested() {
    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver
        .resolve("http://exa mple.com")
        .await
        .expect_err("spaces are invalid");

    assert_eq!(err.kind(), ErrorKind::InvalidUrl);
    assert!(err.to_string().starts_with("Cannot process: http://exa mple.com "));
}

#[tokio::test]
async fn test_redirect_without_location_is_broken() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/moved"))
            .respond_with(status_code(302)),
    );

    let url = format!("http://{}/moved", server.addr());
    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver
        .resolve(&url)
        .await
        .expect_err("a 302 that goes nowhere is not live");

    assert_eq!(err.kind(), ErrorKind::Broken);
    assert!(err.to_string().starts_with(&format!("Broken: {url} ")));
    assert!(err.detail().contains("302"), "{}", err.detail());
}

#[tokio::test]
async fn test_multiple_choices_is_broken() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/choose"))
            .respond_with(status_code(300)),
    );

    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver
        .resolve(&format!("http://{}/choose", server.addr()))
        .await
        .expect_err("300 is not a success");

    assert_eq!(err.kind(), ErrorKind::Broken);
    assert!(err.detail().contains("300"), "{}", err.detail());
}

#[tokio::test]
#[allow(deprecated)] // set_linger is deprecated in newer tokio releases
async fn test_reset_connection_is_connection_error() {
    use tokio::io::AsyncReadExt;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");

    // Read the request, then close with a zero linger so the peer sees a reset.
    let server = tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .set_linger(Some(Duration::ZERO))
                .expect("set linger");
            drop(socket);
        }
    });

    let url = format!("http://{addr}/");
    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver.resolve(&url).await.expect_err("connection reset");

    assert_eq!(err.kind(), ErrorKind::ConnectionReset);
    assert!(
        err.to_string().starts_with(&format!("Connection error: {url} ")),
        "{err}"
    );

    server.abort();
}

#[tokio::test]
async fn test_undecodable_international_host_is_unicode_error() {
    let resolver = http_resolver(TIMEOUT, 10);
    let err = resolver
        .resolve("http://xn--a.com")
        .await
        .expect_err("invalid punycode");

    assert_eq!(err.kind(), ErrorKind::EncodingError);
    assert!(
        err.to_string().starts_with("Unicode error: http://xn--a.com "),
        "{err}"
    );
}
