//! Browser headers, cookie reset and the X-Requested-With fallback over real sockets.

mod helpers;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::Form,
    http::{header::SET_COOKIE, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use reqwest::Method;
use serde::Deserialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use redirect_resolver::params::{IntoParamValue, ParamField, ParamSource};
use redirect_resolver::{Request, Transport};

use helpers::{start_server, test_client};

fn echo_router() -> Router {
    Router::new()
        .route(
            "/headers",
            get(|headers: HeaderMap| async move {
                let map: HashMap<String, String> = headers
                    .iter()
                    .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
                    .collect();
                Json(map)
            }),
        )
        .route(
            "/login",
            get(|| async { ([(SET_COOKIE, "session=abc; Path=/")], "ok") }),
        )
        .route(
            "/form",
            post(|Form(fields): Form<HashMap<String, String>>| async move { Json(fields) }),
        )
}

#[tokio::test]
async fn test_browser_headers_are_sent() {
    let base = start_server(echo_router()).await;
    let client = test_client(true);

    let request = Request::parse(Method::GET, &format!("{base}/headers")).unwrap();
    let resp = client.execute_with_headers(request).await;
    assert_eq!(resp.status(), 200);

    let seen: HashMap<String, String> = resp.json().expect("echo is JSON");
    assert!(seen["accept-language"].starts_with("ru-RU"));
    assert_eq!(seen["te"], "Trailers");
    assert_eq!(seen["accept-encoding"], "gzip");
    assert!(!seen.contains_key("x-requested-with"));
}

#[tokio::test]
async fn test_cookies_are_reset_before_header_execution() {
    let base = start_server(echo_router()).await;
    let client = test_client(true);

    let login = Request::parse(Method::GET, &format!("{base}/login")).unwrap();
    client.transport().execute(&login).await.unwrap();

    let check = Request::parse(Method::GET, &format!("{base}/headers")).unwrap();
    let with_cookie: HashMap<String, String> = client
        .transport()
        .execute(&check)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(with_cookie["cookie"], "session=abc");

    let after_reset: HashMap<String, String> =
        client.execute_with_headers(check).await.json().unwrap();
    assert!(!after_reset.contains_key("cookie"));
}

struct Signup {
    email: String,
    newsletter: bool,
    referrer: Option<String>,
}

impl ParamSource for Signup {
    fn param_fields() -> Vec<ParamField<Self>> {
        vec![
            ParamField::new("email", |s: &Signup| s.email.as_str().into_param_value()),
            ParamField::new("newsletter", |s: &Signup| s.newsletter.into_param_value()),
            ParamField::new("ref", |s: &Signup| s.referrer.as_deref().into_param_value()),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct Echo {
    email: String,
    newsletter: String,
    #[serde(rename = "ref")]
    referrer: Option<String>,
}

#[tokio::test]
async fn test_form_params_round_trip_as_json() {
    let base = start_server(echo_router()).await;
    let client = test_client(true);

    let mut request = Request::parse(Method::POST, &format!("{base}/form")).unwrap();
    request.add_params_from(&Signup {
        email: "a@example.com".into(),
        newsletter: true,
        referrer: None,
    });

    let typed = client.execute_json::<Echo>(&request).await;
    let echo = typed.data.expect("form echo should decode");
    assert_eq!(echo.email, "a@example.com");
    assert_eq!(echo.newsletter, "1");
    assert_eq!(echo.referrer, None);
}

/// Drops every connection unless the request is marked as XMLHttpRequest.
async fn start_ajax_only_server(hits: Arc<AtomicUsize>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let hits = hits.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => read += n,
                    }
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                hits.fetch_add(1, Ordering::SeqCst);

                let head = String::from_utf8_lossy(&buf[..read]).to_ascii_lowercase();
                if head.contains("x-requested-with: xmlhttprequest") {
                    let _ = socket
                        .write_all(
                            b"HTTP/1.1 200 OK\r\ncontent-length: 4\r\nconnection: close\r\n\r\najax",
                        )
                        .await;
                }
            });
        }
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_xhr_fallback_after_dropped_connection() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = start_ajax_only_server(hits.clone()).await;
    let client = test_client(true);

    let request = Request::parse(Method::GET, &format!("{base}/api")).unwrap();
    let resp = client.execute_with_headers(request).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.body(), Some("ajax"));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
