// Shared helpers for integration tests: local servers and client setup.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use redirect_resolver::{Config, RedirectClient, RetryConfig};

/// Serves `app` on an ephemeral localhost port and returns its base URL.
pub async fn start_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://{}", addr)
}

/// Returns an address nothing is listening on.
#[allow(dead_code)] // Used by some test files
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    listener.local_addr().expect("Failed to get address")
}

/// A client with a short timeout and no retries.
pub fn test_client(follow_transport_redirects: bool) -> RedirectClient {
    let config = Config {
        timeout_seconds: 5,
        follow_transport_redirects,
        retry: RetryConfig::none(),
        ..Default::default()
    };
    RedirectClient::from_config(&config).expect("Failed to build client")
}
