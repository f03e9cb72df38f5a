//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use coin_tracker::config::{StorageBackend, TrackerConfig};
use coin_tracker::lifecycle::{build_server, Shutdown};

/// Path prefix the mock provider serves, mirroring BlockCypher.
pub const PROVIDER_PREFIX: &str = "/v1/btc/main/addrs";

/// Start a programmable mock provider on an ephemeral port.
///
/// The handler receives the request path and returns `(status, body)`.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let path = read_request_path(&mut socket).await.unwrap_or_default();
                        let (status, body) = f(path).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn read_request_path(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    let text = String::from_utf8_lossy(&buf);
    text.lines().next()?.split_whitespace().nth(1).map(str::to_string)
}

/// A tracker server running in the background.
pub struct RunningTracker {
    pub base_url: String,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<()>,
}

impl RunningTracker {
    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = self.handle.await;
    }
}

/// Boot the real server on an ephemeral port, backed by a sled store in `db_dir`.
pub async fn start_tracker(db_dir: &Path, provider: SocketAddr, provider_timeout_secs: u64) -> RunningTracker {
    let mut config = TrackerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.storage.backend = StorageBackend::Sled;
    config.storage.path = db_dir.join("wallets.db").to_string_lossy().into_owned();
    config.blockchain.api_base_url = format!("http://{}{}", provider, PROVIDER_PREFIX);
    config.blockchain.timeout_secs = provider_timeout_secs;

    let server = build_server(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningTracker {
        base_url: format!("http://{}", addr),
        shutdown,
        handle,
    }
}
