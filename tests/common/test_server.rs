//! In-process servers for integration tests.
//!
//! [`TestServer`] runs the real usersearch router on a random TCP port bound
//! to 127.0.0.1. [`CountingServer`] is a stand-in that answers every request
//! with `[]` and counts how many it saw, for asserting that a client did
//! *not* go to the network.
//!
//! # Example
//!
//! ```rust,ignore
//! let server = TestServer::start(abc_snapshot(), "3").await.unwrap();
//! let users = server.client("3").find_users(&all(10)).await.unwrap();
//! ```

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tokio::net::TcpListener;
use usersearch::{AppState, SearchClient, Snapshot};

/// Handle to a running usersearch server.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Serve `snapshot`, accepting only `token`.
    pub async fn start(snapshot: Snapshot, token: &str) -> std::io::Result<Self> {
        Self::start_with(AppState::new(snapshot, token)).await
    }

    pub async fn start_with(state: AppState) -> std::io::Result<Self> {
        let addr = spawn(usersearch::router(Arc::new(state))).await?;
        Ok(Self { addr })
    }

    /// Base URL (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self, token: &str) -> SearchClient {
        SearchClient::new(self.base_url(), token)
    }
}

/// Handle to a server that records how many requests reached it.
pub struct CountingServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl CountingServer {
    pub async fn start() -> std::io::Result<Self> {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/", get(count))
            .with_state(hits.clone());
        let addr = spawn(app).await?;
        Ok(Self { addr, hits })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn count(State(hits): State<Arc<AtomicUsize>>) -> &'static str {
    hits.fetch_add(1, Ordering::SeqCst);
    "[]"
}

async fn spawn(app: Router) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Ok(addr)
}
