//! HTTP API
//!
//! JSON-over-HTTP surface for course management, content generation,
//! export and reference data.
//!
//! - [`state`] - Services shared by every request
//! - [`router`] - Route table plus CORS and request tracing
//! - [`handlers`] - One module per resource
//! - [`dto`] - Request and response bodies
//! - [`error`] - Error to `{"detail"}` response mapping

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::create_router;
pub use state::AppState;

use tokio::net::TcpListener;
use tokio::sync::watch;

/// Serves the API on a bound listener until the shutdown signal fires
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections
pub async fn serve(
    state: AppState,
    listener: TcpListener,
    mut shutdown_rx: watch::Receiver<bool>,
) -> std::io::Result<()> {
    let app = create_router(state);

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(address = %addr, "Prometheus API listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown_rx.borrow() {
                if shutdown_rx.changed().await.is_err() {
                    // Sender dropped without signalling; keep serving.
                    std::future::pending::<()>().await;
                }
            }
            tracing::info!("Shutdown signal received, draining connections");
        })
        .await
}
