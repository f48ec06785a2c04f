pub mod handlers;
pub mod response;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::{Instrument, debug, info};

use crate::prelude::{AppError, ContactManager};

/// Shared by every handler. Reads take the read lock, mutations the write lock.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<RwLock<ContactManager>>,
}

impl AppState {
    pub fn new(manager: ContactManager) -> Self {
        Self {
            contacts: Arc::new(RwLock::new(manager)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(handlers::list_contacts))
        .route("/contact/search/:param", get(handlers::search_contact))
        .route("/contact/add", post(handlers::add_contact))
        .route("/contact/delete/:name", delete(handlers::delete_contact))
        .route("/contact/update/:name", put(handlers::update_contact))
        .layer(middleware::from_fn(request_tracing))
        .with_state(state)
}

async fn request_tracing(request: Request<Body>, next: Next) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %request.method(),
        route = %request.uri().path(),
    );

    async move {
        let response = next.run(request).await;
        debug!(status = response.status().as_u16(), "request finished");
        response
    }
    .instrument(span)
    .await
}

/// Serves `state` on `listener` until `shutdown` resolves, then flushes
/// any pending background writes.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Server is running at http://{addr}");

    let app = build_router(state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    state.contacts.write().await.close().await;
    info!("server stopped");
    Ok(())
}
