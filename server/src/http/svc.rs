use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::post};
use tokio::sync::Mutex;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{error, info, instrument};

use common::config::SiteConfig;

use crate::http::api::{get_content, send_contact};

#[derive(Debug)]
pub struct HttpEndpoint {
    pub(super) content: PathBuf,
    pub(super) inbox: Option<PathBuf>,
    pub(super) inbox_lock: Mutex<()>,
}

impl HttpEndpoint {
    pub fn new(config: &SiteConfig) -> Self {
        HttpEndpoint {
            content: config.server.content.clone(),
            inbox: config.server.inbox.clone(),
            inbox_lock: Mutex::new(()),
        }
    }
}

pub struct HttpService {
    config: Arc<SiteConfig>,
}

impl HttpService {
    pub fn create(config: Arc<SiteConfig>) -> Self {
        HttpService { config }
    }

    #[instrument(skip_all)]
    pub async fn serve(&self) -> anyhow::Result<()> {
        let socket: SocketAddr = self
            .config
            .server
            .socket
            .parse()
            .with_context(|| format!("invalid socket address {}", self.config.server.socket))?;

        let state = Arc::new(HttpEndpoint::new(&self.config));
        let router = router(state, &self.config.server.doc_root);

        let listener = tokio::net::TcpListener::bind(socket)
            .await
            .with_context(|| format!("failed to bind {socket}"))?;

        info!(%socket, "http service listening");

        axum::serve(listener, router).await.map_err(|err| {
            error!("http server exited: {err}");
            anyhow::Error::from(err)
        })
    }
}

// json api first, then the wasm bundle; unknown paths get index.html so the client-side router
// can handle them (e.g. a reload on /resume)
pub fn router(state: Arc<HttpEndpoint>, doc_root: &Path) -> Router<()> {
    let static_files =
        ServeDir::new(doc_root).fallback(ServeFile::new(doc_root.join("index.html")));

    Router::new()
        .route(&::api::endpoint_path("GetContent"), post(get_content))
        .route(&::api::endpoint_path("SendContact"), post(send_contact))
        .with_state(state)
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
