//! HTML page routes.
//!
//! The landing page gets the server's LAN address injected so the host screen
//! can show players where to connect.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::{IpAddr, UdpSocket};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Pages {
    pub static_dir: PathBuf,
}

/// `/`, `/host` and `/join`, usable under any outer router state
pub fn page_routes<S>(static_dir: PathBuf) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(serve_index))
        .route("/host", get(serve_host_page))
        .route("/join", get(serve_join_page))
        .with_state(Arc::new(Pages { static_dir }))
}

pub async fn serve_index(State(pages): State<Arc<Pages>>) -> Response {
    match tokio::fs::read_to_string(pages.static_dir.join("index.html")).await {
        Ok(html) => {
            let ip = local_ip()
                .map(|ip| ip.to_string())
                .unwrap_or_else(|| "localhost".to_string());
            Html(inject_join_ip(&html, &ip)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to read index.html: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

pub async fn serve_host_page(State(pages): State<Arc<Pages>>) -> Response {
    serve_file(&pages, "host.html").await
}

pub async fn serve_join_page(State(pages): State<Arc<Pages>>) -> Response {
    serve_file(&pages, "join.html").await
}

async fn serve_file(pages: &Pages, name: &str) -> Response {
    match tokio::fs::read_to_string(pages.static_dir.join(name)).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", name, e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// Insert `var JOIN_IP='<ip>'` right after the first `<head>`
pub fn inject_join_ip(html: &str, ip: &str) -> String {
    let script = format!("<head>\n    <script>var JOIN_IP='{}';</script>", ip);
    html.replacen("<head>", &script, 1)
}

/// The address other devices on the LAN can reach us at.
///
/// Connecting a UDP socket sends nothing; it only picks the outbound interface.
pub fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("192.0.2.1:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_loopback() && !ip.is_unspecified()).then_some(ip)
}
