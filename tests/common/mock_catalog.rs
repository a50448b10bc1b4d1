// common/mock_catalog.rs - Mock catalog REST API
//
// Serves the sample catalog at the same paths as the real API. The test
// can switch the server into failure modes and inspect the request log.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use storefront_state::fixtures::{sample_categories, sample_products, sample_products_in};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// How the server answers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Normal,
    /// Every route answers with this status and an empty body
    Status(u16),
    /// Every route answers 200 with a body that is not JSON
    Garbage,
    /// Every route answers 200 with this JSON body
    Raw(&'static str),
}

struct MockState {
    mode: Mode,
    requests: Vec<String>,
}

type Shared = Arc<Mutex<MockState>>;

pub struct MockCatalogServer {
    addr: SocketAddr,
    state: Shared,
    handle: JoinHandle<()>,
}

impl MockCatalogServer {
    /// Start a mock catalog on a random port
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState {
            mode: Mode::Normal,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/products", get(all_products))
            .route("/products/categories", get(categories))
            .route("/products/category/{category}", get(category_products))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL to hand to HttpStoreApi
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn set_mode(&self, mode: Mode) {
        self.state.lock().unwrap().mode = mode;
    }

    /// Raw request paths, as received
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }
}

impl Drop for MockCatalogServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// Records the request and short-circuits for the failure modes
fn intercept(state: &Shared, uri: &Uri) -> Option<Response> {
    let mut state = state.lock().unwrap();
    state.requests.push(uri.path().to_string());
    match state.mode {
        Mode::Normal => None,
        Mode::Status(code) => Some(
            StatusCode::from_u16(code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response(),
        ),
        Mode::Garbage => Some((StatusCode::OK, "<html>maintenance</html>").into_response()),
        Mode::Raw(body) => Some(
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
        ),
    }
}

async fn all_products(State(state): State<Shared>, uri: Uri) -> Response {
    if let Some(response) = intercept(&state, &uri) {
        return response;
    }
    Json(sample_products().unwrap()).into_response()
}

async fn categories(State(state): State<Shared>, uri: Uri) -> Response {
    if let Some(response) = intercept(&state, &uri) {
        return response;
    }
    Json(sample_categories().unwrap()).into_response()
}

async fn category_products(
    State(state): State<Shared>,
    Path(category): Path<String>,
    uri: Uri,
) -> Response {
    if let Some(response) = intercept(&state, &uri) {
        return response;
    }
    Json(sample_products_in(&category).unwrap()).into_response()
}
