//! Canned HTTP server for exercising the adapters over real sockets.
//!
//! The server runs on its own thread and Tokio runtime so it outlives the
//! per-call runtimes created by `block_on_for_tests`.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::sync::oneshot;

/// Reply sent for requests whose target starts with a registered prefix.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    status: StatusCode,
    body: String,
    location: Option<String>,
}

impl CannedResponse {
    /// `200 OK` with a JSON body.
    pub fn json(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    /// Arbitrary status with a JSON body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.into(),
            location: None,
        }
    }

    /// `302 Found` pointing at `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FOUND,
            body: String::new(),
            location: Some(location.into()),
        }
    }
}

impl IntoResponse for CannedResponse {
    fn into_response(self) -> Response {
        match self.location {
            Some(location) => {
                (self.status, [(header::LOCATION, location)], self.body).into_response()
            }
            None => (
                self.status,
                [(header::CONTENT_TYPE, "application/json")],
                self.body,
            )
                .into_response(),
        }
    }
}

#[derive(Clone)]
struct Canned {
    routes: Arc<Vec<(String, CannedResponse)>>,
    targets: Arc<Mutex<Vec<String>>>,
}

/// A running canned server; stops when dropped.
pub struct CannedServer {
    addr: SocketAddr,
    targets: Arc<Mutex<Vec<String>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl std::fmt::Debug for CannedServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CannedServer")
            .field("addr", &self.addr)
            .finish_non_exhaustive()
    }
}

impl CannedServer {
    /// Start serving `routes`, matched by request-target prefix in order.
    ///
    /// Unmatched requests receive `404`.
    pub fn start(routes: Vec<(&str, CannedResponse)>) -> Self {
        let state = Canned {
            routes: Arc::new(
                routes
                    .into_iter()
                    .map(|(prefix, response)| (prefix.to_owned(), response))
                    .collect(),
            ),
            targets: Arc::default(),
        };
        let targets = Arc::clone(&state.targets);
        let std_listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("test listener should bind");
        std_listener
            .set_nonblocking(true)
            .expect("test listener should become non-blocking");
        let addr = std_listener
            .local_addr()
            .expect("test listener should have an address");
        let (shutdown, stopped) = oneshot::channel::<()>();
        let app = Router::new().fallback(answer).with_state(state);

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("server runtime should build");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(std_listener)
                    .expect("listener should register");
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = stopped.await;
                    })
                    .await;
            });
        });

        Self {
            addr,
            targets,
            shutdown: Some(shutdown),
        }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Request targets (path and query) in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.targets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn answer(State(canned): State<Canned>, uri: Uri) -> CannedResponse {
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned());
    canned
        .targets
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(target.clone());
    canned
        .routes
        .iter()
        .find(|(prefix, _)| target.starts_with(prefix.as_str()))
        .map_or_else(
            || CannedResponse::status(404, "{}"),
            |(_, response)| response.clone(),
        )
}
