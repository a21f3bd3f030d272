//! In-process stand-in for the geolocation provider, used by the tests.

use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    thread,
};

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    routing::get,
};
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

type Responder = dyn Fn(&str, usize) -> (StatusCode, Vec<u8>) + Send + Sync;

#[derive(Clone)]
struct MockState {
    respond: Arc<Responder>,
    hits: Arc<AtomicUsize>,
}

pub struct MockProvider {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Serves `GET /{ip}` with whatever `respond` returns for the path
    /// segment and the zero-based request count.
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&str, usize) -> (StatusCode, Vec<u8>) + Send + Sync + 'static,
    {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            respond: Arc::new(respond),
            hits: hits.clone(),
        };
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                let app = Router::new()
                    .route("/{ip}", get(handle))
                    .with_state(state);
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = rx.recv().unwrap();
        Self { addr, hits }
    }

    /// Always answers 200 with the given body, byte for byte.
    pub fn fixed(body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self::start(move |_, _| (StatusCode::OK, body.clone()))
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn handle(
    State(state): State<MockState>,
    Path(ip): Path<String>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], Vec<u8>) {
    let count = state.hits.fetch_add(1, Ordering::SeqCst);
    let (status, body) = (state.respond)(&ip, count);
    (
        status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
}
