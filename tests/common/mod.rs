use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::sync::{RwLock, oneshot};

use template_admin::model::{Template, TemplateDraft, TemplateId};

pub const API_KEY: &str = "test-key";

/// One request as the mock saw it, before authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
}

#[derive(Default)]
struct MockState {
    templates: RwLock<Vec<Template>>,
    next_id: Mutex<i64>,
    seen: Mutex<Vec<Seen>>,
    // Served once, in place of the next response.
    canned: Mutex<Option<(StatusCode, String)>>,
}

/// In-process template API on a background tokio runtime.
pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
    }
}

#[allow(dead_code)]
impl MockServer {
    pub fn seen(&self) -> Vec<Seen> {
        self.state.seen.lock().unwrap().clone()
    }

    pub fn requests(&self) -> Vec<String> {
        self.seen()
            .into_iter()
            .map(|s| format!("{} {}", s.method, s.path))
            .collect()
    }

    pub fn templates(&self) -> Vec<Template> {
        self.state.templates.blocking_read().clone()
    }

    pub fn insert(&self, name: &str, description: Option<&str>, html: &str) -> TemplateId {
        let id = {
            let mut next = self.state.next_id.lock().unwrap();
            *next += 1;
            TemplateId(*next)
        };
        self.state.templates.blocking_write().push(Template {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            html_content: html.to_string(),
        });
        id
    }

    /// The next request gets `status` with `body` verbatim.
    pub fn respond_once(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        *self.state.canned.lock().unwrap() = Some((status, body.to_string()));
    }
}

pub fn spawn_mock() -> Result<MockServer> {
    let state = Arc::new(MockState::default());
    let (addr_tx, addr_rx) = std::sync::mpsc::channel();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server_state = state.clone();
    let thread = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("build tokio runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind mock listener");
            let addr = listener.local_addr().expect("mock local addr");
            let _ = addr_tx.send(addr);
            axum::serve(listener, router(server_state))
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("mock server");
        });
    });

    let addr = addr_rx
        .recv_timeout(std::time::Duration::from_secs(5))
        .context("mock server did not start")?;

    Ok(MockServer {
        base_url: format!("http://{}/api/v1", addr),
        state,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/api/v1/templates", get(list_templates).post(create_template))
        .route(
            "/api/v1/templates/:id",
            get(get_template).put(update_template).delete(delete_template),
        )
        .layer(middleware::from_fn_with_state(state.clone(), check_api_key))
        .with_state(state)
}

async fn check_api_key(State(state): State<Arc<MockState>>, req: Request, next: Next) -> Response {
    let api_key = api_key(req.headers());
    state.seen.lock().unwrap().push(Seen {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        api_key: api_key.clone(),
    });

    let canned = state.canned.lock().unwrap().take();
    if let Some((status, body)) = canned {
        return (status, body).into_response();
    }
    if api_key.as_deref() != Some(API_KEY) {
        return message(StatusCode::UNAUTHORIZED, "Invalid API key");
    }
    next.run(req).await
}

fn api_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn message(status: StatusCode, msg: &str) -> Response {
    (status, Json(serde_json::json!({ "message": msg }))).into_response()
}

async fn list_templates(State(state): State<Arc<MockState>>) -> Json<serde_json::Value> {
    let templates = state.templates.read().await;
    Json(serde_json::json!({ "templates": &*templates }))
}

async fn get_template(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> Response {
    let templates = state.templates.read().await;
    match templates.iter().find(|t| t.id == TemplateId(id)) {
        Some(t) => Json(t.clone()).into_response(),
        None => message(StatusCode::NOT_FOUND, "Template not found"),
    }
}

async fn create_template(
    State(state): State<Arc<MockState>>,
    Json(draft): Json<TemplateDraft>,
) -> Response {
    if draft.name.trim().is_empty() {
        return message(StatusCode::BAD_REQUEST, "Name is required");
    }
    let id = {
        let mut next = state.next_id.lock().unwrap();
        *next += 1;
        TemplateId(*next)
    };
    let template = Template {
        id,
        name: draft.name,
        description: Some(draft.description),
        html_content: draft.html_content,
    };
    state.templates.write().await.push(template.clone());
    (StatusCode::CREATED, Json(template)).into_response()
}

async fn update_template(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(draft): Json<TemplateDraft>,
) -> Response {
    let mut templates = state.templates.write().await;
    let Some(t) = templates.iter_mut().find(|t| t.id == TemplateId(id)) else {
        return message(StatusCode::NOT_FOUND, "Template not found");
    };
    t.name = draft.name;
    t.description = Some(draft.description);
    t.html_content = draft.html_content;
    Json(t.clone()).into_response()
}

async fn delete_template(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> Response {
    let mut templates = state.templates.write().await;
    let before = templates.len();
    templates.retain(|t| t.id != TemplateId(id));
    if templates.len() == before {
        return message(StatusCode::NOT_FOUND, "Template not found");
    }
    Json(serde_json::json!({ "message": "Template deleted" })).into_response()
}
