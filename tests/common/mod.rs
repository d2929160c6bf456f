#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::put;
use axum::{Json, Router};
use serde_json::{json, Value};

pub const TENANT: &str = "5f0c3a3e-8b7a-4c4e-9f55-7f3d2b1a0c11";
pub const OTHER_TENANT: &str = "9d1b6a52-0c7e-4f1a-b3f4-2e8c5d7a6b90";
pub const USER: &str = "0b5e9a1c-2f57-4c4b-a0a4-6f1a7d3c9e21";
pub const API_KEY: &str = "test-api-key";

/// How the fake tenant-management service answers role updates
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with `{tenant_id, user_id, roles}` built from the request
    Echo,
    /// Fixed status and raw body
    Status(u16, String),
    /// Wait before answering with `Echo`
    Delay(Duration),
}

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub tenant_id: String,
    pub user_id: String,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    reply: Reply,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

pub struct FakeTms {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl FakeTms {
    /// Serve the role update endpoint on a free local port for the current test runtime
    pub async fn start(reply: Reply) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let received = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            reply,
            received: received.clone(),
        };

        let app = Router::new()
            .route(
                "/management/v1/tenants/:tenant_id/users/:user_id/roles",
                put(update_roles),
            )
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind {}", base_url))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url,
            received,
        })
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn update_roles(
    State(state): State<FakeState>,
    Path((tenant_id, user_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let api_key = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.received.lock().unwrap().push(ReceivedRequest {
        tenant_id: tenant_id.clone(),
        user_id: user_id.clone(),
        api_key,
        body: body.clone(),
    });

    let echo = json!({
        "tenant_id": tenant_id,
        "user_id": user_id,
        "roles": body["roles"],
    });

    match state.reply {
        Reply::Echo => Json(echo).into_response(),
        Reply::Delay(delay) => {
            tokio::time::sleep(delay).await;
            Json(echo).into_response()
        }
        Reply::Status(status, text) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(header::CONTENT_TYPE, "text/plain")], text).into_response()
        }
    }
}
