//! Test helpers: a fake upstream provider and a request driver.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode, Uri},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use fxgate_upstream::ExchangeRateClient;

use crate::{AppState, create_router};

type Requests = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: Arc<Value>,
    requests: Requests,
}

/// Upstream provider answering every path with one canned reply.
pub(crate) struct FakeUpstream {
    host: String,
    requests: Requests,
}

impl FakeUpstream {
    /// Serves the canned reply on an ephemeral local port.
    pub(crate) async fn spawn(status: StatusCode, body: Value) -> Self {
        let requests = Requests::default();
        let canned = Canned {
            status,
            body: Arc::new(body),
            requests: requests.clone(),
        };
        let router = Router::new().fallback(reply).with_state(canned);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            host: format!("http://{addr}"),
            requests,
        }
    }

    /// App state pointing at this upstream.
    pub(crate) fn state(&self, decimal_places: u32) -> AppState {
        AppState {
            exchange_rate_client: Arc::new(ExchangeRateClient::with_host(&self.host)),
            decimal_places,
        }
    }

    /// Number of requests received.
    pub(crate) fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Path and query parameters of the latest request.
    pub(crate) fn last_request(&self) -> Option<(String, HashMap<String, String>)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

async fn reply(
    State(canned): State<Canned>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    canned
        .requests
        .lock()
        .unwrap()
        .push((uri.path().to_string(), params));
    (canned.status, Json((*canned.body).clone()))
}

/// Sends `GET uri` through the router and returns status and JSON body.
pub(crate) async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
