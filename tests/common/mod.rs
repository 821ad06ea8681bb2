#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use transflow_console::clients::{HttpRequest, HttpResponse, HttpTransport};
use transflow_console::config::EnvironmentConfig;
use transflow_console::controllers::Prompt;
use transflow_console::session::MemoryStorage;
use transflow_console::utils::errors::ApiResult;
use transflow_console::AppContext;

pub const BASE_URL: &str = "http://api.test";

/// Transporte falso: respuestas por "MÉTODO /ruta?query", registra todo
#[derive(Default)]
pub struct RecordingTransport {
    routes: Mutex<HashMap<String, VecDeque<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Encola una respuesta; la última de cada ruta se repite
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        let mut routes = self.routes.lock().unwrap();
        routes
            .entry(format!("{} {}", method, path))
            .or_default()
            .push_back(HttpResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// "MÉTODO /ruta?query" de cada petición, en orden
    pub fn calls(&self) -> Vec<String> {
        self.requests().iter().map(call_key).collect()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.requests()
            .last()
            .and_then(|r| r.body.as_deref())
            .and_then(|b| serde_json::from_str(b).ok())
    }

    pub fn clear_log(&self) {
        self.requests.lock().unwrap().clear();
    }
}

fn call_key(request: &HttpRequest) -> String {
    let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
    format!("{} {}", request.method, path)
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let key = call_key(&request);
        self.requests.lock().unwrap().push(request);

        let mut routes = self.routes.lock().unwrap();
        let response = match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(response.unwrap_or_else(|| HttpResponse::new(404, r#"{"message":"not found"}"#)))
    }
}

/// Diálogos con respuesta fija a `confirm` y registro de `alert`
pub struct ScriptedPrompt {
    answer: AtomicBool,
    confirms: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer: AtomicBool::new(answer),
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        })
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        api_base_url: BASE_URL.to_string(),
        ..EnvironmentConfig::default()
    }
}

pub fn context_with(
    config: EnvironmentConfig,
    transport: Arc<RecordingTransport>,
    prompt: Arc<ScriptedPrompt>,
) -> AppContext {
    AppContext::new(config, Arc::new(MemoryStorage::new()), transport, prompt)
}

pub fn context(transport: Arc<RecordingTransport>, prompt: Arc<ScriptedPrompt>) -> AppContext {
    context_with(test_config(), transport, prompt)
}

/// Contexto con sesión ya iniciada
pub fn logged_in(transport: Arc<RecordingTransport>, prompt: Arc<ScriptedPrompt>) -> AppContext {
    let ctx = context(transport, prompt);
    ctx.session
        .set_session("tok123", &serde_json::json!({"username": "alice"}))
        .unwrap();
    ctx
}

pub fn page(data: Value, total: u64, page: u32, limit: u32, total_pages: u32) -> Value {
    serde_json::json!({
        "success": true,
        "data": data,
        "total": total,
        "page": page,
        "limit": limit,
        "totalPages": total_pages,
    })
}
