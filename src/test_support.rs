//! Deterministic doubles for the HTTP and asset capabilities.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::{PokedexError, Result};
use crate::fetch::{HttpClient, HttpRequest, HttpResponse};
use crate::images::AssetProbe;

/// Canned-response HTTP client that records every request.
#[derive(Default)]
pub struct MockHttpClient {
    routes: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<HttpRequest>>,
    failing: AtomicBool,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, body: Value) {
        self.routes.lock().unwrap().insert(url.to_string(), body);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url == url)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.method.clone())
            .collect()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(PokedexError::Http(format!("connection refused: {}", request.url)));
        }

        let body = self.routes.lock().unwrap().get(&request.url).cloned();
        match body {
            Some(data) => Ok(HttpResponse::new(request.url, 200, data)),
            None => Err(PokedexError::NotFound(request.url)),
        }
    }
}

/// Asset probe over a fixed set of present paths, counting every probe.
#[derive(Default)]
pub struct MockProbe {
    present: Mutex<HashSet<String>>,
    probes: Mutex<Vec<String>>,
}

impl MockProbe {
    pub fn with_assets(paths: &[&str]) -> Self {
        Self {
            present: Mutex::new(paths.iter().map(|p| p.to_string()).collect()),
            probes: Mutex::new(Vec::new()),
        }
    }

    pub fn probe_count(&self) -> usize {
        self.probes.lock().unwrap().len()
    }

    pub fn probed(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetProbe for MockProbe {
    async fn load(&self, path: &str) -> Result<String> {
        self.probes.lock().unwrap().push(path.to_string());

        if self.present.lock().unwrap().contains(path) {
            Ok(format!("/assets/{}", path))
        } else {
            Err(PokedexError::AssetNotFound(path.to_string()))
        }
    }
}
