//! Lookup operations independent of the transport that carries them.
//!
//! Transports hand over the HTTP method, the query parameters and the decoded
//! body (if any); the service picks the candidate(s), runs the encoder and
//! decides the status code and payload.

use crate::core::encoder;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BarcodeError, Result};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

pub const UNSUPPORTED_METHOD: &str = "Unsupported method";
pub const INTERNAL_ERROR: &str = "internal error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// One barcode from `agent`.
    Single,
    /// Several barcodes from `agents`.
    Batch,
    Help,
}

impl Endpoint {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim_matches('/') {
            "barcode" => Some(Endpoint::Single),
            "barcodemulti" => Some(Endpoint::Batch),
            "help" => Some(Endpoint::Help),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            ResponseBody::Json(_) => "application/json",
            ResponseBody::Text(_) => "text/plain; charset=utf-8",
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl LookupResponse {
    fn json(status: StatusCode, value: Value) -> Self {
        Self {
            status,
            body: ResponseBody::Json(value),
        }
    }

    fn text(status: StatusCode, text: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Text(text.into()),
        }
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::json(status, json!({ "error": message.into() }))
    }

    /// Maps an encoder outcome onto the wire: 200, 400 for bad input, 503 for anything else.
    fn from_result<T: Serialize>(result: Result<T>) -> Self {
        let result = result.and_then(|value| serde_json::to_value(value).map_err(Into::into));

        match result {
            Ok(value) => Self::json(StatusCode::OK, value),
            Err(e) if e.is_client_error() => {
                tracing::warn!("Lookup rejected: {}", e);
                Self::error(StatusCode::BAD_REQUEST, e.to_string())
            }
            Err(e) => {
                tracing::error!("Lookup failed: {} (category: {:?})", e, e.category());
                Self::error(StatusCode::SERVICE_UNAVAILABLE, INTERNAL_ERROR)
            }
        }
    }

    /// Response for a failure outside the encoder, e.g. a panicking handler.
    pub fn internal_error() -> Self {
        Self::error(StatusCode::SERVICE_UNAVAILABLE, INTERNAL_ERROR)
    }
}

#[derive(Debug, Clone)]
pub struct LookupService {
    help_url: Arc<str>,
}

impl LookupService {
    pub fn new(help_url: impl Into<String>) -> Self {
        Self {
            help_url: Arc::from(help_url.into()),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.help_url())
    }

    pub fn help_url(&self) -> &str {
        &self.help_url
    }

    pub fn help(&self) -> LookupResponse {
        LookupResponse::text(StatusCode::OK, self.help_url.as_ref())
    }

    pub fn single(&self, candidate: Option<&str>) -> LookupResponse {
        LookupResponse::from_result(encoder::convert(candidate))
    }

    pub fn batch<S: AsRef<str>>(&self, candidates: &[S]) -> LookupResponse {
        tracing::debug!("Batch lookup of {} candidates", candidates.len());
        LookupResponse::from_result(encoder::convert_batch(candidates))
    }

    /// Routes a request by endpoint and method. Only GET and POST are served on
    /// the lookup endpoints; help answers any method.
    pub fn handle(
        &self,
        endpoint: Endpoint,
        method: &str,
        query: &HashMap<String, String>,
        body: Option<&Value>,
    ) -> LookupResponse {
        let method = Method::parse(method);

        match (endpoint, method) {
            (Endpoint::Help, _) => self.help(),
            (Endpoint::Single, Some(Method::Get)) => {
                self.single(query.get("agent").map(String::as_str))
            }
            (Endpoint::Single, Some(Method::Post)) => {
                let candidate = body.and_then(|b| b.get("agent")).and_then(field_text);
                self.single(candidate.as_deref())
            }
            (Endpoint::Batch, Some(Method::Get)) => {
                let agents = query.get("agents").map(String::as_str).unwrap_or_default();
                self.batch(&split_agents(agents))
            }
            (Endpoint::Batch, Some(Method::Post)) => {
                let agents = body.and_then(|b| b.get("agents"));
                self.batch(&agents_from_body(agents))
            }
            (_, None) => LookupResponse::text(StatusCode::BAD_REQUEST, UNSUPPORTED_METHOD),
        }
    }
}

enum Method {
    Get,
    Post,
}

impl Method {
    fn parse(method: &str) -> Option<Self> {
        if method.eq_ignore_ascii_case("GET") {
            Some(Method::Get)
        } else if method.eq_ignore_ascii_case("POST") {
            Some(Method::Post)
        } else {
            None
        }
    }
}

/// Text of a JSON field as a candidate. Non-string values are echoed as JSON so
/// they are rejected like any other non-barcode.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn split_agents(agents: &str) -> Vec<String> {
    agents.split(',').map(str::to_string).collect()
}

fn agents_from_body(agents: Option<&Value>) -> Vec<String> {
    match agents {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| field_text(item).unwrap_or_default())
            .collect(),
        Some(Value::String(joined)) => split_agents(joined),
        Some(Value::Null) | None => split_agents(""),
        Some(other) => vec![other.to_string()],
    }
}

fn is_form_encoded(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

/// Parses a request body leniently: empty or malformed bodies carry no fields.
///
/// Form-encoded bodies become an object of string fields (the last value wins
/// for repeated keys); everything else is read as JSON.
pub fn parse_body(content_type: Option<&str>, bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    if is_form_encoded(content_type) {
        let fields: serde_json::Map<String, Value> = url::form_urlencoded::parse(bytes)
            .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
            .collect();
        return Some(Value::Object(fields));
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Ignoring unparsable request body: {}", e);
            None
        }
    }
}

impl From<BarcodeError> for LookupResponse {
    fn from(e: BarcodeError) -> Self {
        LookupResponse::from_result::<()>(Err(e))
    }
}
