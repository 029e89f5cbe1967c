use barcode_names::app::lookup::parse_body;
use barcode_names::utils::logger;
use barcode_names::{Endpoint, LambdaConfig, LookupResponse, LookupService};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Invocation payload: which operation to run plus the pieces of the HTTP request.
#[derive(Debug, Deserialize)]
pub struct Request {
    pub operation: String,
    #[serde(default = "default_method")]
    pub http_method: String,
    #[serde(default)]
    pub query: HashMap<String, String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

fn default_method() -> String {
    "GET".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl From<LookupResponse> for Response {
    fn from(response: LookupResponse) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        headers.insert(
            "Content-Type".to_string(),
            response.body.content_type().to_string(),
        );

        Self {
            status_code: response.status.as_u16(),
            headers,
            body: response.body.into_string(),
        }
    }
}

async fn function_handler(
    service: &LookupService,
    event: LambdaEvent<Request>,
) -> Result<Response, Error> {
    let request = event.payload;
    tracing::info!(
        operation = %request.operation,
        method = %request.http_method,
        "Handling barcode lookup"
    );

    let Some(endpoint) = Endpoint::from_name(&request.operation) else {
        tracing::warn!("Unknown operation: {}", request.operation);
        return Err(format!("Unknown operation: {}", request.operation).into());
    };

    // Proxy integrations deliver the raw body as a string.
    let body = match request.body {
        Some(serde_json::Value::String(raw)) => {
            parse_body(request.content_type.as_deref(), raw.as_bytes())
        }
        other => other,
    };

    let response = service.handle(endpoint, &request.http_method, &request.query, body.as_ref());
    Ok(response.into())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    let service = LookupService::from_config(&config);
    let service = &service;

    run(service_fn(move |event: LambdaEvent<Request>| async move {
        function_handler(service, event).await
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    fn event(payload: serde_json::Value) -> LambdaEvent<Request> {
        LambdaEvent::new(serde_json::from_value(payload).unwrap(), Context::default())
    }

    fn service() -> LookupService {
        LookupService::new("https://example.com/barcodes")
    }

    #[tokio::test]
    async fn test_string_body_is_reparsed() {
        let response = function_handler(
            &service(),
            event(json!({
                "operation": "barcode",
                "http_method": "POST",
                "body": "{\"agent\": \"ll\"}"
            })),
        )
        .await
        .unwrap();

        assert_eq!(response.status_code, 200);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["integer_value"], 5);
    }

    #[tokio::test]
    async fn test_form_string_body() {
        let response = function_handler(
            &service(),
            event(json!({
                "operation": "barcodemulti",
                "http_method": "POST",
                "content_type": "application/x-www-form-urlencoded",
                "body": "agents=i%2Cl"
            })),
        )
        .await
        .unwrap();

        assert_eq!(response.status_code, 200);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["l"]["integer_value"], 1);
    }

    #[tokio::test]
    async fn test_get_defaults_and_query() {
        let response = function_handler(
            &service(),
            event(json!({"operation": "barcode", "query": {"agent": "bogus"}})),
        )
        .await
        .unwrap();

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_unknown_operation_is_an_error() {
        let result = function_handler(&service(), event(json!({"operation": "lookup"}))).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_response_conversion_carries_cors_and_status() {
        let response: Response = service().help().into();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "https://example.com/barcodes");
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
        assert!(response.headers["Content-Type"].starts_with("text/plain"));

        let response: Response = service()
            .handle(Endpoint::Batch, "PATCH", &HashMap::new(), None)
            .into();
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, "Unsupported method");
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
    }
}
