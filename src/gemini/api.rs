use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};
use tracing::debug;

use crate::core::{
    http::{
        ensure_success,
        http_client,
    },
    settings::Settings,
    PrismError,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single user turn asking for JSON that matches `schema`.
    pub fn json(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt.into()), thought: None }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on reasoning parts, which are not part of the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, answer parts joined and thought parts
    /// skipped. `None` when the model produced no answer text at all.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts
            .iter()
            .filter(|p| !p.is_thought())
            .filter_map(|p| p.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

/// A hosted model that turns one request into one block of text.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, PrismError>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(settings: &Settings) -> Result<Self, PrismError> {
        Ok(Self::with_client(http_client()?, settings))
    }

    pub fn with_client(client: Client, settings: &Settings) -> Self {
        Self {
            client,
            api_base: settings.api_base.clone(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, PrismError> {
        let api_key = self.api_key.as_deref().ok_or(PrismError::MissingApiKey)?;

        debug!(model = %self.model, "Sending generateContent request");
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let body: GenerateContentResponse = ensure_success(resp).await?.json().await?;
        Ok(body.text())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::{
        io::{
            AsyncReadExt,
            AsyncWriteExt,
        },
        net::{
            TcpListener,
            TcpStream,
        },
        task::JoinHandle,
    };

    use super::*;

    fn settings(api_base: &str, api_key: Option<&str>) -> Settings {
        Settings {
            api_key: api_key.map(str::to_string),
            model: "test-model".to_string(),
            api_base: api_base.to_string(),
            ..Settings::default()
        }
    }

    // Local stub traffic must not go through a proxy picked up from the environment.
    fn local_client(settings: &Settings) -> GeminiClient {
        GeminiClient::with_client(Client::builder().no_proxy().build().unwrap(), settings)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Answers exactly one request with a canned response and hands back the
    /// raw request it saw.
    async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{}/v1beta", addr), handle)
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest::json("hello", json!({ "type": "ARRAY" }));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "ARRAY" }
                }
            })
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "[{\"a\":" }, { "text": "1}]" }]
                    }
                },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "totalTokenCount": 12 }
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("[{\"a\":1}]"));

        let with_thoughts: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Listing five ocean cards...", "thought": true },
                        { "text": "[]", "thought": false },
                        { "text": "\n" }
                    ]
                }
            }]
        }))
        .unwrap();
        assert_eq!(with_thoughts.text().as_deref(), Some("[]\n"));

        let only_thoughts: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "thinking", "thought": true }] }
            }]
        }))
        .unwrap();
        assert_eq!(only_thoughts.text(), None);
    }

    #[test]
    fn test_response_without_text() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), None);

        let no_parts: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
                .unwrap();
        assert_eq!(no_parts.text(), None);
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new(&settings("https://example.test/v1beta", None)).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/test-model:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let client = GeminiClient::new(&settings("http://127.0.0.1:9", None)).unwrap();
        let request = GenerateContentRequest::json("x", json!({}));
        let result = client.generate(&request).await;
        assert!(matches!(result, Err(PrismError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_generate_round_trip() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "[]" }] } }]
        })
        .to_string();
        let (base, server) = serve_once("200 OK", body).await;

        let client = local_client(&settings(&base, Some("secret")));
        let request = GenerateContentRequest::json("make cards", json!({ "type": "ARRAY" }));
        let text = client.generate(&request).await.unwrap();
        assert_eq!(text.as_deref(), Some("[]"));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /v1beta/models/test-model:generateContent HTTP/1.1"));
        assert!(raw.to_lowercase().contains("x-goog-api-key: secret"));
        assert!(raw.contains("\"responseMimeType\":\"application/json\""));
        assert!(raw.contains("make cards"));
    }

    #[tokio::test]
    async fn test_service_error_is_surfaced() {
        let body = json!({ "error": { "code": 429, "message": "Quota exceeded" } }).to_string();
        let (base, server) = serve_once("429 Too Many Requests", body).await;

        let client = local_client(&settings(&base, Some("secret")));
        let result = client.generate(&GenerateContentRequest::json("x", json!({}))).await;

        match result {
            Err(PrismError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "Quota exceeded");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
        server.await.unwrap();
    }
}
