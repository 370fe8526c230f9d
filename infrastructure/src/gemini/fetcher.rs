//! Gemini implementation of the [`ReplyFetcher`] port

use super::credentials::ApiKeySource;
use super::error::{GeminiError, Result};
use super::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use reqwest::Client;
use somdet_application::{FetchError, ReplyFetcher};
use somdet_domain::{Model, PersonaTemplate, SamplingParams, UNKNOWN_INFO_RESPONSE};
use tracing::{debug, error, info, warn};

/// Public Gemini API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

const INVALID_API_KEY_MESSAGE: &str = "เกิดข้อผิดพลาด: API Key ไม่ถูกต้อง โปรดตรวจสอบการตั้งค่าครับผม";

/// Connection settings for [`GeminiReplyFetcher`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub model: Model,
    pub endpoint: String,
    pub api_key: ApiKeySource,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: ApiKeySource::default(),
        }
    }
}

/// Sends each user message to `models/{model}:generateContent`
///
/// Every request carries the persona instruction and the fixed sampling
/// parameters. There is no timeout and no retry.
pub struct GeminiReplyFetcher {
    client: Client,
    settings: GeminiSettings,
    system_instruction: String,
    sampling: SamplingParams,
}

impl GeminiReplyFetcher {
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("somdet-chat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GeminiError::ClientBuild)?;

        Ok(Self::with_client(settings, client))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(settings: GeminiSettings, client: Client) -> Self {
        info!(
            "Gemini fetcher ready (model: {}, endpoint: {})",
            settings.model, settings.endpoint
        );

        Self {
            client,
            settings,
            system_instruction: PersonaTemplate::system_instruction(),
            sampling: SamplingParams::HELP_DESK,
        }
    }

    pub fn model(&self) -> &Model {
        &self.settings.model
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// One `generateContent` call; `Ok(None)` means the model returned no text
    pub async fn generate(&self, user_text: &str) -> Result<Option<String>> {
        let api_key = self.settings.api_key.resolve()?;
        let request =
            GenerateContentRequest::single_turn(user_text, &self.system_instruction, self.sampling);

        debug!("POST {}", self.url());

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Unparseable Gemini response: {}", body);
            GeminiError::ParseError {
                error: e.to_string(),
            }
        })?;

        debug!("Gemini finish reason: {:?}", parsed.finish_reason());

        Ok(parsed.text())
    }
}

fn api_error(status: u16, body: &str) -> GeminiError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    };
    GeminiError::Api { status, message }
}

/// Map an adapter error to the message shown in the chat
pub fn translate_error(err: &GeminiError) -> FetchError {
    match err {
        GeminiError::MissingApiKey(var) => FetchError::Configuration(format!(
            "API Key is not configured. Please ensure your environment variable {} is set.",
            var
        )),
        e if e.is_invalid_api_key() => FetchError::Upstream(INVALID_API_KEY_MESSAGE.to_string()),
        e => FetchError::Upstream(format!(
            "เกิดข้อผิดพลาดในการเชื่อมต่อกับระบบ: {} โปรดลองใหม่อีกครั้งครับผม",
            e
        )),
    }
}

#[async_trait]
impl ReplyFetcher for GeminiReplyFetcher {
    async fn fetch(&self, user_text: &str) -> std::result::Result<String, FetchError> {
        match self.generate(user_text).await {
            Ok(Some(text)) => Ok(text),
            Ok(None) => {
                warn!("Gemini API returned an empty response");
                Ok(UNKNOWN_INFO_RESPONSE.to_string())
            }
            Err(e) => {
                error!("Error communicating with Gemini API: {}", e);
                Err(translate_error(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one canned HTTP response; the handle yields the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            while !request_complete(&received) {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&received).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    fn request_complete(data: &[u8]) -> bool {
        let Some(header_end) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&data[..header_end]);
        let content_length = headers
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        data.len() >= header_end + 4 + content_length
    }

    fn fetcher(endpoint: &str, key: Option<&str>) -> GeminiReplyFetcher {
        let settings = GeminiSettings {
            model: Model::default(),
            endpoint: endpoint.to_string(),
            api_key: ApiKeySource::Static(key.map(str::to_string)),
        };
        let client = Client::builder().no_proxy().build().unwrap();
        GeminiReplyFetcher::with_client(settings, client)
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let f = fetcher("https://example.test/v1beta/", Some("k"));
        assert_eq!(
            f.url(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_model_comes_from_settings() {
        let f = fetcher("https://example.test/v1beta", Some("k"));
        assert_eq!(f.model(), &Model::Gemini3FlashPreview);
    }

    #[test]
    fn test_api_error_uses_envelope_message() {
        let err = api_error(
            429,
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#,
        );
        assert!(matches!(
            err,
            GeminiError::Api { status: 429, ref message } if message == "Quota exceeded"
        ));
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(502, "  Bad Gateway \n");
        assert!(matches!(
            err,
            GeminiError::Api { status: 502, ref message } if message == "Bad Gateway"
        ));
    }

    #[test]
    fn test_translate_missing_key() {
        let translated = translate_error(&GeminiError::MissingApiKey("API_KEY".to_string()));
        assert_eq!(
            translated,
            FetchError::Configuration(
                "API Key is not configured. Please ensure your environment variable API_KEY is set."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_translate_invalid_key() {
        let translated = translate_error(&GeminiError::Api {
            status: 400,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        });
        assert_eq!(
            translated,
            FetchError::Upstream(INVALID_API_KEY_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_translate_other_error() {
        let translated = translate_error(&GeminiError::Api {
            status: 500,
            message: "Internal error".to_string(),
        });
        assert_eq!(
            translated,
            FetchError::Upstream(
                "เกิดข้อผิดพลาดในการเชื่อมต่อกับระบบ: API error (HTTP 500): Internal error โปรดลองใหม่อีกครั้งครับผม"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let f = fetcher("http://127.0.0.1:9", None);
        let result = f.fetch("hello").await;
        assert!(matches!(result, Err(FetchError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_successful_reply() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"สวัสดีครับน้อง"}]},"finishReason":"STOP"}]}"#,
        )
        .await;

        let reply = fetcher(&endpoint, Some("test-key")).fetch("hello").await;
        assert_eq!(reply, Ok("สวัสดีครับน้อง".to_string()));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /models/gemini-3-flash-preview:generateContent"));
        assert!(request.to_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains("\"systemInstruction\""));
        assert!(request.contains("\"topK\":64"));
        assert!(request.contains("\"text\":\"hello\""));
    }

    #[tokio::test]
    async fn test_empty_reply_becomes_fallback() {
        let (endpoint, server) = serve_once("200 OK", r#"{"candidates":[]}"#).await;

        let reply = fetcher(&endpoint, Some("test-key")).fetch("hello").await;
        assert_eq!(reply, Ok(UNKNOWN_INFO_RESPONSE.to_string()));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_whitespace_reply_is_returned_as_is() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":" \n"}]}}]}"#,
        )
        .await;

        let reply = fetcher(&endpoint, Some("test-key")).fetch("hello").await;
        assert_eq!(reply, Ok(" \n".to_string()));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_key_response() {
        let (endpoint, server) = serve_once(
            "400 Bad Request",
            r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#,
        )
        .await;

        let reply = fetcher(&endpoint, Some("wrong")).fetch("hello").await;
        assert_eq!(
            reply,
            Err(FetchError::Upstream(INVALID_API_KEY_MESSAGE.to_string()))
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream_error() {
        let (endpoint, server) = serve_once("200 OK", "not json").await;

        let reply = fetcher(&endpoint, Some("test-key")).fetch("hello").await;
        match reply {
            Err(FetchError::Upstream(message)) => {
                assert!(message.starts_with("เกิดข้อผิดพลาดในการเชื่อมต่อกับระบบ: Failed to parse response"));
                assert!(!message.contains("not json"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        server.await.unwrap();
    }
}
