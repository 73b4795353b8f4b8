//! Streaming text generation client
//!
//! The text service streams the story as WebSocket frames and closes the
//! connection with a Normal (1000) close code once it is done.

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tokio_tungstenite::tungstenite::{
    self,
    protocol::frame::coding::CloseCode,
    Message,
};
use tracing::{debug, warn};
use url::Url;

use crate::config::TextServiceConfig;
use crate::utils::errors::{GenerationError, GenerationResult};
use crate::utils::helpers::{normalize_whitespace, truncate_text};
use super::TextGenerator;

/// Close code reported when the peer closes without a status
const NO_STATUS_CODE: u16 = 1005;

/// WebSocket client for the streaming text service
#[derive(Debug, Clone)]
pub struct StreamingTextClient {
    stream_url: String,
    app_id: String,
}

impl StreamingTextClient {
    /// Create a new StreamingTextClient instance
    pub fn new(config: &TextServiceConfig) -> Self {
        Self {
            stream_url: config.stream_url.clone(),
            app_id: config.app_id.clone(),
        }
    }

    /// Full request URL with the app ID and percent-encoded prompt
    pub fn request_url(&self, prompt: &str) -> GenerationResult<Url> {
        let separator = if self.stream_url.contains('?') { '&' } else { '?' };
        let raw = format!(
            "{}{}app_id={}&prompt={}",
            self.stream_url,
            separator,
            urlencoding::encode(&self.app_id),
            urlencoding::encode(prompt),
        );

        Url::parse(&raw)
            .map_err(|e| GenerationError::StreamFailed(format!("invalid stream URL: {}", e)))
    }
}

#[async_trait]
impl TextGenerator for StreamingTextClient {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let url = self.request_url(prompt)?;
        debug!(
            prompt = %truncate_text(&normalize_whitespace(prompt), 120),
            "Opening text generation stream"
        );

        let (stream, _response) = tokio_tungstenite::connect_async(url.as_str())
            .await
            .map_err(|e| GenerationError::StreamFailed(e.to_string()))?;

        let text = collect_fragments(stream).await?;
        debug!(length = text.len(), "Text generation stream completed");
        Ok(text)
    }
}

/// Append every received fragment to a buffer until the stream closes
///
/// Resolves with the buffer on a Normal close frame. Any other close code, a
/// close frame without a status, a transport error or the stream ending
/// without a close frame rejects.
pub async fn collect_fragments<S>(mut stream: S) -> GenerationResult<String>
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    let mut text = String::new();

    while let Some(frame) = stream.next().await {
        let frame = frame.map_err(|e| GenerationError::StreamFailed(e.to_string()))?;

        match frame {
            Message::Text(fragment) => text.push_str(&fragment),
            Message::Binary(bytes) => text.push_str(&String::from_utf8_lossy(&bytes)),
            Message::Close(Some(close)) if close.code == CloseCode::Normal => return Ok(text),
            Message::Close(Some(close)) => {
                warn!(code = u16::from(close.code), reason = %close.reason, "Text stream closed abnormally");
                return Err(GenerationError::AbnormalClose {
                    code: close.code.into(),
                    reason: close.reason.to_string(),
                });
            }
            Message::Close(None) => {
                return Err(GenerationError::AbnormalClose {
                    code: NO_STATUS_CODE,
                    reason: String::new(),
                });
            }
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
        }
    }

    Err(GenerationError::StreamEnded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use futures::stream;
    use std::borrow::Cow;
    use tokio_tungstenite::tungstenite::protocol::CloseFrame;

    fn close(code: CloseCode) -> Result<Message, tungstenite::Error> {
        Ok(Message::Close(Some(CloseFrame { code, reason: Cow::Borrowed("bye") })))
    }

    #[tokio::test]
    async fn test_fragments_accumulated_until_normal_close() {
        let frames = vec![
            Ok(Message::Text("<h1>Tale</h1>".to_string())),
            Ok(Message::Ping(vec![1])),
            Ok(Message::Binary(b"<p>Once".to_vec())),
            Ok(Message::Text(" upon a time.</p>".to_string())),
            close(CloseCode::Normal),
            Ok(Message::Text("ignored".to_string())),
        ];

        let text = collect_fragments(stream::iter(frames)).await.unwrap();
        assert_eq!(text, "<h1>Tale</h1><p>Once upon a time.</p>");
    }

    #[tokio::test]
    async fn test_abnormal_close_rejects() {
        let frames = vec![Ok(Message::Text("partial".to_string())), close(CloseCode::Error)];
        let result = collect_fragments(stream::iter(frames)).await;
        assert_matches!(result, Err(GenerationError::AbnormalClose { code: 1011, .. }));
    }

    #[tokio::test]
    async fn test_close_without_status_rejects() {
        let frames = vec![Ok(Message::Close(None))];
        let result = collect_fragments(stream::iter(frames)).await;
        assert_matches!(result, Err(GenerationError::AbnormalClose { code: 1005, .. }));
    }

    #[tokio::test]
    async fn test_stream_end_without_close_rejects() {
        let frames = vec![Ok(Message::Text("partial".to_string()))];
        let result = collect_fragments(stream::iter(frames)).await;
        assert_matches!(result, Err(GenerationError::StreamEnded));
    }

    #[tokio::test]
    async fn test_transport_error_rejects() {
        let frames = vec![
            Ok(Message::Text("partial".to_string())),
            Err(tungstenite::Error::ConnectionClosed),
        ];
        let result = collect_fragments(stream::iter(frames)).await;
        assert_matches!(result, Err(GenerationError::StreamFailed(_)));
    }

    #[test]
    fn test_request_url_encodes_prompt() {
        let client = StreamingTextClient::new(&TextServiceConfig {
            stream_url: "wss://example.com/ask_ai_streaming".to_string(),
            app_id: "everybody-once".to_string(),
        });

        let url = client.request_url("Create a short story & more").unwrap();
        assert_eq!(url.scheme(), "wss");
        assert_eq!(url.path(), "/ask_ai_streaming");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("app_id".to_string(), "everybody-once".to_string()));
        assert_eq!(pairs[1], ("prompt".to_string(), "Create a short story & more".to_string()));
        assert!(url.as_str().contains("prompt=Create%20a%20short%20story%20%26%20more"));
    }
}
