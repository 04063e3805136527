use std::time::Duration;

use serde_json::{json, Value};

use super::config::BackendConfig;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed completion payload: {0}")]
    MalformedPayload(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Capability the pipeline consumes: raw answer text for a question.
///
/// Failure short-circuits the whole request; the pipeline never sees an
/// error body.
#[async_trait::async_trait]
pub trait AnswerBackend: Send + Sync {
    async fn raw_answer(&self, question: &str) -> BackendResult<String>;
}

const SYSTEM_PROMPT: &str = "\
You are Nomi Support Bot, an intelligent AI assistant.\n\
You retrieve answers from an AI Vector Search database that includes useful content from Nomi web pages.\n\
Always extract and display any visible page URLs found in the source text (e.g., 'Content from: https://...').\n\
\n\
Instructions:\n\
- Only include Page Reference URL if it's a webpage link (e.g., https://www.nomi.co.uk/xyz), not an image (.png, .jpg, etc.).\n\
- If both a web page URL and image URL are present, list them both under Page Reference URL and Image URL separately.\n\
- Do NOT include 'Content from:' or any extra label text.\n\
- Output raw URLs only like: Page Reference URL: https://...\n\
\n\
Your response format:\n\
- Answer: [answer here]\n\
- Page Reference URL: [https://...] - only if mentioned in the content\n\
- Image URL: [https://...] - only if available in the source content";

/// Chat-completions client backed by a vector search index.
pub struct RagSearchBackend {
    config: BackendConfig,
    client: reqwest::Client,
}

impl RagSearchBackend {
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self { config, client })
    }

    fn payload(&self, question: &str) -> Value {
        json!({
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": question },
            ],
            "temperature": 0.5,
            "max_tokens": 1000,
            "top_p": 0.9,
            "frequency_penalty": 0,
            "presence_penalty": 0,
            "data_sources": [
                {
                    "type": "azure_search",
                    "parameters": {
                        "endpoint": self.config.search_endpoint,
                        "index_name": self.config.index_name,
                        "semantic_configuration": self.config.semantic_configuration(),
                        "query_type": "vector_semantic_hybrid",
                        "in_scope": true,
                        "strictness": 3,
                        "top_n_documents": 10,
                        "authentication": {
                            "type": "api_key",
                            "key": self.config.search_key,
                        },
                        "embedding_dependency": {
                            "type": "deployment_name",
                            "deployment_name": self.config.embedding_deployment,
                        },
                        "fields_mapping": {
                            "content_field": "content",
                            "title_field": "title",
                            "filepath_field": "page_url",
                        },
                    },
                },
            ],
        })
    }

    fn unwrap_content(body: &str) -> BackendResult<String> {
        let parsed: Value = serde_json::from_str(body)
            .map_err(|e| BackendError::MalformedPayload(e.to_string()))?;

        parsed["choices"][0]["message"]["content"]
            .as_str()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                BackendError::MalformedPayload("missing choices[0].message.content".to_string())
            })
    }
}

#[async_trait::async_trait]
impl AnswerBackend for RagSearchBackend {
    async fn raw_answer(&self, question: &str) -> BackendResult<String> {
        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&self.payload(question))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "completion request failed");
            return Err(BackendError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Self::unwrap_content(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> RagSearchBackend {
        RagSearchBackend::new(BackendConfig::new(
            "key".into(),
            "https://example.openai.azure.com".into(),
            "gpt-4o".into(),
            "https://example.search.windows.net".into(),
            "search-key".into(),
            "nomi-pages".into(),
        ))
        .unwrap()
    }

    #[test]
    fn payload_carries_sampling_parameters_and_search_source() {
        let payload = backend().payload("How do I pay?");

        assert_eq!(payload["temperature"], 0.5);
        assert_eq!(payload["max_tokens"], 1000);
        assert_eq!(payload["top_p"], 0.9);
        assert_eq!(payload["messages"][1]["content"], "How do I pay?");

        let source = &payload["data_sources"][0];
        assert_eq!(source["type"], "azure_search");
        assert_eq!(source["parameters"]["query_type"], "vector_semantic_hybrid");
        assert_eq!(source["parameters"]["strictness"], 3);
        assert_eq!(source["parameters"]["top_n_documents"], 10);
        assert_eq!(
            source["parameters"]["semantic_configuration"],
            "nomi-pages-semantic-configuration"
        );
        assert_eq!(
            source["parameters"]["embedding_dependency"]["deployment_name"],
            "text-embedding-3-large"
        );
        assert_eq!(source["parameters"]["fields_mapping"]["filepath_field"], "page_url");
    }

    #[test]
    fn content_is_unwrapped_and_trimmed() {
        let body = r#"{"choices":[{"message":{"content":"  Answer: hi  "}}]}"#;
        assert_eq!(RagSearchBackend::unwrap_content(body).unwrap(), "Answer: hi");
    }

    #[test]
    fn missing_content_is_a_malformed_payload() {
        let body = r#"{"choices":[]}"#;
        assert!(matches!(
            RagSearchBackend::unwrap_content(body),
            Err(BackendError::MalformedPayload(_))
        ));

        assert!(matches!(
            RagSearchBackend::unwrap_content("not json"),
            Err(BackendError::MalformedPayload(_))
        ));
    }
}
