//! Translation endpoint client.
//!
//! The MyMemory API is queried with a plain GET:
//! `{endpoint}?q=<text>&langpair=<src>|<dst>` and answers with
//! `{ "responseData": { "translatedText": "…" } }`.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::core::config::TranslatorConfig;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("endpoint answered with HTTP {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TranslateError::Decode(err.to_string())
        } else {
            TranslateError::Network(err.to_string())
        }
    }
}

pub type TranslateResult<T> = Result<T, TranslateError>;

/// Snapshot of what to translate, taken when the request is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: String,
    pub target: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// `"src|dst"` as the endpoint expects it.
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source, self.target)
    }
}

/// Anything able to turn a request into translated text.
///
/// Futures are not `Send`: on wasm the HTTP client is backed by `fetch`.
#[async_trait(?Send)]
pub trait Translator {
    async fn translate(&self, request: &TranslationRequest) -> TranslateResult<String>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: MyMemoryData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: String,
}

/// Extract `responseData.translatedText` from a response body.
pub fn parse_response(body: &str) -> TranslateResult<String> {
    serde_json::from_str::<MyMemoryResponse>(body)
        .map(|parsed| parsed.response_data.translated_text)
        .map_err(|err| TranslateError::Decode(err.to_string()))
}

#[derive(Debug, Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl MyMemoryTranslator {
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    /// Full request URL. Text and codes are percent-encoded; the pair
    /// separator stays a literal `|`.
    pub fn request_url(&self, request: &TranslationRequest) -> String {
        format!(
            "{}?q={}&langpair={}|{}",
            self.endpoint,
            urlencoding::encode(&request.text),
            urlencoding::encode(&request.source),
            urlencoding::encode(&request.target),
        )
    }
}

impl Default for MyMemoryTranslator {
    fn default() -> Self {
        Self::new(&TranslatorConfig::default())
    }
}

#[async_trait(?Send)]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, request: &TranslationRequest) -> TranslateResult<String> {
        let url = self.request_url(request);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MyMemoryTranslator {
        MyMemoryTranslator::default()
    }

    #[test]
    fn url_encodes_text_and_keeps_pair_separator() {
        let req = TranslationRequest::new("hello world & more", "en-GB", "hi-IN");
        assert_eq!(
            client().request_url(&req),
            "https://api.mymemory.translated.net/get?q=hello%20world%20%26%20more&langpair=en-GB|hi-IN"
        );
    }

    #[test]
    fn empty_text_still_sends_q() {
        let req = TranslationRequest::new("", "en-GB", "hi-IN");
        let url = client().request_url(&req);
        assert!(url.contains("?q=&langpair=en-GB|hi-IN"), "{url}");
    }

    #[test]
    fn custom_endpoint_is_respected() {
        let config = TranslatorConfig {
            endpoint: "http://localhost:8080/get".into(),
            ..TranslatorConfig::default()
        };
        let req = TranslationRequest::new("hi", "en-GB", "fr-FR");
        assert_eq!(
            MyMemoryTranslator::new(&config).request_url(&req),
            "http://localhost:8080/get?q=hi&langpair=en-GB|fr-FR"
        );
    }

    #[test]
    fn langpair_joins_codes() {
        let req = TranslationRequest::new("x", "en-GB", "hi-IN");
        assert_eq!(req.langpair(), "en-GB|hi-IN");
    }

    #[test]
    fn parses_translated_text() {
        let body = r#"{
            "responseData": { "translatedText": "नमस्ते", "match": 1 },
            "responseStatus": 200,
            "matches": []
        }"#;
        assert_eq!(parse_response(body).unwrap(), "नमस्ते");
    }

    #[test]
    fn unexpected_shape_is_a_decode_error() {
        let err = parse_response(r#"{ "responseData": null }"#).unwrap_err();
        assert!(matches!(err, TranslateError::Decode(_)));
        assert!(matches!(
            parse_response("<html>busy</html>"),
            Err(TranslateError::Decode(_))
        ));
    }
}
