//! Gemini `generateContent` call for the three-view facial analysis.
//!
//! One request per submission: the three photographs as inline JPEG parts, the
//! fixed prompt, and a response schema. No retries and no timeout; whatever the
//! service settles with is mapped onto [`AnalysisError`].

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::http::get_http_client;
use crate::image::EncodedImage;
use crate::prompt::ANALYSIS_PROMPT;
use crate::report::FacialAnalysisReport;
use crate::schema::response_schema;

/// MIME type declared for every inline image part.
pub const INLINE_IMAGE_MIME: &str = "image/jpeg";

const LOG_TARGET: &str = "facelab.analysis";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Client for the hosted analysis model. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    config: Arc<AnalysisConfig>,
}

impl AnalysisClient {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn from_env() -> Self {
        Self::new(AnalysisConfig::from_env())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse the three views and return the parsed report.
    pub async fn analyze(
        &self,
        frontal: &EncodedImage,
        lateral: &EncodedImage,
        oblique: &EncodedImage,
    ) -> Result<FacialAnalysisReport, AnalysisError> {
        if !self.config.has_credential() {
            return Err(AnalysisError::unavailable("no API credential configured"));
        }

        let payload = build_request(frontal, lateral, oblique, self.config.thinking_budget);
        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(target: LOG_TARGET, model = %self.config.model, payload = %summarize_request(&payload));
        }
        info!(target: LOG_TARGET, model = %self.config.model, "submitting three-view analysis");

        let response = get_http_client()
            .post(self.config.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let report = interpret_response(status, &body)?;
        info!(target: LOG_TARGET, score = report.overall_score, "analysis completed");
        Ok(report)
    }
}

/// Build the `generateContent` request body.
pub fn build_request(
    frontal: &EncodedImage,
    lateral: &EncodedImage,
    oblique: &EncodedImage,
    thinking_budget: u32,
) -> Value {
    let mut parts: Vec<Value> = [frontal, lateral, oblique]
        .into_iter()
        .map(|image| {
            json!({
                "inlineData": {
                    "mimeType": INLINE_IMAGE_MIME,
                    "data": image.payload()
                }
            })
        })
        .collect();
    parts.push(json!({ "text": ANALYSIS_PROMPT }));

    json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
            "thinkingConfig": { "thinkingBudget": thinking_budget }
        }
    })
}

/// Map a settled HTTP exchange onto the report or the matching error.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<FacialAnalysisReport, AnalysisError> {
    if !status.is_success() {
        let detail = summarize_error_body(body);
        warn!(target: LOG_TARGET, status = %status, body = %detail, "analysis request rejected");
        return Err(AnalysisError::unavailable(format!("status {status}: {detail}")));
    }

    let envelope: GeminiResponse = serde_json::from_str(body).map_err(|err| {
        AnalysisError::unavailable(format!("undecodable response envelope: {err}"))
    })?;

    let text = extract_text(&envelope);
    if text.is_none() {
        log_empty_response(&envelope);
    }
    parse_report(text)
}

/// Turn the model's text answer into a report.
pub fn parse_report(text: Option<String>) -> Result<FacialAnalysisReport, AnalysisError> {
    let text = text
        .filter(|t| !t.trim().is_empty())
        .ok_or(AnalysisError::EmptyResponse)?;
    serde_json::from_str(text.trim()).map_err(AnalysisError::MalformedResponse)
}

/// Concatenated non-thought text of the first candidate.
fn extract_text(response: &GeminiResponse) -> Option<String> {
    let candidate = response.candidates.as_deref()?.first()?;
    let parts = candidate.content.as_ref()?.parts.as_deref()?;
    let text: String = parts
        .iter()
        .filter(|part| !part.thought)
        .filter_map(|part| part.text.as_deref())
        .collect();
    (!text.trim().is_empty()).then_some(text)
}

fn log_empty_response(response: &GeminiResponse) {
    let block_reason = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref());
    let finish_reason = response
        .candidates
        .as_deref()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.finish_reason.as_deref());
    warn!(
        target: LOG_TARGET,
        block_reason = ?block_reason,
        finish_reason = ?finish_reason,
        "analysis response carried no text"
    );
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

/// Request shape for debug logs: payload lengths instead of image data.
fn summarize_request(payload: &Value) -> Value {
    let parts = payload
        .pointer("/contents/0/parts")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .map(|part| {
                    if let Some(text) = part.get("text").and_then(Value::as_str) {
                        json!({ "text": truncate_for_log(text, 80) })
                    } else if let Some(inline) = part.get("inlineData") {
                        let data_len = inline
                            .get("data")
                            .and_then(Value::as_str)
                            .map(str::len)
                            .unwrap_or(0);
                        json!({ "inlineData": { "mimeType": inline.get("mimeType"), "dataLen": data_len } })
                    } else {
                        json!({ "unknownPart": true })
                    }
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let mut summary = Map::new();
    summary.insert("parts".to_string(), Value::Array(parts));
    if let Some(budget) = payload.pointer("/generationConfig/thinkingConfig/thinkingBudget") {
        summary.insert("thinkingBudget".to_string(), budget.clone());
    }
    Value::Object(summary)
}

/// Prefer Google's `error.message`; fall back to a truncated body.
fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    serde_json::from_str::<Value>(trimmed)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| truncate_for_log(trimmed, 500))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(payload: &str) -> EncodedImage {
        EncodedImage::from_data_uri(format!("data:image/png;base64,{payload}")).unwrap()
    }

    fn report_json() -> String {
        json!({
            "overallScore": 82,
            "proportions": {
                "threeParts": { "upper": 33, "middle": 34, "lower": 33, "description": "even" },
                "fiveEyes": {
                    "leftSide": 20, "leftEye": 20, "middle": 20, "rightEye": 20, "rightSide": 20,
                    "description": "even"
                }
            },
            "features": { "eyes": "e", "nose": "n", "lips": "l", "jawline": "j" },
            "suggestions": { "makeup": ["a"], "lifestyle": ["b"] },
            "summary": "balanced"
        })
        .to_string()
    }

    fn envelope(value: Value) -> GeminiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_carries_three_images_then_prompt() {
        let body = build_request(&image("RlJPTlQ="), &image("U0lERQ=="), &image("QU5HTEU="), 12_000);
        let parts = body.pointer("/contents/0/parts").unwrap().as_array().unwrap();
        assert_eq!(parts.len(), 4);

        let payloads: Vec<&str> = parts[..3]
            .iter()
            .map(|p| p["inlineData"]["data"].as_str().unwrap())
            .collect();
        assert_eq!(payloads, ["RlJPTlQ=", "U0lERQ==", "QU5HTEU="]);
        for part in &parts[..3] {
            assert_eq!(part["inlineData"]["mimeType"], INLINE_IMAGE_MIME);
        }
        assert_eq!(parts[3]["text"], ANALYSIS_PROMPT);
    }

    #[test]
    fn request_declares_json_schema_and_thinking_budget() {
        let body = build_request(&image("QQ=="), &image("QQ=="), &image("QQ=="), 4_096);
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"], response_schema());
        assert_eq!(config["thinkingConfig"]["thinkingBudget"], 4_096);
    }

    #[test]
    fn missing_text_is_empty_response() {
        assert!(matches!(parse_report(None), Err(AnalysisError::EmptyResponse)));
        assert!(matches!(
            parse_report(Some("   ".into())),
            Err(AnalysisError::EmptyResponse)
        ));
    }

    #[test]
    fn unparsable_text_is_malformed() {
        let err = parse_report(Some("this is not json".into())).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
        assert_eq!(err.kind(), "malformed_response");
    }

    #[test]
    fn shape_mismatch_is_malformed() {
        let err = parse_report(Some(r#"{"overallScore": 82}"#.into())).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn valid_text_parses_exactly() {
        let report = parse_report(Some(report_json())).unwrap();
        assert_eq!(report.overall_score, 82.0);
        assert_eq!(report.summary, "balanced");
        assert_eq!(report.suggestions.makeup, vec!["a".to_string()]);
        assert!(report.suggestions.medical_beauty.is_none());
    }

    #[test]
    fn text_is_joined_across_parts_skipping_thoughts() {
        let full = report_json();
        let (head, tail) = full.split_at(full.len() / 2);
        let response = envelope(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "internal reasoning", "thought": true },
                    { "text": head },
                    { "text": tail }
                ]},
                "finishReason": "STOP"
            }]
        }));
        let text = extract_text(&response).unwrap();
        assert_eq!(text, full);
        assert!(parse_report(Some(text)).is_ok());
    }

    #[test]
    fn blocked_prompt_has_no_text() {
        let response = envelope(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }));
        assert!(extract_text(&response).is_none());
        assert!(matches!(
            parse_report(extract_text(&response)),
            Err(AnalysisError::EmptyResponse)
        ));
    }

    #[test]
    fn candidate_without_parts_has_no_text() {
        let response = envelope(json!({
            "candidates": [{ "content": {}, "finishReason": "MAX_TOKENS" }]
        }));
        assert!(extract_text(&response).is_none());
    }

    #[test]
    fn error_body_prefers_google_message() {
        let body = r#"{"error":{"code":503,"message":"The model is overloaded.","status":"UNAVAILABLE"}}"#;
        assert_eq!(summarize_error_body(body), "The model is overloaded.");
        assert_eq!(summarize_error_body("  "), "empty response body");
        assert_eq!(summarize_error_body("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn request_summary_hides_image_data() {
        let body = build_request(&image("QUJDREVG"), &image("QQ=="), &image("QQ=="), 12_000);
        let summary = summarize_request(&body).to_string();
        assert!(!summary.contains("QUJDREVG"));
        assert!(summary.contains("dataLen"));
    }

    fn report_envelope(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    #[test]
    fn rejected_status_is_unavailable_with_google_message() {
        let body = r#"{"error":{"code":503,"message":"The model is overloaded.","status":"UNAVAILABLE"}}"#;
        let err = interpret_response(StatusCode::SERVICE_UNAVAILABLE, body).unwrap_err();
        match err {
            AnalysisError::ServiceUnavailable { reason } => {
                assert!(reason.contains("503"), "{reason}");
                assert!(reason.contains("The model is overloaded."), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejected_status_wins_even_with_a_report_body() {
        let err = interpret_response(StatusCode::BAD_REQUEST, &report_envelope(&report_json())).unwrap_err();
        assert_eq!(err.kind(), "service_unavailable");
    }

    #[test]
    fn undecodable_envelope_is_unavailable() {
        let err = interpret_response(StatusCode::OK, "not json").unwrap_err();
        assert_eq!(err.kind(), "service_unavailable");
    }

    #[test]
    fn envelope_without_text_is_empty_response() {
        let err = interpret_response(StatusCode::OK, "{}").unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResponse));

        let blocked = json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
        let err = interpret_response(StatusCode::OK, &blocked).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResponse));
    }

    #[test]
    fn envelope_with_non_report_text_is_malformed() {
        let err = interpret_response(StatusCode::OK, &report_envelope("sorry, I cannot help")).unwrap_err();
        assert_eq!(err.kind(), "malformed_response");
    }

    #[test]
    fn successful_exchange_yields_the_report() {
        let report = interpret_response(StatusCode::OK, &report_envelope(&report_json())).unwrap();
        assert_eq!(report, parse_report(Some(report_json())).unwrap());
    }

    #[tokio::test]
    async fn missing_credential_fails_without_request() {
        let client = AnalysisClient::new(AnalysisConfig::default());
        let err = client
            .analyze(&image("QQ=="), &image("QQ=="), &image("QQ=="))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "service_unavailable");
    }
}
