//! Content suggestions from an external chat-completion endpoint.
//!
//! The endpoint is optional. Whenever it is missing, slow, failing or
//! returns something unparseable, callers get the fixed suggestions below.

use crate::config::AiConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const MAX_SUGGESTIONS: usize = 5;
const MAX_HASHTAGS: usize = 5;
const STOP_WORDS: [&str; 8] = ["this", "that", "with", "from", "they", "have", "been", "will"];

pub const FALLBACK_SUGGESTIONS: [&str; MAX_SUGGESTIONS] = [
    "Consider adding a compelling hook in your opening sentence to grab attention immediately",
    "Break up long paragraphs into shorter, more digestible chunks for better readability",
    "Include a clear call-to-action at the end to encourage audience engagement",
    "Add relevant hashtags to increase discoverability (aim for 3-5 specific tags)",
    "Consider adding a personal anecdote or story to make your content more relatable",
];

pub const FALLBACK_HASHTAGS: [&str; 3] = ["#creator", "#content", "#tips"];

const SYSTEM_PROMPT: &str = "You are a content optimization expert for creators. \
Analyze the given content and provide 5 practical, actionable suggestions to improve \
engagement, readability, and audience connection. Focus on content structure and \
formatting, engagement hooks and calls to action, hashtag and SEO optimization, \
audience connection techniques, and platform-specific best practices. \
Return only a JSON array of suggestion strings, no other text.";

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("no suggestion endpoint configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("endpoint answered {0}")]
    Status(reqwest::StatusCode),
    #[error("response had no usable suggestions")]
    Unparseable,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl SuggestionClient {
    pub fn new(config: AiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Up to five suggestions, falling back to the fixed list on any failure.
    pub async fn suggest(&self, title: &str, content: &str, kind: &str) -> Vec<String> {
        match self.fetch(title, content, kind).await {
            Ok(suggestions) => suggestions,
            Err(SuggestionError::NotConfigured) => fallback_suggestions(),
            Err(e) => {
                warn!("AI suggestions unavailable, using fallback: {}", e);
                fallback_suggestions()
            }
        }
    }

    async fn fetch(
        &self,
        title: &str,
        content: &str,
        kind: &str,
    ) -> Result<Vec<String>, SuggestionError> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or(SuggestionError::NotConfigured)?;

        let or_missing = |value: &str, missing: &str| {
            if value.trim().is_empty() {
                missing.to_string()
            } else {
                value.to_string()
            }
        };
        let prompt = format!(
            "Content Type: {}\nTitle: {}\nContent: {}\n\nPlease analyze and provide 5 specific improvement suggestions.",
            or_missing(kind, "general"),
            or_missing(title, "No title provided"),
            or_missing(content, "No content provided"),
        );

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: prompt,
                },
            ],
            max_tokens: 500,
            temperature: 0.7,
        };

        let mut request = self.http.post(endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SuggestionError::Status(response.status()));
        }

        let chat: ChatResponse = response.json().await?;
        chat.choices
            .first()
            .and_then(|choice| parse_suggestions(&choice.message.content))
            .ok_or(SuggestionError::Unparseable)
    }
}

fn fallback_suggestions() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Parses a JSON array of strings, tolerating a surrounding markdown fence.
pub fn parse_suggestions(raw: &str) -> Option<Vec<String>> {
    let cleaned = raw
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let mut suggestions: Vec<String> = serde_json::from_str(cleaned).ok()?;
    suggestions.retain(|s| !s.trim().is_empty());
    if suggestions.is_empty() {
        return None;
    }
    suggestions.truncate(MAX_SUGGESTIONS);
    Some(suggestions)
}

/// Hashtags from the longer words of the title and body.
pub fn hashtags(title: &str, content: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let text = format!("{title} {content}").to_lowercase();

    for word in text.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.chars().count() <= 4 || STOP_WORDS.contains(&word) {
            continue;
        }
        let tag = format!("#{word}");
        if !tags.contains(&tag) {
            tags.push(tag);
        }
        if tags.len() == MAX_HASHTAGS {
            break;
        }
    }

    if tags.is_empty() {
        return FALLBACK_HASHTAGS.iter().map(|s| s.to_string()).collect();
    }
    tags
}

/// Mock engagement score in percent.
pub fn engagement_prediction() -> u8 {
    rand::thread_rng().gen_range(70..100)
}
