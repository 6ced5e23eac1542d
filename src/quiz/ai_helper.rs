use std::future::Future;

use chatgpt::client::ChatGPT;
use chatgpt::config::ChatGPTEngine;
use chatgpt::types::{ChatMessage, CompletionResponse, Role};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::config::TriviaConfig;
use crate::quiz::assign::assign_types;
use crate::quiz::fallback::get_fallback;
use crate::quiz::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::quiz::{Audience, Category, Language, Question, RawQuestion};

pub const TEMPERATURE: f32 = 0.8;
pub const MAX_TOKENS: u32 = 4000;
pub const OPTIONS_PER_QUESTION: usize = 4;

// First `[` to last `]`, across newlines.
static ARRAY_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("array pattern compiles"));

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("backend request failed: {0}")]
    Backend(String),

    #[error("backend returned an empty response")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    EmptyResponse,
    MalformedResponse,
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            // nothing usable came back
            GenerationError::Backend(_) | GenerationError::EmptyResponse => {
                GenerationErrorKind::EmptyResponse
            }
            GenerationError::MalformedResponse(_) => GenerationErrorKind::MalformedResponse,
        }
    }
}

/// Transport for the two-message exchange with the text-generation service.
pub trait CompletionBackend {
    fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

impl<T: CompletionBackend> CompletionBackend for &T {
    fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send {
        (**self).complete(system, user)
    }
}

impl CompletionBackend for ChatGPT {
    async fn complete(&self, system: &str, user: &str) -> Result<String, GenerationError> {
        let history = vec![
            ChatMessage {
                role: Role::System,
                content: system.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: user.to_string(),
            },
        ];

        let response: CompletionResponse = self
            .send_history(&history)
            .await
            .map_err(|e| GenerationError::Backend(e.to_string()))?;

        let content = response
            .message_choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default();

        Ok(content)
    }
}

fn engine_for(model: &str) -> ChatGPTEngine {
    match model {
        "gpt-3.5-turbo" => ChatGPTEngine::Gpt35Turbo,
        "gpt-4" => ChatGPTEngine::Gpt4,
        "gpt-4o" => ChatGPTEngine::Custom("gpt-4o"),
        "gpt-4o-mini" => ChatGPTEngine::Custom("gpt-4o-mini"),
        other => {
            warn!("Unknown model {:?}, using gpt-4o-mini", other);
            ChatGPTEngine::Custom("gpt-4o-mini")
        }
    }
}

pub fn chat_gpt_backend(config: &TriviaConfig) -> Result<ChatGPT, GenerationError> {
    let mut gpt = ChatGPT::new(config.api_key.clone())
        .map_err(|e| GenerationError::Backend(e.to_string()))?;

    gpt.config.engine = engine_for(&config.model);
    gpt.config.timeout = config.timeout;
    gpt.config.temperature = TEMPERATURE;
    gpt.config.max_tokens = Some(MAX_TOKENS);

    Ok(gpt)
}

// Shape the model is asked to produce; ids are assigned locally.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedQuestion {
    question: String,
    options: Vec<String>,
    correct_index: usize,
    #[serde(default)]
    fun_fact: Option<String>,
}

/// Pulls the question array out of a raw completion.
///
/// The model sometimes wraps the array in prose, so the span from the first
/// `[` to the last `]` is taken. Entries that do not decode, do not carry
/// exactly four options or point past them are dropped.
pub fn parse_questions(text: &str, batch_stamp: i64) -> Result<Vec<RawQuestion>, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let payload = ARRAY_SPAN
        .find(text)
        .ok_or_else(|| GenerationError::MalformedResponse("no JSON array in response".to_string()))?;

    let entries: Vec<serde_json::Value> = serde_json::from_str(payload.as_str())
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    let questions: Vec<RawQuestion> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<GeneratedQuestion>(entry) {
            Ok(q) if q.options.len() != OPTIONS_PER_QUESTION => {
                warn!("Dropping entry {}: {} options", index, q.options.len());
                None
            }
            Ok(q) if q.correct_index >= q.options.len() => {
                warn!("Dropping entry {}: correctIndex {} out of range", index, q.correct_index);
                None
            }
            Ok(q) => Some(q),
            Err(e) => {
                warn!("Dropping entry {}: {}", index, e);
                None
            }
        })
        .enumerate()
        .map(|(position, q)| RawQuestion {
            id: format!("{}-{}", batch_stamp, position),
            question: q.question,
            options: q.options,
            correct_index: q.correct_index,
            fun_fact: q.fun_fact,
        })
        .collect();

    if questions.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "no usable questions in response".to_string(),
        ));
    }

    Ok(questions)
}

pub struct QuizHelper<B> {
    backend: B,
}

impl<B: CompletionBackend> QuizHelper<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// One request to the backend, no retries.
    pub async fn generate(
        &self,
        category: Option<Category>,
        audience: Audience,
        language: Language,
        count: usize,
    ) -> Result<Vec<RawQuestion>, GenerationError> {
        info!(
            "Generating {} questions: category={:?} audience={:?} language={}",
            count,
            category,
            audience,
            language.code()
        );
        let prompt = build_prompt(category, audience, language, count);

        let content = self.backend.complete(SYSTEM_PROMPT, &prompt).await?;
        debug!("Completion: {} chars", content.len());

        parse_questions(&content, chrono::Utc::now().timestamp_millis())
    }

    /// Typed batch for a round. Never fails: any generation error is
    /// replaced by the fallback bank for `language`.
    pub async fn request_questions(
        &self,
        category: Option<Category>,
        audience: Audience,
        language: Language,
        count: usize,
    ) -> Vec<Question> {
        let raw = match self.generate(category, audience, language, count).await {
            Ok(questions) => questions,
            Err(e) => {
                warn!("Question generation failed ({:?}), using fallback: {}", e.kind(), e);
                get_fallback(language)
            }
        };

        assign_types(raw)
    }
}
