use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::modules::payment::application::domain::intro_template::IntroContext;
use crate::modules::payment::application::ports::outgoing::{
    IntroTemplateError, IntroTemplateGenerator,
};

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl OpenAiConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            model,
            base_url,
        }
    }
}

/// Chat-completions client that writes the founder's first outreach message.
#[derive(Clone)]
pub struct OpenAiIntroGenerator {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiIntroGenerator {
    pub fn new(config: OpenAiConfig) -> Result<Self, IntroTemplateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| IntroTemplateError::Request(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    content: Option<String>,
}

const SYSTEM_PROMPT: &str = "You write short, warm cold-outreach emails from startup founders to investors. \
Plain text only, no subject line, under 150 words, end with a concrete ask for a call.";

fn build_prompt(ctx: &IntroContext) -> String {
    let mut prompt = format!(
        "Write an intro email to {} at {}.\nFounder company: {}\n",
        ctx.vc_name, ctx.fund_name, ctx.founder_company
    );
    if !ctx.founder_project.is_empty() {
        prompt.push_str(&format!("Project: {}\n", ctx.founder_project));
    }
    if !ctx.tagline.is_empty() {
        prompt.push_str(&format!("Tagline: {}\n", ctx.tagline));
    }
    if !ctx.pitch.is_empty() {
        prompt.push_str(&format!("Pitch: {}\n", ctx.pitch));
    }
    if !ctx.vc_sectors.is_empty() {
        prompt.push_str(&format!("Investor focus: {}\n", ctx.vc_sectors.join(", ")));
    }
    prompt
}

fn first_completion(response: ChatResponse) -> Result<String, IntroTemplateError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(IntroTemplateError::Empty)
}

#[async_trait]
impl IntroTemplateGenerator for OpenAiIntroGenerator {
    async fn generate(&self, ctx: &IntroContext) -> Result<String, IntroTemplateError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(ctx),
                },
            ],
            max_tokens: 400,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| IntroTemplateError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntroTemplateError::Request(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| IntroTemplateError::Request(e.to_string()))?;

        first_completion(parsed)
    }
}
