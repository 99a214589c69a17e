use exchange::Kline;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROVIDER_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

const CHAT_SYSTEM_PROMPT: &str = "You are an expert financial advisor specializing in gold trading.
You have access to the latest 10 minutes of gold price data.
Provide clear, concise, and actionable investment advice based on this data.
Always consider market trends and potential risks in your analysis.
Format your response in a professional and easy-to-understand manner.
Always respond in English.";

const ANALYSIS_SYSTEM_PROMPT: &str = "You are an expert cryptocurrency trading advisor specializing in PAXG/USDT trading.
Analyze the provided 10-minute K-line data and provide clear investment advice.
Your response should include:
1. A clear recommendation (BUY, SELL, or HOLD)
2. Brief explanation of the market trend
3. Key support/resistance levels
4. Risk assessment
Always respond in English.";

/// Canned user message sent when the dashboard requests an automated
/// technical analysis of the current window.
pub const ANALYSIS_REQUEST: &str = "Please analyze the PAXG/USDT trading data from the past 10 minutes and provide investment advice.";

#[derive(thiserror::Error, Debug)]
pub enum AgentError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned no completion")]
    EmptyCompletion,
    #[error("provider API key is not configured")]
    MissingKey,
}

/// Body of `POST /api/agent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRequest {
    pub user_message: String,
    #[serde(default)]
    pub gold_data: Option<Vec<Kline>>,
    #[serde(default)]
    pub is_analysis: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
}

/// Assembles the system/user prompt pair the provider is asked to answer.
///
/// An analysis request embeds every bar as a formatted block under the
/// analysis advisor persona; a plain question with window data gets the
/// data prepended as JSON; anything else is forwarded as-is under the
/// gold advisor persona.
pub fn build_prompt(user_message: &str, bars: Option<&[Kline]>, is_analysis: bool) -> Prompt {
    match bars {
        Some(bars) if is_analysis => Prompt {
            system: ANALYSIS_SYSTEM_PROMPT,
            user: format!(
                "Please analyze the PAXG/USDT trading data from the past 10 minutes and provide investment advice.\n\
                 Latest K-line data:\n{}\n\
                 As a smart trading advisor, please determine whether to BUY, SELL, or HOLD, and briefly explain the reasoning.",
                format_bars(bars)
            ),
        },
        Some(bars) => Prompt {
            system: CHAT_SYSTEM_PROMPT,
            user: format!(
                "Here is the latest gold price data for the past 10 minutes: {}\n\nUser question: {}",
                serde_json::to_string(bars).unwrap_or_else(|_| "[]".to_string()),
                user_message
            ),
        },
        None => Prompt {
            system: CHAT_SYSTEM_PROMPT,
            user: user_message.to_string(),
        },
    }
}

fn format_bars(bars: &[Kline]) -> String {
    bars.iter()
        .map(|bar| {
            let timestamp = chrono::DateTime::from_timestamp_millis(bar.time as i64)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();
            format!(
                "Timestamp: {}\nOpen: {}\nHigh: {}\nLow: {}\nClose: {}\nVolume: {}\n",
                timestamp, bar.open, bar.high, bar.low, bar.close, bar.volume
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the hosted chat-completions provider.
pub struct AgentClient {
    http: reqwest::Client,
    url: String,
    key: String,
    model: String,
}

impl AgentClient {
    pub fn new(url: String, key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
            key,
            model,
        }
    }

    /// Sends the prompt and returns the first completion's text verbatim.
    pub async fn chat(&self, prompt: &Prompt) -> Result<String, AgentError> {
        if self.key.is_empty() {
            return Err(AgentError::MissingKey);
        }

        let body = CompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response: CompletionResponse = self
            .http
            .post(&self.url)
            .bearer_auth(&self.key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AgentError::EmptyCompletion)
    }
}
