/// Returned to the caller when the completion API answers without any text.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I couldn't generate a response at this time.";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Fixed instruction sent ahead of every user turn.
pub const SYSTEM_PROMPT: &str = "\
You are a helpful tax assistant. Provide accurate, helpful information about taxes, \
deductions, credits, and tax-related topics.

Important guidelines:
- Always provide accurate tax information
- Be clear and easy to understand
- If you're unsure about specific details, recommend consulting a tax professional
- Focus on general information and avoid giving specific financial advice
- Keep responses concise but informative
- Use a friendly, helpful tone";

/// Upstream request parameters. Chosen by the server, never by the HTTP caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    model: String,
    system_prompt: String,
    max_tokens: u32,
    temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl CompletionSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CompletionSettings::default();

        assert_eq!(settings.model(), "gpt-3.5-turbo");
        assert_eq!(settings.max_tokens(), 500);
        assert!((settings.temperature() - 0.7).abs() < f32::EPSILON);
        assert!(settings.system_prompt().starts_with("You are a helpful tax assistant."));
    }

    #[test]
    fn test_with_model_keeps_other_limits() {
        let settings = CompletionSettings::default().with_model("gpt-4o-mini");

        assert_eq!(settings.model(), "gpt-4o-mini");
        assert_eq!(settings.max_tokens(), DEFAULT_MAX_TOKENS);
    }
}
