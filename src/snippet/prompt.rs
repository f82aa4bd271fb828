//! Chat-completions payloads for snippet generation.

const SYSTEM_PROMPT: &str = "You are an expert creative coder. Generate only valid HTML code \
                             without any markdown or explanation.";

const BASE_PROMPT: &str = r#"Create a creative, animated HTML page that prominently features the word "MARK".
The page should be self-contained (single HTML file with embedded CSS and JavaScript).

CRITICAL Requirements:
- MUST fill entire viewport (100vw x 100vh) with NO visible containers or boxes
- NO scrolling, NO borders, NO visible boundaries
- Use body { margin: 0; padding: 0; width: 100vw; height: 100vh; overflow: hidden; }
- Dark or vibrant background that fills the entire screen
- The word "MARK" should be the focal point
- Include smooth animations (CSS or JS)
- Be visually striking and unique
- MOBILE-FIRST: Must look perfect on small screens (320px+)
- Use responsive units: vw, vh, rem, em - NO fixed pixel sizes for layout
- Keep it under 100 lines of code
- Use modern CSS/JS features

AVOID:
- Containers with fixed dimensions
- Visible boxes or frames
- Any content that creates visual boundaries
- Fixed pixel widths/heights for main elements

Be creative! Ideas: particle effects, 3D transforms, generative art, physics simulations, typography play that fills the ENTIRE screen seamlessly."#;

/// Sampling temperature sent upstream.
pub const TEMPERATURE: f32 = 0.9;
/// Completion token cap sent upstream.
pub const MAX_TOKENS: u32 = 2000;

/// One chat message.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    /// `system`, `user` or `assistant`.
    pub role: String,
    /// Message text.
    pub content: String,
}

/// Request body for the chat-completions endpoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChatRequest {
    /// Model name.
    pub model: String,
    /// Conversation.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token cap.
    pub max_tokens: u32,
}

/// Subset of the chat-completions response we read.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ChatResponse {
    /// Completion choices.
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ChatChoice {
    /// Generated message.
    pub message: ChatMessage,
}

/// User prompt for the given message and seed.
pub fn user_prompt(seed: Option<&str>, message: Option<&str>) -> String {
    let mut prompt = String::from(BASE_PROMPT);
    if let Some(m) = message {
        prompt.push_str(&format!(
            "\n\nIMPORTANT: Include the following message prominently on the page: \"{m}\"\n\
             - Display this message below or near \"MARK\"\n\
             - Make it clearly readable but stylistically consistent with the design\n\
             - The message should appear after a brief delay (1-2 seconds)"
        ));
    }
    prompt.push_str("\n\nReturn ONLY the HTML code, starting with <!DOCTYPE html>");
    if let Some(s) = seed {
        prompt.push_str(&format!("\n\nSeed for variation: {s}"));
    }
    prompt
}

impl ChatRequest {
    /// Full request for one snippet.
    pub fn for_snippet(model: &str, seed: Option<&str>, message: Option<&str>) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt(seed, message),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Remove Markdown code fences (```` ``` ```` and ```` ```html ````, any case) and trim.
pub fn strip_code_fences(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        if rest.get(..4).is_some_and(|t| t.eq_ignore_ascii_case("html")) {
            rest = &rest[4..];
        }
        if let Some(r) = rest.strip_prefix('\n') {
            rest = r;
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/snippet/prompt.rs"]
mod tests;
