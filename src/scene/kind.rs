use crate::scene::render;

/// Text rendered by every scene unless the caller overrides it.
pub const DEFAULT_TEXT: &str = "MARK";

/// Accent color the scenes page passes to every scene.
pub const ACCENT_COLOR: &str = "#ff006e";

/// The finite set of visual scenes the site knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    /// Model-generated HTML embedded in a sandboxed frame.
    AiMarkup,
    /// Text scrolling across the viewport.
    Marquee,
    /// Radar sweep that locks onto the text.
    RadarPing,
    /// Chromatic-aberration glitch with scan lines.
    Glitch,
    /// Emoji falling behind bouncing text.
    EmojiRain,
    /// Outlined text revealed by a cursor-following spotlight.
    Spotlight,
}

impl SceneKind {
    /// Every kind, in default registration order.
    pub const ALL: [SceneKind; 6] = [
        SceneKind::AiMarkup,
        SceneKind::Marquee,
        SceneKind::RadarPing,
        SceneKind::Glitch,
        SceneKind::EmojiRain,
        SceneKind::Spotlight,
    ];

    /// Accent color used when [`SceneProps::primary_color`] is unset.
    pub fn default_color(self) -> &'static str {
        match self {
            SceneKind::AiMarkup => "#ff006e",
            SceneKind::Marquee => "#ffffff",
            SceneKind::RadarPing => "#00ff00",
            SceneKind::Glitch => "#ff0080",
            SceneKind::EmojiRain => "#ffffff",
            SceneKind::Spotlight => "#ffff00",
        }
    }

    /// Render a complete, self-contained HTML document for this scene.
    pub fn render(self, props: &SceneProps) -> String {
        match self {
            SceneKind::AiMarkup => render::ai_markup(props),
            SceneKind::Marquee => render::marquee(props),
            SceneKind::RadarPing => render::radar_ping(props),
            SceneKind::Glitch => render::glitch(props),
            SceneKind::EmojiRain => render::emoji_rain(props),
            SceneKind::Spotlight => render::spotlight(props),
        }
    }
}

/// Inputs shared by every scene renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneProps {
    /// Headline text, normally [`DEFAULT_TEXT`].
    pub text: String,
    /// Optional variation seed.
    pub seed: Option<String>,
    /// Optional free-text message shown under the headline.
    pub message: Option<String>,
    /// Accent color override (CSS color).
    pub primary_color: Option<String>,
    /// Pre-fetched HTML for [`SceneKind::AiMarkup`].
    pub snippet: Option<String>,
}

impl SceneProps {
    /// Props for the standard "MARK" headline.
    pub fn mark(seed: Option<String>, message: Option<String>) -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            seed,
            message,
            primary_color: None,
            snippet: None,
        }
    }

    /// Override the accent color.
    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    /// Attach a pre-fetched snippet.
    pub fn with_snippet(mut self, html: impl Into<String>) -> Self {
        self.snippet = Some(html.into());
        self
    }

    pub(crate) fn color_for(&self, kind: SceneKind) -> &str {
        self.primary_color
            .as_deref()
            .unwrap_or_else(|| kind.default_color())
    }

    pub(crate) fn message_text(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}
