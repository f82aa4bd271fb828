//! Canned messages offered on the config page, and share-link construction.

use crate::foundation::error::{MarkError, MarkResult};

/// Option id whose message is supplied by the user.
pub const CUSTOM_OPTION: &str = "other";

/// One selectable message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MessageOption {
    /// Stable option id.
    pub id: &'static str,
    /// Button label.
    pub label: &'static str,
    /// Message encoded into the link; empty for the custom option.
    pub message: &'static str,
    /// Decorative emoji.
    pub emoji: &'static str,
}

/// Options in display order.
pub const MESSAGE_OPTIONS: [MessageOption; 5] = [
    MessageOption {
        id: "wake-up",
        label: "Get out of bed already",
        message: "WAKE UP MARK! The world needs you!",
        emoji: "🛏️",
    },
    MessageOption {
        id: "respond",
        label: "Respond to me",
        message: "Mark... please respond. I miss our conversations.",
        emoji: "📱",
    },
    MessageOption {
        id: "commit",
        label: "Commit to plans",
        message: "Stop being wishy-washy! Make a decision and stick to it!",
        emoji: "📅",
    },
    MessageOption {
        id: "portfolio",
        label: "Rebalance my portfolio",
        message: "The markets are moving, Mark! Time to rebalance!",
        emoji: "📈",
    },
    MessageOption {
        id: CUSTOM_OPTION,
        label: "Other",
        message: "",
        emoji: "✨",
    },
];

/// Look up an option by id.
pub fn find_option(id: &str) -> Option<&'static MessageOption> {
    MESSAGE_OPTIONS.iter().find(|o| o.id == id)
}

/// Message for an option: the canned text, or `custom` for the custom option.
///
/// Returns `None` for unknown ids and for messages that are blank after trimming.
pub fn resolve_message(option_id: &str, custom: Option<&str>) -> Option<String> {
    let opt = find_option(option_id)?;
    let message = if opt.id == CUSTOM_OPTION {
        custom.unwrap_or_default()
    } else {
        opt.message
    };
    if message.trim().is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// `<base>/scenes?message=<encoded>` for a non-blank message.
pub fn share_url(base: &str, message: &str) -> MarkResult<String> {
    if message.trim().is_empty() {
        return Err(MarkError::validation("message must not be blank"));
    }
    let base = url::Url::parse(base)
        .map_err(|e| MarkError::validation(format!("invalid base url '{base}': {e}")))?;
    let mut url = base
        .join("/scenes")
        .map_err(|e| MarkError::validation(format!("invalid base url: {e}")))?;
    url.query_pairs_mut().append_pair("message", message);
    Ok(url.into())
}

#[cfg(test)]
#[path = "../tests/unit/messages.rs"]
mod tests;
