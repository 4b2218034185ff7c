//! Slack-shaped response payloads and the fixed phrasing that goes in them.
//!
//! Display text keeps the caller's original casing; only lookups normalize.

use crate::grammar;
use serde::{Deserialize, Serialize};

/// Whether Slack shows the reply to the whole channel or only the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
    Ephemeral,
}

/// Response body in the shape Slack understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl SlackResponse {
    fn in_channel(text: String) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text,
        }
    }

    fn ephemeral(text: String) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text,
        }
    }
}

/// Broadcast announcement for a classification query.
pub fn classification(text: &str, honorable: bool) -> SlackResponse {
    let plural = grammar::is_plural(text);
    let line = if honorable {
        format!("{} {} honor.", text, if plural { "have" } else { "has" })
    } else {
        format!("{} {} without honor.", text, if plural { "are" } else { "is" })
    };
    SlackResponse::in_channel(line)
}

/// Private confirmation that an override was stored.
pub fn override_saved(text: &str, honorable: bool) -> SlackResponse {
    let judgment = if honorable { "honorable" } else { "dishonorable" };
    SlackResponse::ephemeral(format!("{} will be remembered as {}.", text, judgment))
}

/// Private confirmation that an override was dropped.
pub fn forgotten(text: &str) -> SlackResponse {
    let verb = if grammar::is_plural(text) { "have" } else { "has" };
    SlackResponse::ephemeral(format!("{} {} been forgotten.", text, verb))
}

/// Private notice that there was no override to drop.
pub fn not_found(text: &str) -> SlackResponse {
    let verb = if grammar::is_plural(text) { "were" } else { "was" };
    SlackResponse::ephemeral(format!("{} {} not found", text, verb))
}
