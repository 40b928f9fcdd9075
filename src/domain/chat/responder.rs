//! First-match-wins reply engine.

use super::rules::{fallback_reply, ChatRule, LOBBY_RULES, PROMPT_REPLY};

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Empty input; rules were not evaluated.
    Prompt,
    /// The named rule matched.
    Rule(&'static str),
    /// No rule matched.
    Fallback,
}

/// A reply together with how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub kind: ReplyKind,
}

/// Produces a reply for a chat message.
pub trait ChatResponder: Send + Sync {
    fn reply(&self, message: &str) -> ChatReply;
}

/// Keyword rule responder.
///
/// Rules are evaluated top to bottom and the first one with a matching
/// keyword wins, even if a later rule would also match.
#[derive(Debug, Clone)]
pub struct RuleBasedResponder {
    rules: Vec<ChatRule>,
}

impl RuleBasedResponder {
    /// Responder with an explicit rule order.
    pub fn new(rules: Vec<ChatRule>) -> Self {
        Self { rules }
    }

    /// Responder with the lobby companion rules.
    pub fn lobby() -> Self {
        Self::new(LOBBY_RULES.to_vec())
    }
}

impl Default for RuleBasedResponder {
    fn default() -> Self {
        Self::lobby()
    }
}

impl ChatResponder for RuleBasedResponder {
    fn reply(&self, message: &str) -> ChatReply {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return ChatReply {
                text: PROMPT_REPLY.to_string(),
                kind: ReplyKind::Prompt,
            };
        }

        let lowercase = trimmed.to_lowercase();
        match self.rules.iter().find(|rule| rule.matches(&lowercase)) {
            Some(rule) => ChatReply {
                text: rule.reply.to_string(),
                kind: ReplyKind::Rule(rule.name),
            },
            None => ChatReply {
                text: fallback_reply(trimmed),
                kind: ReplyKind::Fallback,
            },
        }
    }
}
