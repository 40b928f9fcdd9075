//! Chat domain - the lobby companion's canned replies.
//!
//! There is no conversation state and no language understanding: a message
//! is trimmed, lower-cased and checked against an ordered keyword table.

mod responder;
mod rules;

pub use responder::{ChatReply, ChatResponder, ReplyKind, RuleBasedResponder};
pub use rules::{fallback_reply, ChatRule, LOBBY_RULES, PROMPT_REPLY};
