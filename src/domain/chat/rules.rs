//! Keyword rules and their replies.

/// Reply when the message is empty after trimming.
pub const PROMPT_REPLY: &str = "Say something and I’ll respond!";

/// Privacy reassurance.
pub const PRIVACY_REPLY: &str = "In ROME, privacy comes first. We minimize data collection, \
encrypt what we must, and give you clear controls over visibility. Ask me anything about how it works.";

/// Greeting.
pub const GREETING_REPLY: &str =
    "Hey! I’m your lobby companion. Want to explore mini‑games or learn about our mission?";

/// Mini-games pointer.
pub const GAMES_REPLY: &str =
    "Let’s play! Try the Click Sprint or Whack‑a‑Dot in the mini‑games section.";

/// A trigger keyword set paired with a canned reply.
///
/// Keywords must be lower-case; they are matched as substrings of the
/// lower-cased message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl ChatRule {
    pub const fn new(
        name: &'static str,
        keywords: &'static [&'static str],
        reply: &'static str,
    ) -> Self {
        Self {
            name,
            keywords,
            reply,
        }
    }

    /// True if any keyword occurs in `lowercase`.
    pub fn matches(&self, lowercase: &str) -> bool {
        self.keywords.iter().any(|k| lowercase.contains(k))
    }
}

/// The lobby companion's rule table, in evaluation order.
pub const LOBBY_RULES: [ChatRule; 3] = [
    ChatRule::new("privacy", &["privacy", "data", "secure", "safety"], PRIVACY_REPLY),
    ChatRule::new("greeting", &["hello", "hi", "hey"], GREETING_REPLY),
    ChatRule::new("games", &["game", "play", "minigame"], GAMES_REPLY),
];

/// Fallback reply echoing the user's (trimmed) message.
pub fn fallback_reply(message: &str) -> String {
    format!("You said: ‘{}’. I’m here to help you explore ROME.", message)
}
