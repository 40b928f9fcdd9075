//! SendChatMessageHandler - Command handler for the lobby companion.

use std::sync::Arc;

use crate::application::ServiceError;
use crate::domain::chat::{ChatReply, ChatResponder};

/// A visitor's chat message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub message: String,
}

/// Handler producing a canned reply. Nothing is stored.
pub struct SendChatMessageHandler {
    responder: Arc<dyn ChatResponder>,
}

impl SendChatMessageHandler {
    pub fn new(responder: Arc<dyn ChatResponder>) -> Self {
        Self { responder }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatReply, ServiceError> {
        let reply = self.responder.reply(&cmd.message);
        tracing::debug!(kind = ?reply.kind, "Chat reply selected");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::{ChatRule, ReplyKind, RuleBasedResponder, PROMPT_REPLY};
    use std::sync::Mutex;

    struct RecordingResponder {
        seen: Mutex<Vec<String>>,
    }

    impl ChatResponder for RecordingResponder {
        fn reply(&self, message: &str) -> ChatReply {
            self.seen.lock().unwrap().push(message.to_string());
            ChatReply {
                text: "ok".to_string(),
                kind: ReplyKind::Fallback,
            }
        }
    }

    fn lobby_handler() -> SendChatMessageHandler {
        SendChatMessageHandler::new(Arc::new(RuleBasedResponder::lobby()))
    }

    fn send(message: &str) -> SendChatMessageCommand {
        SendChatMessageCommand {
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn passes_raw_message_to_responder() {
        let responder = Arc::new(RecordingResponder {
            seen: Mutex::new(Vec::new()),
        });
        let handler = SendChatMessageHandler::new(responder.clone());

        handler.handle(send("  Hello  ")).await.unwrap();

        assert_eq!(*responder.seen.lock().unwrap(), vec!["  Hello  ".to_string()]);
    }

    #[tokio::test]
    async fn privacy_question_gets_privacy_reply() {
        let reply = lobby_handler()
            .handle(send("hi there, is my data secure?"))
            .await
            .unwrap();
        assert_eq!(reply.kind, ReplyKind::Rule("privacy"));
        assert!(reply.text.starts_with("In ROME, privacy comes first."));
    }

    #[tokio::test]
    async fn unknown_message_is_echoed() {
        let reply = lobby_handler().handle(send("what is ROME")).await.unwrap();
        assert_eq!(reply.kind, ReplyKind::Fallback);
        assert!(reply.text.contains("what is ROME"));
    }

    #[tokio::test]
    async fn blank_message_gets_prompt() {
        let reply = lobby_handler().handle(send("   ")).await.unwrap();
        assert_eq!(reply.text, PROMPT_REPLY);
    }

    #[tokio::test]
    async fn custom_rule_order_is_respected() {
        const CUSTOM: &[ChatRule] = &[
            ChatRule::new("games", &["play"], "games first"),
            ChatRule::new("greeting", &["hi"], "greeting second"),
        ];
        let handler =
            SendChatMessageHandler::new(Arc::new(RuleBasedResponder::new(CUSTOM.to_vec())));

        let reply = handler.handle(send("hi, can I play?")).await.unwrap();
        assert_eq!(reply.text, "games first");
    }
}
