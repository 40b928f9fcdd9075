//! Shared application state injected into every route.

use std::sync::Arc;

use crate::application::{
    GetStatsHandler, RunDiagnosticsHandler, SendChatMessageHandler, SignUpHandler,
    SubmitContactHandler,
};
use crate::domain::chat::{ChatResponder, RuleBasedResponder};
use crate::domain::diagnostics::StoreSettings;
use crate::ports::StoreHandle;

/// Dependencies built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub store: StoreHandle,
    pub store_settings: StoreSettings,
    pub responder: Arc<dyn ChatResponder>,
}

impl AppState {
    /// State with the lobby chat rules.
    pub fn new(store: StoreHandle, store_settings: StoreSettings) -> Self {
        Self {
            store,
            store_settings,
            responder: Arc::new(RuleBasedResponder::lobby()),
        }
    }

    pub fn with_responder(mut self, responder: Arc<dyn ChatResponder>) -> Self {
        self.responder = responder;
        self
    }

    pub fn sign_up_handler(&self) -> SignUpHandler {
        SignUpHandler::new(self.store.clone())
    }

    pub fn get_stats_handler(&self) -> GetStatsHandler {
        GetStatsHandler::new(self.store.clone())
    }

    pub fn submit_contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new(self.store.clone())
    }

    pub fn send_chat_message_handler(&self) -> SendChatMessageHandler {
        SendChatMessageHandler::new(self.responder.clone())
    }

    pub fn run_diagnostics_handler(&self) -> RunDiagnosticsHandler {
        RunDiagnosticsHandler::new(self.store.clone(), self.store_settings.clone())
    }
}
