//! Method-channel bridge between the webview shell and native code.
//!
//! The frontend reaches native capabilities through named channels rather
//! than one Tauri command per capability. Each channel registers a handler
//! with the [`BridgeRouter`] at startup; a request names a channel plus a
//! method on it and resolves asynchronously with a JSON value.

pub mod microphone;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// A single request from the webview: a channel name plus a method name.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodCall {
    pub channel: String,
    pub method: String,
}

/// Errors that cross the bridge back to the webview
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The channel exists but does not recognize the requested method.
    #[error("method not implemented: {0}")]
    NotImplemented(String),

    /// No handler is registered under the requested channel name.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}

/// Result type for bridge method calls
pub type BridgeResult = Result<Value, BridgeError>;

/// A named request handler on the bridge.
///
/// Handlers are registered once at startup and invoked by the host
/// messaging runtime whenever a request arrives for their channel.
#[async_trait]
pub trait ChannelHandler: Send + Sync {
    /// Channel name the handler answers on (e.g. "com.example.microphone/permissions")
    fn name(&self) -> &str;

    /// Handle a single method call on this channel.
    async fn handle(&self, method: &str) -> BridgeResult;
}

/// Routes incoming bridge requests to the handler registered for their channel.
///
/// Built once before the Tauri builder runs and never mutated afterwards,
/// so dispatch needs no locking.
#[derive(Default)]
pub struct BridgeRouter {
    handlers: HashMap<String, Arc<dyn ChannelHandler>>,
}

impl BridgeRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its channel name, replacing any previous one.
    pub fn register(&mut self, handler: Arc<dyn ChannelHandler>) {
        tracing::debug!("Registered bridge channel: {}", handler.name());
        self.handlers.insert(handler.name().to_string(), handler);
    }

    /// Dispatch a method call to the handler registered for its channel.
    pub async fn invoke(&self, call: &MethodCall) -> BridgeResult {
        match self.handlers.get(&call.channel) {
            Some(handler) => handler.handle(&call.method).await,
            None => Err(BridgeError::UnknownChannel(call.channel.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::microphone::{
        MicrophonePermissionChannel, CHANNEL_NAME, CHECK_MICROPHONE_PERMISSION,
    };
    use crate::permissions::testing::FakeMicrophone;
    use crate::permissions::PermissionState;

    fn call(channel: &str, method: &str) -> MethodCall {
        MethodCall {
            channel: channel.to_string(),
            method: method.to_string(),
        }
    }

    #[tokio::test]
    async fn test_unknown_channel_is_rejected() {
        let router = BridgeRouter::new();

        let err = router
            .invoke(&call("com.example.camera/permissions", "anything"))
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::UnknownChannel(_)));
    }

    #[tokio::test]
    async fn test_permission_check_end_to_end() {
        // App startup: the microphone channel is registered on the router.
        let mic = Arc::new(FakeMicrophone::with_prompt_answer(
            PermissionState::Undetermined,
            true,
        ));
        let mut router = BridgeRouter::new();
        router.register(Arc::new(MicrophonePermissionChannel::new(mic.clone())));

        // First check: state is undetermined, the user grants the prompt.
        let first = router
            .invoke(&call(CHANNEL_NAME, CHECK_MICROPHONE_PERMISSION))
            .await
            .unwrap();
        assert_eq!(first, Value::Bool(true));
        assert_eq!(mic.prompt_count(), 1);

        // Second check: state is now granted, no further prompt.
        let second = router
            .invoke(&call(CHANNEL_NAME, CHECK_MICROPHONE_PERMISSION))
            .await
            .unwrap();
        assert_eq!(second, Value::Bool(true));
        assert_eq!(mic.prompt_count(), 1);
    }
}
