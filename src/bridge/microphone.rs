//! Microphone permission channel.
//!
//! Exposes a single method, `checkMicrophonePermission`, that resolves to a
//! boolean: terminal states answer immediately, and an undetermined state
//! walks the user through the one-time system prompt first.

use super::{BridgeError, BridgeResult, ChannelHandler};
use crate::permissions::{MicrophoneHost, PermissionState};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Channel name the webview shell uses for microphone permission calls.
pub const CHANNEL_NAME: &str = "com.example.microphone/permissions";

/// The single method recognized on this channel.
pub const CHECK_MICROPHONE_PERMISSION: &str = "checkMicrophonePermission";

/// Bridge handler for microphone permission checks.
///
/// Holds no state of its own; every call reads the OS-owned permission
/// record through the host seam.
pub struct MicrophonePermissionChannel {
    host: Arc<dyn MicrophoneHost>,
}

impl MicrophonePermissionChannel {
    pub fn new(host: Arc<dyn MicrophoneHost>) -> Self {
        Self { host }
    }

    /// Resolve the current microphone permission to a boolean, prompting
    /// the user once if the OS has not recorded a decision yet.
    async fn check_microphone_permission(&self) -> bool {
        match self.host.record_permission() {
            PermissionState::Granted => true,
            PermissionState::Denied => false,
            PermissionState::Undetermined => {
                tracing::debug!("Microphone permission undetermined, requesting");
                self.host.request_record_permission().await
            }
            // Fail closed on states this build does not know about.
            PermissionState::Unknown => false,
        }
    }
}

#[async_trait]
impl ChannelHandler for MicrophonePermissionChannel {
    fn name(&self) -> &str {
        CHANNEL_NAME
    }

    async fn handle(&self, method: &str) -> BridgeResult {
        match method {
            CHECK_MICROPHONE_PERMISSION => {
                Ok(Value::Bool(self.check_microphone_permission().await))
            }
            other => Err(BridgeError::NotImplemented(other.to_string())),
        }
    }
}
