//! Microphone permission fallback for platforms without a prompt-based model.
//!
//! Windows and Linux gate microphone access at the device level rather than
//! through per-app prompts, so the closest available signal is whether an
//! input device is reachable through cpal.

use super::{MicrophoneHost, PermissionState};
use async_trait::async_trait;
use cpal::traits::HostTrait;

/// Device-probe microphone permission host.
#[derive(Default)]
pub struct SystemMicrophone;

impl SystemMicrophone {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MicrophoneHost for SystemMicrophone {
    fn record_permission(&self) -> PermissionState {
        match cpal::default_host().default_input_device() {
            Some(_) => PermissionState::Granted,
            None => PermissionState::Denied,
        }
    }

    async fn request_record_permission(&self) -> bool {
        // No system prompt to show; report the device probe directly.
        self.record_permission() == PermissionState::Granted
    }
}
