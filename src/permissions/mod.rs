//! Microphone permission access, with a platform-specific backend per OS.
//!
//! The permission record is owned by the operating system; this module only
//! reads it and, while it is still undetermined, triggers the one-shot
//! system prompt that lets the user decide.

use async_trait::async_trait;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(not(target_os = "macos"))]
mod stub;

// Re-export the platform-specific backend
#[cfg(target_os = "macos")]
pub use macos::SystemMicrophone;

#[cfg(not(target_os = "macos"))]
pub use stub::SystemMicrophone;

/// Microphone recording permission as recorded by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// The user has allowed recording.
    Granted,
    /// The user has refused recording.
    Denied,
    /// The user has never been asked; a request will show the system prompt.
    Undetermined,
    /// A status value this build does not know about. Treated as not
    /// permitted wherever the state is consumed.
    Unknown,
}

/// Native access to the OS microphone permission subsystem.
///
/// Implementations never store permission state themselves; every call
/// reads the OS-owned record, and only the user's response to the system
/// prompt can change it.
#[async_trait]
pub trait MicrophoneHost: Send + Sync {
    /// Current recording permission, read without prompting.
    fn record_permission(&self) -> PermissionState;

    /// Show the system permission prompt and wait for the user's answer.
    ///
    /// The OS shows the dialog at most once per install; afterwards it
    /// resolves immediately with the recorded decision. There is no
    /// timeout, the call waits for the user.
    async fn request_record_permission(&self) -> bool;
}
