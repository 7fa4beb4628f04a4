//! MicBridge - native side of the recorder shell.
//!
//! Registers the method-channel bridge at startup and exposes microphone
//! permission checks to the webview over it.

pub mod bridge;
pub mod commands;
pub mod permissions;

use bridge::microphone::MicrophonePermissionChannel;
use bridge::BridgeRouter;
use commands::bridge::BridgeState;
use permissions::SystemMicrophone;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "micbridge=debug,tauri=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MicBridge v{}", env!("CARGO_PKG_VERSION"));

    let mut router = BridgeRouter::new();
    router.register(Arc::new(MicrophonePermissionChannel::new(Arc::new(
        SystemMicrophone::new(),
    ))));

    tauri::Builder::default()
        .manage(BridgeState {
            router: Arc::new(router),
        })
        .invoke_handler(tauri::generate_handler![commands::bridge::bridge_invoke])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
