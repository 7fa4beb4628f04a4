//! Bridge dispatch command

use crate::bridge::{BridgeRouter, MethodCall};
use std::sync::Arc;
use tauri::State;

/// Application state holding the channel router
pub struct BridgeState {
    pub router: Arc<BridgeRouter>,
}

/// Forward a method call from the webview to the named bridge channel
#[tauri::command]
pub async fn bridge_invoke(
    state: State<'_, BridgeState>,
    call: MethodCall,
) -> Result<serde_json::Value, String> {
    state.router.invoke(&call).await.map_err(|e| e.to_string())
}
