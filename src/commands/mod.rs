//! Tauri command handlers
//!
//! This module contains the IPC entry points that can be called from the
//! frontend via Tauri's invoke system.

pub mod bridge;
