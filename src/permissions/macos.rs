//! macOS microphone permission via AVFoundation.
//!
//! Reads and requests AVCaptureDevice authorization for the audio media
//! type, the same record System Settings shows under Privacy & Security.
//! The app's Info.plist must carry NSMicrophoneUsageDescription or the
//! request call terminates the process.

use super::{MicrophoneHost, PermissionState};
use async_trait::async_trait;
use block2::StackBlock;
use objc2::runtime::Bool;
use objc2::{class, msg_send};
use objc2_foundation::NSString;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::oneshot;

// The AVCaptureDevice class lookup needs AVFoundation linked in.
#[link(name = "AVFoundation", kind = "framework")]
extern "C" {}

/// AVMediaTypeAudio
const MEDIA_TYPE_AUDIO: &str = "soun";

/// AVFoundation-backed microphone permission host.
#[derive(Default)]
pub struct SystemMicrophone;

impl SystemMicrophone {
    pub fn new() -> Self {
        Self
    }

    fn authorization_status() -> isize {
        unsafe {
            let media_type = NSString::from_str(MEDIA_TYPE_AUDIO);
            msg_send![
                class!(AVCaptureDevice),
                authorizationStatusForMediaType: &*media_type
            ]
        }
    }

    /// Convert a raw AVAuthorizationStatus value to our PermissionState
    fn convert_av_authorization_status(status: isize) -> PermissionState {
        match status {
            0 => PermissionState::Undetermined, // AVAuthorizationStatusNotDetermined
            2 => PermissionState::Denied,       // AVAuthorizationStatusDenied
            3 => PermissionState::Granted,      // AVAuthorizationStatusAuthorized
            // Restricted, and whatever future releases add, fails closed.
            _ => PermissionState::Unknown,
        }
    }
}

#[async_trait]
impl MicrophoneHost for SystemMicrophone {
    fn record_permission(&self) -> PermissionState {
        Self::convert_av_authorization_status(Self::authorization_status())
    }

    async fn request_record_permission(&self) -> bool {
        let (tx, rx) = oneshot::channel();
        let tx = Arc::new(Mutex::new(Some(tx)));

        {
            let tx = tx.clone();
            let block = StackBlock::new(move |granted: Bool| {
                if let Some(tx) = tx.lock().take() {
                    let _ = tx.send(granted.as_bool());
                }
            })
            .copy();

            unsafe {
                let media_type = NSString::from_str(MEDIA_TYPE_AUDIO);
                let _: () = msg_send![
                    class!(AVCaptureDevice),
                    requestAccessForMediaType: &*media_type,
                    completionHandler: &*block
                ];
            }
        }

        // The completion handler fires on an AVFoundation-owned queue once
        // the user answers; the prompt has no programmatic dismissal.
        rx.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_av_status_mapping() {
        assert_eq!(
            SystemMicrophone::convert_av_authorization_status(0),
            PermissionState::Undetermined
        );
        assert_eq!(
            SystemMicrophone::convert_av_authorization_status(2),
            PermissionState::Denied
        );
        assert_eq!(
            SystemMicrophone::convert_av_authorization_status(3),
            PermissionState::Granted
        );
        // Restricted (1) and future values fall into the defensive arm.
        assert_eq!(
            SystemMicrophone::convert_av_authorization_status(1),
            PermissionState::Unknown
        );
        assert_eq!(
            SystemMicrophone::convert_av_authorization_status(42),
            PermissionState::Unknown
        );
    }
}
