//! Typed views over the rig's untrusted remote state

pub mod audio;
pub mod battery;
pub mod parse;
pub mod snapshot;

pub use audio::{normalize_audio_options, options_signature, AudioOption};
pub use battery::{classify, parse_battery, BatteryDisplay, BatteryInfo, BatterySeverity};
pub use parse::{normalize_hostname, parse_camera_target, parse_port, CameraTarget};
pub use snapshot::{ControlPayload, StateDoc};
