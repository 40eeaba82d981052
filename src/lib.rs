// Root module exports
pub mod client;
pub mod config;
pub mod controller;
pub mod device;
pub mod errors;
pub mod logging;
pub mod ui;

// Re-export common items for convenience
pub use client::{CommandOverrides, CommandSender, HttpTransport, PollTimer, Transport};
pub use config::PanelConfig;
pub use controller::PanelController;
pub use device::{
    classify, normalize_audio_options, parse_camera_target, parse_port, AudioOption,
    BatteryDisplay, BatteryInfo, BatterySeverity, CameraTarget, ControlPayload, StateDoc,
};
pub use errors::{PanelError, Result};
pub use logging::init_logger;
pub use ui::{Message, PanelState};
