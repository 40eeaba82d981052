//! View-model layer: panel state, UI messages, and render sinks

pub mod message;
pub mod sinks;
pub mod state;

pub use message::Message;
pub use sinks::{
    camera_url, soundboard_url, AudioSelectSink, AudioSyncOutcome, BatteryIndicatorSink,
    LauncherSink, BATTERY_FILL_WIDTH,
};
pub use state::PanelState;
