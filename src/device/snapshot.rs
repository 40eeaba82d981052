//! Wire shapes for the device's state and control endpoints
//!
//! Every field of the state document is optional and untrusted, so the raw
//! shape keeps them as `serde_json::Value` and the typed accessors run the
//! validators from [`crate::device::parse`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::device::battery::{parse_battery, BatteryInfo};
use crate::device::parse::{finite_number, parse_camera_target, parse_port, CameraTarget};

/// Raw state document returned by `GET /api/state`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateDoc {
    /// Currently selected audio output id
    #[serde(default)]
    pub audio_device: Value,

    /// Available audio outputs (`[{id, label}, ...]`)
    #[serde(default)]
    pub audio_outputs: Value,

    /// Current volume (`{value: number}`)
    #[serde(default)]
    pub audio_volume: Value,

    /// Battery telemetry block
    #[serde(default)]
    pub battery: Value,

    /// Auxiliary sound services (`{soundboard_port, camera_port}`)
    #[serde(default)]
    pub sound: Value,
}

impl StateDoc {
    /// Remote-selected audio output id, if it is a string
    pub fn selected_device(&self) -> Option<&str> {
        self.audio_device.as_str()
    }

    /// Volume from `audio_volume.value`, accepted only as a finite number
    pub fn volume(&self) -> Option<f64> {
        finite_number(self.audio_volume.get("value")?)
    }

    /// Parsed battery telemetry, if the block is an object
    pub fn battery_info(&self) -> Option<BatteryInfo> {
        parse_battery(&self.battery)
    }

    /// Validated soundboard port from `sound.soundboard_port`
    pub fn soundboard_port(&self) -> Option<u16> {
        parse_port(self.sound.get("soundboard_port")?)
    }

    /// Validated camera target from `sound.camera_port`
    pub fn camera_target(&self) -> Option<CameraTarget> {
        parse_camera_target(self.sound.get("camera_port")?)
    }
}

/// Minimal body for `POST /api/control`; absent fields are not transmitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ControlPayload {
    /// Audio output to switch to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_device: Option<String>,

    /// Volume, already clamped and rounded for the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_volume: Option<u8>,
}

impl ControlPayload {
    /// Whether the payload carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.audio_device.is_none() && self.audio_volume.is_none()
    }
}
