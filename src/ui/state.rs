//! The single client-state snapshot held between poll cycles

use crate::device::CameraTarget;

/// Flat snapshot of the panel's view of the device.
///
/// One instance exists, owned by the controller; the polling loop overwrites
/// it wholesale on each successful poll and the command sender updates it
/// optimistically ahead of control pushes. No history is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    /// Selected audio output id
    pub audio_device: Option<String>,

    /// Volume in `0..=100`; clamped but not rounded
    pub audio_volume: Option<f64>,

    /// Validated soundboard port
    pub soundboard_port: Option<u16>,

    /// Validated camera target
    pub camera_target: Option<CameraTarget>,
}
