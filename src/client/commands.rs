//! Command sender: pushes user intent to the device's control endpoint

use std::sync::Arc;

use log::{debug, error};

use crate::client::transport::Transport;
use crate::device::ControlPayload;
use crate::ui::PanelState;

/// Optional overrides for a control push; anything left `None` falls back to
/// the current panel state.
#[derive(Debug, Clone, Default)]
pub struct CommandOverrides {
    /// Audio output to switch to
    pub audio_device: Option<String>,
    /// Requested volume, not yet clamped
    pub audio_volume: Option<f64>,
}

/// Sends control changes to the device, updating panel state optimistically
pub struct CommandSender {
    transport: Arc<dyn Transport>,
}

impl CommandSender {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build the minimal wire payload and apply the optimistic state write.
    ///
    /// Only fields actually present make it into the payload: the device name
    /// must be non-empty, the volume must be finite and is clamped to
    /// `[0, 100]` and rounded for transmission. Panel state keeps the
    /// clamped, non-rounded value.
    pub fn build_payload(state: &mut PanelState, overrides: &CommandOverrides) -> ControlPayload {
        let mut payload = ControlPayload::default();

        let device = overrides
            .audio_device
            .clone()
            .or_else(|| state.audio_device.clone());
        if let Some(device) = device {
            if !device.is_empty() {
                state.audio_device = Some(device.clone());
                payload.audio_device = Some(device);
            }
        }

        let volume = overrides.audio_volume.or(state.audio_volume);
        if let Some(volume) = volume {
            if volume.is_finite() {
                let clamped = volume.clamp(0.0, 100.0);
                state.audio_volume = Some(clamped);
                payload.audio_volume = Some(clamped.round() as u8);
            }
        }

        payload
    }

    /// Push the current (or overridden) settings to the device.
    ///
    /// The state write happens before the network call and is never rolled
    /// back; a failed push is logged and otherwise ignored.
    pub async fn send(&self, state: &mut PanelState, overrides: CommandOverrides) {
        let payload = Self::build_payload(state, &overrides);
        debug!("pushing control payload: {:?}", payload);

        if let Err(e) = self.transport.send_control(&payload).await {
            error!("control push failed: {}", e);
        }
    }
}
