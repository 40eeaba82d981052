//! Messages driving the controller's event loop

use crate::device::StateDoc;

/// Named events handled by [`crate::controller::PanelController`].
///
/// User-facing controls and the polling machinery all funnel through this one
/// channel, so every state mutation happens on the controller's task.
#[derive(Debug, Clone)]
pub enum Message {
    /// A scheduled poll is due
    PollTick,

    /// A poll resolved with a (possibly malformed) state document
    SnapshotReceived(StateDoc),

    /// User picked an audio output in the selector
    AudioDeviceSelected(String),

    /// User moved the volume control
    VolumeChanged(f64),

    /// The panel became visible (`true`) or hidden (`false`)
    VisibilityChanged(bool),

    /// User clicked the soundboard launcher
    SoundboardClicked,

    /// User clicked the camera launcher
    CameraClicked,

    /// Stop the event loop
    Shutdown,
}
