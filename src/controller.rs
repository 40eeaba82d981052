//! Panel controller: owns the client state and runs the event loop
//!
//! All mutation of [`PanelState`] and the render sinks happens here, on one
//! task, in response to [`Message`]s. Poll fetches run in spawned tasks and
//! report back over the same channel, so overlapping polls are possible and
//! whichever response settles last wins — there is deliberately no sequence
//! check between them, matching the device's established behavior.

use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::mpsc;

use crate::client::{CommandOverrides, CommandSender, PollTimer, Transport};
use crate::config::PanelConfig;
use crate::device::{classify, normalize_audio_options, StateDoc};
use crate::ui::sinks::{camera_url, soundboard_url};
use crate::ui::{AudioSelectSink, BatteryIndicatorSink, LauncherSink, Message, PanelState};

/// Owns panel state, render sinks, and the polling lifecycle
pub struct PanelController {
    state: PanelState,
    audio: AudioSelectSink,
    battery: BatteryIndicatorSink,
    soundboard: LauncherSink,
    camera: LauncherSink,
    commands: CommandSender,
    transport: Arc<dyn Transport>,
    poll_timer: PollTimer,
    tx: mpsc::UnboundedSender<Message>,
    secure_page: bool,
}

impl PanelController {
    /// Create a controller wired to the given transport and message channel
    pub fn new(
        config: &PanelConfig,
        transport: Arc<dyn Transport>,
        tx: mpsc::UnboundedSender<Message>,
    ) -> Self {
        Self {
            state: PanelState::default(),
            audio: AudioSelectSink::new(),
            battery: BatteryIndicatorSink::default(),
            soundboard: LauncherSink::default(),
            camera: LauncherSink::default(),
            commands: CommandSender::new(Arc::clone(&transport)),
            transport,
            poll_timer: PollTimer::new(config.poll_interval, tx.clone()),
            tx,
            secure_page: config.is_secure(),
        }
    }

    /// Run the event loop until [`Message::Shutdown`] or channel closure.
    /// Polling starts immediately.
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Message>) {
        self.poll_timer.start(true);

        while let Some(message) = rx.recv().await {
            if !self.handle_message(message).await {
                break;
            }
        }

        self.poll_timer.stop();
        info!("controller event loop stopped");
    }

    /// Handle one message. Returns `false` when the loop should exit.
    pub async fn handle_message(&mut self, message: Message) -> bool {
        match message {
            Message::PollTick => self.spawn_poll(),
            Message::SnapshotReceived(doc) => self.apply_snapshot(doc),
            Message::AudioDeviceSelected(id) => {
                self.audio.set_value(&id);
                self.state.audio_device = if id.is_empty() { None } else { Some(id) };
                if self.state.audio_device.is_some() {
                    let overrides = CommandOverrides {
                        audio_device: self.state.audio_device.clone(),
                        audio_volume: None,
                    };
                    self.commands.send(&mut self.state, overrides).await;
                }
            }
            Message::VolumeChanged(volume) => {
                let overrides = CommandOverrides {
                    audio_device: None,
                    audio_volume: Some(volume),
                };
                self.commands.send(&mut self.state, overrides).await;
            }
            Message::VisibilityChanged(visible) => self.set_visibility(visible),
            Message::SoundboardClicked => {
                if let Some(url) = self.soundboard.url() {
                    info!("opening soundboard at {}", url);
                }
            }
            Message::CameraClicked => {
                if let Some(url) = self.camera.url() {
                    info!("opening camera stream at {}", url);
                }
            }
            Message::Shutdown => return false,
        }
        true
    }

    /// Spawn one poll. The fetch runs off the event loop so a slow device
    /// never blocks user interaction; its result comes back as a
    /// [`Message::SnapshotReceived`]. Failures are logged and swallowed — the
    /// next tick retries with no backoff.
    fn spawn_poll(&self) {
        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match transport.fetch_state().await {
                Ok(doc) => {
                    let _ = tx.send(Message::SnapshotReceived(doc));
                }
                Err(e) => error!("poll failed: {}", e),
            }
        });
    }

    /// Apply one successful poll: validate, classify, then render, strictly
    /// in that order. Soundboard port and camera target are recomputed
    /// wholesale — prior values never bleed into the new cycle.
    pub fn apply_snapshot(&mut self, doc: StateDoc) {
        // Validate
        let options = normalize_audio_options(&doc.audio_outputs);
        let selected = doc.selected_device().map(str::to_owned);
        let volume = doc.volume();
        let battery = doc.battery_info();
        let port = doc.soundboard_port();
        let camera = doc.camera_target();

        // Classify
        let display = classify(battery.as_ref());

        // Render
        let outcome = self.audio.sync(&options, selected.as_deref());
        if outcome.rebuilt {
            debug!("audio option list rebuilt ({} entries)", options.len());
        }
        self.state.audio_device = self.audio.value().map(str::to_owned);
        self.state.audio_volume = volume;

        if self.battery.apply(display) {
            debug!(
                "battery indicator updated: {}",
                self.battery.display().label
            );
        }

        self.state.soundboard_port = port;
        self.state.camera_target = camera.clone();
        self.soundboard.update(port.map(soundboard_url));
        self.camera
            .update(camera.map(|target| camera_url(&target, self.secure_page)));
    }

    /// Suspend or resume polling on a visibility transition. Resuming fires
    /// an immediate poll; suspending only cancels the timer, never an
    /// in-flight request.
    fn set_visibility(&mut self, visible: bool) {
        if visible {
            info!("panel visible, resuming polls");
            self.poll_timer.start(true);
        } else {
            info!("panel hidden, suspending polls");
            self.poll_timer.stop();
        }
    }

    /// Current panel state snapshot
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Audio selector view model
    pub fn audio_sink(&self) -> &AudioSelectSink {
        &self.audio
    }

    /// Battery indicator view model
    pub fn battery_sink(&self) -> &BatteryIndicatorSink {
        &self.battery
    }

    /// Soundboard launcher view model
    pub fn soundboard_sink(&self) -> &LauncherSink {
        &self.soundboard
    }

    /// Camera launcher view model
    pub fn camera_sink(&self) -> &LauncherSink {
        &self.camera
    }

    /// Whether the recurring poll timer is active
    pub fn is_polling(&self) -> bool {
        self.poll_timer.is_running()
    }
}
