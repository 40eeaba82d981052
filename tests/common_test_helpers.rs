//! Shared helpers for rigpanel integration tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use rigpanel::{
    ControlPayload, Message, PanelConfig, PanelController, PanelError, Result, StateDoc, Transport,
};

/// Scripted in-memory transport: polls are served from a queue, control
/// pushes are recorded.
#[derive(Default)]
pub struct ScriptedTransport {
    polls: Mutex<VecDeque<std::result::Result<Value, String>>>,
    sent: Mutex<Vec<ControlPayload>>,
    fail_controls: AtomicBool,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a successful poll response
    pub fn queue_ok(&self, doc: Value) {
        self.polls.lock().unwrap().push_back(Ok(doc));
    }

    /// Queue a failing poll
    pub fn queue_err(&self, message: &str) {
        self.polls
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    /// Make every subsequent control push fail
    pub fn fail_controls(&self) {
        self.fail_controls.store(true, Ordering::SeqCst);
    }

    /// Control payloads recorded so far
    pub fn sent_payloads(&self) -> Vec<ControlPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch_state(&self) -> Result<StateDoc> {
        match self.polls.lock().unwrap().pop_front() {
            Some(Ok(value)) => Ok(serde_json::from_value(value)?),
            Some(Err(message)) => Err(PanelError::Other(message)),
            None => Err(PanelError::Other("no scripted poll queued".to_string())),
        }
    }

    async fn send_control(&self, payload: &ControlPayload) -> Result<()> {
        self.sent.lock().unwrap().push(payload.clone());
        if self.fail_controls.load(Ordering::SeqCst) {
            Err(PanelError::Other("scripted control failure".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Controller wired to a scripted transport and a fresh message channel
pub fn make_controller(
    transport: Arc<ScriptedTransport>,
) -> (
    PanelController,
    mpsc::UnboundedSender<Message>,
    mpsc::UnboundedReceiver<Message>,
) {
    make_controller_with_config(transport, PanelConfig::default())
}

pub fn make_controller_with_config(
    transport: Arc<ScriptedTransport>,
    config: PanelConfig,
) -> (
    PanelController,
    mpsc::UnboundedSender<Message>,
    mpsc::UnboundedReceiver<Message>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = PanelController::new(&config, transport, tx.clone());
    (controller, tx, rx)
}

/// A fully populated, well-formed state document
pub fn sample_doc() -> Value {
    json!({
        "audio_device": "hdmi",
        "audio_outputs": [
            {"id": "hdmi", "label": "HDMI"},
            {"id": "headphone", "label": "Headphones"}
        ],
        "audio_volume": {"value": 62.0},
        "battery": {
            "percent": 72,
            "voltage": 12.34,
            "current": 1.5,
            "power": 18.5,
            "status": "discharging"
        },
        "sound": {
            "soundboard_port": 9000,
            "camera_port": {"host": "cam.local", "port": 8080, "path": "stream"}
        }
    })
}
