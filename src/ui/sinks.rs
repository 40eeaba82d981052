//! Render sinks: idempotent view-model updaters
//!
//! Each sink holds the last rendered value and reports whether an update
//! actually changed anything visible, so the frontend only touches the screen
//! on real diffs. Sinks never validate — they trust the typed values handed
//! to them by the device layer.

use crate::device::{classify, options_signature, AudioOption, BatteryDisplay, CameraTarget};

/// Width of the battery fill bar at 100%
pub const BATTERY_FILL_WIDTH: f64 = 32.0;

/// Outcome of reconciling the audio selector against a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSyncOutcome {
    /// The option list was rebuilt (signature changed)
    pub rebuilt: bool,
    /// The displayed selection was forced to the remote value
    pub selection_changed: bool,
}

/// View model of the audio output selector
#[derive(Debug)]
pub struct AudioSelectSink {
    options: Vec<AudioOption>,
    signature: String,
    value: String,
    disabled: bool,
}

impl Default for AudioSelectSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSelectSink {
    /// Create the selector in its startup state: empty and disabled
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            signature: String::new(),
            value: String::new(),
            disabled: true,
        }
    }

    /// Reconcile the selector against a freshly sanitized option list and the
    /// remote-selected id.
    ///
    /// The option list is rebuilt only when its signature changed since the
    /// previous cycle; the selection is forced only when it differs from what
    /// is currently displayed. An unchanged poll is therefore a no-op and the
    /// user's in-progress interaction survives it.
    pub fn sync(&mut self, options: &[AudioOption], selected: Option<&str>) -> AudioSyncOutcome {
        let signature = options_signature(options);
        let rebuilt = signature != self.signature;
        if rebuilt {
            self.signature = signature;
            self.options = options.to_vec();
        }

        let target = selected.unwrap_or("");
        let selection_changed = self.value != target;
        if selection_changed {
            self.value = target.to_string();
        }

        self.disabled = options.is_empty();

        AudioSyncOutcome {
            rebuilt,
            selection_changed,
        }
    }

    /// Record a user-driven selection change
    pub fn set_value(&mut self, id: &str) {
        self.value = id.to_string();
    }

    /// Currently displayed selection, `None` when empty
    pub fn value(&self) -> Option<&str> {
        if self.value.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }

    /// Currently rendered options
    pub fn options(&self) -> &[AudioOption] {
        &self.options
    }

    /// Whether the control is disabled (no options available)
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// View model of a launcher control (soundboard or camera).
///
/// The control is hidden, not merely disabled, whenever it has no valid
/// backing URL.
#[derive(Debug, Default)]
pub struct LauncherSink {
    url: Option<String>,
}

impl LauncherSink {
    /// Point the launcher at a new URL (or hide it). Returns whether the
    /// visible state changed.
    pub fn update(&mut self, url: Option<String>) -> bool {
        if self.url == url {
            return false;
        }
        self.url = url;
        true
    }

    /// Whether the control is currently shown
    pub fn is_visible(&self) -> bool {
        self.url.is_some()
    }

    /// Backing URL, when visible
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// View model of the battery indicator
#[derive(Debug)]
pub struct BatteryIndicatorSink {
    display: BatteryDisplay,
}

impl Default for BatteryIndicatorSink {
    fn default() -> Self {
        // Startup state matches a device that has not reported yet
        Self {
            display: classify(None),
        }
    }
}

impl BatteryIndicatorSink {
    /// Apply a freshly classified display record. Returns whether anything
    /// visible changed.
    pub fn apply(&mut self, display: BatteryDisplay) -> bool {
        if self.display == display {
            return false;
        }
        self.display = display;
        true
    }

    /// Currently rendered display record
    pub fn display(&self) -> &BatteryDisplay {
        &self.display
    }

    /// Fill bar width in display units; zero when the level is unknown
    pub fn fill_width(&self) -> f64 {
        self.display
            .fill_ratio
            .map(|ratio| ratio * BATTERY_FILL_WIDTH)
            .unwrap_or(0.0)
    }
}

/// Fixed local-loopback address of the soundboard surface
pub fn soundboard_url(port: u16) -> String {
    format!("http://localhost:{port}")
}

/// Camera stream address, using the panel's own scheme
pub fn camera_url(target: &CameraTarget, secure: bool) -> String {
    let scheme = if secure { "https" } else { "http" };
    format!("{scheme}://{}:{}{}", target.host, target.port, target.path)
}
