//! Battery telemetry parsing and severity classification

use serde_json::Value;

use crate::device::parse::coerce_number;

/// Parsed battery telemetry. Input-only; never stored in panel state.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryInfo {
    /// Charge percentage, clamped to `0..=100`
    pub percent: Option<f64>,
    /// Bus voltage in volts
    pub voltage: Option<f64>,
    /// Draw current in amperes
    pub current: Option<f64>,
    /// Power in watts
    pub power: Option<f64>,
    /// Reported charger status string (`discharging`, `charging`, ...)
    pub status: String,
}

/// Discrete styling tag derived from battery status and percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatterySeverity {
    /// Charger reported a fault
    Error,
    /// Actively charging
    Charging,
    /// Telemetry missing or still initializing
    Unavailable,
    /// At or below 20%
    Low,
    /// At or below 50%
    Medium,
    /// Nominal; rendered without a styling class
    None,
}

impl BatterySeverity {
    /// Styling class name for the indicator, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Error => Some("error"),
            Self::Charging => Some("charging"),
            Self::Unavailable => Some("unavailable"),
            Self::Low => Some("low"),
            Self::Medium => Some("medium"),
            Self::None => None,
        }
    }
}

/// Everything the battery indicator needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryDisplay {
    /// Percent label, `--%` when unknown
    pub label: String,
    /// Proportional fill in `0..=1`, `None` when percent is unknown
    pub fill_ratio: Option<f64>,
    /// Styling severity
    pub severity: BatterySeverity,
    /// Hover text summarizing whichever readings are available
    pub tooltip: String,
}

/// Parse an untrusted battery payload. Returns `None` unless the value is an
/// object; individual fields degrade to `None` independently.
pub fn parse_battery(value: &Value) -> Option<BatteryInfo> {
    let obj = value.as_object()?;
    let field = |name: &str| coerce_number(obj.get(name).unwrap_or(&Value::Null));

    Some(BatteryInfo {
        percent: field("percent").map(|p| p.clamp(0.0, 100.0)),
        voltage: field("voltage"),
        current: field("current"),
        power: field("power"),
        status: obj
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
    })
}

/// Map battery telemetry to its display record.
///
/// Status strings win over percent-based tiers: `error`, `charging`, and
/// `initializing` each short-circuit the classification, then an unknown
/// percent maps to unavailable, and only after that do the low/medium
/// thresholds apply.
pub fn classify(info: Option<&BatteryInfo>) -> BatteryDisplay {
    let info = match info {
        Some(info) => info,
        None => {
            return BatteryDisplay {
                label: "--%".to_string(),
                fill_ratio: None,
                severity: BatterySeverity::Unavailable,
                tooltip: "Battery level unavailable".to_string(),
            }
        }
    };

    let label = match info.percent {
        Some(percent) => format!("{}%", percent.round() as i64),
        None => "--%".to_string(),
    };
    let fill_ratio = info.percent.map(|percent| percent / 100.0);

    let severity = match info.status.as_str() {
        "error" => BatterySeverity::Error,
        "charging" => BatterySeverity::Charging,
        "initializing" => BatterySeverity::Unavailable,
        _ => match info.percent {
            None => BatterySeverity::Unavailable,
            Some(percent) if percent <= 20.0 => BatterySeverity::Low,
            Some(percent) if percent <= 50.0 => BatterySeverity::Medium,
            Some(_) => BatterySeverity::None,
        },
    };

    let mut parts = Vec::new();
    match info.percent {
        Some(percent) => parts.push(format!("Battery: {}%", percent.round() as i64)),
        None => parts.push("Battery level unknown".to_string()),
    }
    if let Some(voltage) = info.voltage {
        parts.push(format!("Voltage: {:.2} V", voltage));
    }
    if let Some(current) = info.current {
        parts.push(format!("Current: {:.1} A", current));
    }
    if let Some(power) = info.power {
        parts.push(format!("Power: {:.0} W", power));
    }

    BatteryDisplay {
        label,
        fill_ratio,
        severity,
        tooltip: parts.join(" · "),
    }
}
