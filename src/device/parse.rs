//! Validators for untrusted remote fields
//!
//! Every function here takes a raw `serde_json::Value` straight off the wire
//! and returns a typed, range-checked value or `None`. Nothing in this module
//! panics or returns an error; malformed input simply yields `None`.

use serde_json::Value;
use url::Url;

/// A fully validated camera stream locator.
///
/// Construction is all-or-nothing: if the host or port fails validation, no
/// `CameraTarget` is produced at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraTarget {
    /// Bare hostname, already normalized
    pub host: String,
    /// Port in `1..=65535`
    pub port: u16,
    /// Empty, or a path beginning with `/`
    pub path: String,
    /// Canonical `host:port[path]` form for display and comparison
    pub raw: String,
}

/// Parse a port from a JSON number or decimal string.
///
/// Only exact integers in `[1, 65535]` pass; floats with a fractional part,
/// out-of-range values, blank strings, and non-numeric input all yield `None`.
pub fn parse_port(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return port_in_range(i);
            }
            // Floats carrying an exact integral value still count
            let f = n.as_f64()?;
            if f.is_finite() && f.fract() == 0.0 {
                return port_in_range(f as i64);
            }
            None
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<i64>().ok().and_then(port_in_range)
        }
        _ => None,
    }
}

fn port_in_range(value: i64) -> Option<u16> {
    if (1..=65535).contains(&value) {
        Some(value as u16)
    } else {
        None
    }
}

/// Normalize a host field into a bare hostname.
///
/// Accepts strings with or without a scheme; a default `http://` is prepended
/// before parsing so `rig.local` and `http://rig.local/` both resolve to
/// `rig.local`. Any parse failure yields `None`.
pub fn normalize_hostname(value: &Value) -> Option<String> {
    let raw = value.as_str()?.trim();
    if raw.is_empty() {
        return None;
    }
    let candidate = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    let parsed = Url::parse(&candidate).ok()?;
    parsed.host_str().map(str::to_owned)
}

/// Parse a `{host, port, path}` object into a [`CameraTarget`].
///
/// The host runs through [`normalize_hostname`] and the port through
/// [`parse_port`]; the path is trimmed and prefixed with `/` when non-empty.
/// A failing host or port invalidates the whole target — the path is never
/// defaulted around a missing half.
pub fn parse_camera_target(value: &Value) -> Option<CameraTarget> {
    let obj = value.as_object()?;

    let host = normalize_hostname(obj.get("host").unwrap_or(&Value::Null))?;
    let port = parse_port(obj.get("port").unwrap_or(&Value::Null))?;

    let path = match obj.get("path").and_then(Value::as_str) {
        Some(p) => {
            let trimmed = p.trim();
            if trimmed.is_empty() {
                String::new()
            } else if trimmed.starts_with('/') {
                trimmed.to_string()
            } else {
                format!("/{trimmed}")
            }
        }
        None => String::new(),
    };

    let raw = format!("{host}:{port}{path}");
    Some(CameraTarget {
        host,
        port,
        path,
        raw,
    })
}

/// Extract a finite number from a JSON number. Strings are not coerced.
pub fn finite_number(value: &Value) -> Option<f64> {
    let f = value.as_f64()?;
    f.is_finite().then_some(f)
}

/// Extract a finite number from a JSON number or numeric string.
///
/// Telemetry fields historically arrive as either, so both are accepted here;
/// anything else yields `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(_) => finite_number(value),
        Value::String(s) => {
            let f = s.trim().parse::<f64>().ok()?;
            f.is_finite().then_some(f)
        }
        _ => None,
    }
}
