//! Validator properties: port parsing, hostname normalization, camera targets

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use rigpanel::device::parse::{normalize_hostname, parse_camera_target, parse_port};
use rigpanel::CameraTarget;

#[test]
fn test_port_parser_accepts_exact_integers_across_range() {
    for port in [1u16, 2, 80, 443, 1500, 8080, 32768, 65534, 65535] {
        assert_eq!(parse_port(&json!(port)), Some(port), "number {port}");
        assert_eq!(
            parse_port(&json!(port.to_string())),
            Some(port),
            "string {port}"
        );
    }
}

#[test]
fn test_port_parser_rejects_out_of_range_and_garbage() {
    assert_eq!(parse_port(&json!(0)), None);
    assert_eq!(parse_port(&json!(65536)), None);
    assert_eq!(parse_port(&json!("0")), None);
    assert_eq!(parse_port(&json!("65536")), None);
    assert_eq!(parse_port(&json!("abc")), None);
    assert_eq!(parse_port(&json!("")), None);
    assert_eq!(parse_port(&Value::Null), None);
    assert_eq!(parse_port(&json!({})), None);
}

#[test]
fn test_port_parser_never_rounds() {
    assert_eq!(parse_port(&json!(8080.5)), None);
    assert_eq!(parse_port(&json!(1.0)), Some(1));
}

#[test]
fn test_hostname_normalizer_strips_scheme_and_trims() {
    assert_eq!(
        normalize_hostname(&json!("cam.local")),
        Some("cam.local".to_string())
    );
    assert_eq!(
        normalize_hostname(&json!("https://cam.local:444/x")),
        Some("cam.local".to_string())
    );
    assert_eq!(
        normalize_hostname(&json!(" 10.0.0.7 ")),
        Some("10.0.0.7".to_string())
    );
    assert_eq!(normalize_hostname(&json!("")), None);
    assert_eq!(normalize_hostname(&json!(8080)), None);
}

#[test]
fn test_camera_target_happy_path() {
    let target =
        parse_camera_target(&json!({"host": "cam.local", "port": 8080, "path": "stream"}));
    assert_eq!(
        target,
        Some(CameraTarget {
            host: "cam.local".to_string(),
            port: 8080,
            path: "/stream".to_string(),
            raw: "cam.local:8080/stream".to_string(),
        })
    );
}

#[test]
fn test_camera_target_accepts_string_port_and_slashed_path() {
    let target =
        parse_camera_target(&json!({"host": "cam.local", "port": "8080", "path": "/live"}))
            .unwrap();
    assert_eq!(target.port, 8080);
    assert_eq!(target.path, "/live");
    assert_eq!(target.raw, "cam.local:8080/live");
}

#[test]
fn test_camera_target_validation_is_atomic() {
    // A bad host or port invalidates the whole target even when the other
    // half is fine.
    assert_eq!(parse_camera_target(&json!({"host": "", "port": 8080})), None);
    assert_eq!(
        parse_camera_target(&json!({"host": "cam.local", "port": "not-a-port"})),
        None
    );
    assert_eq!(
        parse_camera_target(&json!({"host": "cam.local", "port": 0, "path": "/x"})),
        None
    );
}

#[test]
fn test_camera_target_without_path() {
    let target = parse_camera_target(&json!({"host": "cam.local", "port": 8080})).unwrap();
    assert_eq!(target.path, "");
    assert_eq!(target.raw, "cam.local:8080");

    let blank =
        parse_camera_target(&json!({"host": "cam.local", "port": 8080, "path": "   "})).unwrap();
    assert_eq!(blank.path, "");
}
