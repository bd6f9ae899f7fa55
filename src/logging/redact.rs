use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";

pub fn now_iso() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| TS_ZERO.to_string())
}

/// Return a timestamp for facts emission.
/// - deterministic: constant zero timestamp.
/// - otherwise: real, current timestamp in RFC3339.
pub fn ts_for_mode(deterministic: bool) -> String {
    if deterministic {
        TS_ZERO.to_string()
    } else {
        now_iso()
    }
}

/// Apply redactions to a fact for comparison and safe logging.
/// Zeroes timestamps to TS_ZERO and removes fields that vary between runs
/// over the same logical tree (`duration_ms`, host-specific `view` locations).
pub fn redact_event(mut v: Value) -> Value {
    if let Some(obj) = v.as_object_mut() {
        obj.insert("ts".into(), Value::from(TS_ZERO));
        obj.remove("duration_ms");
        obj.remove("view");
    }
    v
}
