use serde_json::{Map, Number, Value};

use crate::config::LogLevel;

pub const BANNER_TEXT: &str = "%c<dev/> portfolio";
pub const BANNER_STYLE: &str =
    "color: #00ff88; font-size: 20px; font-weight: bold; font-family: monospace;";
pub const CONTACT_TEXT: &str = "Curious how this page works? Get in touch through the contact section.";

#[derive(Clone, Copy, Debug)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn debug(&self, event: &str, fields: Value) {
        self.log(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: Value) {
        self.log(LogLevel::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: Value) {
        self.log(LogLevel::Warn, event, fields);
    }

    pub fn log(&self, level: LogLevel, event: &str, fields: Value) {
        if let Some(line) = self.format(level, event, fields, now_unix_seconds()) {
            emit(level, &line);
        }
    }

    fn format(&self, level: LogLevel, event: &str, fields: Value, ts: u64) -> Option<String> {
        if level < self.min_level {
            return None;
        }

        let mut payload = Map::new();
        payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
        payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));

        if let Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(Value::Object(payload).to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::info_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

/// Writes the decorative banner to the developer console.
#[cfg(target_arch = "wasm32")]
pub fn print_banner() {
    use wasm_bindgen::JsValue;

    web_sys::console::log_2(&JsValue::from_str(BANNER_TEXT), &JsValue::from_str(BANNER_STYLE));
    web_sys::console::log_1(&JsValue::from_str(CONTACT_TEXT));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_below_min_level_are_dropped() {
        let logger = Logger::new(LogLevel::Info);
        assert!(logger
            .format(LogLevel::Debug, "stat_counter_skipped", json!({}), 1)
            .is_none());
    }

    #[test]
    fn event_line_carries_envelope_and_fields() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .format(
                LogLevel::Warn,
                "behavior_skipped",
                json!({ "behavior": "parallax", "selector": ".bg-gradient" }),
                1_700_000_000,
            )
            .expect("warn passes a debug filter");

        let parsed: Value = serde_json::from_str(&line).expect("line is JSON");
        assert_eq!(parsed["ts"], 1_700_000_000);
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["event"], "behavior_skipped");
        assert_eq!(parsed["behavior"], "parallax");
        assert_eq!(parsed["selector"], ".bg-gradient");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .format(LogLevel::Info, "layer_installed", json!("stray"), 5)
            .expect("info passes");
        let parsed: Value = serde_json::from_str(&line).expect("line is JSON");
        assert_eq!(parsed.as_object().map(|map| map.len()), Some(3));
    }
}
