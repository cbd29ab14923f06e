use serde::Deserialize;
use std::cmp::Ordering;

use crate::error::LayerError;

pub const CONFIG_ELEMENT_ID: &str = "interaction-config";

pub const DEFAULT_FOLLOWER_SMOOTHING: f64 = 0.1;
pub const DEFAULT_CURSOR_HALF_SIZE: f64 = 10.0;
pub const DEFAULT_FOLLOWER_HALF_SIZE: f64 = 20.0;
pub const DEFAULT_HOVER_SCALE: f64 = 1.5;
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.5;
pub const DEFAULT_NAV_SCROLL_THRESHOLD: f64 = 100.0;
pub const DEFAULT_NAV_SECTION_OFFSET: f64 = 100.0;
pub const DEFAULT_COUNTER_TICK_MS: u32 = 30;
pub const DEFAULT_COUNTER_STEPS: u32 = 25;
pub const DEFAULT_CARD_STAGGER_MS: u32 = 150;
pub const DEFAULT_SHOW_MORE_SCROLL_DELAY_MS: u32 = 300;
pub const DEFAULT_SHOW_MORE_SCROLL_OFFSET: f64 = 100.0;
pub const DEFAULT_FADE_IN_DELAY_MS: u32 = 100;
pub const DEFAULT_SHOW_MORE_LABEL: &str = "Voir Plus";
pub const DEFAULT_SHOW_LESS_LABEL: &str = "Voir Moins";
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const FOLLOWER_SMOOTHING_BOUNDS: (f64, f64) = (0.01, 1.0);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 2.0);
const NAV_SCROLL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const NAV_SECTION_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const COUNTER_TICK_MS_BOUNDS: (u32, u32) = (10, 1_000);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 500);
const CARD_STAGGER_MS_BOUNDS: (u32, u32) = (0, 2_000);
const SHOW_MORE_SCROLL_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);
const SHOW_MORE_SCROLL_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const FADE_IN_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Tunables for every behavior on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub follower_smoothing: f64,
    pub cursor_half_size: f64,
    pub follower_half_size: f64,
    pub hover_scale: f64,
    pub parallax_factor: f64,
    pub nav_scroll_threshold: f64,
    pub nav_section_offset: f64,
    pub counter_tick_ms: u32,
    pub counter_steps: u32,
    pub card_stagger_ms: u32,
    pub show_more_scroll_delay_ms: u32,
    pub show_more_scroll_offset: f64,
    pub fade_in_delay_ms: u32,
    pub show_more_label: String,
    pub show_less_label: String,
    pub log_level: LogLevel,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            follower_smoothing: DEFAULT_FOLLOWER_SMOOTHING,
            cursor_half_size: DEFAULT_CURSOR_HALF_SIZE,
            follower_half_size: DEFAULT_FOLLOWER_HALF_SIZE,
            hover_scale: DEFAULT_HOVER_SCALE,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            nav_scroll_threshold: DEFAULT_NAV_SCROLL_THRESHOLD,
            nav_section_offset: DEFAULT_NAV_SECTION_OFFSET,
            counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
            counter_steps: DEFAULT_COUNTER_STEPS,
            card_stagger_ms: DEFAULT_CARD_STAGGER_MS,
            show_more_scroll_delay_ms: DEFAULT_SHOW_MORE_SCROLL_DELAY_MS,
            show_more_scroll_offset: DEFAULT_SHOW_MORE_SCROLL_OFFSET,
            fade_in_delay_ms: DEFAULT_FADE_IN_DELAY_MS,
            show_more_label: DEFAULT_SHOW_MORE_LABEL.to_string(),
            show_less_label: DEFAULT_SHOW_LESS_LABEL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigOverrides {
    follower_smoothing: Option<f64>,
    parallax_factor: Option<f64>,
    nav_scroll_threshold: Option<f64>,
    nav_section_offset: Option<f64>,
    counter_tick_ms: Option<u32>,
    counter_steps: Option<u32>,
    card_stagger_ms: Option<u32>,
    show_more_scroll_delay_ms: Option<u32>,
    show_more_scroll_offset: Option<f64>,
    fade_in_delay_ms: Option<u32>,
    show_more_label: Option<String>,
    show_less_label: Option<String>,
    log_level: Option<String>,
}

impl InteractionConfig {
    pub fn from_json(raw: &str) -> Result<Self, LayerError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let overrides: ConfigOverrides = serde_json::from_str(raw)?;
        Ok(Self::default().with_overrides(overrides))
    }

    fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            follower_smoothing: bounded_f64(
                overrides.follower_smoothing,
                self.follower_smoothing,
                FOLLOWER_SMOOTHING_BOUNDS,
            ),
            parallax_factor: bounded_f64(
                overrides.parallax_factor,
                self.parallax_factor,
                PARALLAX_FACTOR_BOUNDS,
            ),
            nav_scroll_threshold: bounded_f64(
                overrides.nav_scroll_threshold,
                self.nav_scroll_threshold,
                NAV_SCROLL_THRESHOLD_BOUNDS,
            ),
            nav_section_offset: bounded_f64(
                overrides.nav_section_offset,
                self.nav_section_offset,
                NAV_SECTION_OFFSET_BOUNDS,
            ),
            counter_tick_ms: bounded_u32(
                overrides.counter_tick_ms,
                self.counter_tick_ms,
                COUNTER_TICK_MS_BOUNDS,
            ),
            counter_steps: bounded_u32(
                overrides.counter_steps,
                self.counter_steps,
                COUNTER_STEPS_BOUNDS,
            ),
            card_stagger_ms: bounded_u32(
                overrides.card_stagger_ms,
                self.card_stagger_ms,
                CARD_STAGGER_MS_BOUNDS,
            ),
            show_more_scroll_delay_ms: bounded_u32(
                overrides.show_more_scroll_delay_ms,
                self.show_more_scroll_delay_ms,
                SHOW_MORE_SCROLL_DELAY_MS_BOUNDS,
            ),
            show_more_scroll_offset: bounded_f64(
                overrides.show_more_scroll_offset,
                self.show_more_scroll_offset,
                SHOW_MORE_SCROLL_OFFSET_BOUNDS,
            ),
            fade_in_delay_ms: bounded_u32(
                overrides.fade_in_delay_ms,
                self.fade_in_delay_ms,
                FADE_IN_DELAY_MS_BOUNDS,
            ),
            show_more_label: non_empty(overrides.show_more_label).unwrap_or(self.show_more_label),
            show_less_label: non_empty(overrides.show_less_label).unwrap_or(self.show_less_label),
            log_level: overrides
                .log_level
                .as_deref()
                .and_then(LogLevel::parse)
                .unwrap_or(self.log_level),
            ..self
        }
    }
}

fn bounded_f64(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn bounded_u32(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_yields_defaults() {
        let config = InteractionConfig::from_json("   ").expect("blank is accepted");
        assert_eq!(config, InteractionConfig::default());
    }

    #[test]
    fn overrides_apply_per_key() {
        let config = InteractionConfig::from_json(
            r#"{"followerSmoothing": 0.25, "showMoreLabel": "Show more", "logLevel": "DEBUG"}"#,
        )
        .expect("valid JSON");

        assert_eq!(config.follower_smoothing, 0.25);
        assert_eq!(config.show_more_label, "Show more");
        assert_eq!(config.show_less_label, DEFAULT_SHOW_LESS_LABEL);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.counter_tick_ms, DEFAULT_COUNTER_TICK_MS);
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = InteractionConfig::from_json(
            r#"{"followerSmoothing": 4.0, "counterSteps": 0, "cardStaggerMs": 150000, "showLessLabel": "  "}"#,
        )
        .expect("valid JSON");

        assert_eq!(config.follower_smoothing, DEFAULT_FOLLOWER_SMOOTHING);
        assert_eq!(config.counter_steps, DEFAULT_COUNTER_STEPS);
        assert_eq!(config.card_stagger_ms, DEFAULT_CARD_STAGGER_MS);
        assert_eq!(config.show_less_label, DEFAULT_SHOW_LESS_LABEL);
    }

    #[test]
    fn unknown_log_level_keeps_default() {
        let config = InteractionConfig::from_json(r#"{"logLevel": "trace"}"#).expect("valid JSON");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = InteractionConfig::from_json("{followerSmoothing: }");
        assert!(matches!(result, Err(LayerError::Config(_))));
    }

    #[test]
    fn log_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }
}
