//! Page Configuration
//!
//! Counts, ranges and pacing constants. Defaults reproduce the stock page;
//! a page can override any subset through an embedded JSON block:
//! `<script id="pageConfig" type="application/json">{"unlock_delay_ms": 800}</script>`

use log::Level;
use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::dom;
use crate::models::ParticleSpec;

pub const GAME_HEARTS: usize = 26;
pub const GAME_MARGIN_PCT: f64 = 5.0;
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;
pub const UNLOCK_DELAY_MS: u32 = 500;
pub const CASCADE_COUNT: usize = 6;
pub const CASCADE_BASE_MS: u32 = 200;
pub const CASCADE_STEP_MS: u32 = 200;
pub const REVEAL_MARGIN_PX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub hearts: ParticleSpec,
    pub sparkles: ParticleSpec,
    pub game_hearts: usize,
    pub game_margin_pct: f64,
    pub carousel_interval_ms: u32,
    pub unlock_delay_ms: u32,
    pub cascade_count: usize,
    pub cascade_base_ms: u32,
    pub cascade_step_ms: u32,
    pub reveal_margin_px: f64,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hearts: ParticleSpec::HEARTS,
            sparkles: ParticleSpec::SPARKLES,
            game_hearts: GAME_HEARTS,
            game_margin_pct: GAME_MARGIN_PCT,
            carousel_interval_ms: CAROUSEL_INTERVAL_MS,
            unlock_delay_ms: UNLOCK_DELAY_MS,
            cascade_count: CASCADE_COUNT,
            cascade_base_ms: CASCADE_BASE_MS,
            cascade_step_ms: CASCADE_STEP_MS,
            reveal_margin_px: REVEAL_MARGIN_PX,
            log_level: "info".to_string(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Defaults,
    Embedded,
    Invalid(String),
}

impl PageConfig {
    /// Parse overrides and repair anything out of range
    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: PageConfig = serde_json::from_str(text).map_err(|e| e.to_string())?;
        Ok(config.sanitized())
    }

    /// Read the embedded block if present; fall back to defaults otherwise
    pub fn load(doc: &Document) -> (Self, ConfigSource) {
        let Some(text) = doc.get_element_by_id(dom::CONFIG_ID).and_then(|el| el.text_content()) else {
            return (Self::default(), ConfigSource::Defaults);
        };
        match Self::from_json(&text) {
            Ok(config) => (config, ConfigSource::Embedded),
            Err(e) => (Self::default(), ConfigSource::Invalid(e)),
        }
    }

    fn sanitized(mut self) -> Self {
        if !self.hearts.is_valid() {
            self.hearts = ParticleSpec::HEARTS;
        }
        if !self.sparkles.is_valid() {
            self.sparkles = ParticleSpec::SPARKLES;
        }
        if !self.game_margin_pct.is_finite() {
            self.game_margin_pct = GAME_MARGIN_PCT;
        }
        if !self.reveal_margin_px.is_finite() {
            self.reveal_margin_px = REVEAL_MARGIN_PX;
        }
        self
    }

    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::Info)
    }

    pub fn cascade(&self) -> scroll_reveal::Cascade {
        scroll_reveal::Cascade {
            count: self.cascade_count,
            base_ms: self.cascade_base_ms,
            step_ms: self.cascade_step_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SecondsRange;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(r#"{"unlock_delay_ms": 800, "cascade_count": 3}"#).unwrap();
        assert_eq!(config.unlock_delay_ms, 800);
        assert_eq!(config.cascade_count, 3);
        assert_eq!(config.carousel_interval_ms, 5000);
        assert_eq!(config.hearts, ParticleSpec::HEARTS);
    }

    #[test]
    fn test_invalid_range_falls_back() {
        let config = PageConfig::from_json(
            r#"{"sparkles": {"count": 10, "delay_secs": {"start": 4.0, "end": 1.0}, "duration_secs": {"start": 2.0, "end": 5.0}}}"#,
        )
        .unwrap();
        assert_eq!(config.sparkles, ParticleSpec::SPARKLES);
    }

    #[test]
    fn test_custom_spec_kept() {
        let config = PageConfig::from_json(
            r#"{"hearts": {"count": 20, "delay_secs": {"start": 0.0, "end": 2.0}, "duration_secs": {"start": 4.0, "end": 6.0}}}"#,
        )
        .unwrap();
        assert_eq!(config.hearts.count, 20);
        assert_eq!(config.hearts.duration_secs, SecondsRange::new(4.0, 6.0));
    }

    #[test]
    fn test_malformed_json() {
        assert!(PageConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = PageConfig::default();
        assert_eq!(config.level(), Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level(), Level::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level(), Level::Info);
    }

    #[test]
    fn test_default_cascade() {
        let cascade = PageConfig::default().cascade();
        assert_eq!(cascade.schedule(26)[5], (5, 1200));
    }
}
