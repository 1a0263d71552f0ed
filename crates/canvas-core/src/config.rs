//! Per-instance options, usually handed over from the host page as JSON.
//!
//! Every field is optional; missing ones fall back to the variant's tuning in
//! `constants.rs`.

use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::error::{CanvasError, Result};
use crate::glitch::GlitchConfig;
use crate::scenes::Variant;
use crate::spring::SpringConfig;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    pub variant: Variant,
    /// Fixed seed for reproducible layouts; entropy when absent.
    pub seed: Option<u64>,
    /// Pointer spring override.
    pub spring: Option<SpringConfig>,
    /// Square pixels per particle (particle and network variants).
    pub density: Option<f64>,
    pub resize_debounce_ms: f64,
    /// Enables the glitch jitter when present.
    pub glitch: Option<GlitchConfig>,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seed: None,
            spring: None,
            density: None,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            glitch: None,
            log_level: "info".to_string(),
        }
    }
}

impl CanvasConfig {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Parse and validate. An empty or whitespace-only string yields the
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: CanvasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(d) = self.density {
            if !(d.is_finite() && d > 0.0) {
                return Err(CanvasError::InvalidSetting {
                    field: "density",
                    reason: format!("must be a positive number, got {d}"),
                });
            }
        }
        if !(self.resize_debounce_ms.is_finite() && self.resize_debounce_ms >= 0.0) {
            return Err(CanvasError::InvalidSetting {
                field: "resizeDebounceMs",
                reason: format!("must be non-negative, got {}", self.resize_debounce_ms),
            });
        }
        if let Some(g) = &self.glitch {
            if !(0.0..=1.0).contains(&g.probability) {
                return Err(CanvasError::InvalidSetting {
                    field: "glitch.probability",
                    reason: format!("must be within [0, 1], got {}", g.probability),
                });
            }
            if g.interval_ms == 0 {
                return Err(CanvasError::InvalidSetting {
                    field: "glitch.intervalMs",
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Pointer spring for this instance.
    pub fn spring(&self) -> SpringConfig {
        self.spring
            .unwrap_or_else(|| self.variant.default_spring())
    }

    /// Parsed log level, `Info` when unrecognized.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(CanvasConfig::from_json("  ").unwrap(), CanvasConfig::default());
    }

    #[test]
    fn unparsable_level_falls_back_to_info() {
        let cfg = CanvasConfig {
            log_level: "chatty".into(),
            ..CanvasConfig::default()
        };
        assert_eq!(cfg.log_level(), log::Level::Info);
    }
}
