//! Tunable parameters for an explorer session.

use crate::error::{ExplorerError, Result};
use crate::escape::{EscapeParams, EscapeStart};
use crate::geometry::Rectangle;
use crate::viewport::HistoryOverflow;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub initial_viewport: Rectangle,
    pub max_iterations: u32,
    pub escape_bounds: Rectangle,
    pub escape_start: EscapeStart,
    pub history_cap: usize,
    pub history_overflow: HistoryOverflow,
    pub window_width: u32,
    pub window_height: u32,
    /// Two secondary clicks closer than this count as a double click.
    pub double_click_ms: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            initial_viewport: Rectangle::new(-2.0, 2.0, -1.5, 1.5),
            max_iterations: 255,
            escape_bounds: Rectangle::new(-100.0, 100.0, -100.0, 100.0),
            escape_start: EscapeStart::Origin,
            history_cap: 1000,
            history_overflow: HistoryOverflow::DropNewest,
            window_width: 800,
            window_height: 600,
            double_click_ms: 400,
        }
    }
}

impl ExplorerConfig {
    /// Read a JSON config. Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_viewport.is_valid() {
            return Err(ExplorerError::InvalidConfig(format!(
                "initial_viewport must satisfy left < right and bottom < top, got {:?}",
                self.initial_viewport
            )));
        }
        if !self.escape_bounds.is_valid() {
            return Err(ExplorerError::InvalidConfig(format!(
                "escape_bounds must satisfy left < right and bottom < top, got {:?}",
                self.escape_bounds
            )));
        }
        if self.max_iterations == 0 {
            return Err(ExplorerError::InvalidConfig("max_iterations must be positive".into()));
        }
        if self.history_cap == 0 {
            return Err(ExplorerError::InvalidConfig("history_cap must be positive".into()));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ExplorerError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    pub fn escape_params(&self) -> EscapeParams {
        EscapeParams {
            max_iterations: self.max_iterations,
            bounds: self.escape_bounds,
            start: self.escape_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.initial_viewport, Rectangle::new(-2.0, 2.0, -1.5, 1.5));
        assert_eq!(config.max_iterations, 255);
        assert_eq!(config.escape_bounds, Rectangle::new(-100.0, 100.0, -100.0, 100.0));
        assert_eq!(config.history_cap, 1000);
        assert_eq!((config.window_width, config.window_height), (800, 600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let text = r#"{
            "max_iterations": 1000,
            "escape_start": "point",
            "history_overflow": "evict_oldest"
        }"#;
        let config = ExplorerConfig::from_json(text).unwrap();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.escape_start, EscapeStart::Point);
        assert_eq!(config.history_overflow, HistoryOverflow::EvictOldest);
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad = [
            r#"{ "max_iterations": 0 }"#,
            r#"{ "history_cap": 0 }"#,
            r#"{ "window_width": 0 }"#,
            r#"{ "initial_viewport": { "left": 1.0, "right": -1.0, "bottom": -1.0, "top": 1.0 } }"#,
            r#"{ "escape_bounds": { "left": -1.0, "right": 1.0, "bottom": 1.0, "top": 1.0 } }"#,
        ];
        for text in bad {
            assert!(
                matches!(ExplorerConfig::from_json(text), Err(ExplorerError::InvalidConfig(_))),
                "{text}"
            );
        }
        assert!(matches!(ExplorerConfig::from_json("{ nope"), Err(ExplorerError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("explorer.json");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"{{ "window_width": 1024, "window_height": 768 }}"#).unwrap();
        drop(file);

        let config = ExplorerConfig::load(&path).unwrap();
        assert_eq!((config.window_width, config.window_height), (1024, 768));
        assert_eq!(config.max_iterations, 255);

        let missing = ExplorerConfig::load(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ExplorerError::Io(_))));
    }

    #[test]
    fn test_escape_params_follow_config() {
        let config = ExplorerConfig {
            max_iterations: 42,
            ..ExplorerConfig::default()
        };
        let params = config.escape_params();
        assert_eq!(params.max_iterations, 42);
        assert_eq!(params.bounds, config.escape_bounds);
        assert_eq!(params.start, EscapeStart::Origin);
    }
}
