//! Configuration handling for the TUI

use crate::state::{JobRules, Theme, UiContext};
use anyhow::Result;
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeskConfig {
    /// Color theme
    pub theme: Option<Theme>,
    /// Start with the sidebar collapsed
    pub sidebar_collapsed: Option<bool>,
    /// Minimum job title length
    pub title_min_chars: Option<usize>,
    /// Minimum job description length
    pub description_min_chars: Option<usize>,
    /// Accept pickup dates and bidding deadlines before today
    pub allow_past_dates: Option<bool>,
}

impl DeskConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "freightdesk", "freightdesk-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: DeskConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn ui_context(&self) -> UiContext {
        UiContext {
            theme: self.theme.unwrap_or_default(),
            sidebar_collapsed: self.sidebar_collapsed.unwrap_or(false),
        }
    }

    /// Job validation thresholds, with the date floor at `today` unless disabled
    pub fn job_rules(&self, today: NaiveDate) -> JobRules {
        let defaults = JobRules::default();
        let rules = JobRules {
            title_min_chars: self.title_min_chars.unwrap_or(defaults.title_min_chars),
            description_min_chars: self
                .description_min_chars
                .unwrap_or(defaults.description_min_chars),
            earliest_date: None,
        };
        if self.allow_past_dates.unwrap_or(false) {
            rules
        } else {
            rules.not_before(today)
        }
    }
}
