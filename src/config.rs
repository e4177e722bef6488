//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! We look for an ascend.toml in the working directory and load settings from
//! it if present. This decides how line expansion treats finished selections,
//! which command the batch mode runs, and how the terminal view scrolls.

use crate::command::Command;
use crate::expand::LinePolicy;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "ascend.toml";

#[derive(Facet, Clone)]
/// User preferences loaded from ascend.toml or falling back to defaults.
pub struct Config {
    #[facet(default = false)]
    /// Let line expansion move on to sections once lines and sections are already selected.
    pub line_policy_section_aware: bool,
    #[facet(default = "smart-expand".to_string())]
    /// Command id run by batch mode when none is given on the command line.
    pub default_command: String,
    #[facet(default = 3)]
    /// Lines kept visible above and below the cursor in the terminal view.
    pub scroll_margin: usize,
}

impl Config {
    #[must_use]
    /// Load configuration from ascend.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is
    /// missing or malformed.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
            log::warn!("ignoring malformed {}", path.display());
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    #[must_use]
    /// Line expansion policy selected by this configuration.
    pub const fn line_policy(&self) -> LinePolicy {
        if self.line_policy_section_aware {
            LinePolicy::SectionAware
        } else {
            LinePolicy::Plain
        }
    }

    #[must_use]
    /// The configured default command, or smart expand if the id is unknown.
    pub fn default_command(&self) -> Command {
        Command::from_id(&self.default_command).unwrap_or(Command::SmartExpand)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
