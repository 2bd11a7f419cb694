//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a tocsin.toml, and if present we load settings from there.
//! This provides sidebar width, wrapping width and scroll step preferences.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from tocsin.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 32)]
    /// Columns reserved for the table-of-contents sidebar.
    pub sidebar_width: usize,
    #[facet(default = 100)]
    /// Maximum line width for content wrapping.
    pub wrap_width: usize,
    #[facet(default = 3)]
    /// Rows the content pane moves per arrow-key press.
    pub scroll_step: usize,
}

impl Config {
    #[must_use]
    /// Load configuration from tocsin.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("tocsin.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
