//! Viewer presentation config: locale and density.
//!
//! DESIGN
//! ======
//! One set of components serves every language/layout combination; the
//! differences live in this config and the copy catalog it selects.
//! Values come from the page query string and fall back to defaults when
//! missing or unrecognized.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::str::FromStr;

use crate::util::copy::{self, Catalog};
use crate::util::logger::AppLogger;

/// Errors from parsing view config values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported locale '{0}' (expected 'en' or 'es')")]
    UnknownLocale(String),

    #[error("unsupported density '{0}' (expected 'compact' or 'rich')")]
    UnknownDensity(String),
}

/// UI language and date-format convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(ConfigError::UnknownLocale(raw.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout density.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Density {
    /// Label and time only; plain bubbles.
    #[default]
    Compact,
    /// Phone subtitles, header card, shadowed bubbles.
    Rich,
}

impl Density {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Rich => "rich",
        }
    }

    #[must_use]
    pub fn is_rich(self) -> bool {
        matches!(self, Self::Rich)
    }
}

impl FromStr for Density {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "rich" => Ok(Self::Rich),
            _ => Err(ConfigError::UnknownDensity(raw.to_owned())),
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation options shared by the shell and both loaders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewerConfig {
    pub locale: Locale,
    pub density: Density,
}

impl ViewerConfig {
    /// Build config from raw `locale` / `density` query values.
    ///
    /// Missing values take the default silently; unrecognized values take
    /// the default and are reported through `logger`.
    pub fn resolve(locale: Option<&str>, density: Option<&str>, logger: &AppLogger) -> Self {
        Self { locale: parse_or_default(locale, logger), density: parse_or_default(density, logger) }
    }

    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        copy::catalog(self.locale)
    }
}

fn parse_or_default<T>(raw: Option<&str>, logger: &AppLogger) -> T
where
    T: FromStr<Err = ConfigError> + Default,
{
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|err: ConfigError| {
        logger.warn(&format!("{err}; using default"));
        T::default()
    })
}
