//! User preference flags: theme and interface language.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use tracing::debug;

#[cfg(feature = "serde")]
use crate::error::PreferencesError;
use crate::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    /// Light and dark swap; the system theme toggles to dark.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        })
    }
}

impl FromStr for Theme {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ColorError::ParseError(format!("unknown theme '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Reads a stored language code, falling back to English.
    pub fn from_saved(saved: Option<&str>) -> Self {
        saved.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::En => "en",
            Language::Es => "es",
        })
    }
}

impl FromStr for Language {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(ColorError::ParseError(format!("unknown language '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Preferences {
    pub theme: Theme,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_language"))]
    pub language: Language,
}

impl Preferences {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(feature = "serde")]
impl Preferences {
    /// Loads preferences, returning defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PreferencesError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PreferencesError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "saved preferences");
        Ok(())
    }
}

/// Unknown stored languages fall back to English instead of failing.
#[cfg(feature = "serde")]
fn lenient_language<'de, D>(deserializer: D) -> Result<Language, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let saved: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(Language::from_saved(saved.as_deref()))
}
