use crate::log::{LogLevel, Logger};
use serde_json::json;
use std::fmt;

pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only the literal `"dark"` selects the dark theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }

    pub fn shows_rain(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    Unavailable,
    Rejected(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("storage unavailable"),
            Self::Rejected(reason) => write!(f, "storage rejected the operation: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Synchronous string key-value persistence.
pub trait ThemeStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub struct ThemeController<S> {
    store: S,
    logger: Logger,
    theme: Option<Theme>,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S, logger: Logger) -> Self {
        Self {
            store,
            logger,
            theme: None,
        }
    }

    /// `None` until [`ThemeController::initialize`] has run.
    #[cfg(test)]
    fn current(&self) -> Option<Theme> {
        self.theme
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted preference once. Later calls return the known theme
    /// without touching storage.
    pub fn initialize(&mut self) -> Theme {
        if let Some(theme) = self.theme {
            return theme;
        }

        let (theme, source) = match self.store.read(THEME_KEY) {
            Ok(Some(value)) => (Theme::from_stored(Some(value.as_str())), "stored"),
            Ok(None) => (Theme::Light, "default"),
            Err(error) => {
                self.logger.event(
                    LogLevel::Warn,
                    "theme_read_failed",
                    json!({ "error": error.to_string() }),
                );
                (Theme::Light, "unavailable")
            }
        };

        self.logger.event(
            LogLevel::Info,
            "theme_initialized",
            json!({ "theme": theme.as_str(), "source": source }),
        );
        self.theme = Some(theme);
        theme
    }

    /// Flips the theme and persists it. A failed write is logged and the new
    /// theme is still returned.
    pub fn toggle(&mut self) -> Theme {
        let current = self.initialize();
        let next = current.toggled();
        self.theme = Some(next);

        if let Err(error) = self.store.write(THEME_KEY, next.as_str()) {
            self.logger.event(
                LogLevel::Warn,
                "theme_persist_failed",
                json!({ "theme": next.as_str(), "error": error.to_string() }),
            );
        }

        self.logger.event(
            LogLevel::Info,
            "theme_toggled",
            json!({ "theme": next.as_str() }),
        );
        next
    }
}
