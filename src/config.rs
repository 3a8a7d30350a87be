use crate::log::{LogLevel, DEFAULT_LOG_LEVEL};
use crate::rain::{RainConfig, DEFAULT_CELL_SIZE, RESET_PROBABILITY};

pub const CELL_SIZE_ATTR: &str = "data-rain-cell-size";
pub const RESET_PROBABILITY_ATTR: &str = "data-rain-reset-probability";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

const CELL_SIZE_BOUNDS: (f64, f64) = (8.0, 64.0);
const RESET_PROBABILITY_BOUNDS: (f64, f64) = (0.0, 1.0);

/// Page settings, read from `data-*` attributes on the mount element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    pub rain: RainConfig,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            rain: RainConfig::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PageConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            rain: RainConfig {
                cell_size: parse_f64_with_bounds(&lookup, CELL_SIZE_ATTR, DEFAULT_CELL_SIZE, CELL_SIZE_BOUNDS),
                reset_probability: parse_f64_with_bounds(
                    &lookup,
                    RESET_PROBABILITY_ATTR,
                    RESET_PROBABILITY,
                    RESET_PROBABILITY_BOUNDS,
                ),
            },
            log_level: parse_log_level(&lookup, LOG_LEVEL_ATTR, DEFAULT_LOG_LEVEL),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self::from_lookup(|name| element.get_attribute(name))
    }
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level<F>(lookup: &F, name: &str, default: LogLevel) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, name)
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(default)
}
