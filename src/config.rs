use std::time::Duration;

use crate::responsive::Thresholds;
#[cfg(feature = "serde")]
use crate::error::SeuilError;

/// The maximum time a resize notification may be delayed by default.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Options for [`install`](crate::install).
///
/// Missing values fall back to [`DEFAULT_THRESHOLDS`](crate::responsive::DEFAULT_THRESHOLDS)
/// and [`DEFAULT_DELAY`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct SeuilConfig {
    pub thresholds: Option<Thresholds>,
    /// Debounce delay in milliseconds.
    pub debounce_delay: Option<u64>,
}

impl SeuilConfig {
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = Some(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds.unwrap_or_default()
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debounce_delay
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }

    /// Parse a configuration such as `{"debounceDelay": 700}`.
    ///
    /// Unknown keys are ignored; thresholds are validated.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, SeuilError> {
        Ok(serde_json::from_str(json)?)
    }
}
