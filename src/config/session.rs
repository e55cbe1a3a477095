//! Session timing configuration section.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;

/// Session settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSection {
    /// Response deadline per probe, in milliseconds
    #[serde(default = "defaults::response_window_ms")]
    pub response_window_ms: u64,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            response_window_ms: 5000,
        }
    }
}

impl SessionSection {
    /// Response window as a [`Duration`]
    #[inline]
    pub fn response_window(&self) -> Duration {
        Duration::from_millis(self.response_window_ms)
    }
}
