//! Order book configuration

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};

/// Settings for a single order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBookConfig {
    /// The symbol or identifier for the instrument
    pub symbol: String,

    /// Rebuild both queues once this many tombstones have accumulated.
    /// `None` keeps removal purely lazy.
    pub auto_compact_threshold: Option<usize>,
}

impl Default for OrderBookConfig {
    fn default() -> Self {
        Self {
            symbol: "DEFAULT".to_string(),
            auto_compact_threshold: None,
        }
    }
}

impl OrderBookConfig {
    /// Configuration for `symbol` with every other setting at its default
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Self::default()
        }
    }

    /// Set the tombstone count that triggers compaction
    pub fn with_auto_compact_threshold(mut self, threshold: usize) -> Self {
        self.auto_compact_threshold = Some(threshold);
        self
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, OrderBookError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), OrderBookError> {
        if self.symbol.trim().is_empty() {
            return Err(OrderBookError::InvalidConfig {
                message: "symbol must not be empty".to_string(),
            });
        }
        if self.auto_compact_threshold == Some(0) {
            return Err(OrderBookError::InvalidConfig {
                message: "auto_compact_threshold must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
