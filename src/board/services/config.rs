//! Board configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{
    adapters::{RandomIdGenerator, SequentialIdGenerator},
    ports::IdGenerator,
};

/// Default interval after which a validation notice is hidden.
pub const DEFAULT_NOTICE_DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Strategy used to generate fresh entity identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Strictly monotonic numeric identifiers.
    #[default]
    Sequential,
    /// Random UUID v4 string identifiers.
    Random,
}

impl IdStrategy {
    /// Builds a generator for this strategy.
    #[must_use]
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
            Self::Random => Box::new(RandomIdGenerator::new()),
        }
    }
}

/// Configuration for a board session.
///
/// # Examples
///
/// ```
/// use kanban_board::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.seed_columns, vec!["To Do", "In Progress", "Done"]);
///
/// let empty = BoardConfig::empty();
/// assert!(empty.seed_columns.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Titles of the columns a fresh board starts with, in order.
    pub seed_columns: Vec<String>,
    /// Identifier generation strategy.
    pub id_strategy: IdStrategy,
    /// How long a validation notice stays visible.
    #[serde(rename = "notice_dismiss_after_ms", with = "duration_millis")]
    pub notice_dismiss_after: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_columns: vec!["To Do".to_owned(), "In Progress".to_owned(), "Done".to_owned()],
            id_strategy: IdStrategy::Sequential,
            notice_dismiss_after: DEFAULT_NOTICE_DISMISS_AFTER,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration for a board with no initial columns.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seed_columns: Vec::new(),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] when the document is malformed and
    /// [`BoardConfigError::ZeroDismissInterval`] when the notice interval is
    /// zero.
    pub fn from_json_str(json: &str) -> Result<Self, BoardConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks configuration values that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::ZeroDismissInterval`] when the notice
    /// interval is zero.
    pub const fn validate(&self) -> Result<(), BoardConfigError> {
        if self.notice_dismiss_after.is_zero() {
            return Err(BoardConfigError::ZeroDismissInterval);
        }
        Ok(())
    }
}

/// Errors returned while loading a board configuration.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The notice dismiss interval is zero.
    #[error("notice dismiss interval must be greater than zero")]
    ZeroDismissInterval,
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
