//! Configuration for fixture generation.

use serde::{Deserialize, Serialize};

use crate::error::MapperError;

/// Default upper bound for random list lengths.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Options for [`AutoFixture`](crate::AutoFixture).
///
/// ## Modes
///
/// - **Random**: `seed` and `index` both `None`.
/// - **Deterministic**: both set; every generated value is derived from them.
///
/// Setting exactly one of the two is rejected with
/// [`MapperError::InvalidFixtureArguments`].
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `list-limit`, `nesting-depth`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FixtureOptions {
    /// Text appended to generated strings in deterministic mode.
    pub seed: Option<String>,
    /// Drives every deterministic value (counts, numbers, dates, enum position).
    pub index: Option<usize>,
    /// Depth of the record being generated; nested records get `+ 1`.
    pub nesting_depth: usize,
    /// Random lists get between 0 and `list_limit` elements (inclusive).
    pub list_limit: usize,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            seed: None,
            index: None,
            nesting_depth: 0,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl FixtureOptions {
    /// Random-mode options.
    pub fn random() -> Self {
        Self::default()
    }

    /// Deterministic-mode options.
    pub fn deterministic(seed: impl Into<String>, index: usize) -> Self {
        Self {
            seed: Some(seed.into()),
            index: Some(index),
            ..Self::default()
        }
    }

    pub fn with_list_limit(mut self, list_limit: usize) -> Self {
        self.list_limit = list_limit;
        self
    }

    pub fn with_nesting_depth(mut self, nesting_depth: usize) -> Self {
        self.nesting_depth = nesting_depth;
        self
    }

    /// Options for a record nested one level below this one.
    pub(crate) fn nested(&self) -> Self {
        Self {
            nesting_depth: self.nesting_depth + 1,
            ..self.clone()
        }
    }

    /// Resolve the generation mode, rejecting half-specified deterministic options.
    pub(crate) fn mode(&self) -> Result<Mode<'_>, MapperError> {
        match (&self.seed, self.index) {
            (Some(seed), Some(index)) => Ok(Mode::Deterministic { seed, index }),
            (None, None) => Ok(Mode::Random),
            (Some(_), None) => Err(MapperError::InvalidFixtureArguments(
                "seed and index must both be set to create predictable data (index is missing)"
                    .to_string(),
            )),
            (None, Some(_)) => Err(MapperError::InvalidFixtureArguments(
                "seed and index must both be set to create predictable data (seed is missing)"
                    .to_string(),
            )),
        }
    }
}

/// Resolved generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode<'a> {
    Random,
    Deterministic { seed: &'a str, index: usize },
}
