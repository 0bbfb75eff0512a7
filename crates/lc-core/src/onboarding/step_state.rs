use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Render state of a single onboarding step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// The step's flag is set
    Completed,
    /// First incomplete step in the fixed order
    Current,
    /// Incomplete, but a step before it is also incomplete
    Pending,
}

impl StepState {
    /// Convert to wire/database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for StepState {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "completed" => Ok(Self::Completed),
            "current" => Ok(Self::Current),
            "pending" => Ok(Self::Pending),
            _ => Err(CoreError::InvalidStepState {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for StepState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
