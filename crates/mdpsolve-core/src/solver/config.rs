use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_SOLVER_CONFIG_YAML: &str = include_str!("../../config/solver.default.yaml");

/// Rule for choosing between actions whose Q-values are exactly equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the action with the smallest key.
    #[default]
    LowestAction,
    /// Keep the action with the largest key, as a `max((q, action))` comparison would.
    HighestAction,
}

impl TieBreak {
    /// Whether `candidate` replaces `incumbent` when both reach the same Q-value.
    pub(crate) fn prefers<A: Ord>(self, candidate: &A, incumbent: &A) -> bool {
        match self {
            TieBreak::LowestAction => candidate < incumbent,
            TieBreak::HighestAction => candidate > incumbent,
        }
    }
}

/// Convergence and selection settings shared by both solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// A sweep converges once the largest value change is strictly below this.
    pub tolerance: f64,
    /// Sweeps allowed per convergence loop; `None` loops until converged.
    pub max_sweeps: Option<usize>,
    /// Evaluation/improvement rounds allowed in policy iteration; `None` is unbounded.
    pub max_policy_rounds: Option<usize>,
    pub tie_break: TieBreak,
}

// Capped settings for `*_with` callers; the bundled YAML holds the same values.
impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tolerance: 1e-10,
            max_sweeps: Some(1_000_000),
            max_policy_rounds: Some(10_000),
            tie_break: TieBreak::LowestAction,
        }
    }
}

impl SolverConfig {
    /// Settings with no iteration caps: a non-convergent model loops forever.
    pub fn unbounded() -> Self {
        SolverConfig {
            max_sweeps: None,
            max_policy_rounds: None,
            ..SolverConfig::default()
        }
    }

    /// Parse a solver config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SolverConfigError> {
        let config: SolverConfig = serde_yaml::from_str(yaml).map_err(SolverConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a solver config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SolverConfigError> {
        let yaml = fs::read_to_string(path).map_err(SolverConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SOLVER_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SolverConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Check that every setting is usable by the solvers.
    pub fn validate(&self) -> Result<(), SolverConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SolverConfigError::Invalid(
                "tolerance must be finite and > 0".to_string(),
            ));
        }
        if self.max_sweeps == Some(0) {
            return Err(SolverConfigError::Invalid(
                "max_sweeps must be greater than 0".to_string(),
            ));
        }
        if self.max_policy_rounds == Some(0) {
            return Err(SolverConfigError::Invalid(
                "max_policy_rounds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for loading and validating `SolverConfig`.
#[derive(Debug)]
pub enum SolverConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for SolverConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            SolverConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            SolverConfigError::Invalid(err) => write!(f, "invalid solver config: {err}"),
        }
    }
}

impl std::error::Error for SolverConfigError {}
