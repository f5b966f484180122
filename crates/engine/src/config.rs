//! Engine configuration.
//!
//! Every rate, tolerance, and policy the engine applies is read from an
//! [`EngineConfig`], which loads from TOML. Missing sections and fields take
//! the defaults below; unknown fields are rejected.
//!
//! ```toml
//! [markup]
//! contingency_rate = 0.09
//! tax_rate = 0.24
//!
//! [irr]
//! initial_guess = 0.10
//! residual_tolerance = 1e-5
//! derivative_tolerance = 1e-6
//! max_iterations = 1000
//! lower_bound = -0.99
//! upper_bound = 10.0
//!
//! [payback]
//! unrecovered = "horizon_plus_one"
//!
//! [[envelope.seasons]]
//! name = "heating"
//! delta_t_kelvin = 15.0
//! hours = 2880.0
//! ```

use std::{fs, io, path::Path};

use retrofit_core::constraint::ConstraintError;
use retrofit_solvers::equation::newton;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cost::Markup,
    error::finite_non_negative,
    financial::{IrrSolver, UnrecoveredPayback},
    savings::envelope::Season,
};

/// Errors raised while loading or validating an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid engine config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid markup.{field}")]
    InvalidMarkup {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid irr solver settings")]
    Solver(#[from] newton::ConfigError),

    #[error("irr.initial_guess {value} lies outside [{lower}, {upper}]")]
    InitialGuess { value: f64, lower: f64, upper: f64 },

    #[error("invalid {field} for season {name:?}")]
    InvalidSeason {
        name: String,
        field: &'static str,
        #[source]
        source: ConstraintError,
    },
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub markup: Markup,
    pub irr: IrrSettings,
    pub payback: PaybackSettings,
    pub envelope: EnvelopeSettings,
}

/// Newton-Raphson settings for the IRR search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IrrSettings {
    /// Starting rate as a ratio.
    pub initial_guess: f64,

    /// `|NPV|` below which the rate is accepted.
    pub residual_tolerance: f64,

    /// `|dNPV/dr|` below which the search gives up.
    pub derivative_tolerance: f64,
    pub max_iterations: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl Default for IrrSettings {
    fn default() -> Self {
        Self {
            initial_guess: 0.10,
            residual_tolerance: 1e-5,
            derivative_tolerance: 1e-6,
            max_iterations: 1000,
            lower_bound: -0.99,
            upper_bound: 10.0,
        }
    }
}

impl IrrSettings {
    /// Builds the Newton-Raphson solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance or the bounds are invalid.
    pub fn solver_config(&self) -> Result<newton::Config, newton::ConfigError> {
        newton::Config::new(
            self.max_iterations,
            self.residual_tolerance,
            self.derivative_tolerance,
            [self.lower_bound, self.upper_bound],
        )
    }

    /// Builds the IRR solver.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver config is invalid or the initial guess
    /// falls outside the bounds.
    pub fn solver(&self) -> Result<IrrSolver, ConfigError> {
        let config = self.solver_config()?;
        let [lower, upper] = config.bounds();
        if !(lower..=upper).contains(&self.initial_guess) {
            return Err(ConfigError::InitialGuess {
                value: self.initial_guess,
                lower,
                upper,
            });
        }
        Ok(IrrSolver::new(config, self.initial_guess))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaybackSettings {
    pub unrecovered: UnrecoveredPayback,
}

/// Seasons over which envelope measures are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvelopeSettings {
    pub seasons: Vec<Season>,
}

impl Default for EnvelopeSettings {
    fn default() -> Self {
        Self {
            seasons: vec![
                Season::new("heating", 15.0, 2880.0),
                Season::new("cooling", 8.0, 2160.0),
            ],
        }
    }
}

impl EngineConfig {
    /// Reads and validates a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or fails
    /// [`validate`](Self::validate).
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid, has unknown fields, or fails
    /// [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a negative or non-finite markup rate,
    /// invalid solver settings, or a season with a negative or non-finite
    /// temperature difference or duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markup = |field, value| {
            finite_non_negative(value).map_err(|source| ConfigError::InvalidMarkup { field, source })
        };
        markup("contingency_rate", self.markup.contingency_rate)?;
        markup("tax_rate", self.markup.tax_rate)?;

        self.irr.solver()?;

        for season in &self.envelope.seasons {
            let check = |field, value| {
                finite_non_negative(value).map_err(|source| ConfigError::InvalidSeason {
                    name: season.name.clone(),
                    field,
                    source,
                })
            };
            check("delta_t_kelvin", season.delta_t_kelvin)?;
            check("hours", season.hours)?;
        }

        Ok(())
    }
}
