//! CLI configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags:
//!
//! ```toml
//! [solver]
//! tolerance = 1e-10
//! max_iterations = 100
//!
//! [output]
//! format = "table"
//! precision = 6
//!
//! [bond]
//! frequency = 1
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use yieldline_bonds::yield_solver::{
    YieldSolver, DEFAULT_YIELD_MAX_ITERATIONS, DEFAULT_YIELD_TOLERANCE,
};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Largest accepted table precision.
const MAX_PRECISION: usize = 15;

/// All CLI settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Yield solver settings.
    #[serde(default)]
    pub solver: SolverSettings,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSettings,

    /// Defaults for bond arguments.
    #[serde(default)]
    pub bond: BondDefaults,
}

/// Yield solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverSettings {
    /// Absolute price tolerance
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration cap per solver stage
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

/// Output settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places in table output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Defaults applied when a bond argument is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondDefaults {
    /// Payments per year
    #[serde(default = "default_frequency")]
    pub frequency: u32,
}

fn default_tolerance() -> f64 {
    DEFAULT_YIELD_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_YIELD_MAX_ITERATIONS
}

fn default_precision() -> usize {
    6
}

fn default_frequency() -> u32 {
    1
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

impl Default for BondDefaults {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
        }
    }
}

/// Settings given as command-line flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    /// Output format
    pub format: Option<OutputFormat>,
    /// Table precision
    pub precision: Option<usize>,
    /// Solver tolerance
    pub tolerance: Option<f64>,
    /// Solver iteration cap
    pub max_iterations: Option<u32>,
}

impl Settings {
    /// Parses and validates settings from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads settings from `explicit`, or from the default location when it
    /// exists, or falls back to defaults.
    ///
    /// A file named explicitly must exist.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::MissingConfig(path.to_path_buf()));
            }
            debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading default configuration");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides and revalidates.
    pub fn with_overrides(mut self, overrides: Overrides) -> CliResult<Self> {
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(precision) = overrides.precision {
            self.output.precision = precision;
        }
        if let Some(tolerance) = overrides.tolerance {
            self.solver.tolerance = tolerance;
        }
        if let Some(max_iterations) = overrides.max_iterations {
            self.solver.max_iterations = max_iterations;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> CliResult<()> {
        if !self.solver.tolerance.is_finite() || self.solver.tolerance <= 0.0 {
            return Err(CliError::config(format!(
                "solver tolerance must be positive, got {}",
                self.solver.tolerance
            )));
        }
        if self.solver.max_iterations == 0 {
            return Err(CliError::config("solver max_iterations must be at least 1"));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(CliError::config(format!(
                "output precision must be at most {MAX_PRECISION}, got {}",
                self.output.precision
            )));
        }
        if self.bond.frequency == 0 {
            return Err(CliError::config("bond frequency must be positive"));
        }
        Ok(())
    }

    /// Yield solver configured from these settings.
    pub fn yield_solver(&self) -> YieldSolver {
        YieldSolver::new()
            .with_tolerance(self.solver.tolerance)
            .with_max_iterations(self.solver.max_iterations)
    }

    /// Renders the settings as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Default configuration file location.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("yieldline").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.solver.tolerance, 1e-10);
        assert_eq!(settings.solver.max_iterations, 100);
        assert_eq!(settings.output.format, OutputFormat::Table);
        assert_eq!(settings.bond.frequency, 1);
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml(
            r#"
            [solver]
            max_iterations = 25

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.solver.max_iterations, 25);
        assert_eq!(settings.solver.tolerance, 1e-10);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.output.precision, 6);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Settings::from_toml("[solver]\ntolerance = 0.0").is_err());
        assert!(Settings::from_toml("[solver]\nmax_iterations = 0").is_err());
        assert!(Settings::from_toml("[bond]\nfrequency = 0").is_err());
        assert!(Settings::from_toml("[output]\nprecision = 40").is_err());
        assert!(Settings::from_toml("[output]\nformat = \"xml\"").is_err());
        assert!(Settings::from_toml("[solver]\ntolerence = 1e-6").is_err());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_overrides(Overrides {
                format: Some(OutputFormat::Minimal),
                tolerance: Some(1e-6),
                ..Overrides::default()
            })
            .unwrap();

        assert_eq!(settings.output.format, OutputFormat::Minimal);
        assert_eq!(settings.solver.tolerance, 1e-6);
        assert_eq!(settings.yield_solver().config().tolerance, 1e-6);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = Settings::default().with_overrides(Overrides {
            max_iterations: Some(0),
            ..Overrides::default()
        });

        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut settings = Settings::default();
        settings.bond.frequency = 2;

        let text = settings.to_toml().unwrap();

        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn test_explicit_missing_file() {
        let result = Settings::load(Some(Path::new("/nonexistent/yieldline.toml")));
        assert!(matches!(result, Err(CliError::MissingConfig(_))));
    }
}
