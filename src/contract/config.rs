use crate::contract::types::{GreekKind, OptionKind, OptionParams};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How the strict entry points treat parameters outside the closed-form domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainPolicy {
    /// Let IEEE-754 NaN/inf propagate from zero maturity or volatility.
    #[default]
    Propagate,
    /// Reject degenerate parameters with `PricingError::NumericalDomain`.
    Strict,
}

/// Contract values substituted when the user leaves a prompt empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractDefaults {
    #[serde(default = "default_spot")]
    pub spot: f64,
    #[serde(default = "default_strike")]
    pub strike: f64,
    #[serde(default = "default_maturity")]
    pub maturity: f64,
    #[serde(default = "default_rate")]
    pub rate: f64,
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    #[serde(default = "default_kind")]
    pub kind: OptionKind,
}

impl Default for ContractDefaults {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
            volatility: default_volatility(),
            kind: default_kind(),
        }
    }
}

impl ContractDefaults {
    pub fn to_params(&self) -> OptionParams {
        OptionParams::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            self.kind,
        )
    }
}

/// Plot sampling and rendering settings
#[derive(Debug, Clone, Deserialize)]
pub struct PlotConfig {
    /// Greek drawn against spot
    #[serde(default = "default_greek")]
    pub greek: GreekKind,
    /// Number of points on the payoff curve over [0, 2K]
    #[serde(default = "default_payoff_points")]
    pub payoff_points: usize,
    /// Number of points on the greek curve
    #[serde(default = "default_greek_points")]
    pub greek_points: usize,
    /// Lower end of the greek curve as a multiple of spot
    #[serde(default = "default_spot_lower_factor")]
    pub spot_lower_factor: f64,
    /// Upper end of the greek curve as a multiple of spot
    #[serde(default = "default_spot_upper_factor")]
    pub spot_upper_factor: f64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Directory receiving the SVG (and optional CSV) files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            greek: default_greek(),
            payoff_points: default_payoff_points(),
            greek_points: default_greek_points(),
            spot_lower_factor: default_spot_lower_factor(),
            spot_upper_factor: default_spot_upper_factor(),
            width: default_width(),
            height: default_height(),
            output_dir: default_output_dir(),
        }
    }
}

impl PlotConfig {
    pub fn validate(&self) -> Result<()> {
        if self.payoff_points < 2 || self.greek_points < 2 {
            return Err(anyhow!(
                "PlotConfig validation: payoff_points ({}) and greek_points ({}) must be >= 2",
                self.payoff_points,
                self.greek_points
            ));
        }
        if self.spot_lower_factor <= 0.0
            || !self.spot_upper_factor.is_finite()
            || self.spot_lower_factor >= self.spot_upper_factor
        {
            return Err(anyhow!(
                "PlotConfig validation: spot range factors ({}, {}) must satisfy 0 < lower < upper",
                self.spot_lower_factor,
                self.spot_upper_factor
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(anyhow!(
                "PlotConfig validation: image size {}x{} must be non-zero",
                self.width,
                self.height
            ));
        }
        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Top-level configuration for the pricer front end
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricerConfig {
    #[serde(default)]
    pub domain_policy: DomainPolicy,

    #[serde(default)]
    pub defaults: ContractDefaults,

    #[serde(default)]
    pub plot: PlotConfig,
}

impl PricerConfig {
    /// Defaults used by the interactive front end (propagate policy)
    pub fn interactive() -> Self {
        Self::default()
    }

    /// Same defaults, rejecting zero maturity or volatility up front
    pub fn strict() -> Self {
        Self {
            domain_policy: DomainPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: PricerConfig = toml::from_str(s).context("failed to parse pricer config")?;
        config.plot.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), policy = ?config.domain_policy, "loaded pricer config");
        Ok(config)
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_maturity() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

fn default_kind() -> OptionKind {
    OptionKind::Call
}

fn default_greek() -> GreekKind {
    GreekKind::Delta
}

fn default_payoff_points() -> usize {
    1000
}

fn default_greek_points() -> usize {
    100
}

fn default_spot_lower_factor() -> f64 {
    0.5
}

fn default_spot_upper_factor() -> f64 {
    1.5
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = PricerConfig::from_toml_str("").unwrap();
        assert_eq!(config.domain_policy, DomainPolicy::Propagate);
        assert_eq!(config.defaults.spot, 100.0);
        assert_eq!(config.defaults.rate, 0.05);
        assert_eq!(config.defaults.kind, OptionKind::Call);
        assert_eq!(config.plot.greek, GreekKind::Delta);
        assert_eq!(config.plot.payoff_points, 1000);
        assert_eq!(config.plot.greek_points, 100);
    }

    #[test]
    fn test_partial_override() {
        let raw = r#"
            domain_policy = "strict"

            [defaults]
            strike = 110.0
            kind = "PUT"

            [plot]
            greek = "Vega"
            greek_points = 50
        "#;
        let config = PricerConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.domain_policy, DomainPolicy::Strict);
        assert_eq!(config.defaults.strike, 110.0);
        assert_eq!(config.defaults.spot, 100.0);
        assert_eq!(config.defaults.kind, OptionKind::Put);
        assert_eq!(config.plot.greek, GreekKind::Vega);
        assert_eq!(config.plot.greek_points, 50);
        assert_eq!(config.plot.payoff_points, 1000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(PricerConfig::from_toml_str("[defaults]\nkind = \"straddle\"").is_err());
        assert!(PricerConfig::from_toml_str("[plot]\ngreek = \"vanna\"").is_err());
        assert!(PricerConfig::from_toml_str("[plot]\ngreek_points = 1").is_err());
        assert!(PricerConfig::from_toml_str(
            "[plot]\nspot_lower_factor = 1.5\nspot_upper_factor = 0.5"
        )
        .is_err());
        assert!(PricerConfig::from_toml_str("domain_policy = \"lenient\"").is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            PricerConfig::interactive().domain_policy,
            DomainPolicy::Propagate
        );
        assert_eq!(PricerConfig::strict().domain_policy, DomainPolicy::Strict);
        assert!(PricerConfig::strict().plot.validate().is_ok());
    }
}
