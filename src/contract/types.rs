use crate::contract::error::{PricingError, PricingResult};
use crate::models::bs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// European option kind.
///
/// Parsed case-insensitively from text at the input boundary; the pricing
/// formulas only ever see this two-variant enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    /// Uppercase label used in reports and chart captions.
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "CALL",
            OptionKind::Put => "PUT",
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> PricingResult<Self> {
        if s.eq_ignore_ascii_case("call") {
            Ok(OptionKind::Call)
        } else if s.eq_ignore_ascii_case("put") {
            Ok(OptionKind::Put)
        } else {
            Err(PricingError::invalid_kind(s))
        }
    }
}

impl TryFrom<String> for OptionKind {
    type Error = PricingError;

    fn try_from(value: String) -> PricingResult<Self> {
        value.parse()
    }
}

impl From<OptionKind> for String {
    fn from(kind: OptionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract parameters for a single European option.
///
/// A plain value type: construction performs no validation so that degenerate
/// inputs can still be priced under the propagate policy. Call
/// [`OptionParams::validate`] (or the `*_checked` methods) for the strict policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Current underlying price (S)
    pub spot: f64,
    /// Exercise price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub maturity: f64,
    /// Continuously-compounded risk-free rate (r), may be negative
    pub rate: f64,
    /// Annualized volatility (sigma, as decimal)
    pub volatility: f64,
    /// Call or put
    pub kind: OptionKind,
}

fn validate_option_params(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
) -> PricingResult<()> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(PricingError::domain("spot", spot, "must be > 0 and finite"));
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(PricingError::domain("strike", strike, "must be > 0 and finite"));
    }
    // d1 divides by sigma * sqrt(T), so zero maturity is rejected here even
    // though the contract itself allows it.
    if maturity <= 0.0 || !maturity.is_finite() {
        return Err(PricingError::domain(
            "maturity",
            maturity,
            "must be > 0 and finite",
        ));
    }
    if !rate.is_finite() {
        return Err(PricingError::domain("rate", rate, "must be finite"));
    }
    if volatility <= 0.0 || !volatility.is_finite() {
        return Err(PricingError::domain(
            "volatility",
            volatility,
            "must be > 0 and finite",
        ));
    }
    Ok(())
}

impl OptionParams {
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        }
    }

    /// Checks the parameters against the domain where the closed form is defined.
    pub fn validate(&self) -> PricingResult<()> {
        validate_option_params(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
        )
    }

    /// Same contract with a different spot; used when sampling curves.
    pub fn with_spot(&self, spot: f64) -> Self {
        Self { spot, ..*self }
    }

    pub fn with_kind(&self, kind: OptionKind) -> Self {
        Self { kind, ..*self }
    }

    /// Black-Scholes price. Degenerate inputs propagate as NaN/inf.
    pub fn price(&self) -> f64 {
        bs::price(
            self.kind,
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
        )
    }

    /// All five Greeks. Degenerate inputs propagate as NaN/inf.
    pub fn greeks(&self) -> Greeks {
        bs::greeks(
            self.kind,
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
        )
    }

    /// Price after [`validate`](Self::validate) succeeds.
    pub fn price_checked(&self) -> PricingResult<f64> {
        self.validate()?;
        Ok(self.price())
    }

    /// Greeks after [`validate`](Self::validate) succeeds.
    pub fn greeks_checked(&self) -> PricingResult<Greeks> {
        self.validate()?;
        Ok(self.greeks())
    }
}

/// First and second order sensitivities of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// dV/dS
    pub delta: f64,
    /// d²V/dS²
    pub gamma: f64,
    /// dV/dσ, per unit of volatility
    pub vega: f64,
    /// dV/dt, per year
    pub theta: f64,
    /// dV/dr, per unit of rate
    pub rho: f64,
}

impl Greeks {
    pub fn get(&self, greek: GreekKind) -> f64 {
        match greek {
            GreekKind::Delta => self.delta,
            GreekKind::Gamma => self.gamma,
            GreekKind::Vega => self.vega,
            GreekKind::Theta => self.theta,
            GreekKind::Rho => self.rho,
        }
    }

    /// Yields `(greek, value)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (GreekKind, f64)> + '_ {
        GreekKind::ALL.iter().map(move |&g| (g, self.get(g)))
    }

    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, v)| v.is_finite())
    }
}

/// Selector for a single Greek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GreekKind {
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl GreekKind {
    pub const ALL: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Vega,
        GreekKind::Theta,
        GreekKind::Rho,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Vega => "vega",
            GreekKind::Theta => "theta",
            GreekKind::Rho => "rho",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GreekKind::Delta => "DELTA",
            GreekKind::Gamma => "GAMMA",
            GreekKind::Vega => "VEGA",
            GreekKind::Theta => "THETA",
            GreekKind::Rho => "RHO",
        }
    }
}

impl FromStr for GreekKind {
    type Err = PricingError;

    fn from_str(s: &str) -> PricingResult<Self> {
        GreekKind::ALL
            .into_iter()
            .find(|g| s.eq_ignore_ascii_case(g.as_str()))
            .ok_or_else(|| PricingError::invalid_greek(s))
    }
}

impl TryFrom<String> for GreekKind {
    type Error = PricingError;

    fn try_from(value: String) -> PricingResult<Self> {
        value.parse()
    }
}

impl From<GreekKind> for String {
    fn from(greek: GreekKind) -> Self {
        greek.as_str().to_string()
    }
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
