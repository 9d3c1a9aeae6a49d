//! # BS-Greeks: Black-Scholes Pricing and Sensitivities
//!
//! `bs-greeks` prices European calls and puts with the Black-Scholes closed form
//! and computes the five standard Greeks. It also ships the sampling and SVG
//! rendering helpers used to chart an option's payoff and a chosen Greek
//! against spot.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: closed-form call and put prices
//! - **Sensitivity Engine**: delta, gamma, vega, theta and rho in one pass
//! - **Typed Boundary**: case-insensitive `"call"`/`"put"` parsing into [`OptionKind`]
//! - **Domain Policy**: propagate NaN/inf (default) or reject degenerate inputs up front
//! - **Charts**: payoff-at-maturity and greek-vs-spot SVG plots
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{greeks, price};
//!
//! let call = price(100.0, 100.0, 1.0, 0.05, 0.2, "call")?;
//! let g = greeks(100.0, 100.0, 1.0, 0.05, 0.2, "call")?;
//!
//! assert!((call - 10.4506).abs() < 1e-3);
//! assert!((g.delta - 0.6368).abs() < 1e-3);
//!
//! // Anything other than call/put is rejected
//! assert!(price(100.0, 100.0, 1.0, 0.05, 0.2, "straddle").is_err());
//! # Ok::<(), bs_greeks::PricingError>(())
//! ```
//!
//! ## Domain Policy
//!
//! The closed form divides by `volatility * sqrt(maturity)`. The default entry
//! points let the resulting NaN/inf propagate, exactly as floating-point
//! arithmetic produces it. [`price_checked`] and [`greeks_checked`] instead
//! reject `spot <= 0`, `strike <= 0`, `maturity <= 0`, `volatility <= 0` and
//! non-finite inputs with [`PricingError::NumericalDomain`].

// ================================================================================================
// MODULES
// ================================================================================================

pub mod contract;
pub mod models;
pub mod plotting;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Contract types, errors and configuration
pub use contract::{
    config::{ContractDefaults, DomainPolicy, PlotConfig, PricerConfig},
    error::{PricingError, PricingResult},
    types::{GreekKind, Greeks, OptionKind, OptionParams},
};

// Black-Scholes model
pub use models::bs::BlackScholes;
pub use models::traits::PricingModel;

// ================================================================================================
// PRICING API
// ================================================================================================

/// Price a European option, parsing the option kind from text.
///
/// # Arguments
///
/// * `spot` - Current underlying price (S)
/// * `strike` - Exercise price (K)
/// * `maturity` - Time to expiry in years (T)
/// * `rate` - Continuously-compounded risk-free rate (r), may be negative
/// * `volatility` - Annualized volatility as a decimal (sigma)
/// * `kind` - `"call"` or `"put"`, any letter case
///
/// # Errors
///
/// [`PricingError::InvalidOptionKind`] when `kind` is neither call nor put,
/// including the empty string. No price is computed in that case.
///
/// # Degenerate Inputs
///
/// Zero maturity or volatility is not rejected here; the result is whatever
/// NaN/inf the formula produces. Use [`price_checked`] to reject it.
pub fn price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: &str,
) -> PricingResult<f64> {
    let kind: OptionKind = kind.parse()?;
    Ok(models::bs::price(kind, spot, strike, maturity, rate, volatility))
}

/// Compute delta, gamma, vega, theta and rho, parsing the option kind from text.
///
/// The returned [`Greeks`] always carries all five values. Units follow the
/// textbook closed form: vega and rho per 1.00 change in volatility / rate,
/// theta per year.
///
/// # Errors
///
/// [`PricingError::InvalidOptionKind`] when `kind` is neither call nor put.
///
/// # Example
///
/// ```rust
/// use bs_greeks::greeks;
///
/// let put = greeks(100.0, 100.0, 1.0, 0.05, 0.2, "PUT")?;
/// assert!((put.delta + 0.3632).abs() < 1e-3);
/// assert!((put.rho + 41.890).abs() < 1e-3);
/// # Ok::<(), bs_greeks::PricingError>(())
/// ```
pub fn greeks(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: &str,
) -> PricingResult<Greeks> {
    let kind: OptionKind = kind.parse()?;
    Ok(models::bs::greeks(
        kind, spot, strike, maturity, rate, volatility,
    ))
}

/// Like [`price`], but rejects parameters outside the closed-form domain.
///
/// # Errors
///
/// * [`PricingError::InvalidOptionKind`] for an unknown kind
/// * [`PricingError::NumericalDomain`] for non-positive spot, strike, maturity
///   or volatility, or any non-finite input
pub fn price_checked(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: &str,
) -> PricingResult<f64> {
    let kind: OptionKind = kind.parse()?;
    OptionParams::new(spot, strike, maturity, rate, volatility, kind).price_checked()
}

/// Like [`greeks`], but rejects parameters outside the closed-form domain.
pub fn greeks_checked(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: &str,
) -> PricingResult<Greeks> {
    let kind: OptionKind = kind.parse()?;
    OptionParams::new(spot, strike, maturity, rate, volatility, kind).greeks_checked()
}

/// Price and Greeks of one contract under the given domain policy.
///
/// Used by front ends that read the policy from [`PricerConfig`].
pub fn evaluate(params: &OptionParams, policy: DomainPolicy) -> PricingResult<(f64, Greeks)> {
    if policy == DomainPolicy::Strict {
        if let Err(e) = params.validate() {
            tracing::debug!(error = %e, "strict domain policy rejected parameters");
            return Err(e);
        }
    }
    Ok((params.price(), params.greeks()))
}
