// Black-Scholes closed form for European calls and puts: price and the five
// first/second order Greeks. No dividend yield; zero maturity or volatility is
// not special-cased, the resulting NaN/inf is returned as-is (see
// `OptionParams::validate` for the strict policy).

use crate::contract::types::{Greeks, OptionKind, OptionParams};
use crate::models::normal::{norm_cdf, norm_pdf};
use crate::models::traits::PricingModel;

/// Standardized intermediates `(d1, d2)`.
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 − σ·√T
/// ```
pub fn d1_d2(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> (f64, f64) {
    let vol_sqrt_t = volatility * maturity.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * maturity) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn bs_call_price(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> f64 {
    let (d1, d2) = d1_d2(spot, strike, maturity, rate, volatility);
    spot * norm_cdf(d1) - strike * (-rate * maturity).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn bs_put_price(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> f64 {
    let (d1, d2) = d1_d2(spot, strike, maturity, rate, volatility);
    // N(-d) rather than 1 - N(d): keeps deep in-the-money puts accurate
    strike * (-rate * maturity).exp() * norm_cdf(-d2) - spot * norm_cdf(-d1)
}

/// Black-Scholes price for either option kind.
pub fn price(
    kind: OptionKind,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
) -> f64 {
    match kind {
        OptionKind::Call => bs_call_price(spot, strike, maturity, rate, volatility),
        OptionKind::Put => bs_put_price(spot, strike, maturity, rate, volatility),
    }
}

/// Delta, gamma, vega, theta and rho in a single pass over d1/d2.
///
/// Units: vega per 1.00 of volatility, theta per year, rho per 1.00 of rate.
pub fn greeks(
    kind: OptionKind,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
) -> Greeks {
    let (d1, d2) = d1_d2(spot, strike, maturity, rate, volatility);
    let sqrt_t = maturity.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let discounted_strike = strike * (-rate * maturity).exp();

    let gamma = pdf_d1 / (spot * volatility * sqrt_t);
    let vega = spot * sqrt_t * pdf_d1;
    let time_decay = -spot * pdf_d1 * volatility / (2.0 * sqrt_t);

    let (delta, theta, rho) = match kind {
        OptionKind::Call => {
            let nd2 = norm_cdf(d2);
            (
                norm_cdf(d1),
                time_decay - rate * discounted_strike * nd2,
                maturity * discounted_strike * nd2,
            )
        }
        OptionKind::Put => {
            let nd2m = norm_cdf(-d2);
            (
                norm_cdf(d1) - 1.0,
                time_decay + rate * discounted_strike * nd2m,
                -maturity * discounted_strike * nd2m,
            )
        }
    };

    Greeks {
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

/// The Black-Scholes model behind the [`PricingModel`] seam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn price(&self, params: &OptionParams) -> f64 {
        params.price()
    }

    fn greeks(&self, params: &OptionParams) -> Greeks {
        params.greeks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d1_d2_atm() {
        let (d1, d2) = d1_d2(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!((d1 - 0.35).abs() < 1e-12);
        assert!((d2 - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_price_dispatches_on_kind() {
        let call = price(OptionKind::Call, 100.0, 95.0, 0.5, 0.03, 0.25);
        let put = price(OptionKind::Put, 100.0, 95.0, 0.5, 0.03, 0.25);
        assert_eq!(call, bs_call_price(100.0, 95.0, 0.5, 0.03, 0.25));
        assert_eq!(put, bs_put_price(100.0, 95.0, 0.5, 0.03, 0.25));
    }

    #[test]
    fn test_greeks_against_finite_differences() {
        let (s, k, t, r, v) = (105.0, 100.0, 0.75, 0.02, 0.3);
        let h = 1e-4;

        for kind in [OptionKind::Call, OptionKind::Put] {
            let g = greeks(kind, s, k, t, r, v);

            let delta_fd = (price(kind, s + h, k, t, r, v) - price(kind, s - h, k, t, r, v)) / (2.0 * h);
            let gamma_fd = (price(kind, s + h, k, t, r, v) - 2.0 * price(kind, s, k, t, r, v)
                + price(kind, s - h, k, t, r, v))
                / (h * h);
            let vega_fd = (price(kind, s, k, t, r, v + h) - price(kind, s, k, t, r, v - h)) / (2.0 * h);
            // Theta is dV/dt in calendar time, i.e. minus the maturity derivative
            let theta_fd = -(price(kind, s, k, t + h, r, v) - price(kind, s, k, t - h, r, v)) / (2.0 * h);
            let rho_fd = (price(kind, s, k, t, r + h, v) - price(kind, s, k, t, r - h, v)) / (2.0 * h);

            assert!((g.delta - delta_fd).abs() < 1e-6, "{:?} delta", kind);
            assert!((g.gamma - gamma_fd).abs() < 1e-4, "{:?} gamma", kind);
            assert!((g.vega - vega_fd).abs() < 1e-5, "{:?} vega", kind);
            assert!((g.theta - theta_fd).abs() < 1e-5, "{:?} theta", kind);
            assert!((g.rho - rho_fd).abs() < 1e-5, "{:?} rho", kind);
        }
    }

    #[test]
    fn test_model_seam_delegates() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put);
        let model = BlackScholes;
        assert_eq!(model.model_name(), "black-scholes");
        assert_eq!(model.price(&params), params.price());
        assert_eq!(model.greeks(&params), params.greeks());
    }
}
