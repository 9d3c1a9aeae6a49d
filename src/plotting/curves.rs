use crate::contract::types::{GreekKind, OptionKind, OptionParams};
use crate::models::traits::PricingModel;
use crate::models::utils::{linspace, payoff};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Payoff at maturity sampled on `[0, 2K]`.
pub fn payoff_curve(kind: OptionKind, strike: f64, points: usize) -> Vec<(f64, f64)> {
    linspace(0.0, 2.0 * strike, points)
        .into_iter()
        .map(|s| (s, payoff(kind, s, strike)))
        .collect()
}

/// One greek sampled on `[lower_factor·S, upper_factor·S]`, all other
/// contract parameters held fixed.
///
/// Points are independent evaluations of the model; NaN/inf from degenerate
/// parameters are kept so the caller can decide what to draw.
pub fn greek_curve<M: PricingModel + ?Sized>(
    model: &M,
    params: &OptionParams,
    greek: GreekKind,
    lower_factor: f64,
    upper_factor: f64,
    points: usize,
) -> Vec<(f64, f64)> {
    linspace(params.spot * lower_factor, params.spot * upper_factor, points)
        .into_iter()
        .map(|s| (s, model.greeks(&params.with_spot(s)).get(greek)))
        .collect()
}

/// Model price sampled on the same kind of spot range as [`greek_curve`].
pub fn price_curve<M: PricingModel + ?Sized>(
    model: &M,
    params: &OptionParams,
    lower_factor: f64,
    upper_factor: f64,
    points: usize,
) -> Vec<(f64, f64)> {
    linspace(params.spot * lower_factor, params.spot * upper_factor, points)
        .into_iter()
        .map(|s| (s, model.price(&params.with_spot(s))))
        .collect()
}

/// Writes a two-column CSV with a `spot,<value_header>` header row.
pub fn write_curve_csv(path: impl AsRef<Path>, value_header: &str, curve: &[(f64, f64)]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(["spot", value_header])?;
    for &(x, y) in curve {
        writer.write_record([x.to_string(), y.to_string()])?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = curve.len(), "curve written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bs::BlackScholes;

    #[test]
    fn test_payoff_curve_range() {
        let curve = payoff_curve(OptionKind::Call, 100.0, 1000);
        assert_eq!(curve.len(), 1000);
        assert_eq!(curve[0], (0.0, 0.0));
        assert_eq!(curve[999], (200.0, 100.0));

        let put = payoff_curve(OptionKind::Put, 100.0, 3);
        assert_eq!(put, vec![(0.0, 100.0), (100.0, 0.0), (200.0, 0.0)]);
    }

    #[test]
    fn test_greek_curve_spans_spot_range() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
        let curve = greek_curve(&BlackScholes, &params, GreekKind::Delta, 0.5, 1.5, 100);

        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].0, 50.0);
        assert_eq!(curve[99].0, 150.0);
        assert!(curve.windows(2).all(|w| w[1].1 > w[0].1), "call delta must increase with spot");
        assert!(curve.iter().all(|&(_, d)| (0.0..=1.0).contains(&d)));
    }

    #[test]
    fn test_price_curve_matches_engine() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put);
        let curve = price_curve(&BlackScholes, &params, 0.5, 1.5, 11);
        assert_eq!(curve.len(), 11);
        let mid = curve[5];
        assert_eq!(mid.0, 100.0);
        assert!((mid.1 - params.price()).abs() < 1e-12);
    }
}
