pub mod bs;
pub mod normal;

/// Common traits used by pricing models
pub mod traits {
    use crate::contract::types::{Greeks, OptionParams};

    /// Pricing model trait for closed-form European valuation
    pub trait PricingModel {
        fn model_name(&self) -> &str;
        fn price(&self, params: &OptionParams) -> f64;
        fn greeks(&self, params: &OptionParams) -> Greeks;
    }
}

/// Utility functions for payoffs and sampling grids
pub mod utils {
    use crate::contract::types::OptionKind;

    /// Value at maturity, undiscounted: max(S−K, 0) for calls, max(K−S, 0) for puts.
    pub fn payoff(kind: OptionKind, spot_at_maturity: f64, strike: f64) -> f64 {
        match kind {
            OptionKind::Call => (spot_at_maturity - strike).max(0.0),
            OptionKind::Put => (strike - spot_at_maturity).max(0.0),
        }
    }

    /// `n` evenly spaced points from `start` to `end`, both ends included.
    pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                    .collect()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_payoff_hockey_stick() {
            assert_eq!(payoff(OptionKind::Call, 120.0, 100.0), 20.0);
            assert_eq!(payoff(OptionKind::Call, 80.0, 100.0), 0.0);
            assert_eq!(payoff(OptionKind::Put, 80.0, 100.0), 20.0);
            assert_eq!(payoff(OptionKind::Put, 120.0, 100.0), 0.0);
            assert_eq!(payoff(OptionKind::Put, 100.0, 100.0), 0.0);
        }

        #[test]
        fn test_linspace_endpoints() {
            let xs = linspace(50.0, 150.0, 100);
            assert_eq!(xs.len(), 100);
            assert_eq!(xs[0], 50.0);
            assert_eq!(xs[99], 150.0);
            assert!(xs.windows(2).all(|w| w[1] > w[0]));

            assert!(linspace(0.0, 1.0, 0).is_empty());
            assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
            assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        }
    }
}
