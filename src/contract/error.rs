use thiserror::Error;

/// Errors raised by the pricing core and its input boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// The option kind is neither call nor put (matched case-insensitively).
    #[error("Invalid option kind '{0}': expected 'call' or 'put'")]
    InvalidOptionKind(String),

    /// The greek name does not match delta, gamma, vega, theta or rho.
    #[error("Invalid greek '{0}': expected one of delta, gamma, vega, theta, rho")]
    InvalidGreek(String),

    /// A parameter lies outside the domain where d1/d2 are defined.
    /// Only raised under [`DomainPolicy::Strict`](crate::contract::config::DomainPolicy).
    #[error("Numerical domain error: {parameter}={value} {requirement}")]
    NumericalDomain {
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidOptionKind(kind.into())
    }

    pub fn invalid_greek(name: impl Into<String>) -> Self {
        Self::InvalidGreek(name.into())
    }

    pub(crate) fn domain(parameter: &'static str, value: f64, requirement: &'static str) -> Self {
        Self::NumericalDomain {
            parameter,
            value,
            requirement,
        }
    }

    /// True for errors caused by degenerate numeric inputs rather than bad labels.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::NumericalDomain { .. })
    }
}
