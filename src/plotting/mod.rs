//! Curve sampling and SVG rendering for the payoff and greek-vs-spot charts.
//!
//! Sampling is pure and lives in [`curves`]; [`render`] turns a sampled curve
//! into an SVG file with `plotters`.

pub mod curves;
pub mod render;

pub use curves::{greek_curve, payoff_curve, price_curve, write_curve_csv};
pub use render::{render_greek_svg, render_payoff_svg};
