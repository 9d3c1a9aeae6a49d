use crate::contract::types::{GreekKind, OptionKind};
use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Finite (x, y) bounds of a curve with 5% vertical padding.
fn curve_bounds(curve: &[(f64, f64)]) -> Result<((f64, f64), (f64, f64))> {
    let finite: Vec<_> = curve
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if finite.is_empty() {
        return Err(anyhow!("curve has no finite points to plot"));
    }

    let x_min = finite.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = finite.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = finite.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = finite.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    let padding = ((y_max - y_min) * 0.05).max(1e-6);
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };
    Ok(((x_min, x_max), (y_min - padding, y_max + padding)))
}

/// Payoff at maturity with a zero line and a strike marker.
pub fn render_payoff_svg(
    path: impl AsRef<Path>,
    curve: &[(f64, f64)],
    strike: f64,
    kind: OptionKind,
    size: (u32, u32),
) -> Result<()> {
    let path = path.as_ref();
    let ((x_min, x_max), (y_min, y_max)) = curve_bounds(curve)?;

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Payoff at maturity - {}", kind.label()),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Underlying price (S)")
        .y_desc("Payoff")
        .draw()?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            curve.to_vec(),
            BLUE.stroke_width(2),
        )))?
        .label(format!("Payoff {}", kind))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_min, 0.0), (x_max, 0.0)],
        BLACK.mix(0.3),
    )))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(strike, y_min), (strike, y_max)],
            RED.mix(0.5),
        )))?
        .label("Strike")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.5)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!(path = %path.display(), "payoff chart saved");
    Ok(())
}

/// One greek against spot with a strike marker. Non-finite points are skipped.
pub fn render_greek_svg(
    path: impl AsRef<Path>,
    curve: &[(f64, f64)],
    strike: f64,
    greek: GreekKind,
    kind: OptionKind,
    size: (u32, u32),
) -> Result<()> {
    let path = path.as_ref();
    let ((x_min, x_max), (y_min, y_max)) = curve_bounds(curve)?;
    let points: Vec<(f64, f64)> = curve
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("{} vs spot - {}", greek.label(), kind.label()),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Underlying price (S)")
        .y_desc(greek.label())
        .draw()?;

    chart
        .draw_series(std::iter::once(PathElement::new(points, BLUE.stroke_width(2))))?
        .label(format!("{} - {}", greek.label(), kind.label()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // Strike may fall outside the sampled spot range
    if (x_min..=x_max).contains(&strike) {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(strike, y_min), (strike, y_max)],
                RED.mix(0.5),
            )))?
            .label("Strike")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.5)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!(path = %path.display(), greek = %greek, "greek chart saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_bounds_skip_non_finite() {
        let curve = vec![(1.0, 2.0), (2.0, f64::NAN), (3.0, 4.0), (f64::INFINITY, 1.0)];
        let ((x0, x1), (y0, y1)) = curve_bounds(&curve).unwrap();
        assert_eq!((x0, x1), (1.0, 3.0));
        assert!(y0 < 2.0 && y1 > 4.0);
    }

    #[test]
    fn test_curve_bounds_flat_curve_has_height() {
        let curve = vec![(0.0, 0.0), (1.0, 0.0)];
        let (_, (y0, y1)) = curve_bounds(&curve).unwrap();
        assert!(y1 > y0);
    }

    #[test]
    fn test_curve_bounds_rejects_all_nan() {
        let curve = vec![(1.0, f64::NAN), (2.0, f64::NAN)];
        assert!(curve_bounds(&curve).is_err());
    }
}
