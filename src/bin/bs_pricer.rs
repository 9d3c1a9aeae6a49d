//! Black-Scholes pricer & Greeks visualizer
//!
//! Prompts for the contract parameters (empty input keeps the default shown in
//! brackets), prints the price and Greeks, then writes two SVG charts: the
//! payoff at maturity and the selected greek against spot.
//!
//! Usage:
//!     cargo run --bin bs_pricer -- [--config bs_pricer.toml] [--greek vega] [--out-dir plots] [--csv]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bs_greeks::plotting::{
    greek_curve, payoff_curve, render_greek_svg, render_payoff_svg, write_curve_csv,
};
use bs_greeks::{
    evaluate, BlackScholes, GreekKind, OptionKind, OptionParams, PricerConfig, PricingError,
};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bs_pricer")]
#[command(author, version, about = "Black-Scholes pricer & Greeks visualizer", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// TOML configuration file (defaults, plot settings, domain policy)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Greek to plot against spot (delta, gamma, vega, theta, rho)
    #[arg(short, long)]
    greek: Option<GreekKind>,

    /// Directory receiving the charts
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Also export the sampled curves as CSV
    #[arg(long)]
    csv: bool,

    /// Use the configured defaults without prompting
    #[arg(long)]
    non_interactive: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Reads a number, substituting `default` on empty input and re-prompting on
/// anything that does not parse.
fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: f64,
) -> Result<f64> {
    loop {
        write!(output, "{} [{}]: ", label, default)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Error: please enter a valid number")?,
        }
    }
}

fn prompt_kind<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: OptionKind,
) -> Result<OptionKind> {
    loop {
        write!(output, "Option type (call/put) [{}]: ", default)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<OptionKind>() {
            Ok(kind) => return Ok(kind),
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
}

fn read_params<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &PricerConfig,
) -> Result<OptionParams> {
    let d = &config.defaults;
    let spot = prompt_f64(input, output, "Underlying price (S)", d.spot)?;
    let strike = prompt_f64(input, output, "Strike price (K)", d.strike)?;
    let maturity = prompt_f64(input, output, "Time to maturity in years (T)", d.maturity)?;
    let rate = prompt_f64(input, output, "Risk-free rate (r)", d.rate)?;
    let volatility = prompt_f64(input, output, "Annualized volatility (sigma)", d.volatility)?;
    let kind = prompt_kind(input, output, d.kind)?;
    Ok(OptionParams::new(spot, strike, maturity, rate, volatility, kind))
}

fn print_report<W: Write>(
    output: &mut W,
    params: &OptionParams,
    price: f64,
    greeks: &bs_greeks::Greeks,
) -> io::Result<()> {
    writeln!(output, "\nParameters:")?;
    writeln!(output, "S = {:.2}", params.spot)?;
    writeln!(output, "K = {:.2}", params.strike)?;
    writeln!(output, "T = {:.2}", params.maturity)?;
    writeln!(output, "r = {:.2}%", params.rate * 100.0)?;
    writeln!(output, "sigma = {:.2}%", params.volatility * 100.0)?;
    writeln!(output, "Type = {}", params.kind.label())?;

    writeln!(output, "\n{} option price: {:.4}", params.kind.label(), price)?;

    writeln!(output, "\nGreeks:")?;
    for (greek, value) in greeks.iter() {
        writeln!(output, "{}: {:.4}", greek.label(), value)?;
    }
    Ok(())
}

fn render_charts(cli: &Cli, config: &PricerConfig, params: &OptionParams) -> Result<()> {
    let plot = &config.plot;
    let out_dir = cli.out_dir.clone().unwrap_or_else(|| plot.output_dir.clone());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let payoff = payoff_curve(params.kind, params.strike, plot.payoff_points);
    render_payoff_svg(
        out_dir.join("payoff.svg"),
        &payoff,
        params.strike,
        params.kind,
        plot.size(),
    )?;

    let greek = cli.greek.unwrap_or(plot.greek);
    let curve = greek_curve(
        &BlackScholes,
        params,
        greek,
        plot.spot_lower_factor,
        plot.spot_upper_factor,
        plot.greek_points,
    );
    render_greek_svg(
        out_dir.join(format!("{}.svg", greek)),
        &curve,
        params.strike,
        greek,
        params.kind,
        plot.size(),
    )?;

    if cli.csv {
        write_curve_csv(out_dir.join("payoff.csv"), "payoff", &payoff)?;
        write_curve_csv(out_dir.join(format!("{}.csv", greek)), greek.as_str(), &curve)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PricerConfig::from_file(path)?,
        None => PricerConfig::interactive(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "\n=== Black-Scholes Pricer & Greeks Visualizer ===\n")?;
    let params = if cli.non_interactive {
        config.defaults.to_params()
    } else {
        read_params(&mut stdin.lock(), &mut out, &config)?
    };

    let (price, greeks) = evaluate(&params, config.domain_policy)?;
    if !price.is_finite() || !greeks.is_finite() {
        info!(?params, "degenerate parameters produced non-finite results");
    }
    print_report(&mut out, &params, price, &greeks)?;

    render_charts(cli, &config, &params)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PricingError>() {
                Some(PricingError::NumericalDomain { .. }) => {
                    error!("parameters outside the Black-Scholes domain: {}", e)
                }
                Some(PricingError::InvalidOptionKind(_)) => error!("invalid option kind: {}", e),
                _ => error!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_input_uses_defaults() {
        let mut input = Cursor::new("\n\n\n\n\n\n");
        let mut output = Vec::new();
        let params = read_params(&mut input, &mut output, &PricerConfig::default()).unwrap();
        assert_eq!(params, PricerConfig::default().defaults.to_params());

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Underlying price (S) [100]: "));
        assert!(shown.contains("Option type (call/put) [call]: "));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut input = Cursor::new("abc\n105\n");
        let mut output = Vec::new();
        let value = prompt_f64(&mut input, &mut output, "S", 100.0).unwrap();
        assert_eq!(value, 105.0);
        assert!(String::from_utf8(output).unwrap().contains("valid number"));

        let mut input = Cursor::new("straddle\n  PUT \n");
        let mut output = Vec::new();
        let kind = prompt_kind(&mut input, &mut output, OptionKind::Call).unwrap();
        assert_eq!(kind, OptionKind::Put);
        assert!(String::from_utf8(output).unwrap().contains("straddle"));
    }

    #[test]
    fn test_report_format() {
        let params = PricerConfig::default().defaults.to_params();
        let (price, greeks) = evaluate(&params, bs_greeks::DomainPolicy::Propagate).unwrap();
        let mut output = Vec::new();
        print_report(&mut output, &params, price, &greeks).unwrap();

        let report = String::from_utf8(output).unwrap();
        assert!(report.contains("r = 5.00%"));
        assert!(report.contains("sigma = 20.00%"));
        assert!(report.contains("CALL option price: 10.4506"));
        assert!(report.contains("DELTA: 0.6368"));
        assert!(report.contains("RHO: 53.2325"));
    }
}
