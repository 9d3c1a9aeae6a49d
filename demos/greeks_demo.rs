// demos/greeks_demo.rs

//! Demonstration of Black-Scholes pricing and Greeks
//!
//! This example shows how to:
//! 1. Price a call and a put from the same contract parameters
//! 2. Compute the five Greeks and check put-call parity
//! 3. Tabulate a greek across a spot ladder
//! 4. See the two domain policies on a zero-maturity contract

use anyhow::Result;
use bs_greeks::plotting::greek_curve;
use bs_greeks::{
    evaluate, price, BlackScholes, DomainPolicy, GreekKind, OptionKind, OptionParams,
};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing and Greeks Demo");
    println!("=====================================");

    let call = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
    let put = call.with_kind(OptionKind::Put);

    println!("\nStep 1: Pricing...");
    println!(
        "  S={:.2} K={:.2} T={:.2} r={:.2}% sigma={:.2}%",
        call.spot,
        call.strike,
        call.maturity,
        call.rate * 100.0,
        call.volatility * 100.0
    );
    println!("  Call price: {:.4}", call.price());
    println!("  Put price:  {:.4}", put.price());

    let parity_gap = call.price() - put.price() - (call.spot - call.strike * (-call.rate * call.maturity).exp());
    println!("  Put-call parity residual: {:.2e}", parity_gap);

    println!("\nStep 2: Greeks...");
    println!("{:<8} {:>12} {:>12}", "Greek", "Call", "Put");
    println!("{}", "-".repeat(34));
    let (call_greeks, put_greeks) = (call.greeks(), put.greeks());
    for greek in GreekKind::ALL {
        println!(
            "{:<8} {:>12.4} {:>12.4}",
            greek.label(),
            call_greeks.get(greek),
            put_greeks.get(greek)
        );
    }

    println!("\nStep 3: Delta ladder (0.5S to 1.5S)...");
    for (spot, delta) in greek_curve(&BlackScholes, &call, GreekKind::Delta, 0.5, 1.5, 11) {
        println!("  S={:>7.2}  delta={:.4}", spot, delta);
    }

    println!("\nStep 4: Domain policies at T=0...");
    let expiring = OptionParams {
        maturity: 0.0,
        ..call
    };
    let (p, _) = evaluate(&expiring, DomainPolicy::Propagate)?;
    println!("  propagate: price = {}", p);
    match evaluate(&expiring, DomainPolicy::Strict) {
        Ok((p, _)) => println!("  strict:    price = {}", p),
        Err(e) => println!("  strict:    {}", e),
    }

    // The string boundary accepts any letter case and nothing else
    println!("\n  price(.., \"PUT\") = {:.4}", price(100.0, 100.0, 1.0, 0.05, 0.2, "PUT")?);
    if let Err(e) = price(100.0, 100.0, 1.0, 0.05, 0.2, "straddle") {
        println!("  price(.., \"straddle\") -> {}", e);
    }

    Ok(())
}
