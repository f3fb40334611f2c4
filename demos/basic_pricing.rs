//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use options_flow::prelude::*;

fn main() {
    // Option parameters
    let spot = 150.0;
    let strike = 155.0;
    let time = 30.0 / 365.0; // 30 days
    let rate = 0.045; // 4.5% risk-free rate
    let vol = 0.25; // 25% volatility

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Time:     {:.0} days", time * 365.0);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let call_price = bs_price(spot, strike, time, rate, vol, OptionType::Call);
    println!("Call Price: ${:.4}", call_price);

    let put_price = bs_price(spot, strike, time, rate, vol, OptionType::Put);
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = spot - strike * (-rate * time).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    // Greeks for the call
    println!("\n=== Greeks (Call) ===\n");
    let greeks = bs_greeks(spot, strike, time, rate, vol, OptionType::Call);
    println!("Delta:  {:.4}", greeks.delta);
    println!("Gamma:  {:.4}", greeks.gamma);
    println!("Theta:  {:.4} per day", greeks.theta);
    println!("Vega:   {:.4} per vol point", greeks.vega);
    println!("Rho:    {:.4}", greeks.rho);

    // Implied volatility round trip
    println!("\n=== Implied Volatility ===\n");
    let market_price = call_price + 0.50; // Simulated richer market price
    let iv = implied_volatility(market_price, spot, strike, time, rate, OptionType::Call);
    println!(
        "Market price ${:.4} implies vol: {:.2}%",
        market_price,
        iv * 100.0
    );
}
