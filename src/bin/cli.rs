//! Options Flow CLI
//!
//! Walks the analytics pipeline on synthetic data: pricing, implied vol,
//! per-quote classification, and the batch summary.

use options_flow::prelude::*;

fn main() {
    println!("Options Flow Analytics");
    println!("======================\n");

    // Example: Black-Scholes pricing
    let spot = 150.0;
    let strike = 155.0;
    let time = 30.0 / 365.0;
    let rate = 0.045;
    let vol = 0.25;

    println!("Black-Scholes Pricing Example:");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Time: {:.0} days", time * 365.0);
    println!("  Rate: {:.1}%", rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let call_price = bs_price(spot, strike, time, rate, vol, OptionType::Call);
    let put_price = bs_price(spot, strike, time, rate, vol, OptionType::Put);

    println!("Option Prices:");
    println!("  Call: ${:.2}", call_price);
    println!("  Put: ${:.2}", put_price);

    let greeks = bs_greeks(spot, strike, time, rate, vol, OptionType::Call);
    println!("\nCall Greeks:");
    println!("  Delta: {:.4}", greeks.delta);
    println!("  Gamma: {:.6}", greeks.gamma);
    println!("  Theta: {:.4}/day", greeks.theta);
    println!("  Vega: {:.4}", greeks.vega);
    println!("  Rho: {:.4}", greeks.rho);

    // Recover the vol from the model price
    let iv = implied_volatility(call_price, spot, strike, time, rate, OptionType::Call);
    println!("\nImplied vol from ${:.2} call: {:.2}%", call_price, iv * 100.0);

    // Classify a sample block trade
    let mut quote = OptionQuote::new("DEMO", "DEMO-C155", "2026-09-18", strike, OptionType::Call);
    quote.spot = spot;
    quote.last = call_price;
    quote.bid = call_price - 0.05;
    quote.ask = call_price + 0.05;
    quote.volume = 750;
    quote.open_interest = 1_200;
    quote.implied_vol = vol;

    let analysis = FlowClassifier::new().classify(&quote, 150.0);
    println!("\nSample Trade Classification:");
    println!("  Mechanism: {}", analysis.mechanism.label());
    println!("  Size: {}", analysis.size_tier.label());
    println!("  Sentiment: {}", analysis.sentiment.label());
    println!("  Unusual score: {:.1}/100", analysis.unusual_score);
    println!("  Confidence: {:.2}", analysis.confidence);

    // Aggregate a tiny batch
    let mut batch = QuoteBatch::new("DEMO", spot);
    batch.add(quote);

    let mut put = OptionQuote::new("DEMO", "DEMO-P145", "2026-09-18", 145.0, OptionType::Put);
    put.last = put_price;
    put.volume = 1_100;
    put.open_interest = 800;
    put.implied_vol = 0.29;
    batch.add(put);

    let summary = FlowAnalyzer::new().analyze(&batch);
    println!("\nBatch Summary:");
    println!("  Contracts: {}", summary.contracts);
    println!("  Total premium: ${:.0}", summary.total_premium);
    println!("  Max pain: ${:.2}", summary.max_pain.strike);
    println!(
        "  Volume P/C: {:.2} ({})",
        summary.ratios.volume_ratio,
        summary.ratios.sentiment.label()
    );
    println!(
        "  Institutional probability: {:.0}%",
        summary.institutional.probability
    );
}
