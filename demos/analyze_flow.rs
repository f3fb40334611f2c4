//! Example: Full flow analysis on a synthetic chain
//!
//! Run with: cargo run --example analyze_flow

use options_flow::prelude::*;

fn main() {
    let spot = 150.0;
    let mut batch = QuoteBatch::new("DEMO", spot);

    // Build a small synthetic chain: a whale-sized ATM call block, a sweep in
    // the OTM puts, and a handful of retail lots
    let rows: [(&str, OptionType, f64, f64, f64, f64, u64, u64, f64); 5] = [
        // (contract, type, strike, last, bid, ask, volume, oi, iv)
        ("DEMO-C150", OptionType::Call, 150.0, 4.20, 4.10, 4.30, 2_500, 4_000, 0.26),
        ("DEMO-C155", OptionType::Call, 155.0, 2.10, 2.05, 2.15, 300, 2_500, 0.24),
        ("DEMO-P145", OptionType::Put, 145.0, 1.80, 1.65, 1.80, 300, 1_000, 0.31),
        ("DEMO-P140", OptionType::Put, 140.0, 0.95, 0.90, 1.00, 80, 3_200, 0.34),
        ("DEMO-C160", OptionType::Call, 160.0, 0.85, 0.80, 0.90, 45, 5_100, 0.22),
    ];

    for (contract, option_type, strike, last, bid, ask, volume, oi, iv) in rows {
        let mut q = OptionQuote::new("DEMO", contract, "2026-09-18", strike, option_type);
        q.last = last;
        q.bid = bid;
        q.ask = ask;
        q.volume = volume;
        q.open_interest = oi;
        q.implied_vol = iv;
        batch.add(q);
    }

    let summary = FlowAnalyzer::new().analyze(&batch);

    println!("=== Flow Analysis: {} ===\n", summary.symbol);
    println!("Spot: ${:.2}", summary.spot);
    println!("Contracts: {}", summary.contracts);
    println!("Total premium: ${:.0}", summary.total_premium);
    println!("Unusual activity: {}", summary.unusual_count);

    println!("\n--- Per-Contract Flow ---\n");
    for record in &summary.flows {
        println!(
            "{}: {} | {} | {} | score {:.0} | confidence {:.2}",
            record.contract,
            record.analysis.mechanism.label(),
            record.analysis.size_tier.label(),
            record.analysis.sentiment.label(),
            record.analysis.unusual_score,
            record.analysis.confidence
        );
    }

    println!("\n--- Batch ---\n");
    println!(
        "Volume P/C: {:.2} ({})",
        summary.ratios.volume_ratio,
        summary.ratios.sentiment.label()
    );
    println!("Max pain: ${:.2}", summary.max_pain.strike);
    println!("Net delta: {:.0}", summary.greeks.total_delta);
    println!("Delta exposure: ${:.0}", summary.greeks.delta_exposure);
    println!(
        "Institutional probability: {:.0}%",
        summary.institutional.probability
    );
    if let Some(stats) = &summary.iv_surface.stats {
        println!(
            "IV mean {:.1}%, skew {:+.3} ({})",
            stats.mean * 100.0,
            summary.iv_surface.skew,
            summary.iv_surface.reading.label()
        );
    }
}
