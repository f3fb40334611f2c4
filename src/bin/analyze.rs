//! Live symbol analysis
//!
//! Fetches the nearest-expiration option chain for a symbol (cached for 15
//! minutes) and prints the full flow analysis.
//!
//! Usage: analyze SYMBOL [SYMBOL...]

use options_flow::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let symbols: Vec<String> = std::env::args().skip(1).collect();
    if symbols.is_empty() {
        eprintln!("Usage: analyze SYMBOL [SYMBOL...]");
        std::process::exit(1);
    }

    let fetcher = match CachedFetcher::new(CacheConfig::default()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to set up cache: {}", e);
            std::process::exit(1);
        }
    };
    let analyzer = FlowAnalyzer::new();

    for symbol in &symbols {
        let symbol = symbol.to_uppercase();
        match fetcher.get_batch(&symbol) {
            Ok(batch) => print_summary(&analyzer.analyze(&batch)),
            Err(e) => eprintln!("{}: analysis failed: {}", symbol, e),
        }
    }
}

fn print_summary(summary: &PortfolioSummary) {
    println!("\n=== {} ===", summary.symbol);
    println!("Spot: ${:.2}", summary.spot);
    println!("Contracts: {}", summary.contracts);
    println!("Total premium: ${:.0}", summary.total_premium);
    println!("Unusual activity: {}", summary.unusual_count);

    println!("\nPut/Call:");
    println!(
        "  Volume: {:.3} ({})",
        summary.ratios.volume_ratio,
        summary.ratios.sentiment.label()
    );
    println!("  Open interest: {:.3}", summary.ratios.oi_ratio);
    println!("  Premium: {:.3}", summary.ratios.premium_ratio);

    println!("\nMax pain: ${:.2}", summary.max_pain.strike);

    println!("\nPortfolio Greeks:");
    println!("  Delta: {:.0}", summary.greeks.total_delta);
    println!("  Gamma: {:.2}", summary.greeks.total_gamma);
    println!("  Theta: ${:.0}/day", summary.greeks.theta_decay);
    println!("  Delta exposure: ${:.0}", summary.greeks.delta_exposure);

    println!("\nFlow:");
    println!("  Blocks: {}", summary.breakdown.block_trades);
    println!("  Sweeps: {}", summary.breakdown.sweep_trades);
    println!("  Singles: {}", summary.breakdown.single_trades);
    println!("  Whale flows: {}", summary.breakdown.whale_flows);

    println!(
        "\nInstitutional probability: {:.0}%",
        summary.institutional.probability
    );
    println!(
        "  Large trades: {} (${:.0})",
        summary.institutional.large_trade_count, summary.institutional.large_trade_premium
    );
    println!(
        "  Multi-strike expirations: {}",
        summary.institutional.multi_strike.len()
    );

    if let Some(stats) = &summary.iv_surface.stats {
        println!("\nImplied Volatility:");
        println!("  Mean: {:.1}%", stats.mean * 100.0);
        println!(
            "  Range: {:.1}% - {:.1}%",
            stats.min * 100.0,
            stats.max * 100.0
        );
        println!(
            "  Skew: {:+.3} ({})",
            summary.iv_surface.skew,
            summary.iv_surface.reading.label()
        );
    }
}
