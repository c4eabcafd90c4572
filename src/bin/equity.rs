//! Range-vs-range Hold'em equity calculator.
//!
//! Usage:
//!   cargo run --release --bin equity -- [OPTIONS] <RANGE> <RANGE> ...
//!
//! Options:
//!   --board <CARDS>      Known board cards, e.g. Kc7s2d (default: none)
//!   --config <FILE>      Enumerator configuration JSON file (optional)
//!   --threads <N>        Number of threads (implies --parallel)
//!   --parallel           Shard the enumeration across threads
//!   --progress           Show a progress bar
//!   --json <FILE>        Write the equity summary as JSON

use std::env;

use showdown_equity::cards::CardSet;
use showdown_equity::equity::{EnumeratorConfig, EquitySummary, ShowdownEnumerator};
use showdown_equity::eval::HoldemEvaluator;
use showdown_equity::range::{parse_range, HandDistribution};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut board_text = String::new();
    let mut config_file: Option<String> = None;
    let mut threads: usize = 0;
    let mut parallel = false;
    let mut progress = false;
    let mut json_file: Option<String> = None;
    let mut ranges: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--board" | "-b" => {
                i += 1;
                if i < args.len() {
                    board_text = args[i].clone();
                }
            }
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--threads" | "-t" => {
                i += 1;
                if i < args.len() {
                    threads = args[i].parse().unwrap_or(0);
                }
            }
            "--parallel" | "-p" => {
                parallel = true;
            }
            "--progress" => {
                progress = true;
            }
            "--json" | "-j" => {
                i += 1;
                if i < args.len() {
                    json_file = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            arg if arg.starts_with('-') && arg != "-" => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                return;
            }
            _ => ranges.push(args[i].clone()),
        }
        i += 1;
    }

    if ranges.is_empty() {
        eprintln!("At least one range is required");
        print_help();
        return;
    }

    let board = match CardSet::from_str(&board_text) {
        Some(board) => board,
        None => {
            eprintln!("Invalid board: {}", board_text);
            return;
        }
    };

    // Load or create configuration
    let mut config = if let Some(path) = &config_file {
        println!("Loading configuration from: {}", path);
        match EnumeratorConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return;
            }
        }
    } else {
        EnumeratorConfig::default()
    };
    if parallel || threads > 0 {
        config = config.with_parallel(true);
    }
    if threads > 0 {
        config = config.with_threads(threads);
    }
    if progress {
        config = config.with_progress(true);
    }

    println!("=================================================");
    println!("  Hold'em Equity");
    println!("=================================================");
    println!();
    println!("Board: {}", board);
    println!(
        "Threads: {}",
        match (config.parallel, config.num_threads) {
            (false, _) => "1".to_string(),
            (true, None) => "auto".to_string(),
            (true, Some(n)) => n.to_string(),
        }
    );
    println!();

    let mut dists = Vec::with_capacity(ranges.len());
    for (player, range) in ranges.iter().enumerate() {
        let expanded = parse_range(range);
        match HandDistribution::parse(&expanded) {
            Ok(dist) => {
                println!("Player {}: {} ({} hands)", player + 1, range, dist.len());
                println!("  {}", expanded);
                dists.push(dist);
            }
            Err(e) => {
                eprintln!("Error in range {}: {}", range, e);
                return;
            }
        }
    }
    println!();

    let evaluator = HoldemEvaluator::new();
    let enumerator = ShowdownEnumerator::with_config(config);
    let (results, stats) =
        match enumerator.calculate_equity_with_stats(&dists, &board, Some(&evaluator)) {
            Ok(out) => out,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        };

    let summary = EquitySummary::from_results(&results);

    println!("=== Results ===");
    println!();
    println!("{:<8} {:>9} {:>9} {:>9}", "Player", "Win", "Tie", "Equity");
    for (player, share) in summary.players.iter().enumerate() {
        println!(
            "{:<8} {:>8.3}% {:>8.3}% {:>8.3}%",
            player + 1,
            share.win * 100.0,
            share.tie * 100.0,
            share.equity * 100.0
        );
    }
    println!();
    println!("Outer tuples: {} ({} skipped)", stats.outer_visited, stats.skipped);
    println!("Deals evaluated: {}", stats.deals);
    println!(
        "Time: {:.3}s ({:.0} deals/s)",
        stats.elapsed_seconds, stats.deals_per_second
    );

    if let Some(path) = json_file {
        println!();
        println!("Saving summary to: {}", path);
        let saved = serde_json::to_string_pretty(&summary)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        match saved {
            Ok(_) => println!("Summary saved successfully!"),
            Err(e) => eprintln!("Error saving summary: {}", e),
        }
    }
}

fn print_help() {
    println!("Range-vs-range Hold'em equity calculator");
    println!();
    println!("Usage: equity [OPTIONS] <RANGE> <RANGE> ...");
    println!();
    println!("Ranges:");
    println!("  Comma-separated tokens: AsKh, AA, AK, AKs, AKo, TT+, AT+, AQs+,");
    println!("  KTo+, 22-66, A2s-A5s, or . for any hand");
    println!();
    println!("Options:");
    println!("  -b, --board <CARDS>      Known board cards (default: none)");
    println!("  -c, --config <FILE>      Enumerator configuration JSON file");
    println!("  -t, --threads <N>        Number of threads (implies --parallel)");
    println!("  -p, --parallel           Shard the enumeration across threads");
    println!("      --progress           Show a progress bar");
    println!("  -j, --json <FILE>        Write the equity summary as JSON");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  # Aces against any two cards, preflop");
    println!("  equity AA .");
    println!();
    println!("  # Three-way on a flop, four threads");
    println!("  equity --board Kc7s2d --threads 4 AKs,QQ+ JTs 77-99");
    println!();
    println!("Set RUST_LOG=debug to see range expansion and skipped tokens.");
}
