use std::process::ExitCode;

use clap::Parser;
use river_equity::core::{EquityError, HandCategory, parse_cards};
use river_equity::holdem::{
    BeatingHands, EquityResult, HandLabel, RiverSpot, SimulationConfig, approx_multiway,
    beating_hands, exact_equity, label, monte_carlo_equity,
};
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

/// How many example holdings to print per category.
const SHOW_PER_CATEGORY: usize = 120;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "river-equity")]
#[command(about = "Score a river hand and estimate how often it holds up")]
struct Cli {
    /// Hero hole cards, e.g. "AsKs"
    hero: String,
    /// The five board cards, e.g. "KhKd5c5d2s"
    board: String,

    /// Total players at the table, hero included
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,

    /// Monte carlo trials
    #[arg(short, long, default_value_t = river_equity::holdem::DEFAULT_TRIALS)]
    trials: usize,

    /// Seed for a repeatable simulation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Use the independence approximation instead of simulating
    #[arg(long)]
    approx: bool,

    /// List the opponent holdings that beat the hero
    #[arg(long)]
    beating: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// More logging, repeat for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(serde::Serialize)]
struct Multiway {
    method: &'static str,
    opponents: usize,
    beaten: f64,
    tied_only: f64,
}

#[derive(serde::Serialize)]
struct Report {
    hand: HandLabel,
    heads_up: EquityResult,
    multiway: Multiway,
    #[serde(skip_serializing_if = "Option::is_none")]
    beating: Option<BeatingHands>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_report(cli: &Cli) -> Result<Report, EquityError> {
    let spot = RiverSpot::from_cards(&parse_cards(&cli.hero)?, &parse_cards(&cli.board)?)?;

    let mut config = SimulationConfig::default()
        .with_players(usize::from(cli.players))?
        .with_trials(cli.trials)
        .with_monte_carlo(!cli.approx);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    event!(Level::DEBUG, ?config, "running");

    let heads_up = exact_equity(&spot);
    let multiway = if config.use_monte_carlo && config.opponents > 0 {
        let result = monte_carlo_equity(&spot, &config)?;
        Multiway {
            method: "monte_carlo",
            opponents: config.opponents,
            beaten: result.loss_probability(),
            tied_only: result.tie_probability(),
        }
    } else {
        let approx = approx_multiway(&heads_up, config.opponents);
        Multiway {
            method: "approximation",
            opponents: config.opponents,
            beaten: approx.beaten,
            tied_only: approx.tied_only,
        }
    };

    Ok(Report {
        hand: label(&spot.hero_score()),
        heads_up,
        multiway,
        beating: cli.beating.then(|| beating_hands(&spot)),
    })
}

fn print_text(report: &Report) {
    let approx = if report.multiway.method == "approximation" {
        " (approx.)"
    } else {
        ""
    };
    println!("Your hand on the river: {}", report.hand);
    println!(
        "Possible holdings for 1 opponent: {}  ·  Beat you: {}  ·  Tie: {}",
        report.heads_up.total(),
        report.heads_up.losses,
        report.heads_up.ties
    );
    println!(
        "P(at least one of {} opponents beats you){}: {:.2}%",
        report.multiway.opponents,
        approx,
        report.multiway.beaten * 100.0
    );
    println!(
        "P(tie and nobody beats you){}: {:.2}%",
        approx,
        report.multiway.tied_only * 100.0
    );

    if let Some(beating) = &report.beating {
        println!();
        println!("Holdings that beat you (1 opponent):");
        for (category, hands) in beating.iter() {
            print_group(category, hands);
        }
    }
}

fn print_group(category: HandCategory, hands: &[[river_equity::core::Card; 2]]) {
    let shown: Vec<String> = hands
        .iter()
        .take(SHOW_PER_CATEGORY)
        .map(|[a, b]| format!("{a}{b}"))
        .collect();
    let more = if hands.len() > SHOW_PER_CATEGORY {
        " ..."
    } else {
        ""
    };
    println!(
        "  {} - {} holdings: {}{}",
        river_equity::holdem::category_name(category),
        hands.len(),
        shown.join(", "),
        more
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = match build_report(&cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_text(&report);
    }
    ExitCode::SUCCESS
}
