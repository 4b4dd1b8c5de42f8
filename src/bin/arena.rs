use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, subscriber::set_global_default, Level};
use tracing_subscriber::FmtSubscriber;

use connect_four_arena::ai::Agent;
use connect_four_arena::arena::{derive_seed, Tournament};
use connect_four_arena::config::{AgentConfig, AppConfig};
use connect_four_arena::game::Player;

/// Play a Connect Four tournament between two configured agents.
#[derive(Parser)]
#[command(name = "arena", about = "Pit two Connect Four agents against each other")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "arena.toml")]
    config: PathBuf,

    /// Override number of matches
    #[arg(long)]
    matches: Option<usize>,

    /// Override the base seed
    #[arg(long)]
    seed: Option<u64>,

    /// Log every match, not just progress
    #[arg(short, long)]
    verbose: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    set_global_default(subscriber).context("installing log subscriber")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(matches) = cli.matches {
        if matches == 0 {
            bail!("--matches must be > 0");
        }
        config.tournament.num_matches = matches;
    }
    if cli.seed.is_some() {
        config.tournament.seed = cli.seed;
    }

    let base_seed = config.tournament.seed;
    let mut one = build_agent(&config.player_one, base_seed.map(|s| derive_seed(s, 1)))
        .context("building player one")?;
    let mut two = build_agent(&config.player_two, base_seed.map(|s| derive_seed(s, 2)))
        .context("building player two")?;

    let tournament = Tournament::new(config.tournament.clone());
    let metrics = tournament.run(&mut *one, &mut *two);

    save_memory(&config.player_one, &*one)?;
    save_memory(&config.player_two, &*two)?;

    let totals = metrics.totals();
    println!("-------------------------------------------");
    println!("Matches played: {}", totals.matches);
    for player in [Player::One, Player::Two] {
        let agent = match player {
            Player::One => &*one,
            Player::Two => &*two,
        };
        let wins = totals.wins(player);
        println!(
            "Player {} ({}): {} wins ({:.1}%)",
            player,
            agent.name(),
            wins,
            percent(wins, totals.matches)
        );
    }
    println!("Ties: {} ({:.1}%)", totals.ties, percent(totals.ties, totals.matches));
    if totals.errors > 0 {
        println!("Errors: {}", totals.errors);
        bail!("tournament stopped after an illegal move");
    }

    Ok(())
}

fn build_agent(config: &AgentConfig, seed: Option<u64>) -> Result<Box<dyn Agent>> {
    let agent = config.build(seed)?;
    info!(agent = agent.name(), ?seed, "agent ready");
    Ok(agent)
}

/// Write back the experience store of an agent that has a memory file.
fn save_memory(config: &AgentConfig, agent: &dyn Agent) -> Result<()> {
    let (Some(path), Some(store)) = (&config.memory, agent.experience()) else {
        return Ok(());
    };
    store
        .save(path)
        .with_context(|| format!("saving experience to {}", path.display()))?;
    info!(path = %path.display(), positions = store.len(), "experience saved");
    Ok(())
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}
