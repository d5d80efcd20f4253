//! Simulates automatic rounds and prints per-position statistics.
//!
//! ```text
//! RUST_LOG=debug cargo run --example simulate -- --rounds 1000 --win-increment 0.5
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{BetProgression, Increment, Position, Session, TableOptions};
use clap::Parser;

#[derive(Parser)]
#[command(about = "Simulate blackjack rounds with basic strategy and a betting progression")]
struct Args {
    /// Number of rounds to play.
    #[arg(short, long, default_value_t = 100)]
    rounds: usize,
    /// Number of positions at the table.
    #[arg(short, long, default_value_t = 1)]
    positions: usize,
    /// Decks in the shoe.
    #[arg(short, long, default_value_t = 6)]
    decks: u8,
    /// Starting bankroll of each position.
    #[arg(long, default_value_t = 100.0)]
    bankroll: f64,
    /// Units to bet after the first win.
    #[arg(long, default_value_t = 1.0)]
    initial_win: f64,
    /// Increment after each further win, e.g. `0.5`, `-1` or `*2`.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    win_increment: Increment,
    /// Units to bet after the first loss.
    #[arg(long, default_value_t = 1.0)]
    initial_lose: f64,
    /// Increment after each further loss.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lose_increment: Increment,
    /// Extra win pattern steps, e.g. `--win-step 2 --win-step *2`.
    #[arg(long = "win-step")]
    win_steps: Vec<String>,
    /// Extra lose pattern steps.
    #[arg(long = "lose-step")]
    lose_steps: Vec<String>,
    /// Shuffle seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn core::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let options = TableOptions::default().with_decks(args.decks);
    let max_units = options.max_bet / options.min_bet;

    let mut progression = BetProgression::new(
        args.initial_win,
        args.win_increment,
        args.initial_lose,
        args.lose_increment,
        max_units,
    )?;
    for step in &args.win_steps {
        progression.add_win_step(step)?;
    }
    for step in &args.lose_steps {
        progression.add_lose_step(step)?;
    }

    let positions = (0..args.positions)
        .map(|_| {
            Position::new(args.bankroll, options.min_bet, options.max_bet)
                .map(|position| position.with_progression(progression.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut session = Session::new(options, positions, seed)?;
    println!("Simulating {} hands...", args.rounds);
    session.simulate(args.rounds)?;

    for (index, position) in session.positions().iter().enumerate() {
        let stats = position.stats();
        println!("Player {} Strategy:", index + 1);
        println!("{}", position.progression());
        println!("-----Stats-----");
        println!("Total winnings: {}", stats.winnings);
        println!("Total hands won: {}", stats.wins);
        println!("Max win streak: {}", stats.max_win_streak);
        println!("Max balance: {}", stats.max_winnings);
        println!("Total hands lost: {}", stats.losses);
        println!("Max lose streak: {}", stats.max_lose_streak);
        println!("Min balance: {}", stats.min_winnings);
        println!();
    }

    Ok(())
}
