//! Plays a few strategies side by side and prints their mean final bank.
//!
//! ```text
//! cargo run --example simulate -- --realisations 20 --shoes 10
//! RUST_LOG=debug cargo run --example simulate -- --realisations 1 --shoes 1
//! ```

use bjsim::{BasicStrategist, Counter, Game, Sticker, Strategy, TableOptions};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "simulate",
    about = "Compare blackjack strategies over many shoes"
)]
struct Args {
    /// Independent sessions to average over
    #[arg(long, default_value_t = 100)]
    realisations: u64,

    /// Shoes played per session
    #[arg(long, default_value_t = 10)]
    shoes: usize,

    /// Starting bank of every player
    #[arg(long, default_value_t = 100_000)]
    bank: usize,

    /// Decks per shoe
    #[arg(long, default_value_t = 6)]
    decks: u8,

    /// Cards dealt before the cut card
    #[arg(long, default_value_t = 250)]
    penetration: usize,

    /// Seed of the first session; later sessions count up from it
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn contenders() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(Sticker::default()),
        Box::new(BasicStrategist::default()),
        Box::new(Counter::default()),
    ]
}

#[derive(Default)]
struct Tally {
    name: String,
    final_banks: Vec<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let options = TableOptions::default()
        .with_decks(args.decks)
        .with_penetration(args.penetration);

    let mut tallies: Vec<Tally> = contenders()
        .iter()
        .map(|strategy| Tally {
            name: strategy.name().to_owned(),
            ..Tally::default()
        })
        .collect();

    for realisation in 0..args.realisations {
        let mut game = match Game::new(options.clone(), args.seed + realisation) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("invalid table options: {err}");
                std::process::exit(1);
            }
        };

        for (seat, strategy) in contenders().into_iter().enumerate() {
            let id = game.join_boxed(strategy, args.bank);
            if let Err(err) = game.add_player_to_seat(id, seat) {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }

        match game.play(args.shoes) {
            Ok(rounds) => log::info!("session {realisation}: {rounds} rounds"),
            Err(err) => {
                eprintln!("session {realisation} aborted: {err}");
                continue;
            }
        }

        for (tally, player) in tallies.iter_mut().zip(game.players()) {
            tally.final_banks.push(player.bank());
        }
    }

    println!(
        "{} sessions of {} shoes, starting bank {}",
        args.realisations, args.shoes, args.bank
    );
    for tally in &tallies {
        if tally.final_banks.is_empty() {
            continue;
        }
        let mean = tally.final_banks.iter().sum::<usize>() as f64 / tally.final_banks.len() as f64;
        let best = tally.final_banks.iter().max().copied().unwrap_or_default();
        let worst = tally.final_banks.iter().min().copied().unwrap_or_default();
        println!(
            "{:<16} mean {mean:>12.1}   best {best:>8}   worst {worst:>8}",
            tally.name
        );
    }
}
