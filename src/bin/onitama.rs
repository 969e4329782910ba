//! Random-versus-random Onitama simulator.
//!
//! Plays seeded games between two random agents and reports each result.

use clap::Parser;
use tracing::{info, warn};

use onitama::{play_match, Agent, Game, GameConfig, GameRng, MatchEnd, PlayerId, PlayerMap, RandomAgent};

#[derive(Parser)]
#[command(name = "onitama")]
#[command(about = "Play Onitama games between random agents")]
struct Args {
    /// Board size (odd, at least 5)
    #[arg(short, long, default_value_t = 5)]
    size: usize,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Base seed; game N uses a stream forked from it
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop a game after this many turns (0 = unlimited)
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Print the final board of each game
    #[arg(long)]
    show_board: bool,

    /// Print each match summary as a JSON line
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GameConfig::default()
        .with_board_size(args.size)
        .with_seed(args.seed)
        .with_max_turns(args.max_turns);
    config.validate()?;
    info!(?config, games = args.games, "starting simulation");

    let mut seeds = GameRng::new(config.seed);
    let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
    let mut unfinished = 0u32;

    for game_num in 1..=args.games {
        let mut game = Game::from_config(&config)?;
        let mut agents: PlayerMap<Box<dyn Agent>> = PlayerMap::from_pair(
            Box::new(RandomAgent::from_rng(seeds.fork())) as Box<dyn Agent>,
            Box::new(RandomAgent::from_rng(seeds.fork())) as Box<dyn Agent>,
        );

        let summary = play_match(&mut game, &mut agents, config.max_turns);

        match summary.end {
            MatchEnd::Victory(victory) => {
                wins[victory.winner] += 1;
                println!(
                    "game {game_num}: {} wins by {:?} after {} turns",
                    game.player(victory.winner),
                    victory.condition,
                    summary.turns()
                );
            }
            other => {
                unfinished += 1;
                println!("game {game_num}: no winner ({other:?}) after {} turns", summary.turns());
            }
        }

        if args.show_board {
            print!("{}", game.get_board_string());
            print!("{}", game.get_styles_string());
        }
        if args.json {
            match serde_json::to_string(&summary) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("failed to encode summary for game {game_num}: {e}"),
            }
        }
    }

    println!(
        "{}: {}  {}: {}  unfinished: {unfinished}",
        config.player_names[0],
        wins[PlayerId::FIRST],
        config.player_names[1],
        wins[PlayerId::SECOND],
    );
    Ok(())
}
