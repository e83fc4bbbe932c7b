use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{random_board, AiPlayer, Match, MatchConfig, MatchState, Side, TurnReport};
use serde::Serialize;

#[derive(Serialize)]
struct PlayerSummary {
    shots: usize,
    ships_lost: usize,
}

#[derive(Serialize)]
struct SimSummary {
    player1: PlayerSummary,
    player2: PlayerSummary,
    turns: usize,
    winner: Side,
    reports: Vec<TurnReport>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    sea_battle::init_logging();
    let config = MatchConfig::default();

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let b1 = random_board(&mut rng1, &config);
    let b2 = random_board(&mut rng2, &config);

    let p1 = Box::new(AiPlayer::new(config.size));
    let p2 = Box::new(AiPlayer::new(config.size));
    let mut game = Match::new(p1, b1, p2, b2, rng1);

    let mut reports = Vec::new();
    let winner = loop {
        if let MatchState::Finished(winner) = game.state() {
            break winner;
        }
        reports.push(game.step()?);
    };

    let summary_for = |side: Side| PlayerSummary {
        shots: game.shots(side),
        ships_lost: game.board(side).destroyed(),
    };
    let summary = SimSummary {
        player1: summary_for(Side::First),
        player2: summary_for(Side::Second),
        turns: game.turns(),
        winner,
        reports,
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
