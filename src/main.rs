#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    greeting, init_logging, render_boards, separator, AiPlayer, CliPlayer, Match, MatchConfig,
    MatchState, ShotOutcome, Side, GRID_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = GRID_SIZE, help = "Edge length of both boards (6-9)")]
    size: usize,
    #[arg(long, help = "Show the computer's ships")]
    reveal: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = MatchConfig {
        hide_enemy: !cli.reveal,
        ..MatchConfig::with_size(cli.size)
    };
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let user = Box::new(CliPlayer::stdio());
    let comp = Box::new(AiPlayer::new(config.size));
    let mut game = Match::generate(user, comp, &config, rng);
    log::info!("match started on a {}x{} grid", config.size, config.size);

    print!("{}", greeting(config.size));
    loop {
        println!("{}", separator(config.size));
        print!(
            "{}",
            render_boards(game.board(Side::First), game.board(Side::Second), config.hide_enemy)
        );
        println!("{}", separator(config.size));

        let side = match game.state() {
            MatchState::AwaitingTurn(side) => side,
            MatchState::Finished(Side::First) => {
                println!("User won!\nGame is over!");
                break;
            }
            MatchState::Finished(Side::Second) => {
                println!("Computer won!\nGame is over!");
                break;
            }
        };

        match side {
            Side::First => println!("User shot!"),
            Side::Second => println!("Comp shot!"),
        }
        let report = game.step()?;
        if report.side == Side::Second && report.outcome != ShotOutcome::Miss {
            println!("Comp goes again.");
        }
    }
    Ok(())
}
