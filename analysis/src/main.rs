use std::{
    io::{self, stdout, Write},
    time::Instant,
};

use clap::Parser;
use cli::Args;
use log::{info, LevelFilter};
use mimalloc::MiMalloc;
use uttt::{Game, GameClock, Move, Player};
use uttt_ai::{evaluate_parallel, pit, Minimax, Rollouts};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;

fn main() -> io::Result<()> {
    let args = Args::parse();
    simple_logging::log_to_stderr(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("using seed {seed}");
    let mut engine = Minimax::seeded(args.depth, seed);

    if let Some(games) = args.pit {
        let tally = pit(&mut engine, &mut Rollouts::seeded(seed), games);
        println!(
            "depth {} minimax against weighted random: {} wins, {} draws, {} losses ({:.1}%)",
            args.depth,
            tally.wins,
            tally.draws,
            tally.losses,
            tally.win_rate() * 100.
        );
        return Ok(());
    }

    let mut game = match &args.position {
        Some(position) => match position.parse::<Game>() {
            Ok(game) => game,
            Err(err) => {
                println!("could not read position: {err}");
                return Ok(());
            }
        },
        None => Game::default(),
    };
    let engine_side = (!args.hotseat).then_some(if args.engine_first { Player::X } else { Player::O });
    let mut clock = args.clock.map(GameClock::start).unwrap_or_default();
    if clock.active().map_or(false, |player| player != game.to_move) {
        clock.switch_turn();
    }

    while !game.is_over() {
        clear_screen()?;
        println!("{}", game.pretty());
        if clock.control().is_some() {
            println!(
                "X {}  O {}",
                clock.format_remaining(Player::X),
                clock.format_remaining(Player::O)
            );
        }

        let started = Instant::now();
        let mov = if engine_side == Some(game.to_move) {
            engine.best_move(&game, args.depth)
        } else {
            ask_move(&game, &args, seed)?
        };
        clock.tick(started.elapsed());
        if let Some(player) = clock.flagged() {
            clock.stop();
            println!("{player} ran out of time, {} wins", player.next());
            return Ok(());
        }

        let Some(mov) = mov else { break };
        match game.play(mov) {
            Ok(()) => clock.switch_turn(),
            Err(err) => println!("{err}"),
        }
    }

    clock.stop();
    clear_screen()?;
    println!("{}", game.pretty());
    println!("{game}");
    Ok(())
}

/// Prompt until a move is entered. `None` means the user quit.
fn ask_move(game: &Game, args: &Args, seed: u64) -> io::Result<Option<Move>> {
    loop {
        print!("[leave empty for analysis, q to quit] {} to move: ", game.to_move);
        stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        match line {
            "" => print_analysis(game, args, seed),
            "q" | "quit" => return Ok(None),
            _ => match line.parse::<Move>() {
                Ok(mov) => match game.after(mov) {
                    Ok(_) => return Ok(Some(mov)),
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("{err}"),
            },
        }
    }
}

fn print_analysis(game: &Game, args: &Args, seed: u64) {
    let p = evaluate_parallel(game, args.simulations, args.threads, seed);
    println!(
        "{}: win {:.1}%  lose {:.1}%  draw {:.1}%",
        game.to_move,
        p.win * 100.,
        p.lose * 100.,
        p.draw * 100.
    );
    match Minimax::seeded(args.depth, seed).best_move(game, args.depth) {
        Some(mov) => println!("depth {} suggests {mov}", args.depth),
        None => println!("no legal moves"),
    }
}

fn clear_screen() -> io::Result<()> {
    print!("{esc}[2J{esc}[1;1H", esc = 27 as char);
    stdout().flush()
}
