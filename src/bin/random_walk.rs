use anyhow::Result;
use chessgame::{Board, BoardConfig, Coord};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "random_walk", about = "Play random legal moves from the start position")]
struct Args {
    /// Number of moves to play
    #[arg(long, default_value_t = 20)]
    plies: usize,

    /// RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Let pieces in the way block sliding moves
    #[arg(long)]
    blocking: bool,

    /// Print the board after every move
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = BoardConfig::default();
    if args.blocking { config = config.blocking(); }
    let mut board = Board::with_config(config)?;
    board.standard_setup()?;
    let mut rng = SmallRng::seed_from_u64(args.seed);

    for ply in 0..args.plies {
        let movable: Vec<(Coord, Coord)> = board
            .pieces()
            .keys()
            .flat_map(|&from| board.legal_destinations(from).into_iter().map(move |to| (from, to)))
            .collect();
        let Some(&(from, to)) = movable.choose(&mut rng) else {
            println!("no legal moves left after {} plies", ply);
            break;
        };
        let Some(path) = board.path_to(from, to) else { continue };
        let moved = board.move_piece(from, &path)?;
        println!("{:>3}. {} {} -> {}{}", ply + 1, board.piece_at(to).map_or('?', |p| p.symbol()), from, to, if moved { "" } else { " (rejected)" });
        if args.verbose { println!("{}\n", board); }
    }

    println!("\n{}\n\n{}", board, board.score_summary());
    Ok(())
}
