use anyhow::{Context, Result};
use chessgame::{Board, BoardConfig, Coord};
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive chess board session", long_about = None)]
struct Args {
    /// Board edge length (standard setup requires 8)
    #[arg(long, default_value_t = 8)]
    size: i32,

    /// Let pieces in the way block sliding moves
    #[arg(long)]
    blocking: bool,

    /// Start from an empty board instead of the standard setup
    #[arg(long)]
    empty: bool,
}

fn print_help() {
    println!("Commands:");
    println!("  show               print the board");
    println!("  score              print material per color");
    println!("  select <sq>        list squares the piece on <sq> can move to");
    println!("  move <from> <to>   move a piece, e.g. 'move b2 b3'");
    println!("  json               print the board as JSON");
    println!("  quit");
}

fn parse_square(token: Option<&str>) -> Result<Coord> {
    let token = token.context("missing square")?;
    token.parse::<Coord>().with_context(|| format!("bad square '{}'", token))
}

fn cmd_select(board: &Board, from: Coord) {
    match board.piece_at(from) {
        Some(piece) => {
            let targets: Vec<String> = board.legal_destinations(from).iter().map(|c| c.to_string()).collect();
            println!("{} {} -> [{}]", piece.symbol(), from, targets.join(", "));
        }
        None => println!("{} is empty", from),
    }
}

fn cmd_move(board: &mut Board, from: Coord, to: Coord) -> Result<()> {
    let Some(path) = board.path_to(from, to) else {
        println!("rejected: {} cannot reach {}", from, to);
        return Ok(());
    };
    if board.move_piece(from, &path)? {
        println!("moved {} -> {}", from, to);
    } else {
        println!("rejected: {} is blocked", to);
    }
    Ok(())
}

fn run_command(board: &mut Board, line: &str) -> Result<bool> {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("show") => println!("{}", board),
        Some("score") => println!("{}", board.score_summary()),
        Some("select") => cmd_select(board, parse_square(tokens.next())?),
        Some("move") => {
            let from = parse_square(tokens.next())?;
            let to = parse_square(tokens.next())?;
            cmd_move(board, from, to)?;
        }
        Some("json") => println!("{}", serde_json::to_string_pretty(&board.snapshot())?),
        Some("quit") => return Ok(false),
        Some(_) => print_help(),
        None => {}
    }
    Ok(true)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = BoardConfig::with_size(args.size);
    if args.blocking { config = config.blocking(); }
    let mut board = Board::with_config(config).context("invalid --size")?;

    if !args.empty {
        if let Err(e) = board.initialize_standard_board() {
            log::error!("could not set up the board: {}", e);
        }
    }

    println!("{}", board);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 { break; }
        match run_command(&mut board, line.trim()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("error: {:#}", e),
        }
    }
    Ok(())
}
