use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use swinemeeper::config::{DEFAULT_HEIGHT, DEFAULT_MINES, DEFAULT_WIDTH};
use swinemeeper::{Action, Game, GameConfig, GameError, GameStatus, Position};

/// Terminal minesweeper.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Number of mines
    #[arg(long, default_value_t = DEFAULT_MINES)]
    mines: u32,

    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Play(Position, Action),
    NewGame,
    Quit,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => println!("Thanks for playing!"),
        Err(e) => {
            eprintln!("Game error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<(), GameError> {
    let config = GameConfig::new(args.width, args.height, args.mines);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::with_rng(config, &mut rng)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(&game);
        prompt(&game);

        let Some(Ok(line)) = lines.next() else {
            return Ok(());
        };

        match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::NewGame) => game = Game::with_rng(config, &mut rng)?,
            Some(Command::Play(pos, action)) => match game.perform_action(pos, action) {
                Ok(next) => {
                    game = next;
                    announce(game.status());
                }
                Err(e) => println!("Error: {}", e),
            },
            None => println!("Commands: 'x y r' reveal, 'x y f' flag, 'n' new game, 'q' quit"),
        }
    }
}

fn parse_command(input: &str) -> Option<Command> {
    let mut parts = input.split_whitespace();
    let first = parts.next()?;

    match first {
        "q" => return Some(Command::Quit),
        "n" => return Some(Command::NewGame),
        _ => {}
    }

    let x = first.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let action = match parts.next()?.chars().next()? {
        'r' => Action::Reveal,
        'f' => Action::Flag,
        _ => return None,
    };

    Some(Command::Play(Position::new(x, y), action))
}

fn prompt(game: &Game) {
    match game.status() {
        GameStatus::InProgress => print!(
            "[{} mines left] Enter command (x y [r/f], n, q): ",
            game.mines_remaining()
        ),
        _ => print!("Enter 'n' for a new game or 'q' to quit: "),
    }
    let _ = io::stdout().flush();
}

fn announce(status: GameStatus) {
    match status {
        GameStatus::Won => println!("Congratulations! You won!"),
        GameStatus::Lost => println!("Game Over!"),
        GameStatus::InProgress => {}
    }
}

fn print_board(game: &Game) {
    let grid = game.grid();
    let (width, height) = grid.dimensions();
    let counts = grid.mine_counts();

    print!("    ");
    for x in 0..width {
        print!("{:>2} ", x);
    }
    println!();

    for y in 0..height {
        print!("{:>3} ", y);
        for x in 0..width {
            let glyph = match grid.cell(Position::new(x as i32, y as i32)) {
                Some(cell) if cell.is_hidden && cell.is_flagged => 'F',
                Some(cell) if cell.is_hidden => '#',
                Some(cell) if cell.is_mine => '*',
                Some(_) => match counts[[y as usize, x as usize]] {
                    0 => ' ',
                    n => char::from(b'0' + n),
                },
                None => '?',
            };
            print!("{:>2} ", glyph);
        }
        println!();
    }
}
