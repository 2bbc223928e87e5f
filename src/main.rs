//! CLI for maze generation, solving and walking

use std::io::{self, BufRead, Stdout, Write};

use clap::{Parser, ValueEnum};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::ExecutableCommand;

use maze_walk::navigator::{Move, Navigator, Outcome};
use maze_walk::Maze;

/// Generate a random maze, then walk it with WASD or watch it being solved
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height; must be odd and at least 3
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Maze width; must be odd and at least 3
    #[arg(long, default_value_t = 21)]
    cols: usize,

    /// Random seed; omit for a different maze on every run
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the menu and pick a mode directly
    #[arg(long, value_enum)]
    mode: Option<Mode>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Walk the maze yourself with the WASD keys
    Manual,
    /// Let the depth-first solver find the way out
    Auto,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut maze = Maze::new(args.rows, args.cols, args.seed)?;

    let mode = match args.mode {
        Some(mode) => Some(mode),
        None => prompt_mode(&maze)?,
    };
    match mode {
        Some(Mode::Manual) => play(&mut maze),
        Some(Mode::Auto) => {
            if maze.solve(1, 1) {
                println!("Maze solved automatically:");
                println!("{maze}");
            } else {
                println!("No solution found!");
            }
            Ok(())
        }
        None => {
            println!("Invalid choice. Exiting...");
            Ok(())
        }
    }
}

/// Show the generated maze and ask which mode to run.
fn prompt_mode(maze: &Maze) -> anyhow::Result<Option<Mode>> {
    println!("Generated maze:");
    println!("{maze}");
    println!("Choose mode:");
    println!("1. Manual (play with WASD keys)");
    println!("2. Automatic (system solves the maze)");

    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;
    Ok(match choice.trim() {
        "1" => Some(Mode::Manual),
        "2" => Some(Mode::Auto),
        _ => None,
    })
}

/// Run the interactive session, restoring the terminal however it ends.
fn play(maze: &mut Maze) -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    let result = walk(&mut io::stdout(), maze);
    terminal::disable_raw_mode()?;
    result
}

fn walk(stdout: &mut Stdout, maze: &mut Maze) -> anyhow::Result<()> {
    let mut navigator = Navigator::new(maze);
    draw(stdout, navigator.maze())?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }
        let mov = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char(c) => Move::from_char(c),
            _ => None,
        };
        let Some(mov) = mov else {
            continue;
        };

        match navigator.step(mov) {
            Outcome::Moved => draw(stdout, navigator.maze())?,
            Outcome::Reached => {
                draw(stdout, navigator.maze())?;
                write!(stdout, "You reached the end! Congratulations!\r\n")?;
                stdout.flush()?;
                return Ok(());
            }
            Outcome::Blocked | Outcome::Finished => {}
        }
    }
}

/// Clear the screen and print the maze; raw mode needs explicit `\r\n`.
fn draw(stdout: &mut Stdout, maze: &Maze) -> anyhow::Result<()> {
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(MoveTo(0, 0))?;
    for line in maze.to_string().lines() {
        write!(stdout, "{line}\r\n")?;
    }
    write!(stdout, "Use WASD to move, q to quit.\r\n")?;
    stdout.flush()?;
    Ok(())
}
