//! Maze Ball native entry point
//!
//! Builds a session from settings and command-line overrides, then prints the
//! maze as text or the body layout as JSON for an external engine.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use maze_ball::Settings;
use maze_ball::layout::BodyLabel;
use maze_ball::maze::ascii;
use maze_ball::sim::{Contact, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Text maze plus statistics
    Text,
    /// Full session (settings, maze, layout) as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "maze-ball", about = "Generate a perfect maze and its wall layout")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    columns: Option<usize>,

    /// Fixed seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Viewport width in world units
    #[arg(long)]
    width: Option<f32>,

    /// Viewport height in world units
    #[arg(long)]
    height: Option<f32>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Overlay the start-to-goal path on the text maze
    #[arg(long)]
    show_path: bool,

    /// Feed two ball/goal contacts and print the resulting effects
    #[arg(long)]
    simulate_win: bool,

    /// Write the effective settings to this file
    #[arg(long)]
    save_settings: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(width) = self.width {
            settings.viewport_width = width;
        }
        if let Some(height) = self.height {
            settings.viewport_height = height;
        }
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = args.settings()?;
    settings.validate().context("validating settings")?;
    if let Some(path) = &args.save_settings {
        settings
            .save(path)
            .with_context(|| format!("saving settings to {}", path.display()))?;
    }

    let mut state = GameState::new(settings).context("building maze")?;

    match args.format {
        Format::Text => print_text(&state, args.show_path),
        Format::Json => println!("{}", serde_json::to_string_pretty(&state)?),
    }

    if args.simulate_win {
        let contact = Contact::new(BodyLabel::Ball, BodyLabel::Goal);
        for attempt in 1..=2 {
            let effects = state.handle_collisions(&[contact]);
            println!("contact {attempt}: {effects:?}");
        }
    }

    Ok(())
}

fn print_text(state: &GameState, show_path: bool) {
    let maze = &state.maze;
    let solution = maze.solution();
    let path = if show_path { solution.as_deref() } else { None };

    print!("{}", ascii::render(maze, path));
    println!(
        "{}x{} seed={} start=({}, {}) walls={} dead_ends={} path_len={}",
        maze.size.rows(),
        maze.size.columns(),
        state.seed,
        maze.start.row,
        maze.start.column,
        state.layout.walls.len(),
        maze.dead_ends(),
        solution.map_or(0, |p| p.len()),
    );
}
