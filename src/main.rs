use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dungeon_editor::{persist, CarvePolicy, Config, Dungeon, RoomId};

#[derive(Parser)]
#[command(name = "dungeon-editor")]
#[command(about = "Edit 80x21 dungeon save files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dungeon file to read and write
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Seed for wall hardness rolls
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a fresh, empty dungeon
    New,
    /// Describe the dungeon
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Carve a corridor cell
    Carve {
        x: usize,
        y: usize,
        /// Refuse to carve through room floor
        #[arg(long)]
        strict: bool,
    },
    /// Turn a corridor cell back into wall
    Wall { x: usize, y: usize },
    /// Room operations
    #[command(subcommand)]
    Room(RoomCommand),
    /// Set the player start
    Start { x: usize, y: usize },
}

#[derive(Subcommand)]
enum RoomCommand {
    /// Place a room with its top-left corner at (x, y)
    Add {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// Remove a room by id
    Remove { id: u32 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = Config::new(cli.path, cli.seed);
    let mut rng = config.rng();

    let mut dungeon = if matches!(cli.command, Commands::New) {
        Dungeon::new(&mut rng)
    } else {
        persist::load(&config.path).with_context(|| format!("failed to open {}", config.path.display()))?
    };

    match cli.command {
        Commands::New => {}
        Commands::Info { json } => {
            let summary = dungeon.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}x{} dungeon, {} rooms", summary.width, summary.height, summary.rooms.len());
                for entry in &summary.rooms {
                    let r = entry.room;
                    println!("  {} at ({}, {}) size {}x{}", entry.id, r.x, r.y, r.width, r.height);
                }
                match summary.player_start {
                    Some((x, y)) => println!("player start: ({x}, {y})"),
                    None => println!("player start: unset"),
                }
                println!(
                    "cells: {} room, {} hall, {} wall",
                    summary.room_cells, summary.hall_cells, summary.wall_cells
                );
            }
            return Ok(());
        }
        Commands::Carve { x, y, strict } => {
            let policy = if strict { CarvePolicy::PreserveRooms } else { CarvePolicy::Permissive };
            dungeon.carve_corridor_with(x, y, policy)?;
        }
        Commands::Wall { x, y } => dungeon.restore_wall(x, y, &mut rng)?,
        Commands::Room(RoomCommand::Add { x, y, width, height }) => {
            let id = dungeon.place_room(x, y, width, height)?;
            println!("placed room {id}");
        }
        Commands::Room(RoomCommand::Remove { id }) => {
            dungeon.remove_room(RoomId(id), &mut rng)?;
        }
        Commands::Start { x, y } => dungeon.set_player_start(x, y)?,
    }

    persist::save(&dungeon, &config.path)?;
    Ok(())
}
