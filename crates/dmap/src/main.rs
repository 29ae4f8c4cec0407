//! dmap: scan a dungeon snapshot and print what was discovered
//!
//! Loads a room catalog and a world snapshot, runs one scan session for a
//! number of ticks, then prints the grid, the rooms and the doors.

mod snapshot;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dmap_core::consts::HALF_GRID_SIZE;
use dmap_core::dungeon::HalfPos;
use dmap_core::{CellPos, DungeonScan, RoomCatalog, ScanConfig, StaticCatalog};

use snapshot::WorldSnapshot;

/// Dungeon room and door scanner
#[derive(Parser, Debug)]
#[command(name = "dmap")]
#[command(author, version, about = "Scan a dungeon snapshot for rooms and doors", long_about = None)]
struct Args {
    /// Room catalog (JSON array of entries)
    #[arg(short = 'c', long = "catalog")]
    catalog: PathBuf,

    /// World snapshot (JSON)
    #[arg(short = 'w', long = "world")]
    world: PathBuf,

    /// Scan configuration (JSON); defaults apply when omitted
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Ticks to run after entering the dungeon
    #[arg(short = 't', long = "ticks", default_value_t = 0)]
    ticks: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let catalog_file = fs::File::open(&args.catalog)
        .with_context(|| format!("cannot open catalog {}", args.catalog.display()))?;
    let catalog = StaticCatalog::from_reader(catalog_file)
        .with_context(|| format!("cannot load catalog {}", args.catalog.display()))?;
    log::info!(
        "loaded {} catalog rooms with {} cores",
        catalog.len(),
        catalog.core_count()
    );

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            ScanConfig::from_json_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ScanConfig::default(),
    };

    let text = fs::read_to_string(&args.world)
        .with_context(|| format!("cannot read world {}", args.world.display()))?;
    let world = WorldSnapshot::from_json_str(&text)?.into_world();

    let mut scan = DungeonScan::new(catalog, config);
    scan.on_enter(&world);
    for _ in 0..args.ticks {
        scan.on_tick(&world);
    }

    print!("{}", render_grid(&scan));
    print_summary(&scan);
    Ok(())
}

/// Half-resolution picture: room kinds on cells, door symbols on gaps, `=`
/// where two cells belong to the same room
fn render_grid<C: RoomCatalog>(scan: &DungeonScan<C>) -> String {
    let mut out = String::new();
    for z in 0..HALF_GRID_SIZE as u8 {
        for x in 0..HALF_GRID_SIZE as u8 {
            let Some(pos) = HalfPos::new(x, z) else {
                continue;
            };
            out.push(half_symbol(scan, pos));
        }
        out.push('\n');
    }
    out
}

fn half_symbol<C: RoomCatalog>(scan: &DungeonScan<C>, pos: HalfPos) -> char {
    if pos.is_cell() {
        let cell = CellPos::new(pos.x / 2, pos.z / 2);
        return cell
            .and_then(|cell| scan.room_at(cell))
            .map_or('.', |room| room.kind.symbol());
    }
    match pos.separated_cells() {
        Some((a, b)) if scan.map().same_room(a, b) => '=',
        Some((a, b)) => scan.door_type(a, b).symbol(),
        None => ' ',
    }
}

fn print_summary<C: RoomCatalog>(scan: &DungeonScan<C>) {
    let progress = scan.progress();
    println!();
    println!(
        "{} rooms, {} doors, {}/36 cells with a room{}",
        progress.rooms,
        progress.doors,
        progress.cells_with_room,
        if scan.is_fully_scanned() { " (complete)" } else { "" }
    );

    for (id, room) in scan.rooms() {
        let cells: Vec<String> = room.components().iter().map(|c| c.to_string()).collect();
        let rotation = room
            .rotation()
            .map_or_else(|| "unknown".to_string(), |r| r.to_string());
        println!(
            "  {id} {room}: secrets {}, rotation {rotation}, cells {}",
            room.secrets,
            cells.join(" ")
        );
    }

    for (key, door) in scan.doors().iter() {
        let (a, b) = key.cells();
        println!("  door {a} - {b}: {door}");
    }
}
