#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates and inspects a Hexhaven world.

use anyhow::{bail, Result};
use clap::Parser;
use hexhaven_core::{AxialCoord, Command, Event, TerrainKind};
use hexhaven_system_spawning::{Config as SpawnConfig, Spawning};
use hexhaven_system_viewport::{pan_bounds, Config as ViewportConfig};
use hexhaven_world::{apply, query, World};

const SPAWN_SEED: u64 = 0x4845_5848_4156_454e;
const SPAWN_COUNT: usize = 4;

/// Generates a Hexhaven world and prints a summary of its contents.
#[derive(Debug, Parser)]
#[command(name = "hexhaven")]
struct Args {
    /// Hex radius of the generated playable area.
    #[arg(long, default_value_t = 8)]
    radius: u32,

    /// Margin around the world bounds available to the camera, in hexes.
    #[arg(long, default_value_t = 2.0)]
    margin: f32,

    /// Render the terrain as an ASCII map.
    #[arg(long)]
    map: bool,
}

/// Entry point for the Hexhaven command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    let mut world = World::new();
    let mut events = Vec::new();
    apply(
        &mut world,
        Command::GenerateWorld {
            radius: args.radius,
        },
        &mut events,
    );

    let Some(Event::WorldGenerated { tile_count }) = events.first() else {
        bail!("world generation did not publish a completion event");
    };
    println!("generated {tile_count} tiles at radius {}", args.radius);

    print_terrain_summary(&world);
    print_bounds(&world, args.margin);
    print_spawn_proposals(&world, &events);

    if args.map {
        print_map(&world, args.radius);
    }

    Ok(())
}

fn print_terrain_summary(world: &World) {
    let mut grass = 0_usize;
    let mut water = 0_usize;
    let mut rock = 0_usize;
    for tile in query::all_tiles(world).iter() {
        match tile.terrain() {
            TerrainKind::Grass => grass += 1,
            TerrainKind::Water => water += 1,
            TerrainKind::Rock => rock += 1,
        }
    }
    println!("terrain: {grass} grass, {water} water, {rock} rock");
}

fn print_bounds(world: &World, margin_in_hexes: f32) {
    let bounds = query::bounds(world);
    println!(
        "bounds: ({:.1}, {:.1}) .. ({:.1}, {:.1})",
        bounds.min().x,
        bounds.min().y,
        bounds.max().x,
        bounds.max().y,
    );

    let pannable = pan_bounds(bounds, ViewportConfig::new(margin_in_hexes));
    println!(
        "pannable: ({:.1}, {:.1}) .. ({:.1}, {:.1})",
        pannable.min().x,
        pannable.min().y,
        pannable.max().x,
        pannable.max().y,
    );
}

fn print_spawn_proposals(world: &World, events: &[Event]) {
    let mut spawning = Spawning::new(SpawnConfig::new(SPAWN_COUNT, 4, SPAWN_SEED));
    let mut requests = Vec::new();
    spawning.handle(
        events,
        |coord| query::tile_at(world, coord).map(|tile| tile.terrain()),
        |coord| query::is_occupied(world, coord),
        &mut requests,
    );

    for request in requests {
        println!(
            "spawn: ({}, {}) at ({:.1}, {:.1})",
            request.coord.q(),
            request.coord.r(),
            request.position.x,
            request.position.y,
        );
    }
}

fn print_map(world: &World, radius: u32) {
    let extent = i32::try_from(radius).unwrap_or(i32::MAX);
    for r in -extent..=extent {
        let mut line = String::new();
        // Half-cell stagger per row keeps the axial layout readable.
        for _ in 0..(r + extent).unsigned_abs() {
            line.push(' ');
        }
        for q in -extent..=extent {
            let glyph = match query::tile_at(world, AxialCoord::new(q, r)) {
                Some(tile) => match tile.terrain() {
                    TerrainKind::Grass => '.',
                    TerrainKind::Water => '~',
                    TerrainKind::Rock => '^',
                },
                None => ' ',
            };
            line.push(glyph);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}
