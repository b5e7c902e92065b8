use bevy::prelude::*;
use bevy_material_ui::prelude::*;
use bevy_rapier3d::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use ardice::ar::{ArDiceConfig, ArDicePlugin};

/// AR dice: tap the detected plane to place a die, tap or shake to roll
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a RON config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for roll draws, for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter passed to the log plugin
    #[arg(long, default_value = "info,wgpu=error,bevy_material_ui=warn")]
    log_filter: String,

    /// Build plane grids without attaching them to the scene
    #[arg(long)]
    no_plane_visuals: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match ArDiceConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        },
        None => ArDiceConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.roll_seed = Some(seed);
    }
    if args.no_plane_visuals {
        config.attach_plane_visuals = false;
    }

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "AR Dice".to_string(),
                        resolution: (1280u32, 720u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: args.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(MaterialUiPlugin)
        .add_plugins(ArDicePlugin::new(config))
        .run();
}
