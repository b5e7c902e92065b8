//! Scene setup systems
//!
//! Preloads the die template and grid texture, then spawns the camera, lights
//! and the status line.

use bevy::gltf::Gltf;
use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use crate::ar::bevy_engine::DiceAssets;
use crate::ar::types::{ArDiceConfig, MainCamera, StatusText};

/// Start loading the template scene and grid texture
pub fn load_dice_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ArDiceConfig>,
) {
    let template: Handle<Gltf> = asset_server.load(config.template_asset.clone());

    // The grid repeats across the whole plane.
    let grid = asset_server.load_with_settings(
        config.grid_texture.clone(),
        |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        },
    );

    commands.insert_resource(DiceAssets {
        template,
        grid,
        plane_tint: config.plane_tint(),
    });
}

/// Spawn the camera, lights and status text
pub fn setup_scene(mut commands: Commands) {
    // Held like a phone about 60cm above the table, looking at the play area.
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.6, 0.5).looking_at(Vec3::new(0.0, 0.0, -0.5), Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(1.0, 3.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    commands.spawn((
        Text::new("Starting tracking session..."),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        StatusText,
    ));
}
