use bevy::asset::io::embedded::EmbeddedAssetRegistry;
use bevy::prelude::*;
use std::path::{Path, PathBuf};

pub const DICE_TEMPLATE_ASSET_PATH: &str = concat!(env!("CARGO_PKG_NAME"), "/art/dice.gltf");
pub const DICE_TEMPLATE_PATH: &str =
    concat!("embedded://", env!("CARGO_PKG_NAME"), "/art/dice.gltf");

pub const GRID_TEXTURE_ASSET_PATH: &str = concat!(env!("CARGO_PKG_NAME"), "/art/grid.png");
pub const GRID_TEXTURE_PATH: &str =
    concat!("embedded://", env!("CARGO_PKG_NAME"), "/art/grid.png");

pub struct ArDiceEmbeddedAssetsPlugin;

impl Plugin for ArDiceEmbeddedAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EmbeddedAssetRegistry>();

        // Ship the die template and plane grid inside the binary.
        let registry = app.world_mut().resource_mut::<EmbeddedAssetRegistry>();

        registry.insert_asset(
            PathBuf::from("assets/art/dice.gltf"),
            Path::new(DICE_TEMPLATE_ASSET_PATH),
            include_bytes!("../../assets/art/dice.gltf"),
        );

        registry.insert_asset(
            PathBuf::from("assets/art/grid.png"),
            Path::new(GRID_TEXTURE_ASSET_PATH),
            include_bytes!("../../assets/art/grid.png"),
        );
    }
}
