//! Bevy implementation of [`ArEngine`]
//!
//! Desktop Bevy has no camera tracking, so the session is simulated: plane
//! hit-tests intersect the camera ray with the estimated floor and the
//! session clock lives in [`TrackingSession`]. Placed dice carry a rapier
//! collider so node hit-tests are plain ray casts.

use bevy::ecs::system::SystemParam;
use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::log::{debug, info};
use bevy::math::Affine2;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ar::engine::{ArEngine, SpawnError, TemplateRef};
use crate::ar::plane_visual::PlaneVisual;
use crate::ar::systems::tracking::{estimated_plane_hit, TrackingSession};
use crate::ar::types::{
    ArDiceConfig, MainCamera, PlaneAnchor, PlaneMarker, PlacedDie, RollAnimation, RollRotation,
    TrackingConfiguration,
};

/// Handles to the preloaded template scene and grid texture
#[derive(Resource, Debug, Clone)]
pub struct DiceAssets {
    pub template: Handle<Gltf>,
    pub grid: Handle<Image>,
    pub plane_tint: Color,
}

/// Grid cells per metre on plane visuals.
const GRID_CELLS_PER_METRE: f32 = 10.0;

#[derive(SystemParam)]
pub struct BevyArEngine<'w, 's> {
    commands: Commands<'w, 's>,
    tracking: ResMut<'w, TrackingSession>,
    config: Res<'w, ArDiceConfig>,
    dice_assets: Res<'w, DiceAssets>,
    gltfs: Res<'w, Assets<Gltf>>,
    gltf_nodes: Res<'w, Assets<GltfNode>>,
    gltf_meshes: Res<'w, Assets<GltfMesh>>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    camera_query: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<MainCamera>>,
    rapier_context: ReadRapierContext<'w, 's>,
}

impl BevyArEngine<'_, '_> {
    fn screen_ray(&self, screen_point: Vec2) -> Option<Ray3d> {
        let Ok((camera, camera_transform)) = self.camera_query.single() else {
            return None;
        };
        camera.viewport_to_world(camera_transform, screen_point).ok()
    }

    /// Half size of the collider for a template node, from its mesh bounds.
    fn template_half_extents(&self, parts: &[(Handle<Mesh>, Handle<StandardMaterial>)]) -> Vec3 {
        parts
            .iter()
            .filter_map(|(mesh, _)| self.meshes.get(mesh))
            .filter_map(|mesh| mesh.attribute(Mesh::ATTRIBUTE_POSITION)?.as_float3())
            .flat_map(|positions| positions.iter().map(|p| Vec3::from_array(*p).abs()))
            .reduce(|a, b| a.max(b))
            .unwrap_or(Vec3::splat(self.config.die_half_extent))
    }
}

impl ArEngine for BevyArEngine<'_, '_> {
    type Node = Entity;

    fn run_session(&mut self, configuration: &TrackingConfiguration) {
        self.tracking.run(*configuration);
    }

    fn pause_session(&mut self) {
        self.tracking.pause();
    }

    fn hit_test_nodes(&mut self, screen_point: Vec2) -> Option<Entity> {
        let ray = self.screen_ray(screen_point)?;
        let context = self.rapier_context.single().ok()?;
        let (entity, _toi) = context.cast_ray(
            ray.origin,
            *ray.direction,
            self.config.tracking.max_hit_distance,
            true,
            QueryFilter::default(),
        )?;
        Some(entity)
    }

    fn hit_test_estimated_plane(&mut self, screen_point: Vec2) -> Option<Mat4> {
        if !self.tracking.is_running() {
            return None;
        }
        let ray = self.screen_ray(screen_point)?;
        let hit = estimated_plane_hit(
            ray.origin,
            *ray.direction,
            self.config.tracking.estimated_floor_y,
            self.config.tracking.max_hit_distance,
        )?;
        Some(Mat4::from_translation(hit))
    }

    fn instantiate_template(&mut self, template: &TemplateRef) -> Result<Entity, SpawnError> {
        let gltf = self
            .gltfs
            .get(&self.dice_assets.template)
            .ok_or_else(|| SpawnError::AssetNotLoaded(template.asset.clone()))?;
        let not_found = || SpawnError::NodeNotFound {
            asset: template.asset.clone(),
            node: template.node.clone(),
        };
        let node = gltf
            .named_nodes
            .get(template.node.as_str())
            .and_then(|handle| self.gltf_nodes.get(handle))
            .ok_or_else(not_found)?;

        let mut parts: Vec<(Handle<Mesh>, Handle<StandardMaterial>)> = Vec::new();
        if let Some(gltf_mesh) = node.mesh.as_ref().and_then(|h| self.gltf_meshes.get(h)) {
            for primitive in &gltf_mesh.primitives {
                let material = match &primitive.material {
                    Some(material) => material.clone(),
                    None => self.materials.add(StandardMaterial::default()),
                };
                parts.push((primitive.mesh.clone(), material));
            }
        }
        if parts.is_empty() {
            return Err(not_found());
        }

        let half = self.template_half_extents(&parts);
        let transform = Transform::from_rotation(node.transform.rotation)
            .with_scale(node.transform.scale);

        let entity = self
            .commands
            .spawn((
                Name::new(node.name.clone()),
                PlacedDie,
                transform,
                Visibility::Hidden,
                Collider::cuboid(half.x, half.y, half.z),
            ))
            .with_children(|parent| {
                for (mesh, material) in parts {
                    parent.spawn((Mesh3d(mesh), MeshMaterial3d(material)));
                }
            })
            .id();

        debug!("Cloned template node {} as {:?}", template.node, entity);
        Ok(entity)
    }

    fn set_position(&mut self, node: Entity, position: Vec3) {
        self.commands
            .entity(node)
            .queue(move |mut entity: EntityWorldMut| {
                if let Some(mut transform) = entity.get_mut::<Transform>() {
                    transform.translation = position;
                }
            });
    }

    fn attach(&mut self, node: Entity) {
        self.commands.entity(node).try_insert(Visibility::Inherited);
    }

    fn detach(&mut self, node: Entity) {
        self.commands.entity(node).try_despawn();
    }

    fn rotate_by(&mut self, node: Entity, rotation: RollRotation, duration_secs: f32) {
        let roll = RollAnimation::new(rotation, duration_secs);
        self.commands
            .entity(node)
            .queue(move |mut entity: EntityWorldMut| {
                let roll = match entity.get::<RollAnimation>() {
                    Some(previous) => roll.replacing(previous),
                    None => roll,
                };
                entity.insert(roll);
            });
    }

    fn attach_plane_visual(&mut self, anchor: &PlaneAnchor, visual: &PlaneVisual) {
        let mesh = self.meshes.add(Rectangle::new(visual.width, visual.height));
        let material = self.materials.add(StandardMaterial {
            base_color: self.dice_assets.plane_tint,
            base_color_texture: Some(self.dice_assets.grid.clone()),
            uv_transform: Affine2::from_scale(
                Vec2::new(visual.width, visual.height) * GRID_CELLS_PER_METRE,
            ),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });

        self.commands.spawn((
            Name::new(format!("Plane {}", anchor.id)),
            PlaneMarker {
                anchor_id: anchor.id,
            },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            visual.world_transform(anchor),
        ));
        info!("Attached plane visual for anchor {}", anchor.id);
    }
}
