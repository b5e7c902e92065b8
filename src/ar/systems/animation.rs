//! Roll animation playback

use bevy::prelude::*;

use crate::ar::types::RollAnimation;

/// Advance every in-flight roll and drop the component when it finishes.
pub fn animate_rolls(
    mut commands: Commands,
    time: Res<Time>,
    mut dice_query: Query<(Entity, &mut Transform, &mut RollAnimation)>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut anim) in dice_query.iter_mut() {
        let start = anim.start_from(transform.rotation);
        anim.elapsed += dt;

        transform.rotation = anim.orientation_at(start, anim.progress());

        if anim.is_finished() {
            commands.entity(entity).remove::<RollAnimation>();
        }
    }
}
