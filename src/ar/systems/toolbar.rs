//! Toolbar UI
//!
//! Two Material buttons along the bottom edge: "Roll" re-rolls every die and
//! "Clear" removes them all.

use bevy::prelude::*;
use bevy::ui::FocusPolicy;
use bevy_material_ui::prelude::*;

use crate::ar::bevy_engine::BevyArEngine;
use crate::ar::controller::DiceController;
use crate::ar::types::{ToolbarAction, ToolbarButton};

/// Spawn the toolbar (called once on startup)
pub fn setup_toolbar(mut commands: Commands, theme: Option<Res<MaterialTheme>>) {
    let theme = theme.map(|t| t.clone()).unwrap_or_default();

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|bar| {
            for action in [ToolbarAction::Refresh, ToolbarAction::Clear] {
                bar.spawn(Node {
                    width: Val::Px(120.0),
                    height: Val::Px(40.0),
                    ..default()
                })
                .with_children(|slot| {
                    slot.spawn((
                        MaterialButtonBuilder::new(action.label())
                            .outlined()
                            .build(&theme),
                        ToolbarButton(action),
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new(action.label()),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(theme.primary),
                            ButtonLabel,
                        ));
                    });
                });
            }
        });
}

/// Ensure UI buttons receive interaction state and block clicks to the scene
pub fn ensure_buttons_have_interaction(
    mut commands: Commands,
    missing_interaction: Query<Entity, (With<Button>, Without<Interaction>)>,
    missing_focus_policy: Query<Entity, (With<Button>, Without<FocusPolicy>)>,
) {
    for entity in missing_interaction.iter() {
        commands.entity(entity).insert(Interaction::None);
    }

    for entity in missing_focus_policy.iter() {
        commands.entity(entity).insert(FocusPolicy::Block);
    }
}

/// Handle toolbar button clicks
pub fn handle_toolbar_clicks(
    mut click_events: MessageReader<ButtonClickEvent>,
    buttons: Query<&ToolbarButton>,
    mut controller: ResMut<DiceController>,
    mut engine: BevyArEngine,
) {
    for ev in click_events.read() {
        let Ok(ToolbarButton(action)) = buttons.get(ev.entity) else {
            continue;
        };

        match action {
            ToolbarAction::Refresh => {
                controller.roll_all(&mut engine);
            }
            ToolbarAction::Clear => {
                controller.clear_all(&mut engine);
            }
        }
    }
}
