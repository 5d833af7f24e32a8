use bevy::prelude::*;
use spherebox_sim::{Container, SimulationState};

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("spherebox"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgba(0.9, 0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Update HUD text every 10th frame
pub fn update_hud(
    sim: Res<SimulationState>,
    container: Res<Container>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let paused = if sim.paused { " [PAUSED]" } else { "" };
    **text = format!(
        "Spheres: {} | Container: {:.1}{}\n\
         Tick: {} | Seed: {}\n\
         Wall hits: {} (total {})\n\
         Collisions: {} (total {})\n\
         \n\
         [Up/Down] Container size  [Space] Pause\n\
         [LMB+Mouse] Orbit  [Scroll] Zoom",
        sim.particle_count(),
        container.size,
        paused,
        sim.stats.ticks,
        sim.seed,
        sim.last_report.wall_hits.len(),
        sim.stats.wall_hits,
        sim.last_report.pair_collisions.len(),
        sim.stats.pair_collisions,
    );
}

/// Keyboard stand-in for the container size slider
pub fn container_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut container: ResMut<Container>,
) {
    let grow = keyboard.any_just_pressed([KeyCode::ArrowUp, KeyCode::Equal, KeyCode::NumpadAdd]);
    let shrink = keyboard.any_just_pressed([
        KeyCode::ArrowDown,
        KeyCode::Minus,
        KeyCode::NumpadSubtract,
    ]);

    // Only touch the resource on a real change so the boundary is not rebuilt every frame
    if grow && !shrink && container.size < container.max {
        container.grow();
    } else if shrink && !grow && container.size > container.min {
        container.shrink();
    }
}

/// Handle keyboard input for pausing
pub fn pause_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<SimulationState>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        sim.toggle_pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Container>()
            .add_systems(Update, container_control_system);
        app
    }

    #[test]
    fn test_arrow_keys_step_container() {
        let mut app = control_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowUp);
        app.update();
        assert_eq!(app.world().resource::<Container>().size, 12.5);

        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(KeyCode::ArrowUp);
        input.clear();
        input.press(KeyCode::Minus);
        app.update();
        assert_eq!(app.world().resource::<Container>().size, 12.0);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut app = control_app();
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.press(KeyCode::ArrowUp);
        input.press(KeyCode::ArrowDown);
        app.update();
        assert_eq!(app.world().resource::<Container>().size, 12.0);
    }

    #[test]
    fn test_grow_stops_at_maximum() {
        let mut app = control_app();
        app.world_mut().resource_mut::<Container>().size = 30.0;
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::NumpadAdd);
        app.update();
        assert_eq!(app.world().resource::<Container>().size, 30.0);
    }
}
