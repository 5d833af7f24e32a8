use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use spherebox_core::{CAMERA_START, LIGHT_DIRECTION};

/// Camera that circles a focus point at a fixed distance
#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
}

impl OrbitCamera {
    /// Orbit that places the camera at `position`, looking at `focus`
    pub fn looking_from(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length().max(0.001);
        Self {
            focus,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            sensitivity: 0.005,
            zoom_speed: 0.1,
        }
    }

    /// Camera position implied by the current yaw, pitch and radius
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus
            + self.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }
}

/// Spawn the 3D camera and the key light
pub fn spawn_camera(mut commands: Commands) {
    let pos = Vec3::from_array(CAMERA_START);
    let orbit = OrbitCamera::looking_from(pos, Vec3::ZERO);

    info!("Camera spawned at ({:.0}, {:.0}, {:.0})", pos.x, pos.y, pos.z);

    commands.spawn((Camera3d::default(), orbit.transform(), orbit));

    commands.spawn((
        DirectionalLight {
            illuminance: 15_000.0,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(LIGHT_DIRECTION))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient light so the far side of each sphere is not black
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
    });
}

/// Left-drag to orbit, scroll to zoom
pub fn orbit_camera_system(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut cam)) = query.get_single_mut() else {
        return;
    };

    if mouse_button.pressed(MouseButton::Left) {
        let delta = mouse_motion.delta;
        cam.yaw -= delta.x * cam.sensitivity;
        cam.pitch = (cam.pitch + delta.y * cam.sensitivity).clamp(-1.5, 1.5);
    }

    let scroll = mouse_scroll.delta.y;
    if scroll != 0.0 {
        cam.radius = (cam.radius * (1.0 - scroll * cam.zoom_speed)).clamp(2.0, 200.0);
    }

    *transform = cam.transform();
}
