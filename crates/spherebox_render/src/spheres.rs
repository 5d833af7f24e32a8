use bevy::prelude::*;
use spherebox_core::{Vec3 as SimVec3, PALETTE, SPHERE_RESOLUTION};
use spherebox_sim::SimulationState;

/// Links a rendered sphere to its particle index
#[derive(Component)]
pub struct ParticleSphere {
    pub index: usize,
}

/// Color for particle `index`, cycling through the palette
pub fn sphere_color(index: usize) -> Color {
    let [r, g, b] = PALETTE[index % PALETTE.len()];
    Color::srgb(r, g, b)
}

/// Scene-space translation of a simulation position
pub fn to_translation(position: SimVec3) -> Vec3 {
    Vec3::new(position[0] as f32, position[1] as f32, position[2] as f32)
}

/// Spawn one sphere per particle, sized by its radius
pub fn spawn_particle_spheres(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<SimulationState>,
) {
    // One material per palette entry, shared by every sphere of that color
    let palette: Vec<Handle<StandardMaterial>> = (0..PALETTE.len())
        .map(|i| {
            materials.add(StandardMaterial {
                base_color: sphere_color(i),
                perceptual_roughness: 0.4,
                ..default()
            })
        })
        .collect();

    let particles = &sim.particles;
    for index in 0..particles.len() {
        let mesh = meshes.add(
            Sphere::new(particles.radii[index] as f32)
                .mesh()
                .uv(SPHERE_RESOLUTION, SPHERE_RESOLUTION),
        );
        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(palette[index % palette.len()].clone()),
            Transform::from_translation(to_translation(particles.positions[index])),
            ParticleSphere { index },
        ));
    }

    info!("Spawned {} spheres", particles.len());
}

/// Move each sphere to its particle's current position
pub fn update_particle_spheres(
    sim: Res<SimulationState>,
    mut query: Query<(&mut Transform, &ParticleSphere)>,
) {
    for (mut transform, sphere) in query.iter_mut() {
        let Some(&position) = sim.particles.positions.get(sphere.index) else {
            continue;
        };
        transform.translation = to_translation(position);
    }
}
