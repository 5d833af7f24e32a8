use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use spherebox_sim::Container;

/// Marker for the container outline
#[derive(Component)]
pub struct BoundaryWireframe;

/// Endpoints of the 12 edges of a cube with edge `size` centered at the origin,
/// two vertices per edge
pub fn cube_edges(size: f32) -> Vec<[f32; 3]> {
    let h = size / 2.0;
    let corner = |i: usize| -> [f32; 3] {
        [
            if i & 1 == 0 { -h } else { h },
            if i & 2 == 0 { -h } else { h },
            if i & 4 == 0 { -h } else { h },
        ]
    };

    let mut vertices = Vec::with_capacity(24);
    for a in 0..8usize {
        // Each edge once, from the corner with the bit clear to the one with it set
        for bit in [1usize, 2, 4] {
            if a & bit == 0 {
                vertices.push(corner(a));
                vertices.push(corner(a | bit));
            }
        }
    }
    vertices
}

fn wireframe_mesh(size: f32) -> Mesh {
    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, cube_edges(size))
}

/// Replace the outline whenever the container size changes (and once at startup)
pub fn rebuild_boundary(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    container: Res<Container>,
    existing: Query<Entity, With<BoundaryWireframe>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    commands.spawn((
        Mesh3d(meshes.add(wireframe_mesh(container.size as f32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        BoundaryWireframe,
    ));

    info!("Container size: {}", container.size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_edges() {
        let vertices = cube_edges(12.0);
        assert_eq!(vertices.len(), 24);
        for v in &vertices {
            for c in v {
                assert!(c.abs() == 6.0, "vertex {:?} is not a corner", v);
            }
        }
    }

    #[test]
    fn test_edges_are_axis_aligned() {
        let vertices = cube_edges(6.0);
        for edge in vertices.chunks(2) {
            let differing = (0..3).filter(|&k| edge[0][k] != edge[1][k]).count();
            assert_eq!(differing, 1, "edge {:?} is not axis aligned", edge);
            let length: f32 = (0..3).map(|k| (edge[0][k] - edge[1][k]).abs()).sum();
            assert_eq!(length, 6.0);
        }
    }
}
