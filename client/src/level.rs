use bevy::prelude::*;

const GROUND_SIZE: f32 = 80.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_level);
}

/// Ground visuals and lighting. The ground collider lives in [`crate::physics::Physics`].
fn spawn_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.32, 0.36, 0.3),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 20.0, -6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
