use crate::player::LocalPlayer;
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(PostUpdate, follow_player);
}

/// Trails the local player at a fixed world-space offset.
#[derive(Component, Debug)]
struct FollowCamera {
    offset: Vec3,
    /// Height above the player's feet the camera aims at.
    focus_height: f32,
    decay_rate: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        // Behind the player on -Z, so the view looks down +Z.
        Self {
            offset: Vec3::new(0.0, 6.5, -10.0),
            focus_height: 1.2,
            decay_rate: 8.0,
        }
    }
}

fn add_camera(mut commands: Commands) {
    let follow = FollowCamera::default();
    commands.spawn((
        Name::new("Follow Camera"),
        Camera3d::default(),
        Transform::from_translation(follow.offset)
            .looking_at(Vec3::Y * follow.focus_height, Vec3::Y),
        DistanceFog {
            color: Color::srgba(0.35, 0.48, 0.66, 1.0),
            falloff: FogFalloff::Linear {
                start: 40.0,
                end: 160.0,
            },
            ..default()
        },
        follow,
    ));
}

/// Runs on real time so the camera keeps up while the simulation is slowed.
fn follow_player(
    camera: Single<(&FollowCamera, &mut Transform)>,
    local_player: Single<&Transform, (With<LocalPlayer>, Without<FollowCamera>)>,
    time: Res<Time<Real>>,
) {
    let (follow, mut cam_tf) = camera.into_inner();
    let focus = local_player.translation + Vec3::Y * follow.focus_height;

    cam_tf.translation.smooth_nudge(
        &(local_player.translation + follow.offset),
        follow.decay_rate,
        time.delta_secs(),
    );
    cam_tf.look_at(focus, Vec3::Y);
}
