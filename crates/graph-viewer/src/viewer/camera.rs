use bevy::prelude::*;
use smooth_bevy_cameras::controllers::orbit::{OrbitCameraBundle, OrbitCameraController};

use crate::viewer::input::InputMode;
use crate::viewer::ViewerSession;

/// Spawn the orbit camera and the scene lights.
pub fn setup_camera(mut commands: Commands, session: Res<ViewerSession>) {
    let eye = session.options().camera_eye();
    let target = Vec3::from_array(session.options().origin);

    commands
        .spawn((
            Camera3d::default(),
            Transform::from_translation(eye).looking_at(target, Vec3::Y),
        ))
        .insert(OrbitCameraBundle::new(
            OrbitCameraController {
                // Pointer mode first
                enabled: false,
                ..default()
            },
            eye,
            target,
            Vec3::Y,
        ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.8, 0.2, 0.0)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
    });
}

/// The orbit controller only runs in Navigator mode.
pub fn update_camera_controller(
    input_mode: Res<InputMode>,
    mut query: Query<&mut OrbitCameraController>,
) {
    if !input_mode.is_changed() {
        return;
    }

    for mut controller in query.iter_mut() {
        controller.enabled = *input_mode == InputMode::Navigator;
    }
}
