use bevy::prelude::*;

/// Marker for the single camera observing the lattice
#[derive(Component)]
pub struct LatticeCamera;

/// Spawn the 2D camera whose view target the draw pass renders into
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, LatticeCamera));
}
