use bevy::prelude::*;
use silk_core::SimConfig;
use silk_render::buffers::LatticeState;
use silk_render::plugin::SilkRenderPlugin;

fn main() -> AppExit {
    let config = SimConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Silk — Particle Lattice".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(LatticeState::empty(config))
        .add_plugins(SilkRenderPlugin)
        .run()
}
