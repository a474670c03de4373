use bevy::core_pipeline::core_2d::graph::{Core2d, Node2d};
use bevy::prelude::*;
use bevy::render::graph::CameraDriverLabel;
use bevy::render::render_graph::{RenderGraph, RenderGraphApp, ViewNodeRunner};
use bevy::render::renderer::RenderDevice;
use bevy::render::{ExtractSchedule, Render, RenderApp, RenderSet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use silk_gpu::GpuContext;
use silk_physics::generate_lattice;

use crate::buffers::{self, LatticeGpu, LatticeState};
use crate::camera;
use crate::draw_pass::{DrawNode, DrawPassLabel};
use crate::screen;
use crate::update_pass::{UpdateNode, UpdatePassLabel};

/// Wires the lattice pipeline into the host: one-time construction at
/// startup, resize observation, and the per-frame update-then-draw
/// protocol in the render graph.
pub struct SilkRenderPlugin;

impl Plugin for SilkRenderPlugin {
    fn build(&self, app: &mut App) {
        // App
        app.add_systems(
            Startup,
            (
                camera::spawn_camera,
                screen::init_screen_dimensions,
                init_simulation,
            ),
        )
        .add_systems(Update, screen::refresh_screen_dimensions);

        // Render
        let render_app = app.sub_app_mut(RenderApp);
        render_app
            .add_systems(
                ExtractSchedule,
                (buffers::extract_lattice, buffers::extract_dimensions),
            )
            .add_systems(
                Render,
                buffers::prepare_update_bind_group.in_set(RenderSet::Prepare),
            )
            .add_render_graph_node::<ViewNodeRunner<DrawNode>>(Core2d, DrawPassLabel)
            .add_render_graph_edges(
                Core2d,
                (Node2d::MainTransparentPass, DrawPassLabel, Node2d::EndMainPass),
            );

        // The update pass sits before the camera driver in the main graph,
        // so its buffer writes are ordered ahead of every draw that reads
        // them.
        let mut graph = render_app.world_mut().resource_mut::<RenderGraph>();
        graph.add_node(UpdatePassLabel, UpdateNode::default());
        graph.add_node_edge(UpdatePassLabel, CameraDriverLabel);
    }
}

/// Build the lattice and its GPU mirror.
///
/// Failure here is fatal: without these resources no frame can ever be
/// produced, so the app is asked to exit and `main` turns that into a
/// nonzero process status. The core itself never terminates the process.
fn init_simulation(
    mut commands: Commands,
    device: Res<RenderDevice>,
    mut lattice: ResMut<LatticeState>,
    mut exit: EventWriter<AppExit>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(lattice.config.seed);
    lattice.particles = generate_lattice(&lattice.config, &mut rng);

    match GpuContext::new(&device, &lattice.particles, &lattice.config) {
        Ok(context) => {
            info!(
                "Lattice: {} particles ({}x{}), {} KiB on GPU",
                context.particle_count,
                lattice.config.grid_width,
                lattice.config.grid_height,
                context.particle_count as usize * size_of::<silk_core::Particle>() / 1024,
            );
            commands.insert_resource(LatticeGpu(context));
        }
        Err(err) => {
            error!("GPU setup failed: {err}");
            exit.send(AppExit::error());
        }
    }
}
