use bevy::prelude::*;
use bevy::render::render_graph::{Node, NodeRunError, RenderGraphContext, RenderLabel};
use bevy::render::renderer::RenderContext;
use silk_gpu::encode_update_pass;

use crate::buffers::{ExtractedLattice, UpdateBindGroup};

#[derive(Debug, Hash, PartialEq, Eq, Clone, RenderLabel)]
pub struct UpdatePassLabel;

/// Records the data-parallel particle update.
///
/// The node runs before the camera driver; that graph edge, not any
/// CPU-side wait, is what makes the kernel's writes visible to the draw
/// pass in the same frame.
#[derive(Default)]
pub struct UpdateNode;

impl Node for UpdateNode {
    fn run<'w>(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext<'w>,
        world: &'w World,
    ) -> Result<(), NodeRunError> {
        // A missing resource skips the update for this frame; the draw
        // pass then renders whatever the buffer already holds.
        let Some(lattice) = world.get_resource::<ExtractedLattice>() else {
            return Ok(());
        };
        let Some(bind_group) = world.get_resource::<UpdateBindGroup>() else {
            return Ok(());
        };

        encode_update_pass(
            render_context.command_encoder(),
            &lattice.update_pipeline,
            &bind_group.0,
            lattice.particle_count,
        );

        Ok(())
    }
}
