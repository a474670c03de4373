use bevy::ecs::query::QueryItem;
use bevy::prelude::*;
use bevy::render::render_graph::{
    NodeRunError, RenderGraphContext, RenderLabel, ViewNode,
};
use bevy::render::render_resource::RenderPassDescriptor;
use bevy::render::renderer::RenderContext;
use bevy::render::view::ViewTarget;

use crate::buffers::ExtractedLattice;

#[derive(Debug, Hash, PartialEq, Eq, Clone, RenderLabel)]
pub struct DrawPassLabel;

/// Rasterizes the particle buffer, one point primitive per record.
#[derive(Default)]
pub struct DrawNode;

impl ViewNode for DrawNode {
    type ViewQuery = &'static ViewTarget;

    fn run<'w>(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext<'w>,
        view_target: QueryItem<'w, Self::ViewQuery>,
        world: &'w World,
    ) -> Result<(), NodeRunError> {
        // Without a particle buffer there is nothing to draw; the frame
        // still presents the clear color.
        let Some(lattice) = world.get_resource::<ExtractedLattice>() else {
            return Ok(());
        };
        if lattice.particle_count == 0 {
            return Ok(());
        }

        let mut pass = render_context.begin_tracked_render_pass(RenderPassDescriptor {
            label: Some("particle_draw_pass"),
            color_attachments: &[Some(view_target.get_color_attachment())],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_render_pipeline(&lattice.draw_pipeline);
        pass.set_vertex_buffer(0, lattice.particle_buffer.slice(..));
        pass.draw(0..lattice.particle_count, 0..1);

        Ok(())
    }
}
