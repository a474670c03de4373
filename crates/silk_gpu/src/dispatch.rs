use bevy::render::render_resource::*;
use bevy::render::renderer::RenderDevice;

/// Record the per-frame particle update onto the frame's command encoder.
///
/// One workgroup per particle: the kernel is `@workgroup_size(1)`, so the
/// grid's x extent is the particle count itself. Ordering against the draw
/// pass is the caller's responsibility (a render graph edge here); the
/// pass itself never waits on anything.
pub fn encode_update_pass(
    encoder: &mut CommandEncoder,
    pipeline: &ComputePipeline,
    bind_group: &BindGroup,
    particle_count: u32,
) {
    let mut pass = encoder.begin_compute_pass(&ComputePassDescriptor {
        label: Some("particle_update_pass"),
        timestamp_writes: None,
    });

    pass.set_pipeline(pipeline);
    pass.set_bind_group(0, bind_group, &[]);
    pass.dispatch_workgroups(particle_count, 1, 1);
}

/// Allocate a fresh 2-float uniform buffer holding the drawable size in
/// physical pixels.
///
/// Resize handling recreates the buffer instead of writing through the old
/// handle, so any frame already in flight keeps the view its bind group
/// captured.
pub fn create_dimensions_buffer(device: &RenderDevice, size: [f32; 2]) -> Buffer {
    device.create_buffer_with_data(&BufferInitDescriptor {
        label: Some("screen_dimensions"),
        contents: bytemuck::bytes_of(&size),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn same_drawable_size_uploads_identical_bytes() {
        // Two resize events with the same size must produce buffers with
        // the same content; the kernel reads exactly one vec2<f32>.
        let a = bytemuck::bytes_of(&[1280.0f32, 720.0]).to_vec();
        let b = bytemuck::bytes_of(&[1280.0f32, 720.0]).to_vec();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }
}
