use bevy::render::render_resource::*;
use bevy::render::renderer::RenderDevice;
use silk_core::{Particle, SimConfig};
use thiserror::Error;

// Bind group slots of the update kernel. The WGSL module declares the same
// numbers; both sides break together if either drifts.
pub const PARTICLE_BINDING: u32 = 0;
pub const DIMENSIONS_BINDING: u32 = 1;
pub const TIME_STEP_BINDING: u32 = 2;
pub const PARTICLE_COUNT_BINDING: u32 = 3;
pub const INITIAL_AGE_BINDING: u32 = 4;

/// Fatal construction failures. Nothing can ever be drawn without these
/// resources, so callers are expected to shut the app down on error.
#[derive(Debug, Error)]
pub enum GpuInitError {
    #[error("cannot upload an empty particle lattice")]
    EmptyLattice,
}

/// Owns every long-lived GPU resource of the simulation: both pipelines,
/// the particle storage buffer, and the scalar uniforms that never change
/// after startup. Created once, lives for the process.
///
/// The particle buffer is written only by the update kernel and read only
/// by the draw pipeline; the render graph orders the two passes, so no
/// CPU-side lock guards it.
pub struct GpuContext {
    pub update_pipeline: ComputePipeline,
    pub draw_pipeline: RenderPipeline,
    pub update_layout: BindGroupLayout,
    pub particle_buffer: Buffer,
    pub time_step_buffer: Buffer,
    pub particle_count_buffer: Buffer,
    pub initial_age_buffer: Buffer,
    pub particle_count: u32,
}

impl GpuContext {
    pub fn new(
        device: &RenderDevice,
        particles: &[Particle],
        config: &SimConfig,
    ) -> Result<Self, GpuInitError> {
        if particles.is_empty() {
            return Err(GpuInitError::EmptyLattice);
        }
        let particle_count = particles.len() as u32;

        // Shader module with all three kernel entry points
        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("particle_kernels"),
            source: ShaderSource::Wgsl(include_str!("../shaders/particles.wgsl").into()),
        });

        let update_layout = device.create_bind_group_layout(
            Some("particle_update_layout"),
            &[
                // particles (read_write)
                BindGroupLayoutEntry {
                    binding: PARTICLE_BINDING,
                    visibility: ShaderStages::COMPUTE,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Storage { read_only: false },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                uniform_entry(DIMENSIONS_BINDING),
                uniform_entry(TIME_STEP_BINDING),
                uniform_entry(PARTICLE_COUNT_BINDING),
                uniform_entry(INITIAL_AGE_BINDING),
            ],
        );

        let update_pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("particle_update_pipeline_layout"),
            bind_group_layouts: &[&update_layout],
            push_constant_ranges: &[],
        });

        let update_pipeline = device.create_compute_pipeline(&RawComputePipelineDescriptor {
            label: Some("particle_update_pipeline"),
            layout: Some(&update_pipeline_layout),
            module: &shader,
            entry_point: Some("compute_main"),
            compilation_options: Default::default(),
            cache: None,
        });

        // The draw pipeline takes the particle buffer as its only vertex
        // input; no bind groups on the render side.
        let draw_pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("particle_draw_pipeline_layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let vertex_attributes = [
            VertexAttribute {
                format: VertexFormat::Float32x2,
                offset: core::mem::offset_of!(Particle, position) as u64,
                shader_location: 0,
            },
            VertexAttribute {
                format: VertexFormat::Float32,
                offset: core::mem::offset_of!(Particle, radius) as u64,
                shader_location: 1,
            },
            VertexAttribute {
                format: VertexFormat::Float32x4,
                offset: core::mem::offset_of!(Particle, color) as u64,
                shader_location: 2,
            },
            VertexAttribute {
                format: VertexFormat::Float32,
                offset: core::mem::offset_of!(Particle, age) as u64,
                shader_location: 3,
            },
        ];

        let draw_pipeline = device.create_render_pipeline(&RawRenderPipelineDescriptor {
            label: Some("particle_draw_pipeline"),
            layout: Some(&draw_pipeline_layout),
            vertex: RawVertexState {
                module: &shader,
                entry_point: Some("vertex_main"),
                compilation_options: Default::default(),
                buffers: &[RawVertexBufferLayout {
                    array_stride: size_of::<Particle>() as u64,
                    step_mode: VertexStepMode::Vertex,
                    attributes: &vertex_attributes,
                }],
            },
            fragment: Some(RawFragmentState {
                module: &shader,
                entry_point: Some("fragment_main"),
                compilation_options: Default::default(),
                targets: &[Some(ColorTargetState {
                    // Bevy's SDR main pass texture; multisample count must
                    // match the pass the draw node joins
                    format: TextureFormat::Rgba8UnormSrgb,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: MultisampleState {
                count: 4,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        });

        // Shared storage buffer: written at creation from the CPU lattice,
        // rewritten by the update kernel, read as vertex input by the draw
        // pipeline.
        let particle_buffer = device.create_buffer_with_data(&BufferInitDescriptor {
            label: Some("particle_lattice"),
            contents: bytemuck::cast_slice(particles),
            usage: BufferUsages::STORAGE | BufferUsages::VERTEX | BufferUsages::COPY_DST,
        });

        let time_step_buffer = device.create_buffer_with_data(&BufferInitDescriptor {
            label: Some("time_step"),
            contents: bytemuck::bytes_of(&config.time_step),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });

        let particle_count_buffer = device.create_buffer_with_data(&BufferInitDescriptor {
            label: Some("particle_count"),
            contents: bytemuck::bytes_of(&particle_count),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });

        let initial_age_buffer = device.create_buffer_with_data(&BufferInitDescriptor {
            label: Some("initial_age"),
            contents: bytemuck::bytes_of(&config.initial_age),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });

        Ok(Self {
            update_pipeline,
            draw_pipeline,
            update_layout,
            particle_buffer,
            time_step_buffer,
            particle_count_buffer,
            initial_age_buffer,
            particle_count,
        })
    }
}

fn uniform_entry(binding: u32) -> BindGroupLayoutEntry {
    BindGroupLayoutEntry {
        binding,
        visibility: ShaderStages::COMPUTE,
        ty: BindingType::Buffer {
            ty: BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KERNELS: &str = include_str!("../shaders/particles.wgsl");

    #[test]
    fn kernel_module_declares_every_entry_point() {
        assert!(KERNELS.contains("fn vertex_main"));
        assert!(KERNELS.contains("fn fragment_main"));
        assert!(KERNELS.contains("fn compute_main"));
    }

    #[test]
    fn kernel_module_declares_every_binding_slot() {
        for binding in [
            PARTICLE_BINDING,
            DIMENSIONS_BINDING,
            TIME_STEP_BINDING,
            PARTICLE_COUNT_BINDING,
            INITIAL_AGE_BINDING,
        ] {
            assert!(KERNELS.contains(&format!("@binding({binding})")));
        }
    }

    #[test]
    fn update_kernel_runs_one_particle_per_group() {
        assert!(KERNELS.contains("@workgroup_size(1)"));
    }
}
