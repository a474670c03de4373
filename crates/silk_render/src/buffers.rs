use bevy::prelude::*;
use bevy::render::Extract;
use bevy::render::render_resource::{
    BindGroup, BindGroupEntry, BindGroupLayout, Buffer, ComputePipeline, RenderPipeline,
};
use bevy::render::renderer::RenderDevice;
use silk_core::{Particle, SimConfig};
use silk_gpu::context::{
    DIMENSIONS_BINDING, INITIAL_AGE_BINDING, PARTICLE_BINDING, PARTICLE_COUNT_BINDING,
    TIME_STEP_BINDING,
};
use silk_gpu::GpuContext;

use crate::screen::ScreenDimensions;

// ==================== main world ====================

/// CPU-side lattice as generated at startup. The GPU mirror advances on
/// its own after upload; this copy pins the count and byte layout for the
/// process lifetime.
#[derive(Resource)]
pub struct LatticeState {
    pub particles: Vec<Particle>,
    pub config: SimConfig,
}

impl LatticeState {
    /// Placeholder used before startup generation runs
    pub fn empty(config: SimConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
        }
    }
}

/// Main-world owner of the long-lived GPU resources
#[derive(Resource)]
pub struct LatticeGpu(pub GpuContext);

// ==================== render world ====================

/// Pipeline and buffer handles cloned into the render world each frame
#[derive(Resource, Clone)]
pub struct ExtractedLattice {
    pub update_pipeline: ComputePipeline,
    pub draw_pipeline: RenderPipeline,
    pub update_layout: BindGroupLayout,
    pub particle_buffer: Buffer,
    pub time_step_buffer: Buffer,
    pub particle_count_buffer: Buffer,
    pub initial_age_buffer: Buffer,
    pub particle_count: u32,
}

#[derive(Resource, Clone)]
pub struct ExtractedDimensions {
    pub buffer: Buffer,
}

/// Bind group feeding the update kernel. Rebuilt every frame so a resized
/// dimensions buffer is picked up before the next dispatch.
#[derive(Resource)]
pub struct UpdateBindGroup(pub BindGroup);

pub fn extract_lattice(mut commands: Commands, gpu: Extract<Option<Res<LatticeGpu>>>) {
    let Some(gpu) = gpu.as_ref() else {
        return;
    };
    let ctx = &gpu.0;
    commands.insert_resource(ExtractedLattice {
        update_pipeline: ctx.update_pipeline.clone(),
        draw_pipeline: ctx.draw_pipeline.clone(),
        update_layout: ctx.update_layout.clone(),
        particle_buffer: ctx.particle_buffer.clone(),
        time_step_buffer: ctx.time_step_buffer.clone(),
        particle_count_buffer: ctx.particle_count_buffer.clone(),
        initial_age_buffer: ctx.initial_age_buffer.clone(),
        particle_count: ctx.particle_count,
    });
}

pub fn extract_dimensions(mut commands: Commands, dims: Extract<Option<Res<ScreenDimensions>>>) {
    let Some(dims) = dims.as_ref() else {
        return;
    };
    commands.insert_resource(ExtractedDimensions {
        buffer: dims.buffer.clone(),
    });
}

pub fn prepare_update_bind_group(
    mut commands: Commands,
    device: Res<RenderDevice>,
    lattice: Option<Res<ExtractedLattice>>,
    dims: Option<Res<ExtractedDimensions>>,
) {
    let (Some(lattice), Some(dims)) = (lattice, dims) else {
        return;
    };

    let bind_group = device.create_bind_group(
        Some("particle_update_bind_group"),
        &lattice.update_layout,
        &[
            BindGroupEntry {
                binding: PARTICLE_BINDING,
                resource: lattice.particle_buffer.as_entire_binding(),
            },
            BindGroupEntry {
                binding: DIMENSIONS_BINDING,
                resource: dims.buffer.as_entire_binding(),
            },
            BindGroupEntry {
                binding: TIME_STEP_BINDING,
                resource: lattice.time_step_buffer.as_entire_binding(),
            },
            BindGroupEntry {
                binding: PARTICLE_COUNT_BINDING,
                resource: lattice.particle_count_buffer.as_entire_binding(),
            },
            BindGroupEntry {
                binding: INITIAL_AGE_BINDING,
                resource: lattice.initial_age_buffer.as_entire_binding(),
            },
        ],
    );
    commands.insert_resource(UpdateBindGroup(bind_group));
}
