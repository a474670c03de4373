use bevy::prelude::*;
use bevy::render::render_resource::Buffer;
use bevy::render::renderer::RenderDevice;
use bevy::window::{PrimaryWindow, WindowResized};
use silk_gpu::create_dimensions_buffer;

/// Current drawable size mirrored into GPU memory.
///
/// The buffer is replaced wholesale on every resize; nothing ever writes
/// through an existing handle, so a frame in flight keeps whichever buffer
/// its bind group captured.
#[derive(Resource)]
pub struct ScreenDimensions {
    pub buffer: Buffer,
    pub size: [f32; 2],
}

pub fn init_screen_dimensions(
    mut commands: Commands,
    device: Res<RenderDevice>,
    window: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window.get_single() else {
        return;
    };
    let size = drawable_size(window);
    commands.insert_resource(ScreenDimensions {
        buffer: create_dimensions_buffer(&device, size),
        size,
    });
    info!("Screen: {}x{} px", size[0], size[1]);
}

/// Recreate the dimensions buffer when the drawable size changes.
/// Idempotent: duplicate resize events rebuild an identical buffer.
pub fn refresh_screen_dimensions(
    mut events: EventReader<WindowResized>,
    device: Res<RenderDevice>,
    window: Query<&Window, With<PrimaryWindow>>,
    dims: Option<ResMut<ScreenDimensions>>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let Some(mut dims) = dims else {
        return;
    };
    let Ok(window) = window.get_single() else {
        return;
    };

    let size = drawable_size(window);
    dims.buffer = create_dimensions_buffer(&device, size);
    dims.size = size;
    debug!("Screen: resized to {}x{} px", size[0], size[1]);
}

fn drawable_size(window: &Window) -> [f32; 2] {
    [
        window.physical_width() as f32,
        window.physical_height() as f32,
    ]
}
