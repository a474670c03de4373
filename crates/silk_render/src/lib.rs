pub mod buffers;
pub mod camera;
pub mod draw_pass;
pub mod plugin;
pub mod screen;
pub mod update_pass;

pub use buffers::LatticeState;
pub use plugin::SilkRenderPlugin;
