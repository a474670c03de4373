pub mod context;
pub mod dispatch;

pub use context::{GpuContext, GpuInitError};
pub use dispatch::{create_dimensions_buffer, encode_update_pass};
