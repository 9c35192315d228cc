mod frame;
mod null_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive read-only snapshots; all painting happens on their side.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
