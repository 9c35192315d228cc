use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and hosts without a drawing backend.
///
/// Frames are still validated so bad geometry surfaces before a real backend
/// sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_series_count: usize,
    pub last_indicator_count: usize,
    pub last_tooltip_group_count: usize,
    pub last_progress: Option<f64>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_series_count = frame.current.series.len();
        self.last_indicator_count = frame
            .current
            .series
            .iter()
            .map(|series| series.showing_indicators.len())
            .sum();
        self.last_tooltip_group_count = frame.current.showing_tooltip_indicators.len();
        self.last_progress = Some(frame.progress);
        Ok(())
    }
}
