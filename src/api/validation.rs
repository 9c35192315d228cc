use crate::error::ChartResult;

use super::LineChartConfig;

pub(super) fn validate_config(config: LineChartConfig) -> ChartResult<LineChartConfig> {
    config.animation_curve.validate()?;
    Ok(config)
}
