mod curve;
mod lerp;
mod tween;

pub use curve::Curve;
pub use lerp::{Lerp, interpolate, lerp_f64};
pub use tween::SnapshotTween;
