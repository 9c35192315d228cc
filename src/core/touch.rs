use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Pointer gesture phases reported by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchEventKind {
    PanDown,
    PanStart,
    PanUpdate,
    PanEnd,
    PanCancel,
    TapDown,
    TapUp,
    TapCancel,
    LongPressStart,
    LongPressMoveUpdate,
    LongPressEnd,
    PointerEnter,
    PointerHover,
    PointerExit,
}

impl TouchEventKind {
    /// `false` for phases that end an interaction (release, cancel, exit).
    #[must_use]
    pub fn is_interested_for_interactions(self) -> bool {
        !matches!(
            self,
            Self::PanEnd
                | Self::PanCancel
                | Self::TapUp
                | Self::TapCancel
                | Self::LongPressEnd
                | Self::PointerExit
        )
    }
}

/// Raw pointer event in widget-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    pub x: f64,
    pub y: f64,
}

impl TouchEvent {
    #[must_use]
    pub const fn new(kind: TouchEventKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    #[must_use]
    pub fn is_interested_for_interactions(&self) -> bool {
        self.kind.is_interested_for_interactions()
    }
}

/// A data point picked by hit testing, tagged with where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchedSpot {
    pub series_index: usize,
    pub spot_index: usize,
    pub x: f64,
    pub y: f64,
    /// Pointer position that produced this spot.
    #[serde(default)]
    pub pointer_x: f64,
    #[serde(default)]
    pub pointer_y: f64,
}

impl TouchedSpot {
    #[must_use]
    pub const fn new(series_index: usize, spot_index: usize, x: f64, y: f64) -> Self {
        Self {
            series_index,
            spot_index,
            x,
            y,
            pointer_x: 0.0,
            pointer_y: 0.0,
        }
    }

    #[must_use]
    pub fn from_point(series_index: usize, spot_index: usize, point: DataPoint) -> Self {
        Self::new(series_index, spot_index, point.x, point.y)
    }

    #[must_use]
    pub fn with_pointer(mut self, pointer_x: f64, pointer_y: f64) -> Self {
        self.pointer_x = pointer_x;
        self.pointer_y = pointer_y;
        self
    }

    #[must_use]
    pub fn point(&self) -> DataPoint {
        DataPoint::new(self.x, self.y)
    }
}

/// Spots rendered together inside one tooltip, in stacking order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipGroup {
    pub spots: Vec<TouchedSpot>,
}

impl TooltipGroup {
    #[must_use]
    pub fn new(spots: Vec<TouchedSpot>) -> Self {
        Self { spots }
    }
}

/// Hit-test result delivered alongside a [`TouchEvent`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchResponse {
    pub touched_spots: Vec<TouchedSpot>,
}

impl TouchResponse {
    #[must_use]
    pub fn new(touched_spots: Vec<TouchedSpot>) -> Self {
        Self { touched_spots }
    }
}

type TouchCallbackFn = dyn Fn(&TouchEvent, Option<&TouchResponse>) + Send + Sync;

/// Host-supplied touch listener.
///
/// Cloning shares the same closure; equality is identity of that closure.
#[derive(Clone)]
pub struct TouchCallback(Arc<TouchCallbackFn>);

impl TouchCallback {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&TouchEvent, Option<&TouchResponse>) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    pub fn call(&self, event: &TouchEvent, response: Option<&TouchResponse>) {
        (self.0)(event, response);
    }
}

impl PartialEq for TouchCallback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TouchCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TouchCallback")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Touch configuration of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTouchData {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub handle_built_in_touches: bool,
    #[serde(skip)]
    pub callback: Option<TouchCallback>,
}

fn default_true() -> bool {
    true
}

impl Default for LineTouchData {
    fn default() -> Self {
        Self {
            enabled: true,
            handle_built_in_touches: true,
            callback: None,
        }
    }
}

impl LineTouchData {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_built_in_touches(mut self, handle_built_in_touches: bool) -> Self {
        self.handle_built_in_touches = handle_built_in_touches;
        self
    }

    #[must_use]
    pub fn with_callback(mut self, callback: TouchCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Whether the engine should do its own selection bookkeeping.
    #[must_use]
    pub fn uses_built_in_handling(&self) -> bool {
        self.enabled && self.handle_built_in_touches
    }
}

#[cfg(test)]
mod tests {
    use super::{TouchCallback, TouchEventKind};

    #[test]
    fn release_phases_are_not_interested() {
        for kind in [
            TouchEventKind::PanEnd,
            TouchEventKind::PanCancel,
            TouchEventKind::TapUp,
            TouchEventKind::TapCancel,
            TouchEventKind::LongPressEnd,
            TouchEventKind::PointerExit,
        ] {
            assert!(!kind.is_interested_for_interactions(), "{kind:?}");
        }
        assert!(TouchEventKind::PointerHover.is_interested_for_interactions());
        assert!(TouchEventKind::PanUpdate.is_interested_for_interactions());
    }

    #[test]
    fn callbacks_compare_by_identity() {
        let first = TouchCallback::new(|_, _| {});
        let second = TouchCallback::new(|_, _| {});
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
