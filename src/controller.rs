// Platform-free core of one parallax controller.
//
// The DOM layer feeds it intersection reports, scroll/resize notifications and
// animation-frame callbacks, and performs whatever the returned values ask for
// (attach/detach listeners, schedule a frame, write a style).

use crate::gate::{FrameRequest, Transition, Visibility, VisibilityGate};
use crate::motion::{compute_style, StyleUpdate, Viewport};
use crate::options::MotionOptions;

/// What the DOM layer must do after an intersection report.
#[derive(Clone, Debug, PartialEq)]
pub enum GateAction {
    /// Attach scroll/resize listeners and apply the update right away.
    Subscribe(StyleUpdate),
    /// Detach scroll/resize listeners.
    Unsubscribe,
    None,
}

#[derive(Clone, Debug)]
pub struct MotionController {
    options: MotionOptions,
    anchor_y: f64,
    gate: VisibilityGate,
    frame: FrameRequest,
}

impl MotionController {
    pub fn new(options: MotionOptions, anchor_y: f64) -> Self {
        Self {
            options,
            anchor_y,
            gate: VisibilityGate::default(),
            frame: FrameRequest::default(),
        }
    }

    pub fn options(&self) -> &MotionOptions {
        &self.options
    }

    pub fn anchor_y(&self) -> f64 {
        self.anchor_y
    }

    pub fn visibility(&self) -> Visibility {
        self.gate.state()
    }

    /// Feed one intersection report. `measure` is only called on entry, so the
    /// anchor is fresh before the immediate recompute.
    pub fn on_intersection(
        &mut self,
        intersecting: bool,
        measure: impl FnOnce() -> f64,
        viewport: Viewport,
    ) -> GateAction {
        match self.gate.report(intersecting) {
            Transition::Entered => {
                self.anchor_y = measure();
                GateAction::Subscribe(self.compute(viewport))
            }
            Transition::Left => GateAction::Unsubscribe,
            Transition::Unchanged => GateAction::None,
        }
    }

    /// Returns true when a new animation frame has to be scheduled.
    pub fn on_scroll(&mut self) -> bool {
        if !self.gate.is_visible() {
            return false;
        }
        self.frame.request()
    }

    pub fn on_resize(&mut self, anchor_y: f64) -> bool {
        self.anchor_y = anchor_y;
        self.on_scroll()
    }

    /// Re-measure outside of a resize (e.g. after content above the element changed).
    pub fn refresh(&mut self, anchor_y: f64) -> bool {
        self.on_resize(anchor_y)
    }

    // Called when a requested frame will never fire (cancelled or refused).
    pub fn abandon_frame(&mut self) {
        self.frame.complete();
    }

    /// Frame callback. A frame that fires after the element left the viewport
    /// only clears the pending request.
    pub fn on_frame(&mut self, viewport: Viewport) -> Option<StyleUpdate> {
        self.frame.complete();
        if !self.gate.is_visible() {
            return None;
        }
        Some(self.compute(viewport))
    }

    pub fn compute(&self, viewport: Viewport) -> StyleUpdate {
        compute_style(self.anchor_y, viewport, &self.options)
    }
}
