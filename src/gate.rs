// Visibility gate and frame request bookkeeping.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Outcome of feeding one intersection report into the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Entered,
    Left,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityGate {
    state: Visibility,
}

impl VisibilityGate {
    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    pub fn report(&mut self, intersecting: bool) -> Transition {
        match (self.state, intersecting) {
            (Visibility::Hidden, true) => {
                self.state = Visibility::Visible;
                Transition::Entered
            }
            (Visibility::Visible, false) => {
                self.state = Visibility::Hidden;
                Transition::Left
            }
            _ => Transition::Unchanged,
        }
    }
}

/// At most one outstanding animation-frame request.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameRequest {
    pending: bool,
}

impl FrameRequest {
    /// Returns true when the caller must actually schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}
