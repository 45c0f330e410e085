// Controller lifetime and listener bookkeeping.
use std::rc::Rc;

/// Strong self-reference that keeps a controller running after every external
/// handle is gone. Only `release` ends it.
pub struct KeepAlive<T> {
    held: Option<Rc<T>>,
}

impl<T> Default for KeepAlive<T> {
    fn default() -> Self {
        Self { held: None }
    }
}

impl<T> KeepAlive<T> {
    pub fn hold(&mut self, this: Rc<T>) {
        self.held = Some(this);
    }

    /// Hands the reference back so the caller drops it outside any borrow of `T`.
    #[must_use]
    pub fn release(&mut self) -> Option<Rc<T>> {
        self.held.take()
    }
}

/// Tracks whether scroll/resize listeners are attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct Subscription {
    attached: bool,
}

impl Subscription {
    /// Runs `attach` unless already attached. The flag is only set when it succeeds.
    pub fn attach<E>(&mut self, attach: impl FnOnce() -> Result<(), E>) -> Result<(), E> {
        if self.attached {
            return Ok(());
        }
        attach()?;
        self.attached = true;
        Ok(())
    }

    pub fn detach(&mut self, detach: impl FnOnce()) {
        if !self.attached {
            return;
        }
        detach();
        self.attached = false;
    }
}
