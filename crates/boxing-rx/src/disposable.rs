//! Cancellation handles returned by `subscribe`.

use std::fmt;

type ReleaseFn = Box<dyn FnOnce()>;

/// Right to release a subscription. Disposal is idempotent: the release action
/// runs on the first `dispose` only.
#[derive(Default)]
pub struct Disposable {
    action: Option<ReleaseFn>,
    armed: bool,
    disposed: bool,
}

impl Disposable {
    /// Handle for flows with nothing to release.
    pub fn nop() -> Self {
        Self::default()
    }

    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            action: Some(Box::new(action)),
            armed: true,
            disposed: false,
        }
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        #[cfg(feature = "tracing")]
        tracing::trace!(armed = self.armed, "dispose");

        if let Some(action) = self.action.take() {
            action();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// True for handles created by [`Disposable::nop`].
    pub fn is_nop(&self) -> bool {
        !self.armed
    }
}

impl fmt::Debug for Disposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposable")
            .field("nop", &self.is_nop())
            .field("disposed", &self.disposed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_nop_dispose_twice() {
        let mut d = Disposable::nop();
        assert!(d.is_nop());
        d.dispose();
        d.dispose();
        assert!(d.is_disposed());
    }

    #[test]
    fn test_release_runs_once() {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let mut d = Disposable::new(move || c.set(c.get() + 1));
        assert!(!d.is_nop());
        assert!(!d.is_disposed());

        d.dispose();
        d.dispose();
        assert_eq!(count.get(), 1);
        assert!(d.is_disposed());
    }

    #[test]
    fn test_drop_does_not_release() {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        drop(Disposable::new(move || c.set(c.get() + 1)));
        assert_eq!(count.get(), 0);
    }
}
