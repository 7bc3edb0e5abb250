//! One-element lazy sequence adapter.
//!
//! A [`Sequence`] is the restartable side: every call to [`Sequence::iter`]
//! hands out a fresh [`Cursor`] with its own position. A cursor is the
//! three-state machine `Initial -> Value -> End`; `reset` rewinds it.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Initial,
    Value,
    End,
}

/// Restartable sequence that yields exactly one value per iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    value: T,
}

impl<T> Sequence<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Start an independent iteration.
    pub fn iter(&self) -> Cursor<&T> {
        Cursor::new(&self.value)
    }

    pub fn len(&self) -> usize {
        1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        Cursor::new(self.value)
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Cursor<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Position over a single element.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    value: T,
    state: CursorState,
}

impl<T> Cursor<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            state: CursorState::Initial,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Move to the next position. True only on the `Initial -> Value` step.
    pub fn advance(&mut self) -> bool {
        match self.state {
            CursorState::Initial => {
                self.state = CursorState::Value;
                true
            }
            CursorState::Value | CursorState::End => {
                self.state = CursorState::End;
                false
            }
        }
    }

    /// The current element; only readable in state `Value`.
    pub fn current(&self) -> Result<&T> {
        match self.state {
            CursorState::Value => Ok(&self.value),
            CursorState::Initial => Err(Error::InvalidState("cursor has not been advanced")),
            CursorState::End => Err(Error::InvalidState("cursor is past the end")),
        }
    }

    /// Rewind to `Initial`. This starts a new iteration, so a cursor that
    /// has already returned `None` yields its value again.
    pub fn reset(&mut self) {
        self.state = CursorState::Initial;
    }
}

impl<T: Clone> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.advance() {
            self.current().ok().cloned()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::from(self.state == CursorState::Initial);
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for Cursor<T> {}
