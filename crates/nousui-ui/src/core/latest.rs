//! Shared slot read by long-lived DOM listeners.
//!
//! A listener registered once keeps seeing the value from its registration;
//! reading through a [`Latest`] lets a component refresh the value every render.

use std::cell::RefCell;
use std::rc::Rc;

/// Clonable handle to the most recently stored value.
#[derive(Debug, Default)]
pub struct Latest<T> {
    slot: Rc<RefCell<T>>,
}

impl<T> Clone for Latest<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Clone> Latest<T> {
    /// Slot holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(value)),
        }
    }

    /// Store `value` for every handle.
    pub fn replace(&self, value: T) {
        *self.slot.borrow_mut() = value;
    }

    /// Copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.slot.borrow().clone()
    }
}
