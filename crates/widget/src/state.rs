// From iced_aw, license MIT

//! Shared state between a rendered element and its listeners.

use std::cell::RefCell;
use std::rc::Rc;

/// Reference-counted wrapper for state shared by listeners.
pub(crate) struct RcWrapper<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for RcWrapper<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for RcWrapper<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> RcWrapper<T> {
    pub fn new(data: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(data)),
        }
    }

    pub fn with_data<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn with_data_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}
