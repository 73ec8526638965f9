use std::{fmt, rc::Rc};

use crate::{Selector, Value};

pub type CallResult = Result<Value, CallError>;

/// Failures raised while a method slot is being invoked.
///
/// Installing advice never fails; everything here surfaces at the call site
/// and travels unchanged through every advice layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// An around advice invoked a previous method that never existed.
    #[error("no previous method to call for `{selector}`")]
    AbsentPrevious { selector: Selector },
    /// The receiver has nothing in the requested slot.
    #[error("message `{selector}` not understood")]
    MessageNotUnderstood { selector: Selector },
    #[error("{0}")]
    Failed(String),
}

impl CallError {
    pub fn failed(message: impl Into<String>) -> Self {
        CallError::Failed(message.into())
    }
}

/// A callable stored in a method slot of a `T`.
///
/// The receiver is passed explicitly as `&mut T`, so every layer of an
/// advised method observes the same object.
pub struct Method<T>(Rc<dyn Fn(&mut T, &[Value]) -> CallResult>);

impl<T> Method<T> {
    pub fn new(f: impl Fn(&mut T, &[Value]) -> CallResult + 'static) -> Self {
        Self(Rc::new(f))
    }

    #[inline]
    pub fn call(&self, receiver: &mut T, args: &[Value]) -> CallResult {
        (self.0)(receiver, args)
    }

    /// Whether both handles refer to the same callable.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Method<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Method<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// The slot value an around advice wraps.
///
/// May be absent when the slot was empty at installation time; calling an
/// absent previous fails with [`CallError::AbsentPrevious`].
pub struct Previous<T> {
    selector: Selector,
    method: Option<Method<T>>,
}

impl<T> Previous<T> {
    pub fn new(selector: Selector, method: Option<Method<T>>) -> Self {
        Self { selector, method }
    }

    #[inline]
    pub fn selector(&self) -> Selector {
        self.selector
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.method.is_none()
    }

    #[inline]
    pub fn method(&self) -> Option<&Method<T>> {
        self.method.as_ref()
    }

    pub fn call(&self, receiver: &mut T, args: &[Value]) -> CallResult {
        match &self.method {
            Some(method) => method.call(receiver, args),
            None => Err(CallError::AbsentPrevious {
                selector: self.selector,
            }),
        }
    }
}

impl<T> fmt::Debug for Previous<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Previous")
            .field("selector", &self.selector)
            .field("method", &self.method)
            .finish()
    }
}
