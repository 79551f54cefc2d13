use std::{fmt, sync::Arc};

use crate::{Implementation, LookupResult, Selector, lookup};

type DispatchFn = dyn Fn(&Selector) -> Implementation + Send + Sync;

/// A dynamic object: nothing but a dispatch function from selector to
/// implementation.
///
/// Instance state lives in whatever the dispatch closure captures and is
/// invisible to the runtime. Cloning an `Object` clones the handle, not the
/// state. Dispatch must not have effects observable to the lookup protocol;
/// only invoking a returned method body may.
#[derive(Clone)]
pub struct Object(Arc<DispatchFn>);

impl Object {
    pub fn new(dispatch: impl Fn(&Selector) -> Implementation + Send + Sync + 'static) -> Self {
        Self(Arc::new(dispatch))
    }

    /// Ask this object, and only this object, for `selector`.
    #[inline]
    pub fn dispatch(&self, selector: &Selector) -> Implementation {
        (self.0)(selector)
    }

    /// Ask this object for `selector`, following `MethodMissing` fallbacks.
    pub fn resolve(&self, selector: &Selector) -> Option<Implementation> {
        self.lookup(selector).into_implementation()
    }

    pub fn lookup(&self, selector: &Selector) -> LookupResult {
        lookup(Some(self), selector)
    }

    /// `true` if both handles share the same dispatch function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({:p})", self.addr())
    }
}
