use std::{collections::HashMap, sync::Arc};

use crate::{Implementation, Object, Selector};

/// Table-driven object description.
///
/// Holds the methods an object answers directly, per-selector delegates and
/// a default parent. [`MethodMap::build`] freezes the table into an
/// [`Object`]; every `MethodMissing` answer is created once at build time, so
/// repeated dispatch of a selector hands out the same implementation.
#[derive(Default, Clone)]
pub struct MethodMap {
    methods: HashMap<Selector, Implementation>,
    delegates: HashMap<Selector, Object>,
    parent: Option<Object>,
}

struct FrozenMap {
    methods: HashMap<Selector, Implementation>,
    delegates: HashMap<Selector, Implementation>,
    missing: Implementation,
}

impl MethodMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `selector` with `implementation`.
    ///
    /// A `MethodMissing` implementation is allowed and delegates just this
    /// selector wherever its thunk says.
    pub fn method(mut self, selector: impl Into<Selector>, implementation: Implementation) -> Self {
        let selector = selector.into();
        self.delegates.remove(&selector);
        self.methods.insert(selector, implementation);
        self
    }

    pub fn integer(
        self,
        selector: impl Into<Selector>,
        f: impl Fn() -> Option<i64> + Send + Sync + 'static,
    ) -> Self {
        self.method(selector, Implementation::integer(f))
    }

    pub fn description(
        self,
        selector: impl Into<Selector>,
        f: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.method(selector, Implementation::description(f))
    }

    pub fn object(
        self,
        selector: impl Into<Selector>,
        f: impl Fn() -> Option<Object> + Send + Sync + 'static,
    ) -> Self {
        self.method(selector, Implementation::object(f))
    }

    pub fn mutator(
        self,
        selector: impl Into<Selector>,
        f: impl Fn(Object) + Send + Sync + 'static,
    ) -> Self {
        self.method(selector, Implementation::mutator(f))
    }

    /// Send `selector` to `delegate` instead of the default parent.
    pub fn delegate(mut self, selector: impl Into<Selector>, delegate: Object) -> Self {
        let selector = selector.into();
        self.methods.remove(&selector);
        self.delegates.insert(selector, delegate);
        self
    }

    /// Object consulted for every selector not otherwise listed.
    pub fn parent(mut self, parent: Object) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn understands(&self, selector: &Selector) -> bool {
        self.methods
            .get(selector)
            .is_some_and(|implementation| !implementation.is_method_missing())
    }

    pub fn build(self) -> Object {
        let delegates = self
            .delegates
            .into_iter()
            .map(|(selector, delegate)| (selector, Implementation::delegate_to(Some(delegate))))
            .collect();
        let frozen = Arc::new(FrozenMap {
            methods: self.methods,
            delegates,
            missing: Implementation::delegate_to(self.parent),
        });
        Object::new(move |selector| frozen.dispatch(selector))
    }
}

impl FrozenMap {
    fn dispatch(&self, selector: &Selector) -> Implementation {
        self.methods
            .get(selector)
            .or_else(|| self.delegates.get(selector))
            .unwrap_or(&self.missing)
            .clone()
    }
}
