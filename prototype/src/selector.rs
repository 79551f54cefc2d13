use std::{borrow::Borrow, fmt, sync::Arc};

/// Name of a message an object may or may not understand.
///
/// Selectors are not interned: two selectors are equal when their names are
/// equal. Any string is a legal selector, whether some object answers it is
/// decided by that object's dispatch function alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(Arc<str>);

impl Selector {
    pub const INT_VALUE: &'static str = "intValue";
    pub const DESCRIPTION: &'static str = "description";
    pub const VALUE: &'static str = "value";
    pub const SET_VALUE: &'static str = "setValue:";

    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn int_value() -> Self {
        Self::new(Self::INT_VALUE)
    }

    pub fn description() -> Self {
        Self::new(Self::DESCRIPTION)
    }

    pub fn value() -> Self {
        Self::new(Self::VALUE)
    }

    pub fn set_value() -> Self {
        Self::new(Self::SET_VALUE)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for Selector {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Selector {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Selector {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
