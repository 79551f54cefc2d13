use std::{fmt, sync::Arc};

use crate::Object;

/// No-argument method body producing an optional value.
pub type Accessor<T> = Arc<dyn Fn() -> Option<T> + Send + Sync>;

/// Single-argument method body used for side-effecting setters.
pub type Mutator = Arc<dyn Fn(Object) + Send + Sync>;

/// What a dispatch function answered for a selector.
///
/// Exactly one shape per value. Decoding as the wrong shape is a broken
/// object definition, so the `into_*` decoders hand the implementation back
/// instead of pretending the selector was absent.
#[derive(Clone)]
pub enum Implementation {
    IntegerAccessor(Accessor<i64>),
    DescriptionAccessor(Accessor<String>),
    ObjectAccessor(Accessor<Object>),
    Mutator(Mutator),
    /// The receiver does not implement the selector; retry against the
    /// object produced by the thunk, if any.
    MethodMissing(Accessor<Object>),
}

/// Discriminant of an [`Implementation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImplementationKind {
    IntegerAccessor,
    DescriptionAccessor,
    ObjectAccessor,
    Mutator,
    MethodMissing,
}

impl Implementation {
    pub fn integer(f: impl Fn() -> Option<i64> + Send + Sync + 'static) -> Self {
        Self::IntegerAccessor(Arc::new(f))
    }

    pub fn description(f: impl Fn() -> Option<String> + Send + Sync + 'static) -> Self {
        Self::DescriptionAccessor(Arc::new(f))
    }

    pub fn object(f: impl Fn() -> Option<Object> + Send + Sync + 'static) -> Self {
        Self::ObjectAccessor(Arc::new(f))
    }

    pub fn mutator(f: impl Fn(Object) + Send + Sync + 'static) -> Self {
        Self::Mutator(Arc::new(f))
    }

    pub fn method_missing(fallback: impl Fn() -> Option<Object> + Send + Sync + 'static) -> Self {
        Self::MethodMissing(Arc::new(fallback))
    }

    /// `MethodMissing` whose fallback is always `fallback`.
    pub fn delegate_to(fallback: Option<Object>) -> Self {
        Self::method_missing(move || fallback.clone())
    }

    pub fn kind(&self) -> ImplementationKind {
        match self {
            Self::IntegerAccessor(_) => ImplementationKind::IntegerAccessor,
            Self::DescriptionAccessor(_) => ImplementationKind::DescriptionAccessor,
            Self::ObjectAccessor(_) => ImplementationKind::ObjectAccessor,
            Self::Mutator(_) => ImplementationKind::Mutator,
            Self::MethodMissing(_) => ImplementationKind::MethodMissing,
        }
    }

    #[inline]
    pub fn is_method_missing(&self) -> bool {
        matches!(self, Self::MethodMissing(_))
    }

    pub fn into_integer(self) -> Result<Accessor<i64>, Self> {
        match self {
            Self::IntegerAccessor(f) => Ok(f),
            other => Err(other),
        }
    }

    pub fn into_description(self) -> Result<Accessor<String>, Self> {
        match self {
            Self::DescriptionAccessor(f) => Ok(f),
            other => Err(other),
        }
    }

    pub fn into_object(self) -> Result<Accessor<Object>, Self> {
        match self {
            Self::ObjectAccessor(f) => Ok(f),
            other => Err(other),
        }
    }

    pub fn into_mutator(self) -> Result<Mutator, Self> {
        match self {
            Self::Mutator(f) => Ok(f),
            other => Err(other),
        }
    }

    pub fn into_method_missing(self) -> Result<Accessor<Object>, Self> {
        match self {
            Self::MethodMissing(f) => Ok(f),
            other => Err(other),
        }
    }

    /// Address of the shared method body, used for identity comparison.
    fn body_ptr(&self) -> *const () {
        match self {
            Self::IntegerAccessor(f) => Arc::as_ptr(f) as *const (),
            Self::DescriptionAccessor(f) => Arc::as_ptr(f) as *const (),
            Self::ObjectAccessor(f) => Arc::as_ptr(f) as *const (),
            Self::Mutator(f) => Arc::as_ptr(f) as *const (),
            Self::MethodMissing(f) => Arc::as_ptr(f) as *const (),
        }
    }
}

/// Same shape and same shared method body.
impl PartialEq for Implementation {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.body_ptr() == other.body_ptr()
    }
}

impl Eq for Implementation {}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Implementation")
            .field(&self.kind())
            .field(&self.body_ptr())
            .finish()
    }
}

impl fmt::Display for ImplementationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IntegerAccessor => "integer accessor",
            Self::DescriptionAccessor => "description accessor",
            Self::ObjectAccessor => "object accessor",
            Self::Mutator => "mutator",
            Self::MethodMissing => "method missing",
        };
        f.write_str(name)
    }
}
