mod accessors;
mod error;
mod implementation;
mod lookup;
mod map;
mod object;
mod objects;
mod selector;
mod special;

pub use accessors::*;
pub use error::ContractViolation;
pub use implementation::{Accessor, Implementation, ImplementationKind, Mutator};
pub use lookup::{LookupResult, lookup, resolve};
pub use map::MethodMap;
pub use object::Object;
pub use objects::{holder_object, integer_object};
pub use selector::Selector;
pub use special::{RootPolicy, root_object, root_object_with, terminal_object};
