use std::fmt;

use crate::{ImplementationKind, Selector};

/// A programmer error in how an object was put together.
///
/// Distinct from a selector that simply is not understood, which is an
/// ordinary `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The receiver answered `selector` with the wrong shape of method.
    WrongShape {
        selector: Selector,
        expected: ImplementationKind,
        found: ImplementationKind,
    },
    /// The selector reached a fail-fast root without any object answering.
    Unsupported { selector: Selector },
}

impl ContractViolation {
    pub fn selector(&self) -> &Selector {
        match self {
            Self::WrongShape { selector, .. } | Self::Unsupported { selector } => selector,
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongShape {
                selector,
                expected,
                found,
            } => write!(
                f,
                "contract violation: `{selector}` answered with {found}, expected {expected}"
            ),
            Self::Unsupported { selector } => write!(
                f,
                "contract violation: `{selector}` is not supported anywhere in the chain"
            ),
        }
    }
}

impl std::error::Error for ContractViolation {}

/// Abort at the point of misuse.
#[cold]
#[track_caller]
pub fn violated(violation: ContractViolation) -> ! {
    log::error!("{violation}");
    panic!("{violation}")
}
