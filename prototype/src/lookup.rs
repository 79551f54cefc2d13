use crate::{Implementation, Object, Selector};

/// The result of walking a receiver's delegation chain for a selector.
#[derive(Debug, Clone)]
pub enum LookupResult {
    /// The receiver was absent; nothing was dispatched.
    NoReceiver,
    /// Some object along the chain answered with a concrete implementation.
    Found {
        implementation: Implementation,
        /// The object that answered (the receiver itself when `depth` is 0).
        holder: Object,
        /// Number of `MethodMissing` hops taken before the answer.
        depth: usize,
    },
    /// The chain ended in an absent fallback after `depth` hops.
    NotUnderstood { depth: usize },
}

impl LookupResult {
    #[inline]
    pub fn into_implementation(self) -> Option<Implementation> {
        match self {
            Self::Found { implementation, .. } => Some(implementation),
            Self::NoReceiver | Self::NotUnderstood { .. } => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Look up `selector` starting at `receiver`.
///
/// Every `MethodMissing` answer is followed by asking the object its thunk
/// produces for the same selector, until an object answers concretely or a
/// thunk produces nothing. The walk is a loop, so chain depth costs no stack,
/// but there is no cycle detection: a chain that delegates back to one of
/// its own members never terminates. Keeping chains acyclic is the job of
/// whoever wires the fallbacks.
pub fn lookup(receiver: Option<&Object>, selector: &Selector) -> LookupResult {
    let Some(receiver) = receiver else {
        return LookupResult::NoReceiver;
    };

    let mut current = receiver.clone();
    let mut depth = 0;
    loop {
        let fallback = match current.dispatch(selector) {
            Implementation::MethodMissing(fallback) => fallback,
            implementation => {
                log::trace!(
                    "`{selector}` answered by {current:?} as {} at depth {depth}",
                    implementation.kind()
                );
                return LookupResult::Found {
                    implementation,
                    holder: current,
                    depth,
                };
            }
        };

        match fallback() {
            Some(next) => {
                log::trace!("`{selector}` delegated from {current:?} to {next:?}");
                current = next;
                depth += 1;
            }
            None => {
                log::debug!(
                    "`{selector}` not understood, chain ended at {current:?} after {depth} hop(s)"
                );
                return LookupResult::NotUnderstood { depth };
            }
        }
    }
}

/// Resolve `selector` on `receiver`, following fallbacks.
///
/// An absent receiver, or a chain that ends without an answer, yields `None`.
#[inline]
pub fn resolve(receiver: Option<&Object>, selector: &Selector) -> Option<Implementation> {
    lookup(receiver, selector).into_implementation()
}
