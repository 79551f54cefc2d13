use std::collections::HashMap;

use parking_lot::Mutex;

use crate::{ContractViolation, Implementation, Object, Selector, error::violated};

/// What the root object does once a lookup falls off the end of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootPolicy {
    /// Treat the selector as unsupported and abort with a
    /// [`ContractViolation::Unsupported`].
    #[default]
    FailFast,
    /// Produce no fallback, so `resolve` yields `None` and callers decide.
    Terminal,
}

/// The "does nothing" object that terminates prototype chains.
///
/// Every selector is answered with `MethodMissing`, never with a concrete
/// method. What happens when that fallback is followed is decided by the
/// [`RootPolicy`]. Asking the same root for the same selector always hands
/// out the same answer.
pub fn root_object_with(policy: RootPolicy) -> Object {
    match policy {
        RootPolicy::FailFast => {
            // One aborting thunk per selector, so the abort can name it.
            let answers = Mutex::new(HashMap::<Selector, Implementation>::new());
            Object::new(move |selector| {
                answers
                    .lock()
                    .entry(selector.clone())
                    .or_insert_with(|| unsupported(selector.clone()))
                    .clone()
            })
        }
        RootPolicy::Terminal => {
            let missing = Implementation::delegate_to(None);
            Object::new(move |_| missing.clone())
        }
    }
}

fn unsupported(selector: Selector) -> Implementation {
    Implementation::method_missing(move || {
        violated(ContractViolation::Unsupported {
            selector: selector.clone(),
        })
    })
}

/// Fail-fast root, see [`RootPolicy::FailFast`].
pub fn root_object() -> Object {
    root_object_with(RootPolicy::default())
}

/// Root whose fallback is absent, see [`RootPolicy::Terminal`].
pub fn terminal_object() -> Object {
    root_object_with(RootPolicy::Terminal)
}
