//! Typed views over `resolve`.
//!
//! Each helper resolves a selector and decodes the answer as one specific
//! [`Implementation`] shape. `None` means the selector is not understood
//! anywhere along the chain (or there was no receiver). A receiver answering
//! with the wrong shape is a [`ContractViolation`]: the `try_*` forms return
//! it, the plain forms abort.

use crate::{
    ContractViolation, Implementation, ImplementationKind, Object, Selector, error::violated,
    resolve,
};

fn decode<T>(
    receiver: Option<&Object>,
    selector: &Selector,
    expected: ImplementationKind,
    extract: fn(Implementation) -> Result<T, Implementation>,
) -> Result<Option<T>, ContractViolation> {
    let Some(implementation) = resolve(receiver, selector) else {
        return Ok(None);
    };
    extract(implementation).map(Some).map_err(|found| ContractViolation::WrongShape {
        selector: selector.clone(),
        expected,
        found: found.kind(),
    })
}

#[inline]
fn fail_fast<T>(result: Result<T, ContractViolation>) -> T {
    result.unwrap_or_else(|violation| violated(violation))
}

pub fn try_read_integer(receiver: Option<&Object>) -> Result<Option<i64>, ContractViolation> {
    let accessor = decode(
        receiver,
        &Selector::int_value(),
        ImplementationKind::IntegerAccessor,
        Implementation::into_integer,
    )?;
    Ok(accessor.and_then(|f| f()))
}

/// The receiver's `intValue`.
pub fn read_integer(receiver: Option<&Object>) -> Option<i64> {
    fail_fast(try_read_integer(receiver))
}

pub fn try_read_description(
    receiver: Option<&Object>,
) -> Result<Option<String>, ContractViolation> {
    let accessor = decode(
        receiver,
        &Selector::description(),
        ImplementationKind::DescriptionAccessor,
        Implementation::into_description,
    )?;
    Ok(accessor.and_then(|f| f()))
}

/// The receiver's `description`.
pub fn read_description(receiver: Option<&Object>) -> Option<String> {
    fail_fast(try_read_description(receiver))
}

pub fn try_read_object(
    receiver: Option<&Object>,
    selector: &Selector,
) -> Result<Option<Object>, ContractViolation> {
    let accessor = decode(
        receiver,
        selector,
        ImplementationKind::ObjectAccessor,
        Implementation::into_object,
    )?;
    Ok(accessor.and_then(|f| f()))
}

/// An object-valued property of the receiver.
pub fn read_object(receiver: Option<&Object>, selector: &Selector) -> Option<Object> {
    fail_fast(try_read_object(receiver, selector))
}

pub fn try_send_mutator(
    receiver: Option<&Object>,
    selector: &Selector,
    argument: Object,
) -> Result<Option<()>, ContractViolation> {
    let mutator = decode(
        receiver,
        selector,
        ImplementationKind::Mutator,
        Implementation::into_mutator,
    )?;
    Ok(mutator.map(|f| f(argument)))
}

/// Invoke a setter. `Some(())` if some object along the chain took it.
pub fn send_mutator(
    receiver: Option<&Object>,
    selector: &Selector,
    argument: Object,
) -> Option<()> {
    fail_fast(try_send_mutator(receiver, selector, argument))
}

/// Ask the receiver alone (no chain walk) where it would delegate
/// `selector`.
///
/// Runs the receiver's fallback thunk, so on a fail-fast root this aborts.
pub fn try_read_fallback(
    receiver: Option<&Object>,
    selector: &Selector,
) -> Result<Option<Object>, ContractViolation> {
    let Some(receiver) = receiver else {
        return Ok(None);
    };
    match receiver.dispatch(selector).into_method_missing() {
        Ok(fallback) => Ok(fallback()),
        Err(found) => Err(ContractViolation::WrongShape {
            selector: selector.clone(),
            expected: ImplementationKind::MethodMissing,
            found: found.kind(),
        }),
    }
}

pub fn read_fallback(receiver: Option<&Object>, selector: &Selector) -> Option<Object> {
    fail_fast(try_read_fallback(receiver, selector))
}
