use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Implementation, MethodMap, Object, Selector};

/// An integer value object.
///
/// Answers `intValue` with `value` and `description` with its decimal
/// rendering; every other selector is delegated to `prototype`.
pub fn integer_object(value: i64, prototype: Object) -> Object {
    let int_value = Implementation::integer(move || Some(value));
    let description = Implementation::description(move || Some(value.to_string()));
    let missing = Implementation::delegate_to(Some(prototype));

    Object::new(move |selector| match selector.name() {
        Selector::INT_VALUE => int_value.clone(),
        Selector::DESCRIPTION => description.clone(),
        _ => missing.clone(),
    })
}

/// A mutable cell holding an optional object.
///
/// `value` reads the current content, `setValue:` replaces it. The cell is
/// the only state and is private to the two method bodies.
pub fn holder_object(initial: Option<Object>, prototype: Object) -> Object {
    let cell = Arc::new(RwLock::new(initial));
    let reader = cell.clone();

    MethodMap::new()
        .object(Selector::VALUE, move || reader.read().clone())
        .mutator(Selector::SET_VALUE, move |value| {
            *cell.write() = Some(value);
        })
        .parent(prototype)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ImplementationKind, read_description, read_integer, read_object, resolve, root_object,
        send_mutator, terminal_object,
    };

    #[test]
    fn integer_reads_back() {
        for value in [0, 1, -1, 42, i64::MAX, i64::MIN] {
            let object = integer_object(value, terminal_object());
            assert_eq!(read_integer(Some(&object)), Some(value));
        }
    }

    #[test]
    fn integer_description() {
        let object = integer_object(-17, root_object());
        assert_eq!(read_description(Some(&object)).as_deref(), Some("-17"));
    }

    #[test]
    fn integer_delegates_every_other_selector() {
        let object = integer_object(5, terminal_object());
        for name in ["value", "setValue:", "intvalue", "description:"] {
            assert_eq!(
                object.dispatch(&name.into()).kind(),
                ImplementationKind::MethodMissing
            );
        }
    }

    #[test]
    fn holder_starts_with_initial_value() {
        let holder = holder_object(None, terminal_object());
        assert!(read_object(Some(&holder), &Selector::value()).is_none());

        let five = integer_object(5, terminal_object());
        let holder = holder_object(Some(five.clone()), terminal_object());
        let read = read_object(Some(&holder), &Selector::value());
        assert!(read.is_some_and(|o| o.ptr_eq(&five)));
    }

    #[test]
    fn holder_mutator_replaces_value() {
        let holder = holder_object(None, terminal_object());
        let seven = integer_object(7, terminal_object());

        assert_eq!(
            send_mutator(Some(&holder), &Selector::set_value(), seven),
            Some(())
        );
        let read = read_object(Some(&holder), &Selector::value());
        assert_eq!(read_integer(read.as_ref()), Some(7));
    }

    #[test]
    fn holder_dispatch_is_unaffected_by_mutation() {
        let holder = holder_object(None, terminal_object());
        let before = resolve(Some(&holder), &Selector::value());
        send_mutator(
            Some(&holder),
            &Selector::set_value(),
            integer_object(1, terminal_object()),
        );
        assert_eq!(resolve(Some(&holder), &Selector::value()), before);
    }

    #[test]
    fn holder_inherits_from_prototype() {
        let prototype = integer_object(11, terminal_object());
        let holder = holder_object(None, prototype);
        assert_eq!(read_integer(Some(&holder)), Some(11));
    }
}
