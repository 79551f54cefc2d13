use prototype::{
    ContractViolation, Implementation, ImplementationKind, LookupResult, MethodMap, Object,
    Selector, integer_object, read_integer, resolve, root_object, terminal_object,
    try_read_integer,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const UNKNOWN: &[&str] = &["value", "setValue:", "size", "at:put:", ""];

#[test]
fn absent_receiver_resolves_to_nothing() {
    init_logger();
    for name in ["intValue", "description", "anything"] {
        assert_eq!(resolve(None, &name.into()), None);
    }
}

#[test]
fn root_answers_method_missing_for_everything() {
    init_logger();
    let root = root_object();
    for &name in UNKNOWN.iter().chain(&["intValue", "description"]) {
        assert!(root.dispatch(&name.into()).is_method_missing());
    }
}

#[test]
fn integer_value_round_trips() {
    init_logger();
    for value in [i64::MIN, -1_000_000, -1, 0, 1, 5, 1 << 40, i64::MAX] {
        assert_eq!(
            read_integer(Some(&integer_object(value, root_object()))),
            Some(value)
        );
        assert_eq!(
            read_integer(Some(&integer_object(value, terminal_object()))),
            Some(value)
        );
    }
}

#[test]
fn unknown_selectors_fall_through_to_the_prototype() {
    init_logger();
    let proto = integer_object(9, terminal_object());
    let object = integer_object(5, proto.clone());
    for &name in UNKNOWN {
        let selector = Selector::from(name);
        assert_eq!(
            resolve(Some(&object), &selector),
            resolve(Some(&proto), &selector)
        );
    }
}

#[test]
fn chain_of_integers_behaves_like_its_end() {
    init_logger();
    let end = terminal_object();
    let third = integer_object(3, end.clone());
    let chain = integer_object(1, integer_object(2, third));
    for &name in UNKNOWN {
        let selector = Selector::from(name);
        assert_eq!(
            resolve(Some(&chain), &selector),
            resolve(Some(&end), &selector)
        );
    }
    assert!(matches!(
        chain.lookup(&"size".into()),
        LookupResult::NotUnderstood { depth: 3 }
    ));
    // The nearest answer shadows the rest of the chain.
    assert_eq!(read_integer(Some(&chain)), Some(1));
}

#[test]
#[should_panic(expected = "`size` is not supported anywhere in the chain")]
fn chain_over_fail_fast_root_aborts() {
    init_logger();
    let third = integer_object(3, root_object());
    let chain = integer_object(1, integer_object(2, third));
    resolve(Some(&chain), &"size".into());
}

#[test]
#[should_panic(expected = "`size` is not supported anywhere in the chain")]
fn fail_fast_root_aborts_the_same_way_directly() {
    init_logger();
    resolve(Some(&root_object()), &"size".into());
}

fn malformed() -> Object {
    let wrong = Implementation::description(|| Some("five".into()));
    Object::new(move |_| wrong.clone())
}

#[test]
fn mismatched_shape_is_reported() {
    init_logger();
    assert_eq!(
        try_read_integer(Some(&malformed())),
        Err(ContractViolation::WrongShape {
            selector: Selector::int_value(),
            expected: ImplementationKind::IntegerAccessor,
            found: ImplementationKind::DescriptionAccessor,
        })
    );
}

#[test]
#[should_panic(expected = "`intValue` answered with description accessor")]
fn mismatched_shape_aborts() {
    init_logger();
    read_integer(Some(&malformed()));
}

#[test]
#[should_panic(expected = "answered with description accessor")]
fn mismatched_shape_behind_delegation_aborts() {
    init_logger();
    let object = MethodMap::new().parent(malformed()).build();
    read_integer(Some(&object));
}

#[test]
fn resolve_is_idempotent() {
    init_logger();
    let object = integer_object(5, integer_object(6, terminal_object()));
    for name in ["intValue", "description", "value"] {
        let selector = Selector::from(name);
        assert_eq!(
            resolve(Some(&object), &selector),
            resolve(Some(&object), &selector)
        );
    }
}

#[test]
fn default_root_repeats_its_answer() {
    init_logger();
    let root = root_object();
    for &name in UNKNOWN {
        let selector = Selector::from(name);
        assert_eq!(root.dispatch(&selector), root.dispatch(&selector));
    }

    // Through a prototype chain the first hop hands out the same thunk too.
    let object = integer_object(5, root.clone());
    let size = Selector::from("size");
    assert_eq!(object.dispatch(&size), object.dispatch(&size));
}
