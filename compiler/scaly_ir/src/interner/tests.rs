use super::*;
use pretty_assertions::assert_eq;

#[test]
fn intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("foo");
    let b = interner.intern("foo");
    let c = interner.intern("bar");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.lookup(a), "foo");
    assert_eq!(interner.lookup(c), "bar");
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn keywords_are_pre_interned() {
    let interner = StringInterner::new();
    for keyword in Keyword::ALL {
        assert!(interner.get(keyword.as_str()).is_some(), "{keyword:?}");
    }
    assert_eq!(interner.len(), Keyword::ALL.len() + 1);
}

#[test]
fn get_does_not_intern() {
    let interner = StringInterner::new();
    assert_eq!(interner.get("unseen"), None);
    let before = interner.len();
    let _ = interner.get("unseen");
    assert_eq!(interner.len(), before);
}

#[test]
fn concurrent_interning_agrees() {
    let interner = StringInterner::new();
    let names: Vec<Vec<Name>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (0..100)
                        .map(|i| interner.intern(&format!("ident{i}")))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_default())
            .collect()
    });
    for other in &names[1..] {
        assert_eq!(&names[0], other);
    }
}
