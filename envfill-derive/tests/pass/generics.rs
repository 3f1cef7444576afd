// Lifetimes, type parameters and where clauses survive expansion

use envfill::{Error, Populate};

#[derive(Default, Populate)]
pub struct Inner {
    #[env(default = "inner")]
    pub name: String,
}

#[derive(Populate)]
pub struct Outer<'a, T>
where
    T: Populate,
{
    #[env(default = "on")]
    pub inner: T,

    #[env(default = "borrowed")]
    pub label: &'a str,
}

fn main() {
    let mut outer = Outer {
        inner: Inner::default(),
        label: "static",
    };
    let err = outer.populate().unwrap_err();
    assert!(matches!(err, Error::UnsettableField { .. }));
    assert_eq!(outer.inner.name, "inner");
}
