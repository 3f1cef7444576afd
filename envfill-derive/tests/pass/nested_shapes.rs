// Nested structs by value, boxed, optional and behind shared pointers

use envfill::Populate;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Default, Populate)]
pub struct Leaf {
    #[env(default = "7")]
    pub value: u8,
}

#[derive(Default, Populate)]
pub struct Config {
    #[env(default = "on")]
    pub by_value: Leaf,

    #[env(default = "on")]
    pub boxed: Box<Leaf>,

    #[env(default = "on")]
    pub optional: Option<Leaf>,

    #[env(default = "on")]
    pub optional_boxed: Option<Box<Leaf>>,

    #[env(default = "on")]
    pub arc: Arc<Leaf>,

    #[env(default = "on")]
    pub rc: std::rc::Rc<Leaf>,

    #[env(default = "on")]
    pub r#type: Rc<Leaf>,
}

fn main() {
    let mut config = Config::default();
    envfill::populate(Some(&mut config)).unwrap();
    assert_eq!(config.by_value.value, 7);
    assert_eq!(config.boxed.value, 7);
    assert_eq!(config.optional.map(|leaf| leaf.value), Some(7));
    assert_eq!(config.optional_boxed.map(|leaf| leaf.value), Some(7));
    assert_eq!(config.arc.value, 7);
    assert_eq!(config.rc.value, 7);
    assert_eq!(config.r#type.value, 7);
}
