//! Fields the walker cannot reach contribute nothing and raise nothing.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use flag_walk::{AddFlags, FlagList, FlagNode, FlagResult, FlagSet, Target, add_flags};
use test_helpers::capture_events;
use rstest::rstest;
use tracing::Level;

#[derive(FlagNode)]
#[flag_walk(add_flags)]
struct Section {
    name: String,
}

impl AddFlags for Section {
    fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult {
        flags.bool_flag(&self.name, None, false, "")
    }
}

fn section(name: &str) -> Section {
    Section {
        name: name.to_owned(),
    }
}

#[derive(FlagNode)]
struct Holder {
    visible: Section,
    #[expect(dead_code, reason = "only present to prove skipped fields stay silent")]
    #[flag_walk(skip)]
    hidden: Section,
    #[expect(dead_code, reason = "only present to prove skipped fields stay silent")]
    #[flag_walk(skip)]
    scratch: RefCell<Vec<u8>>,
    boxed: Box<Section>,
    maybe: Option<Section>,
    absent: Option<Section>,
    shared: Rc<Section>,
    unique: Arc<Section>,
}

#[rstest]
fn unreachable_fields_are_skipped_silently() {
    let shared = Rc::new(section("shared"));
    let mut holder = Holder {
        visible: section("visible"),
        hidden: section("hidden"),
        scratch: RefCell::default(),
        boxed: Box::new(section("boxed")),
        maybe: Some(section("maybe")),
        absent: None,
        shared: Rc::clone(&shared),
        unique: Arc::new(section("unique")),
    };
    let mut flags = FlagList::new();
    let ((), events) = capture_events(|| add_flags(&mut flags, [Target::from(&mut holder)]));

    assert_eq!(flags.names(), vec!["visible", "boxed", "maybe", "unique"]);
    assert!(events.iter().all(|event| event.level == Level::TRACE));
    assert_eq!(Rc::strong_count(&shared), 2);
}

#[rstest]
fn uniquely_owned_rc_is_visited() {
    #[derive(FlagNode)]
    struct Owner {
        only: Rc<Section>,
    }

    let mut owner = Owner {
        only: Rc::new(section("only")),
    };
    let mut flags = FlagList::new();
    add_flags(&mut flags, [Target::from(&mut owner)]);
    assert_eq!(flags.names(), vec!["only"]);
}

#[rstest]
fn tuple_structs_and_generics_are_walked() {
    #[derive(FlagNode)]
    struct Pair<T>(
        T,
        #[expect(dead_code, reason = "the skipped middle value is never walked")]
        #[flag_walk(skip)]
        T,
        T,
    );

    let mut pair = Pair(section("left"), section("middle"), section("right"));
    let mut flags = FlagList::new();
    add_flags(&mut flags, [Target::from(&mut pair)]);
    assert_eq!(flags.names(), vec!["left", "right"]);
}
