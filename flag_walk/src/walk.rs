//! Depth-first traversal that fires every node's own contribution hook.
//!
//! Each node's hook runs before its children are visited, and children are
//! visited in declaration order, so the registration order on the flag set is
//! stable from run to run.

use crate::{FlagNode, FlagSet, Target};

/// Walks every root and registers the flags each node contributes.
///
/// Roots are processed in the order given. A hook that fails is reported as
/// a `DEBUG` event carrying the node's type name and the error, and the walk
/// continues; the failure is not returned.
///
/// # Panics
///
/// Panics when a [`Target::Detached`] is met, at the root level or below.
/// Roots before the offending one have already registered their flags.
///
/// # Examples
///
/// ```
/// use flag_walk::{AddFlags, FlagList, FlagNode, FlagResult, FlagSet, Target, add_flags};
///
/// #[derive(FlagNode)]
/// #[flag_walk(add_flags)]
/// struct Server {
///     port: u64,
/// }
///
/// impl AddFlags for Server {
///     fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult {
///         flags.uint_flag("port", Some('p'), self.port, "port to listen on")
///     }
/// }
///
/// let mut server = Server { port: 8080 };
/// let mut flags = FlagList::new();
/// add_flags(&mut flags, [Target::from(&mut server)]);
/// assert_eq!(flags.names(), vec!["port"]);
/// ```
pub fn add_flags<'a, I>(flags: &mut dyn FlagSet, roots: I)
where
    I: IntoIterator<Item = Target<'a>>,
{
    for root in roots {
        visit(flags, root);
    }
}

fn visit(flags: &mut dyn FlagSet, target: Target<'_>) {
    let node = match target {
        Target::Node(node) => node,
        Target::Detached { type_name } => {
            panic!("add_flags must be called with mutable references, got: {type_name}")
        }
    };
    tracing::trace!(node = node.node_name(), "visiting flag node");

    invoke_add_flags(flags, node);

    node.visit_children(&mut |child| visit(flags, child));
}

/// Runs the node's own hook, if it declares one, and swallows its failure.
///
/// Embedded types frequently contribute flags their parents also register,
/// so a rejected registration here is expected and only worth a debug line.
fn invoke_add_flags(flags: &mut dyn FlagSet, node: &mut dyn FlagNode) {
    let node_name = node.node_name();
    let Some(hook) = node.own_flags() else {
        return;
    };
    if let Err(error) = hook.add_flags(flags) {
        tracing::debug!(
            node = node_name,
            error = %error,
            "got error while invoking add_flags"
        );
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::add_flags;
    use crate::{AddFlags, FlagList, FlagNode, FlagResult, FlagSet, Target};

    struct Leaf {
        name: &'static str,
        calls: usize,
    }

    impl AddFlags for Leaf {
        fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult {
            self.calls += 1;
            flags.bool_flag(self.name, None, false, "")
        }
    }

    impl FlagNode for Leaf {
        fn own_flags(&mut self) -> Option<&mut dyn AddFlags> {
            Some(self)
        }
    }

    struct Pair {
        first: Leaf,
        second: Leaf,
    }

    impl FlagNode for Pair {
        fn visit_children(&mut self, visit: &mut dyn FnMut(Target<'_>)) {
            visit(Target::Node(&mut self.first));
            visit(Target::Node(&mut self.second));
        }
    }

    fn leaf(name: &'static str) -> Leaf {
        Leaf { name, calls: 0 }
    }

    #[rstest]
    fn visits_children_in_declaration_order() {
        let mut pair = Pair {
            first: leaf("first"),
            second: leaf("second"),
        };
        let mut flags = FlagList::new();
        add_flags(&mut flags, [Target::from(&mut pair)]);

        assert_eq!(flags.names(), vec!["first", "second"]);
        assert_eq!((pair.first.calls, pair.second.calls), (1, 1));
    }

    #[rstest]
    fn failing_hook_does_not_stop_siblings() {
        let mut pair = Pair {
            first: leaf("same"),
            second: leaf("same"),
        };
        let mut extra = leaf("extra");
        let mut flags = FlagList::new();
        add_flags(&mut flags, [Target::from(&mut pair), Target::from(&mut extra)]);

        assert_eq!(flags.names(), vec!["same", "extra"]);
        assert_eq!(pair.second.calls, 1);
    }

    #[rstest]
    #[should_panic(expected = "add_flags must be called with mutable references, got: u32")]
    fn detached_root_panics() {
        let mut flags = FlagList::new();
        add_flags(&mut flags, [Target::detached(3_u32)]);
    }
}
