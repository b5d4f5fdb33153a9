//! Node model the walker traverses.
//!
//! Every configuration type taking part in a walk implements [`FlagNode`],
//! usually through `#[derive(FlagNode)]`. A node answers two questions: does
//! it contribute flags itself ([`FlagNode::own_flags`]), and which of its
//! fields should be visited next ([`FlagNode::visit_children`]).
//!
//! A hook is only ever reachable through the type that declares it. Wrapping
//! or embedding a type with a hook does not hand that hook to the outer type,
//! so a hook fires once, at the node that owns it.

use std::any::type_name;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::OsString;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::{FlagResult, FlagSet};

/// Contribution hook: registers the flags a configuration type owns.
///
/// # Examples
///
/// ```
/// use flag_walk::{AddFlags, FlagResult, FlagSet};
///
/// struct Logging {
///     verbose: bool,
/// }
///
/// impl AddFlags for Logging {
///     fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult {
///         flags.bool_flag("verbose", Some('v'), self.verbose, "enable debug output")
///     }
/// }
/// ```
pub trait AddFlags {
    /// Registers this type's flags on `flags`.
    ///
    /// # Errors
    ///
    /// Returns the first registration failure. The walker logs it and
    /// carries on with the rest of the graph.
    fn add_flags(&mut self, flags: &mut dyn FlagSet) -> FlagResult;
}

/// A value the walker can visit.
pub trait FlagNode {
    /// The hook this node declares itself, if any.
    ///
    /// Implementations return `Some(self)` only when the type implements
    /// [`AddFlags`] in its own right. Hooks of fields are reached by visiting
    /// the fields, never through this method.
    fn own_flags(&mut self) -> Option<&mut dyn AddFlags> {
        None
    }

    /// Yields each addressable child in declaration order.
    fn visit_children(&mut self, _visit: &mut dyn FnMut(Target<'_>)) {}

    /// Name used in diagnostics.
    fn node_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// What the walker is handed at every level of the graph.
pub enum Target<'a> {
    /// A node borrowed mutably from its owner.
    Node(&'a mut dyn FlagNode),
    /// A value moved in rather than borrowed. Flags registered against it
    /// would describe a copy the caller never sees again, so the walker
    /// rejects it.
    Detached {
        /// Type of the rejected value.
        type_name: &'static str,
    },
}

impl<'a> Target<'a> {
    /// Borrows `node` as a walk target.
    pub const fn node<T: FlagNode>(node: &'a mut T) -> Self {
        Self::Node(node)
    }

    /// Wraps a value passed by value.
    ///
    /// The value itself is dropped; only its type name is kept for the
    /// walker's panic message.
    #[must_use]
    pub fn detached<T>(value: T) -> Self {
        drop(value);
        Self::Detached {
            type_name: type_name::<T>(),
        }
    }

    /// Name of the target's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Node(node) => node.node_name(),
            Self::Detached { type_name: name } => *name,
        }
    }
}

impl<'a, T: FlagNode> From<&'a mut T> for Target<'a> {
    fn from(node: &'a mut T) -> Self {
        Self::Node(node)
    }
}

impl<'a> From<&'a mut dyn FlagNode> for Target<'a> {
    fn from(node: &'a mut dyn FlagNode) -> Self {
        Self::Node(node)
    }
}

/// Scalars and collections hold no further configuration structs.
macro_rules! leaf_nodes {
    ($($ty:ty),* $(,)?) => {
        $(impl FlagNode for $ty {})*
    };
}

leaf_nodes!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    PathBuf,
    OsString,
    Duration,
);

impl<T: ?Sized> FlagNode for PhantomData<T> {}
impl<T> FlagNode for Vec<T> {}
impl<T> FlagNode for VecDeque<T> {}
impl<K, V, S> FlagNode for HashMap<K, V, S> {}
impl<K, V> FlagNode for BTreeMap<K, V> {}
impl<T, S> FlagNode for HashSet<T, S> {}
impl<T> FlagNode for BTreeSet<T> {}

impl<T: FlagNode> FlagNode for Box<T> {
    fn visit_children(&mut self, visit: &mut dyn FnMut(Target<'_>)) {
        visit(Target::Node(&mut **self));
    }
}

impl<T: FlagNode> FlagNode for Option<T> {
    fn visit_children(&mut self, visit: &mut dyn FnMut(Target<'_>)) {
        if let Some(inner) = self {
            visit(Target::Node(inner));
        }
    }
}

impl<T: FlagNode> FlagNode for Rc<T> {
    fn visit_children(&mut self, visit: &mut dyn FnMut(Target<'_>)) {
        if let Some(inner) = Rc::get_mut(self) {
            visit(Target::Node(inner));
        }
    }
}

impl<T: FlagNode> FlagNode for Arc<T> {
    fn visit_children(&mut self, visit: &mut dyn FnMut(Target<'_>)) {
        if let Some(inner) = Arc::get_mut(self) {
            visit(Target::Node(inner));
        }
    }
}
