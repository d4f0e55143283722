//! Identifier trait for states and events.
//!
//! States and events are opaque to the machine; it only needs to compare,
//! hash, clone, and print them.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and event identifiers.
///
/// Blanket-implemented for every type meeting the bounds, so `String`,
/// `&'static str`, and plain fieldless enums work out of the box.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into the history stacks
/// - `Eq` + `Hash`: identifiers key the transition tables
/// - `Debug`: identifiers appear in errors and log events
/// - `Send` + `Sync`: configurations can be shared through `Arc`
///
/// # Example
///
/// ```rust
/// use retrace::core::Identifier;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_identifier<T: Identifier>() {}
/// assert_identifier::<Door>();
/// assert_identifier::<String>();
/// assert_identifier::<&'static str>();
/// ```
pub trait Identifier: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Identifier for T where T: Clone + Eq + Hash + Debug + Send + Sync {}
