//! Knowledge-graph model and the interaction logic layered on it.
//!
//! Everything here is framework-free: the components read a loaded [`Graph`],
//! drive a [`SelectionState`] through its transitions and ask [`style`] how
//! to paint each element.

mod neighbors;
pub mod queries;
pub mod search;
mod selection;
mod store;
pub mod style;
pub mod summary;
mod types;

#[cfg(test)]
mod fixtures;

pub use selection::{SelectionEvent, SelectionState};
pub use store::{Graph, GraphStats, load};
pub use types::{Edge, Node, NodeType};
