use std::collections::HashSet;

use log::debug;

use super::store::Graph;
use super::types::{EdgeKey, Node};

/// Pointer and control events that drive [`SelectionState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
	NodeClicked(String),
	BackgroundClicked,
	Reset,
}

/// Which node is selected and what it lights up.
///
/// While idle every node counts as highlighted. Edges are only ever
/// highlighted under a selection; see [`style::edge_style`](super::style::edge_style).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
	selected: Option<String>,
	highlighted_nodes: HashSet<String>,
	highlighted_edges: HashSet<EdgeKey>,
}

impl SelectionState {
	pub fn idle() -> Self {
		Self::default()
	}

	/// Pure transition: returns the state after `event`, leaving `self` as is.
	///
	/// Re-clicking the selected node yields the same state; only a background
	/// click or a reset returns to idle. An id absent from `graph` is ignored.
	pub fn transition(&self, graph: &Graph, event: SelectionEvent) -> Self {
		match event {
			SelectionEvent::NodeClicked(id) => {
				if !graph.contains(&id) {
					debug!("click on unknown node {:?} ignored", id);
					return self.clone();
				}
				let hood = graph.neighbors_of(&id);
				debug!(
					"selected {:?}: {} nodes, {} edges highlighted",
					id,
					hood.node_ids.len(),
					hood.edge_keys.len()
				);
				Self {
					selected: Some(id),
					highlighted_nodes: hood.node_ids,
					highlighted_edges: hood.edge_keys,
				}
			}
			SelectionEvent::BackgroundClicked | SelectionEvent::Reset => {
				if self.is_active() {
					debug!("selection cleared");
				}
				Self::idle()
			}
		}
	}

	pub fn selected_id(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	pub fn selected_node<'g>(&self, graph: &'g Graph) -> Option<&'g Node> {
		self.selected.as_deref().and_then(|id| graph.node(id))
	}

	pub fn is_active(&self) -> bool {
		self.selected.is_some()
	}

	#[cfg(test)]
	pub fn highlighted_nodes(&self) -> &HashSet<String> {
		&self.highlighted_nodes
	}

	pub fn highlighted_edges(&self) -> &HashSet<EdgeKey> {
		&self.highlighted_edges
	}

	/// True when nothing is selected, or `id` is in the highlight set.
	pub fn is_node_highlighted(&self, id: &str) -> bool {
		!self.is_active() || self.highlighted_nodes.contains(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::fixtures;

	fn click(id: &str) -> SelectionEvent {
		SelectionEvent::NodeClicked(id.to_owned())
	}

	#[test]
	fn click_from_idle_selects() {
		let graph = fixtures::tiny_graph();
		let state = SelectionState::idle().transition(&graph, click("B"));
		assert_eq!(state.selected_id(), Some("B"));
		assert_eq!(state.selected_node(&graph).map(|n| n.label.as_str()), Some("B"));
		assert_eq!(state.highlighted_nodes().len(), 3);
		assert!(state.highlighted_edges().contains(&EdgeKey::new("A", "B")));
		assert!(state.highlighted_edges().contains(&EdgeKey::new("Prof", "B")));
	}

	#[test]
	fn reclick_is_idempotent() {
		let graph = fixtures::course_graph();
		let once = SelectionState::idle().transition(&graph, click("course_CSCI 2113"));
		let twice = once.transition(&graph, click("course_CSCI 2113"));
		assert_eq!(once, twice);
		assert!(twice.is_active());
	}

	#[test]
	fn switching_nodes_discards_previous_highlight() {
		let graph = fixtures::course_graph();
		let state = SelectionState::idle()
			.transition(&graph, click("course_CSCI 3410"))
			.transition(&graph, click("topic_databases"));
		assert_eq!(state.selected_id(), Some("topic_databases"));
		assert_eq!(
			state.highlighted_nodes(),
			&HashSet::from(["topic_databases".to_owned()])
		);
		assert!(state.highlighted_edges().is_empty());
		assert!(!state.is_node_highlighted("course_CSCI 3410"));
	}

	#[test]
	fn background_and_reset_clear_everything() {
		let graph = fixtures::course_graph();
		let busy = SelectionState::idle()
			.transition(&graph, click("course_CSCI 1112"))
			.transition(&graph, click("prof_Simha"))
			.transition(&graph, click("course_CSCI 2113"));

		for event in [SelectionEvent::BackgroundClicked, SelectionEvent::Reset] {
			let cleared = busy.transition(&graph, event);
			assert_eq!(cleared, SelectionState::idle());
			assert_eq!(cleared.selected_id(), None);
			assert!(cleared.highlighted_nodes().is_empty());
			assert!(cleared.highlighted_edges().is_empty());
		}
	}

	#[test]
	fn background_click_when_idle_stays_idle() {
		let graph = fixtures::tiny_graph();
		let state = SelectionState::idle().transition(&graph, SelectionEvent::BackgroundClicked);
		assert_eq!(state, SelectionState::idle());
	}

	#[test]
	fn unknown_node_is_ignored() {
		let graph = fixtures::tiny_graph();
		let selected = SelectionState::idle().transition(&graph, click("A"));
		assert_eq!(selected.transition(&graph, click("Z")), selected);
	}

	#[test]
	fn idle_highlights_every_node() {
		let state = SelectionState::idle();
		assert!(!state.is_active());
		assert!(state.is_node_highlighted("anything"));
		assert!(state.highlighted_edges().is_empty());
	}

	#[test]
	fn isolated_selection_lights_only_itself() {
		let graph = fixtures::course_graph();
		let state = SelectionState::idle().transition(&graph, click("topic_databases"));
		assert!(state.is_active());
		assert!(state.is_node_highlighted("topic_databases"));
		assert!(!state.is_node_highlighted("topic_algorithms"));
		assert!(state.highlighted_edges().is_empty());
	}
}
