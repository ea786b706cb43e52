//! Colour, size and stroke policy for nodes and edges.
//!
//! Pure functions of the element and the current [`SelectionState`]; the
//! canvas calls them every frame.

use std::fmt;

use super::selection::SelectionState;
use super::types::{Edge, EdgeType, Node, NodeType};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Rgba {
	pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub const fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}
}

/// Formats as a CSS `rgba(...)` string.
impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

pub const COURSE: Rgba = Rgba::new(239, 68, 68, 1.0);
pub const PROFESSOR: Rgba = Rgba::new(20, 184, 166, 1.0);
pub const TOPIC: Rgba = Rgba::new(96, 165, 250, 1.0);
pub const FALLBACK_NODE: Rgba = Rgba::new(107, 114, 128, 1.0);
pub const FALLBACK_EDGE: Rgba = Rgba::new(100, 116, 139, 0.3);
pub const EDGE_FOCUS: Rgba = Rgba::new(59, 130, 246, 0.8);
pub const EDGE_MUTED: Rgba = Rgba::new(100, 116, 139, 0.1);

const DIMMED_ALPHA: f64 = 0.2;
const EDGE_TYPE_ALPHA: f64 = 0.4;

const EDGE_WIDTH: f64 = 1.5;
const EDGE_WIDTH_FOCUS: f64 = 3.0;
const EDGE_WIDTH_MUTED: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub color: Rgba,
	pub size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	pub color: Rgba,
	pub width: f64,
}

pub fn node_color(node_type: NodeType) -> Rgba {
	match node_type {
		NodeType::Course => COURSE,
		NodeType::Professor => PROFESSOR,
		NodeType::Topic => TOPIC,
		NodeType::Unknown => FALLBACK_NODE,
	}
}

pub fn base_size(node_type: NodeType) -> f64 {
	match node_type {
		NodeType::Course => 8.0,
		NodeType::Professor => 6.0,
		NodeType::Topic | NodeType::Unknown => 5.0,
	}
}

/// Nodes outside an active highlight are dimmed and drawn at half size.
pub fn node_style(node: &Node, selection: &SelectionState) -> NodeStyle {
	let color = node_color(node.node_type);
	let size = base_size(node.node_type);
	if selection.is_node_highlighted(&node.id) {
		NodeStyle { color, size }
	} else {
		NodeStyle {
			color: color.with_alpha(DIMMED_ALPHA),
			size: size * 0.5,
		}
	}
}

/// Edges are coloured by type until something is selected, then either
/// emphasised or muted.
pub fn edge_style(edge: &Edge, selection: &SelectionState) -> EdgeStyle {
	if !selection.is_active() {
		let color = match edge.edge_type {
			EdgeType::Prerequisite => COURSE.with_alpha(EDGE_TYPE_ALPHA),
			EdgeType::TaughtBy => PROFESSOR.with_alpha(EDGE_TYPE_ALPHA),
			EdgeType::CoversTopic => TOPIC.with_alpha(EDGE_TYPE_ALPHA),
			EdgeType::Other => FALLBACK_EDGE,
		};
		return EdgeStyle {
			color,
			width: EDGE_WIDTH,
		};
	}

	if selection.highlighted_edges().contains(&edge.key()) {
		EdgeStyle {
			color: EDGE_FOCUS,
			width: EDGE_WIDTH_FOCUS,
		}
	} else {
		EdgeStyle {
			color: EDGE_MUTED,
			width: EDGE_WIDTH_MUTED,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::fixtures;
	use crate::graph::selection::SelectionEvent;

	#[test]
	fn idle_nodes_are_full_strength() {
		let graph = fixtures::course_graph();
		let idle = SelectionState::idle();
		let course = graph.node("course_CSCI 2113").unwrap();
		let prof = graph.node("prof_Lee").unwrap();
		let topic = graph.node("topic_databases").unwrap();

		assert_eq!(node_style(course, &idle), NodeStyle { color: COURSE, size: 8.0 });
		assert_eq!(node_style(prof, &idle), NodeStyle { color: PROFESSOR, size: 6.0 });
		assert_eq!(node_style(topic, &idle), NodeStyle { color: TOPIC, size: 5.0 });
	}

	#[test]
	fn unknown_type_gets_fallback() {
		let graph = crate::graph::Graph::from_json(
			r#"{"nodes":[{"id":"d","label":"CS Dept","type":"department"}]}"#,
		)
		.unwrap();
		let style = node_style(&graph.nodes()[0], &SelectionState::idle());
		assert_eq!(style.color, FALLBACK_NODE);
		assert_eq!(style.size, 5.0);
	}

	#[test]
	fn unselected_nodes_dim_and_shrink() {
		let graph = fixtures::course_graph();
		let sel = SelectionState::idle()
			.transition(&graph, SelectionEvent::NodeClicked("course_CSCI 1112".into()));

		let lit = node_style(graph.node("course_CSCI 2113").unwrap(), &sel);
		assert_eq!(lit.color.a, 1.0);
		assert_eq!(lit.size, 8.0);

		let dim = node_style(graph.node("course_CSCI 3410").unwrap(), &sel);
		assert_eq!(dim.color, COURSE.with_alpha(0.2));
		assert_eq!(dim.size, 4.0);
	}

	#[test]
	fn edges_colour_by_type_when_idle() {
		let graph = fixtures::course_graph();
		let idle = SelectionState::idle();
		let styles: Vec<EdgeStyle> = graph.edges()[..6].iter().map(|e| edge_style(e, &idle)).collect();

		assert_eq!(styles[0].color, COURSE.with_alpha(0.4));
		assert_eq!(styles[2].color, PROFESSOR.with_alpha(0.4));
		assert_eq!(styles[4].color, TOPIC.with_alpha(0.4));
		assert!(styles.iter().all(|s| s.width == 1.5));
	}

	#[test]
	fn edges_are_binary_under_selection() {
		let graph = fixtures::course_graph();
		let sel = SelectionState::idle()
			.transition(&graph, SelectionEvent::NodeClicked("prof_Simha".into()));

		let incident = edge_style(&graph.edges()[2], &sel);
		assert_eq!(incident, EdgeStyle { color: EDGE_FOCUS, width: 3.0 });

		let other = edge_style(&graph.edges()[0], &sel);
		assert_eq!(other, EdgeStyle { color: EDGE_MUTED, width: 0.5 });
	}

	#[test]
	fn isolated_selection_mutes_every_edge() {
		let graph = fixtures::course_graph();
		let sel = SelectionState::idle()
			.transition(&graph, SelectionEvent::NodeClicked("topic_databases".into()));

		for edge in graph.edges() {
			assert_eq!(edge_style(edge, &sel), EdgeStyle { color: EDGE_MUTED, width: 0.5 });
		}
	}

	#[test]
	fn css_format() {
		assert_eq!(COURSE.with_alpha(0.2).to_string(), "rgba(239, 68, 68, 0.2)");
		assert_eq!(TOPIC.to_string(), "rgba(96, 165, 250, 1)");
	}
}
