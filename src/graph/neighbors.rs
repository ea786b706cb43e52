use std::collections::HashSet;

use super::store::Graph;
use super::types::EdgeKey;

/// Nodes and edges directly connected to one node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
	/// Always contains the centre node itself.
	pub node_ids: HashSet<String>,
	pub edge_keys: HashSet<EdgeKey>,
}

impl Graph {
	/// Linear scan over all edges, in either direction.
	///
	/// Endpoints are collected as written in the edge list, including ones
	/// that name a missing node; those simply never match anything drawn.
	pub fn neighbors_of(&self, node_id: &str) -> Neighborhood {
		let mut hood = Neighborhood::default();
		hood.node_ids.insert(node_id.to_owned());

		for edge in self.edges() {
			if edge.source == node_id {
				hood.node_ids.insert(edge.target.clone());
				hood.edge_keys.insert(edge.key());
			}
			if edge.target == node_id {
				hood.node_ids.insert(edge.source.clone());
				hood.edge_keys.insert(edge.key());
			}
		}
		hood
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::fixtures;

	#[test]
	fn every_node_neighbors_itself() {
		let graph = fixtures::course_graph();
		for node in graph.nodes() {
			assert!(graph.neighbors_of(&node.id).node_ids.contains(&node.id));
		}
	}

	#[test]
	fn adjacency_is_symmetric() {
		let graph = fixtures::course_graph();
		for edge in graph.edges() {
			assert!(graph.neighbors_of(&edge.source).node_ids.contains(&edge.target));
			assert!(graph.neighbors_of(&edge.target).node_ids.contains(&edge.source));
		}
	}

	#[test]
	fn isolated_node_is_alone() {
		let graph = fixtures::course_graph();
		let hood = graph.neighbors_of("topic_databases");
		assert_eq!(hood.node_ids, HashSet::from(["topic_databases".to_owned()]));
		assert!(hood.edge_keys.is_empty());
	}

	#[test]
	fn parallel_edges_share_a_key() {
		let graph = fixtures::course_graph();
		let hood = graph.neighbors_of("course_CSCI 1112");
		assert_eq!(
			hood.edge_keys,
			HashSet::from([EdgeKey::new("course_CSCI 1112", "course_CSCI 2113")])
		);
	}

	#[test]
	fn collects_incoming_and_outgoing() {
		let graph = fixtures::course_graph();
		let hood = graph.neighbors_of("course_CSCI 3410");
		let expected: HashSet<String> = [
			"course_CSCI 3410",
			"course_CSCI 2113",
			"topic_algorithms",
			"prof_Ghost",
		]
		.into_iter()
		.map(String::from)
		.collect();
		assert_eq!(hood.node_ids, expected);
		assert_eq!(hood.edge_keys.len(), 3);
		assert!(hood.edge_keys.contains(&EdgeKey::new("course_CSCI 2113", "course_CSCI 3410")));
	}
}
