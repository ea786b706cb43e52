use super::store::Graph;
use super::types::Node;

/// Case-insensitive substring match on label, code and name.
pub fn matches(node: &Node, query: &str) -> bool {
	if query.is_empty() {
		return true;
	}
	let needle = query.to_lowercase();
	let hit = |s: &str| s.to_lowercase().contains(&needle);

	hit(&node.label)
		|| node.code.as_deref().is_some_and(hit)
		|| node.name.as_deref().is_some_and(hit)
}

/// Nodes to draw for `query`, in document order.
///
/// Edges are not filtered here; the canvas skips any edge whose endpoint is
/// not among the visible nodes.
pub fn filter<'g>(graph: &'g Graph, query: &str) -> Vec<&'g Node> {
	graph.nodes().iter().filter(|n| matches(n, query)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::fixtures;

	fn ids<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
		nodes.iter().map(|n| n.id.as_str()).collect()
	}

	#[test]
	fn empty_query_returns_everything() {
		let graph = fixtures::course_graph();
		assert_eq!(filter(&graph, "").len(), graph.nodes().len());
	}

	#[test]
	fn case_insensitive_label_match() {
		let graph = fixtures::tiny_graph();
		assert_eq!(ids(&filter(&graph, "A")), ["A"]);
		assert_eq!(ids(&filter(&graph, "prof")), ["Prof"]);
	}

	#[test]
	fn matches_code_and_name() {
		let graph = fixtures::course_graph();
		assert_eq!(ids(&filter(&graph, "software eng")), ["course_CSCI 2113"]);
		assert_eq!(ids(&filter(&graph, "rahul")), ["prof_Simha"]);
		assert_eq!(
			ids(&filter(&graph, "csci 1")),
			["course_CSCI 1112"]
		);
	}

	#[test]
	fn description_is_not_searched() {
		let graph = fixtures::course_graph();
		assert!(filter(&graph, "principles").is_empty());
	}

	#[test]
	fn no_match_is_empty_not_error() {
		let graph = fixtures::course_graph();
		assert!(filter(&graph, "quantum basket weaving").is_empty());
	}

	#[test]
	fn result_is_always_a_subset() {
		let graph = fixtures::course_graph();
		for q in ["", "a", "CSCI", "topic", "zz", "3"] {
			for node in filter(&graph, q) {
				assert!(graph.contains(&node.id));
			}
		}
	}
}
