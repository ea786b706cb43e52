use super::store::Graph;
use super::types::EdgeType;

/// Labels of the nodes related to one selected node, grouped by relationship.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relationships {
	/// Courses that must be taken before this one.
	pub prerequisites: Vec<String>,
	/// Courses that require this one.
	pub dependents: Vec<String>,
	pub instructors: Vec<String>,
	pub topics: Vec<String>,
}

impl Relationships {
	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.prerequisites.is_empty()
			&& self.dependents.is_empty()
			&& self.instructors.is_empty()
			&& self.topics.is_empty()
	}
}

/// Classifies every edge touching `node_id` in one pass.
///
/// Order follows the edge list and repeated edges stay repeated. Edges whose
/// far end is not a known node contribute nothing.
pub fn summarize(graph: &Graph, node_id: &str) -> Relationships {
	let mut rel = Relationships::default();
	let label = |id: &str| graph.label_of(id).map(str::to_owned);

	for edge in graph.edges() {
		match edge.edge_type {
			EdgeType::Prerequisite => {
				if edge.target == node_id {
					rel.prerequisites.extend(label(&edge.source));
				}
				if edge.source == node_id {
					rel.dependents.extend(label(&edge.target));
				}
			}
			EdgeType::TaughtBy if edge.source == node_id => {
				rel.instructors.extend(label(&edge.target));
			}
			EdgeType::CoversTopic if edge.source == node_id => {
				rel.topics.extend(label(&edge.target));
			}
			_ => {}
		}
	}
	rel
}

/// Splits `items` into the first `limit` entries and the count left over.
pub fn truncate(items: &[String], limit: usize) -> (&[String], usize) {
	let shown = items.len().min(limit);
	(&items[..shown], items.len() - shown)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::fixtures;

	fn strings(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn classifies_course_relationships() {
		let graph = fixtures::course_graph();
		let rel = summarize(&graph, "course_CSCI 2113");
		assert_eq!(
			rel,
			Relationships {
				prerequisites: strings(&["CSCI 1112", "CSCI 1112"]),
				dependents: strings(&["CSCI 3410"]),
				instructors: strings(&["Simha", "Lee"]),
				topics: strings(&["algorithms"]),
			}
		);
	}

	#[test]
	fn one_entry_per_prerequisite_edge() {
		let graph = fixtures::course_graph();
		let rel = summarize(&graph, "course_CSCI 3410");
		assert_eq!(rel.prerequisites, strings(&["CSCI 2113"]));
		assert_eq!(rel.topics, strings(&["algorithms"]));
	}

	#[test]
	fn dangling_instructor_is_skipped() {
		let graph = fixtures::course_graph();
		assert!(summarize(&graph, "course_CSCI 3410").instructors.is_empty());
	}

	#[test]
	fn taught_by_only_counts_from_the_source() {
		let graph = fixtures::tiny_graph();
		let b = summarize(&graph, "B");
		assert_eq!(b.prerequisites, strings(&["A"]));
		assert!(b.instructors.is_empty());

		let prof = summarize(&graph, "Prof");
		assert_eq!(prof.instructors, strings(&["B"]));
	}

	#[test]
	fn topic_side_sees_nothing() {
		let graph = fixtures::course_graph();
		assert!(summarize(&graph, "topic_algorithms").is_empty());
		assert!(summarize(&graph, "topic_databases").is_empty());
	}

	#[test]
	fn truncate_reports_remainder() {
		let items = strings(&["a", "b", "c", "d", "e"]);
		let (shown, more) = truncate(&items, 3);
		assert_eq!(shown, &items[..3]);
		assert_eq!(more, 2);

		let (shown, more) = truncate(&items, 8);
		assert_eq!(shown.len(), 5);
		assert_eq!(more, 0);
	}
}
