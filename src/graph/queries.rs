use std::sync::LazyLock;

use regex::Regex;

use super::store::Graph;
use super::types::Node;

/// A worked prerequisite-chain question shown beside the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleQuery {
	pub query: &'static str,
	pub answer: &'static str,
	pub path: &'static str,
}

pub const SAMPLE_QUERIES: &[SampleQuery] = &[
	SampleQuery {
		query: "If I finished CSCI 6531, which courses remain before CSCI 8531?",
		answer: "After completing CSCI 6531, you are ready to take CSCI 8531.",
		path: "CSCI 6531 → CSCI 8531",
	},
	SampleQuery {
		query: "What courses do I need after CSCI 2461 to enroll in CSCI 3410?",
		answer: "To prepare for CSCI 3410, you should also take: CSCI 1112, CSCI 1111, CSCI 2113, MATH 1221.",
		path: "CSCI 2461 → CSCI 3410",
	},
	SampleQuery {
		query: "Which courses should I take to prepare for CSCI 4345 if I've completed CSCI 4342?",
		answer: "To prepare for CSCI 4345, you should also take: CSCI 2113, MATH 1221.",
		path: "CSCI 4342 → CSCI 4345",
	},
];

static COURSE_CODE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"CSCI \d+|DATS \d+|MATH \d+").expect("valid course code regex"));

/// First course code mentioned in `text`.
pub fn first_course_code(text: &str) -> Option<&str> {
	COURSE_CODE.find(text).map(|m| m.as_str())
}

impl SampleQuery {
	/// Node the "visualize path" action should select: the first node whose
	/// label contains the path's starting course code.
	pub fn start_node<'g>(&self, graph: &'g Graph) -> Option<&'g Node> {
		first_course_code(self.path).and_then(|code| graph.find_by_label(code))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extracts_first_code() {
		assert_eq!(first_course_code("CSCI 2461 → CSCI 3410"), Some("CSCI 2461"));
		assert_eq!(first_course_code("see MATH 1221 then DATS 6101"), Some("MATH 1221"));
		assert_eq!(first_course_code("no codes here"), None);
	}

	#[test]
	fn every_sample_has_a_code() {
		for sample in SAMPLE_QUERIES {
			assert!(first_course_code(sample.path).is_some(), "{}", sample.path);
		}
	}

	#[test]
	fn start_node_resolves_by_label() {
		let graph = Graph::from_json(
			r#"{"nodes":[
				{"id":"course_CSCI 2461","label":"CSCI 2461","type":"course"},
				{"id":"course_CSCI 3410","label":"CSCI 3410","type":"course"}
			]}"#,
		)
		.unwrap();
		assert_eq!(
			SAMPLE_QUERIES[1].start_node(&graph).map(|n| n.id.as_str()),
			Some("course_CSCI 2461")
		);
		assert!(SAMPLE_QUERIES[0].start_node(&graph).is_none());
	}
}
