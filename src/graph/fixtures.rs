//! Small course graph shared by the unit tests.
//!
//! Contains a duplicated prerequisite edge, an isolated topic and a
//! `taught_by` edge pointing at a professor that does not exist.

use super::store::Graph;

pub const COURSE_DOCUMENT: &str = r#"{
	"nodes": [
		{"id": "course_CSCI 1112", "label": "CSCI 1112", "type": "course", "code": "CSCI 1112", "name": "Algorithms and Data Structures", "credits": 3},
		{"id": "course_CSCI 2113", "label": "CSCI 2113", "type": "course", "code": "CSCI 2113", "name": "Software Engineering", "credits": "3", "description": "Principles of software design."},
		{"id": "course_CSCI 3410", "label": "CSCI 3410", "type": "course", "code": "CSCI 3410", "name": "Systems Programming"},
		{"id": "prof_Simha", "label": "Simha", "type": "professor", "name": "Rahul Simha"},
		{"id": "prof_Lee", "label": "Lee", "type": "professor", "name": "Alice Lee"},
		{"id": "topic_algorithms", "label": "algorithms", "type": "topic", "topic": "algorithms"},
		{"id": "topic_databases", "label": "databases", "type": "topic", "topic": "databases"}
	],
	"links": [
		{"source": "course_CSCI 1112", "target": "course_CSCI 2113", "type": "prerequisite", "label": "prerequisite"},
		{"source": "course_CSCI 2113", "target": "course_CSCI 3410", "type": "prerequisite", "label": "prerequisite"},
		{"source": "course_CSCI 2113", "target": "prof_Simha", "type": "taught_by", "label": "taught_by"},
		{"source": "course_CSCI 2113", "target": "prof_Lee", "type": "taught_by", "label": "taught_by"},
		{"source": "course_CSCI 2113", "target": "topic_algorithms", "type": "covers_topic", "label": "covers_topic", "weight": 0.8},
		{"source": "course_CSCI 3410", "target": "topic_algorithms", "type": "covers_topic", "label": "covers_topic"},
		{"source": "course_CSCI 1112", "target": "course_CSCI 2113", "type": "prerequisite", "label": "prerequisite"},
		{"source": "course_CSCI 3410", "target": "prof_Ghost", "type": "taught_by", "label": "taught_by"}
	],
	"_metadata": {
		"note": "Real data exported from KG-QA notebook",
		"total_nodes": 7,
		"total_links": 8
	}
}"#;

pub fn course_graph() -> Graph {
	Graph::from_json(COURSE_DOCUMENT).expect("fixture parses")
}

/// Nodes `A`, `B` (courses) and `Prof`, with `A -> B` prerequisite and
/// `Prof -> B` taught_by.
pub fn tiny_graph() -> Graph {
	Graph::from_json(
		r#"{
			"nodes": [
				{"id": "A", "label": "A", "type": "course"},
				{"id": "B", "label": "B", "type": "course"},
				{"id": "Prof", "label": "Prof", "type": "professor"}
			],
			"links": [
				{"source": "A", "target": "B", "type": "prerequisite", "label": "prerequisite"},
				{"source": "Prof", "target": "B", "type": "taught_by", "label": "taught_by"}
			]
		}"#,
	)
	.expect("fixture parses")
}
