use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Kind of entity a node stands for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
	Course,
	Professor,
	Topic,
	/// Anything the exporter wrote that is not one of the three known kinds.
	#[default]
	#[serde(other)]
	Unknown,
}

impl NodeType {
	pub fn as_str(self) -> &'static str {
		match self {
			NodeType::Course => "course",
			NodeType::Professor => "professor",
			NodeType::Topic => "topic",
			NodeType::Unknown => "unknown",
		}
	}
}

impl fmt::Display for NodeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Kind of relationship an edge encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
	/// `source` must be taken before `target`.
	Prerequisite,
	/// Course `source` is taught by professor `target`.
	TaughtBy,
	/// Course `source` covers topic `target`.
	CoversTopic,
	#[serde(other)]
	Other,
}

/// Optional attributes are whatever the exporter copied off the source
/// record, so each one accepts text or a number and drops anything else.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Node {
	pub id: String,
	pub label: String,
	#[serde(rename = "type")]
	pub node_type: NodeType,
	#[serde(default, deserialize_with = "lenient_text")]
	pub description: Option<String>,
	#[serde(default, deserialize_with = "lenient_text")]
	pub credits: Option<String>,
	#[serde(default, deserialize_with = "lenient_text")]
	pub code: Option<String>,
	#[serde(default, deserialize_with = "lenient_text")]
	pub name: Option<String>,
	#[serde(default, deserialize_with = "lenient_text")]
	pub topic: Option<String>,
}

/// Directed, typed relationship. Endpoints are always plain node ids; any
/// resolution to positions happens in the renderer's own view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Edge {
	pub source: String,
	pub target: String,
	#[serde(rename = "type")]
	pub edge_type: EdgeType,
	#[serde(default, deserialize_with = "lenient_label")]
	pub label: String,
}

impl Edge {
	pub fn key(&self) -> EdgeKey {
		EdgeKey::new(&self.source, &self.target)
	}

	pub fn touches(&self, node_id: &str) -> bool {
		self.source == node_id || self.target == node_id
	}
}

/// Identity of an edge for highlighting: its `(source, target)` pair.
///
/// Parallel edges between the same pair share a key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
	pub source: String,
	pub target: String,
}

impl EdgeKey {
	pub fn new(source: &str, target: &str) -> Self {
		Self {
			source: source.to_owned(),
			target: target.to_owned(),
		}
	}
}

impl fmt::Display for EdgeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.source, self.target)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Metadata {
	#[serde(default)]
	pub note: String,
	#[serde(default)]
	pub total_nodes: usize,
	#[serde(default)]
	pub total_links: usize,
}

/// The graph document as served: `{ nodes, links, _metadata? }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	#[serde(default)]
	pub nodes: Vec<Node>,
	#[serde(default)]
	pub links: Vec<Edge>,
	#[serde(default, rename = "_metadata")]
	pub metadata: Option<Metadata>,
}

/// Strings pass through and numbers are printed; null, booleans, arrays and
/// objects read as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Option::<Value>::deserialize(deserializer)? {
		Some(Value::String(s)) => Some(s),
		Some(Value::Number(n)) => Some(n.to_string()),
		_ => None,
	})
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(lenient_text(deserializer)?.unwrap_or_default())
}
