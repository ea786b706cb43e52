use std::collections::HashMap;

use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::types::{Edge, GraphData, Metadata, Node, NodeType};

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("network error: {0}")]
	Network(String),
	#[error("server responded with status {0}")]
	Status(u16),
	#[error("malformed graph document: {0}")]
	Parse(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
	pub total_nodes: usize,
	pub courses: usize,
	pub professors: usize,
	pub topics: usize,
	pub relationships: usize,
}

/// Read-only snapshot of the knowledge graph. Nothing is added, removed or
/// mutated after construction.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	metadata: Option<Metadata>,
	index: HashMap<String, usize>,
}

impl Graph {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Builds the snapshot, keeping the first node for any repeated id.
	pub fn new(data: GraphData) -> Self {
		let mut nodes = Vec::with_capacity(data.nodes.len());
		let mut index = HashMap::with_capacity(data.nodes.len());
		for node in data.nodes {
			if index.contains_key(&node.id) {
				warn!("duplicate node id {:?}, keeping the first", node.id);
				continue;
			}
			index.insert(node.id.clone(), nodes.len());
			nodes.push(node);
		}

		let graph = Self {
			nodes,
			edges: data.links,
			metadata: data.metadata,
			index,
		};
		if let Some((declared_nodes, declared_links)) = graph.metadata_mismatch() {
			warn!(
				"metadata declares {} nodes and {} links, document has {} and {}",
				declared_nodes,
				declared_links,
				graph.nodes.len(),
				graph.edges.len()
			);
		}
		graph
	}

	/// Counts declared in `_metadata` when they disagree with what was parsed.
	/// Zero totals mean the exporter did not record them.
	pub fn metadata_mismatch(&self) -> Option<(usize, usize)> {
		let meta = self.metadata.as_ref()?;
		let declared = (meta.total_nodes, meta.total_links);
		(declared != (0, 0) && declared != (self.nodes.len(), self.edges.len())).then_some(declared)
	}

	pub fn from_json(text: &str) -> Result<Self, LoadError> {
		let data: GraphData = serde_json::from_str(text)?;
		Ok(Self::new(data))
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn metadata(&self) -> Option<&Metadata> {
		self.metadata.as_ref()
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Label of the node with `id`, if it exists.
	pub fn label_of(&self, id: &str) -> Option<&str> {
		self.node(id).map(|n| n.label.as_str())
	}

	/// First node (in document order) whose label contains `fragment`.
	pub fn find_by_label(&self, fragment: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.label.contains(fragment))
	}

	/// Number of edges incident to `id`, in either direction.
	pub fn degree(&self, id: &str) -> usize {
		self.edges.iter().filter(|e| e.touches(id)).count()
	}

	pub fn stats(&self) -> GraphStats {
		let count = |t: NodeType| self.nodes.iter().filter(|n| n.node_type == t).count();
		GraphStats {
			total_nodes: self.nodes.len(),
			courses: count(NodeType::Course),
			professors: count(NodeType::Professor),
			topics: count(NodeType::Topic),
			relationships: self.edges.len(),
		}
	}
}

/// Fetches and parses the graph document at `url`.
pub async fn load(url: &str) -> Result<Graph, LoadError> {
	let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".into()))?;
	let resp = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(js_error)?;
	let resp: Response = resp.dyn_into().map_err(js_error)?;
	if !resp.ok() {
		return Err(LoadError::Status(resp.status()));
	}

	let text = JsFuture::from(resp.text().map_err(js_error)?)
		.await
		.map_err(js_error)?;
	let text = text
		.as_string()
		.ok_or_else(|| LoadError::Network("response body is not text".into()))?;

	let graph = Graph::from_json(&text)?;
	info!(
		"loaded knowledge graph: {} nodes, {} links",
		graph.nodes().len(),
		graph.edges().len()
	);
	Ok(graph)
}

fn js_error(value: wasm_bindgen::JsValue) -> LoadError {
	LoadError::Network(
		value
			.as_string()
			.unwrap_or_else(|| format!("{:?}", value)),
	)
}
