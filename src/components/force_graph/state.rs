use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use crate::config::{CLICK_TOLERANCE, FOCUS_DURATION, FOCUS_ZOOM};
use crate::graph::{Edge, Graph, Node, SelectionEvent, SelectionState, search, style};

/// World-space radius for a node of style size 1.
pub const NODE_REL_SIZE: f64 = 2.0;
/// Smallest pick radius, so shrunken nodes stay clickable.
pub const HIT_RADIUS: f64 = 6.0;
/// Bend of each link as a fraction of its length.
pub const LINK_CURVATURE: f64 = 0.2;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub node: Node,
}

/// A link whose endpoints are both laid out.
#[derive(Clone, Debug)]
pub struct LinkInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub edge: Edge,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Where the pointer went down and whether it has since travelled far
/// enough to stop counting as a click.
#[derive(Clone, Debug, Default)]
pub struct PressState {
	pub x: f64,
	pub y: f64,
	pub moved: bool,
}

#[derive(Clone, Debug)]
struct FocusAnimation {
	node: DefaultNodeIdx,
	from: ViewTransform,
	t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub press: PressState,
	pub hover: Option<DefaultNodeIdx>,
	pub selection: SelectionState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	links: Vec<LinkInfo>,
	ids: HashMap<String, DefaultNodeIdx>,
	focus: Option<FocusAnimation>,
}

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

fn simulation() -> ForceGraph<NodeInfo, ()> {
	ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	})
}

impl ForceGraphState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			graph: simulation(),
			links: Vec::new(),
			ids: HashMap::new(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			press: PressState::default(),
			hover: None,
			selection: SelectionState::idle(),
			width,
			height,
			flow_time: 0.0,
			focus: None,
		}
	}

	/// Rebuilds the layout from the nodes matching `query`.
	///
	/// Nodes that were already laid out keep their position and pin; links
	/// with an endpoint that is filtered out or missing are not drawn.
	pub fn set_data(&mut self, data: &Graph, query: &str) {
		let mut previous = HashMap::new();
		self.graph.visit_nodes(|node| {
			previous.insert(
				node.data.user_data.node.id.clone(),
				(node.x(), node.y(), node.data.is_anchor),
			);
		});

		let visible = search::filter(data, query);
		let mut graph = simulation();
		let mut ids = HashMap::with_capacity(visible.len());
		let ring = 100.0 + 2.0 * visible.len() as f64;

		for (i, node) in visible.iter().enumerate() {
			let (x, y, is_anchor) = previous.get(&node.id).copied().unwrap_or_else(|| {
				let angle = (i as f64) * 2.0 * PI / visible.len() as f64;
				(
					(ring * angle.cos()) as f32,
					(ring * angle.sin()) as f32,
					false,
				)
			});
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor,
				user_data: NodeInfo {
					node: (*node).clone(),
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		let mut links = Vec::new();
		for edge in data.edges() {
			if let (Some(&src), Some(&tgt)) = (ids.get(&edge.source), ids.get(&edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
				links.push(LinkInfo {
					source: src,
					target: tgt,
					edge: edge.clone(),
				});
			}
		}
		debug!(
			"layout rebuilt: {} of {} nodes, {} of {} links",
			ids.len(),
			data.nodes().len(),
			links.len(),
			data.edges().len()
		);

		self.graph = graph;
		self.ids = ids;
		self.links = links;
		self.hover = None;
		self.focus = None;
		self.drag = DragState::default();
	}

	pub fn links(&self) -> &[LinkInfo] {
		&self.links
	}

	#[cfg(test)]
	pub fn node_count(&self) -> usize {
		self.ids.len()
	}

	#[cfg(test)]
	pub fn position_of(&self, id: &str) -> Option<(f64, f64)> {
		let idx = *self.ids.get(id)?;
		self.position(idx)
	}

	fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	/// Drawn radius of `node` under the current selection.
	pub fn radius(&self, node: &Node) -> f64 {
		NODE_REL_SIZE * style::node_style(node, &self.selection).size.sqrt()
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let hit = self.radius(&node.data.user_data.node).max(HIT_RADIUS);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.node.id.clone());
			}
		});
		found
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.press = PressState { x, y, moved: false };
		if let Some(idx) = self.node_at_position(x, y) {
			let (nx, ny) = self.position(idx).unwrap_or_default();
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: x,
				start_y: y,
				node_start_x: nx as f32,
				node_start_y: ny as f32,
			};
		} else {
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			self.hover = self.node_at_position(x, y);
		}
		if (self.drag.active || self.pan.active)
			&& (x - self.press.x).hypot(y - self.press.y) >= CLICK_TOLERANCE
		{
			self.press.moved = true;
		}
		if !self.press.moved {
			return;
		}

		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				let (dx, dy) = (
					(x - self.drag.start_x) / self.transform.k,
					(y - self.drag.start_y) / self.transform.k,
				);
				let (nx, ny) = (
					self.drag.node_start_x + dx as f32,
					self.drag.node_start_y + dy as f32,
				);
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
		} else if self.pan.active {
			self.focus = None;
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	/// Ends a press. Returns the selection event if it was a click rather
	/// than a drag or pan.
	pub fn pointer_up(&mut self) -> Option<SelectionEvent> {
		let clicked = !self.press.moved;
		let event = if !clicked {
			None
		} else if let Some(idx) = self.drag.node_idx.filter(|_| self.drag.active) {
			self.node_id(idx).map(SelectionEvent::NodeClicked)
		} else if self.pan.active {
			Some(SelectionEvent::BackgroundClicked)
		} else {
			None
		};
		self.cancel_pointer();
		event
	}

	pub fn cancel_pointer(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.press = PressState::default();
	}

	pub fn zoom_at(&mut self, x: f64, y: f64, zoom_in: bool) {
		self.focus = None;
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Starts easing the view so the node `id` ends centred at the focus zoom.
	/// Nodes not currently laid out are ignored.
	pub fn focus_on(&mut self, id: &str) {
		let Some(&node) = self.ids.get(id) else {
			debug!("focus on {:?} skipped: not in the current layout", id);
			return;
		};
		self.focus = Some(FocusAnimation {
			node,
			from: self.transform.clone(),
			t: 0.0,
		});
	}

	#[cfg(test)]
	pub fn is_focusing(&self) -> bool {
		self.focus.is_some()
	}

	fn centred_on(&self, x: f64, y: f64, k: f64) -> ViewTransform {
		ViewTransform {
			x: self.width / 2.0 - x * k,
			y: self.height / 2.0 - y * k,
			k,
		}
	}

	fn step_focus(&mut self, dt: f64) {
		let Some(focus) = self.focus.as_mut() else {
			return;
		};
		focus.t = (focus.t + dt / FOCUS_DURATION).min(1.0);
		let (t, node, from) = (ease_out_cubic(focus.t), focus.node, focus.from.clone());
		let done = focus.t >= 1.0;

		// The target keeps moving while the simulation runs.
		let Some((nx, ny)) = self.position(node) else {
			self.focus = None;
			return;
		};
		let to = self.centred_on(nx, ny, FOCUS_ZOOM);
		self.transform = ViewTransform {
			x: from.x + (to.x - from.x) * t,
			y: from.y + (to.y - from.y) * t,
			k: from.k + (to.k - from.k) * t,
		};
		if done {
			self.focus = None;
		}
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;
		self.step_focus(dt as f64);
	}

	/// Adopts a new canvas size, shifting the view so the point that was at
	/// the centre stays there.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}
