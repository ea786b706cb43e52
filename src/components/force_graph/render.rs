use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, LINK_CURVATURE, NodeInfo};
use crate::graph::style;

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_tooltip(state, ctx);
}

/// Position and drawn radius of every laid-out node.
fn node_geometry(state: &ForceGraphState) -> HashMap<DefaultNodeIdx, (f64, f64, f64)> {
	let mut geometry = HashMap::new();
	state.graph.visit_nodes(|node| {
		geometry.insert(
			node.index(),
			(
				node.x() as f64,
				node.y() as f64,
				state.radius(&node.data.user_data.node),
			),
		);
	});
	geometry
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (dash, gap, arrow_size) = (8.0 / k, 4.0 / k, 4.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let geometry = node_geometry(state);

	for link in state.links() {
		let (Some(&(x1, y1, r1)), Some(&(x2, y2, r2))) =
			(geometry.get(&link.source), geometry.get(&link.target))
		else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let style = style::edge_style(&link.edge, &state.selection);
		let flowing =
			state.selection.is_active() && state.selection.highlighted_edges().contains(&link.edge.key());

		// Control point sits off the midpoint, perpendicular to the link.
		let (ux, uy) = (dx / dist, dy / dist);
		let (cx, cy) = (
			(x1 + x2) / 2.0 - uy * dist * LINK_CURVATURE,
			(y1 + y2) / 2.0 + ux * dist * LINK_CURVATURE,
		);
		let (sx, sy) = unit(cx - x1, cy - y1);
		let (ex, ey) = unit(x2 - cx, y2 - cy);

		ctx.set_stroke_style_str(&style.color.to_string());
		ctx.set_line_width(style.width / k.max(0.5));
		if flowing {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}
		ctx.begin_path();
		ctx.move_to(x1 + sx * r1, y1 + sy * r1);
		ctx.quadratic_curve_to(
			cx,
			cy,
			x2 - ex * (r2 + arrow_size),
			y2 - ey * (r2 + arrow_size),
		);
		ctx.stroke();
		if flowing {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		ctx.set_fill_style_str(&style.color.to_string());
		let (tip_x, tip_y) = (x2 - ex * r2, y2 - ey * r2);
		let (back_x, back_y) = (tip_x - ex * arrow_size, tip_y - ey * arrow_size);
		let (px, py) = (-ey * arrow_size * 0.5, ex * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		if flowing && !link.edge.label.is_empty() {
			// Midpoint of the quadratic curve.
			let (mx, my) = (
				0.25 * x1 + 0.5 * cx + 0.25 * x2,
				0.25 * y1 + 0.5 * cy + 0.25 * y2,
			);
			ctx.set_fill_style_str("rgba(226, 232, 240, 0.85)");
			ctx.set_font(&format!("{}px sans-serif", 8.0 / k.max(0.5)));
			ctx.set_text_align("center");
			let _ = ctx.fill_text(&link.edge.label, mx, my);
			ctx.set_text_align("start");
		}
	}
}

fn unit(dx: f64, dy: f64) -> (f64, f64) {
	let len = (dx * dx + dy * dy).sqrt().max(1e-9);
	(dx / len, dy / len)
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let selection = &state.selection;

	// Dimmed nodes first so the highlighted subgraph paints on top.
	for lit in [false, true] {
		state.graph.visit_nodes(|node| {
			let info: &NodeInfo = &node.data.user_data;
			if selection.is_node_highlighted(&info.node.id) != lit {
				return;
			}
			let (x, y) = (node.x() as f64, node.y() as f64);
			let selected = selection.selected_id() == Some(info.node.id.as_str());
			draw_node(state, ctx, info, x, y, selected);
		});
	}
}

fn draw_node(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	info: &NodeInfo,
	x: f64,
	y: f64,
	selected: bool,
) {
	let k = state.transform.k;
	let style = style::node_style(&info.node, &state.selection);
	let radius = state.radius(&info.node);

	if selected {
		let glow_radius = radius * 3.0;
		if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
			let _ = gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.35)");
			let _ = gradient.add_color_stop(0.6, "rgba(200, 220, 255, 0.1)");
			let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
			ctx.begin_path();
			let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&style.color.to_string());
	ctx.fill();

	if selected {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.7)");
		ctx.set_line_width(1.5 / k);
		ctx.stroke();
	}

	let font_size = 10.0 / k.max(0.5);
	ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", 0.9 * style.color.a));
	ctx.set_font(&format!("{}px sans-serif", font_size));
	ctx.set_text_align("center");
	let _ = ctx.fill_text(&info.node.label, x, y + radius + font_size + 2.0 / k);
	ctx.set_text_align("start");
}

/// `label (type)` box next to the hovered node, in screen space.
fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(idx) = state.hover else {
		return;
	};
	let mut hovered = None;
	state.graph.visit_nodes(|node| {
		if node.index() == idx {
			hovered = Some((
				node.x() as f64,
				node.y() as f64,
				format!(
					"{} ({})",
					node.data.user_data.node.label, node.data.user_data.node.node_type
				),
			));
		}
	});
	let Some((gx, gy, text)) = hovered else {
		return;
	};

	let (sx, sy) = (
		gx * state.transform.k + state.transform.x + 12.0,
		gy * state.transform.k + state.transform.y - 12.0,
	);
	let width = 7.0 * text.chars().count() as f64 + 12.0;
	ctx.set_fill_style_str("rgba(15, 15, 30, 0.85)");
	ctx.fill_rect(sx, sy - 16.0, width, 22.0);
	ctx.set_fill_style_str("white");
	ctx.set_font("12px sans-serif");
	let _ = ctx.fill_text(&text, sx + 6.0, sy);
}
