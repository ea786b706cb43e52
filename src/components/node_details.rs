use std::sync::Arc;

use leptos::prelude::*;

use crate::config::TOPIC_DISPLAY_LIMIT;
use crate::graph::summary::{self, Relationships};
use crate::graph::{Graph, Node, NodeType, SelectionState};

#[derive(Clone, Debug, PartialEq)]
struct Details {
	node: Node,
	degree: usize,
	relationships: Relationships,
}

fn badge_class(node_type: NodeType) -> &'static str {
	match node_type {
		NodeType::Course => "badge course",
		NodeType::Professor => "badge professor",
		NodeType::Topic => "badge topic",
		NodeType::Unknown => "badge",
	}
}

#[component]
fn RelationList(
	title: &'static str,
	kind: &'static str,
	items: Vec<String>,
	#[prop(optional)] limit: Option<usize>,
) -> impl IntoView {
	let (shown, more) = summary::truncate(&items, limit.unwrap_or(usize::MAX));
	let shown = shown.to_vec();

	(!items.is_empty()).then(|| {
		view! {
			<div class="relation-list">
				<div class={format!("relation-title {}", kind)}>{title}</div>
				<div class="badges">
					{shown
						.into_iter()
						.map(|item| view! { <span class={format!("badge outline {}", kind)}>{item}</span> })
						.collect_view()}
					{(more > 0).then(|| view! { <span class="badge outline">{format!("+{} more", more)}</span> })}
				</div>
			</div>
		}
	})
}

#[component]
fn SelectedNode(details: Details) -> impl IntoView {
	let Details {
		node,
		degree,
		relationships,
	} = details;

	view! {
		<div class="node-details">
			<span class={badge_class(node.node_type)}>{node.node_type.as_str().to_uppercase()}</span>
			<h4>{node.label.clone()}</h4>
			{node.name.filter(|name| *name != node.label).map(|name| view! { <p class="full-name">{name}</p> })}
			{node.code.map(|code| view! { <p class="muted">{code}</p> })}
			{node.description.map(|d| view! { <p class="description">{d}</p> })}
			{node.credits.map(|c| {
				view! {
					<div class="field">
						<div class="field-label">"Credits"</div>
						<div class="field-value">{c}</div>
					</div>
				}
			})}
			{node.topic.map(|t| {
				view! {
					<div class="field">
						<div class="field-label">"Topic"</div>
						<div class="field-value">{t}</div>
					</div>
				}
			})}
			<div class="connections">
				<div class="field-label">"Connections"</div>
				<div class="field-value">{format!("{} total relationships", degree)}</div>
				<RelationList title="Prerequisites" kind="course" items=relationships.prerequisites />
				<RelationList title="Required For" kind="dependent" items=relationships.dependents />
				<RelationList title="Instructors" kind="professor" items=relationships.instructors />
				<RelationList
					title="Topics Covered"
					kind="topic"
					items=relationships.topics
					limit=TOPIC_DISPLAY_LIMIT
				/>
			</div>
		</div>
	}
}

#[component]
fn Legend() -> impl IntoView {
	view! {
		<div class="legend">
			<p>
				"This knowledge graph represents relationships between courses, prerequisites, "
				"instructors, and topics extracted from course catalogue data."
			</p>
			<ul class="legend-nodes">
				<li><span class="dot course"></span>"Course Nodes"</li>
				<li><span class="dot professor"></span>"Professor Nodes"</li>
				<li><span class="dot topic"></span>"Topic Nodes"</li>
			</ul>
			<div class="legend-edges">
				<div class="field-label">"Edge Types"</div>
				<div><span class="line course"></span>"Prerequisites"</div>
				<div><span class="line professor"></span>"Taught By"</div>
				<div><span class="line topic"></span>"Covers Topic"</div>
			</div>
			<p class="hint">"Click on any node to see detailed information and connected relationships."</p>
		</div>
	}
}

/// Side panel: the selected node and its relationships, or the legend.
#[component]
pub fn NodeDetailsPanel(
	#[prop(into)] graph: Signal<Arc<Graph>>,
	selection: RwSignal<SelectionState>,
) -> impl IntoView {
	let details = Memo::new(move |_| {
		let graph = graph.get();
		selection.with(|sel| {
			sel.selected_node(&graph).map(|node| Details {
				node: node.clone(),
				degree: graph.degree(&node.id),
				relationships: summary::summarize(&graph, &node.id),
			})
		})
	});

	view! {
		<div class="panel details-panel">
			<h3>{move || if details.with(Option::is_some) { "Node Details" } else { "Graph Legend" }}</h3>
			{move || match details.get() {
				Some(d) => view! { <SelectedNode details=d /> }.into_any(),
				None => view! { <Legend /> }.into_any(),
			}}
		</div>
	}
}
