use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::graph_stats::GraphStatsBar;
use crate::components::node_details::NodeDetailsPanel;
use crate::components::sample_queries::SampleQueries;
use crate::config::GRAPH_DATA_URL;
use crate::graph::queries::SampleQuery;
use crate::graph::{self, Graph, SelectionEvent, SelectionState};

/// Knowledge graph explorer page.
///
/// The graph is fetched once; until it arrives (or if the fetch fails) the
/// canvas area shows a loading message.
#[component]
pub fn KnowledgeGraph() -> impl IntoView {
	let (snapshot, set_snapshot) = signal(None::<Arc<Graph>>);
	let (query, set_query) = signal(String::new());
	let selection = RwSignal::new(SelectionState::idle());
	let focus = RwSignal::new(None::<String>);

	spawn_local(async move {
		match graph::load(GRAPH_DATA_URL).await {
			Ok(g) => set_snapshot.set(Some(Arc::new(g))),
			Err(e) => warn!("failed to load graph data from {}: {}", GRAPH_DATA_URL, e),
		}
	});

	let loaded = Signal::derive(move || snapshot.get().unwrap_or_else(|| Arc::new(Graph::empty())));

	let reset = move |_: leptos::ev::MouseEvent| {
		let next = loaded.with_untracked(|g| {
			selection
				.get_untracked()
				.transition(g, SelectionEvent::Reset)
		});
		selection.set(next);
	};

	let visualize = Callback::new(move |sample: SampleQuery| {
		let Some(g) = snapshot.get_untracked() else {
			return;
		};
		let Some(node) = sample.start_node(&g) else {
			warn!("no node found for sample path {:?}", sample.path);
			return;
		};
		info!("visualizing path from {}", node.label);
		let id = node.id.clone();
		selection.set(
			selection
				.get_untracked()
				.transition(&g, SelectionEvent::NodeClicked(id.clone())),
		);
		focus.set(Some(id));
	});

	view! {
		<div class="page">
			<header class="page-header">
				<h1>"Knowledge Graph Visualization"</h1>
				<p class="subtitle">
					"Interactive exploration of course relationships, prerequisites, instructors, and topics"
				</p>
			</header>

			{move || snapshot.get().map(|g| view! { <GraphStatsBar stats=g.stats() /> })}

			<input
				class="search"
				type="search"
				placeholder="Search courses, professors, or topics... (e.g., CSCI 6364, Simha, machine learning)"
				prop:value=query
				on:input=move |ev| set_query.set(event_target_value(&ev))
			/>

			<div class="columns">
				<div class="panel graph-panel">
					<div class="panel-header">
						<h3>"Interactive Force-Directed Graph"</h3>
						<div class="legend-inline">
							<span class="dot course"></span>"Courses"
							<span class="dot professor"></span>"Professors"
							<span class="dot topic"></span>"Topics"
						</div>
					</div>
					<Show
						when=move || snapshot.with(Option::is_some)
						fallback=|| view! { <div class="loading">"Loading knowledge graph..."</div> }
					>
						<ForceGraphCanvas graph=loaded query=query selection=selection focus=focus />
					</Show>
					<div class="panel-footer">
						<p class="hint">
							"Click nodes to view details • Drag to pan • Scroll to zoom • Click background to reset"
						</p>
						<button class="ghost" on:click=reset>"Reset View"</button>
					</div>
				</div>
				<NodeDetailsPanel graph=loaded selection=selection />
			</div>

			<SampleQueries on_visualize=visualize />

			<div class="panel methodology">
				<h3>"Graph Construction Methodology"</h3>
				<div class="columns three">
					<div>
						<h4>"Prerequisites Extraction"</h4>
						<p>"Regex patterns extract prerequisite relationships from course descriptions:"</p>
						<code>"r\"Prerequisites?: ([A-Z]+ \\d+)\""</code>
					</div>
					<div>
						<h4>"Topic Extraction"</h4>
						<p>"Keyword matching and NLP identify topics from descriptions."</p>
					</div>
					<div>
						<h4>"Instructor Mapping"</h4>
						<p>"Course sections map to instructors, creating taught_by relationships."</p>
					</div>
				</div>
				{move || {
					snapshot
						.get()
						.and_then(|g| g.metadata().map(|m| m.note.clone()))
						.filter(|note| !note.is_empty())
						.map(|note| view! { <p class="note">{note}</p> })
				}}
			</div>
		</div>
	}
}
