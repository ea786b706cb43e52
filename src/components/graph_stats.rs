use leptos::prelude::*;

use crate::graph::GraphStats;

#[component]
fn StatCard(
	label: &'static str,
	value: usize,
	#[prop(default = "")] accent: &'static str,
) -> impl IntoView {
	view! {
		<div class="stat-card">
			<div class={format!("stat-label {}", accent)}>{label}</div>
			<div class="stat-value">{value}</div>
		</div>
	}
}

/// Node and relationship counts for the loaded graph.
#[component]
pub fn GraphStatsBar(stats: GraphStats) -> impl IntoView {
	view! {
		<div class="stats-bar">
			<StatCard label="Total Nodes" value=stats.total_nodes />
			<StatCard label="Courses" value=stats.courses accent="course" />
			<StatCard label="Professors" value=stats.professors accent="professor" />
			<StatCard label="Topics" value=stats.topics accent="topic" />
			<StatCard label="Relationships" value=stats.relationships />
		</div>
	}
}
