use leptos::prelude::*;

use crate::graph::queries::{SAMPLE_QUERIES, SampleQuery};

/// Cards for the worked multi-hop questions, each with a "Visualize Path"
/// action.
#[component]
pub fn SampleQueries(on_visualize: Callback<SampleQuery>) -> impl IntoView {
	view! {
		<div class="panel sample-queries">
			<h3>"Sample Multi-Hop Queries"</h3>
			<p class="muted">
				"Examples of complex prerequisite chain questions from the KG-based training data"
			</p>
			<div class="query-grid">
				{SAMPLE_QUERIES
					.iter()
					.enumerate()
					.map(|(i, sample)| {
						let sample = *sample;
						view! {
							<div class="query-card">
								<div class="query-index">{format!("QUERY {}", i + 1)}</div>
								<p class="query-text">{sample.query}</p>
								<div class="query-path">{sample.path}</div>
								<p class="query-answer">{sample.answer}</p>
								<button class="ghost" on:click=move |_| on_visualize.run(sample)>
									"Visualize Path →"
								</button>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
