use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page not-found">
			<h1>"Page not found"</h1>
			<a href="/">"Back to the knowledge graph"</a>
		</div>
	}
}
