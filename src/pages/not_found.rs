use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Page not found"</h1>
			<p class="subtitle">"The architecture diagram lives at "<a href="/">"/"</a></p>
		</div>
	}
}
