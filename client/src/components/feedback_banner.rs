//! Success / error banner for the last dashboard mutation.

use leptos::prelude::*;
use stockmanager::dashboard::DashboardState;

#[component]
pub fn FeedbackBanner(dash: RwSignal<DashboardState>) -> impl IntoView {
    let success = move || dash.with(|d| d.feedback.success_text());
    let error = move || dash.with(|d| d.feedback.error_text());

    view! {
        <Show when=move || success().is_some()>
            <p class="feedback feedback--success">{move || success().unwrap_or_default()}</p>
        </Show>
        <Show when=move || error().is_some()>
            <p class="feedback feedback--error">{move || error().unwrap_or_default()}</p>
        </Show>
    }
}
