//! Login page: email + password against the remote API.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use stockmanager::auth::{self, LoginState};
use stockmanager::guard::{DASHBOARD_ROUTE, REGISTER_ROUTE};
use stockmanager::types::Credentials;

use crate::net::Api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(LoginState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(LoginState::is_submitting) {
            return;
        }
        state.update(LoginState::begin);
        let credentials = Credentials { email: email.get_untracked(), password: password.get_untracked() };
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = auth::login(&api, &credentials).await;
            state.update(|s| s.finish(&result));
            if result.is_ok() {
                navigate(DASHBOARD_ROUTE, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || state.with(LoginState::is_submitting)
                    >
                        "Entrar"
                    </button>
                </form>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || state.with(|s| s.error.unwrap_or_default())}
                    </p>
                </Show>
                <p class="login-card__subtitle">
                    "Não tem uma conta? "
                    <a href=REGISTER_ROUTE>"Cadastre-se"</a>
                </p>
            </div>
        </div>
    }
}
