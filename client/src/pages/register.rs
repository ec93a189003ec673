//! Registration page. Success shows a message, clears the form, and returns
//! to login after a short delay.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use stockmanager::auth::{self, RegistrationPhase, RegistrationState};
use stockmanager::guard::LOGIN_ROUTE;
use stockmanager::types::NewUser;

use crate::net::Api;
use crate::util::timer;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let user = RwSignal::new(NewUser::default());
    let state = RwSignal::new(RegistrationState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(RegistrationState::is_submitting) {
            return;
        }
        state.update(RegistrationState::begin);
        let new_user = user.get_untracked();
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = auth::register(&api, &new_user).await;
            state.update(|s| s.finish(&result));
            if result.is_err() {
                return;
            }
            user.set(NewUser::default());
            timer::sleep(api.config().register_redirect_delay).await;
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        });
    };

    let message_class = move || {
        if state.with(|s| s.phase == RegistrationPhase::Succeeded) {
            "login-message login-message--success"
        } else {
            "login-message login-message--error"
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Cadastrar Usuário"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nome"
                        required
                        prop:value=move || user.with(|u| u.name.clone())
                        on:input=move |ev| user.update(|u| u.name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || user.with(|u| u.email.clone())
                        on:input=move |ev| user.update(|u| u.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        required
                        prop:value=move || user.with(|u| u.password.clone())
                        on:input=move |ev| user.update(|u| u.password = event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || state.with(RegistrationState::is_submitting)
                    >
                        "Cadastrar"
                    </button>
                </form>
                <Show when=move || state.with(|s| s.message.is_some())>
                    <p class=message_class>{move || state.with(|s| s.message.unwrap_or_default())}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Já tem uma conta? "
                    <a href=LOGIN_ROUTE>"Entrar"</a>
                </p>
            </div>
        </div>
    }
}
