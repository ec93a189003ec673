//! Session-presence route guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use stockmanager::guard::{self, Access, LOGIN_ROUTE};

use crate::net::Api;

/// Render `children` only when a token is stored; otherwise redirect to login.
#[component]
pub fn Protected(children: Children) -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let access = guard::check(api.session());

    Effect::new(move || {
        if access == Access::RedirectToLogin {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    match access {
        Access::Granted => children().into_any(),
        Access::RedirectToLogin => view! { <p class="redirect-notice">"Redirecionando para o login..."</p> }.into_any(),
    }
}
