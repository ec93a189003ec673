//! Root application component with routing and the API context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use stockmanager::ApiConfig;

use crate::components::protected::Protected;
use crate::net::build_api;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};

/// Root application component.
///
/// Provides the API client (with its session store) as context and sets up
/// client-side routing. The dashboard route sits behind the session guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env().unwrap_or_else(|_e| {
        #[cfg(feature = "csr")]
        log::warn!("invalid build-time API config, using defaults: {_e}");
        ApiConfig::default()
    });
    provide_context(build_api(config));

    view! {
        <Title text="Gerenciamento de Estoque"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
