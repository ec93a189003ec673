//! New-product tab with an image dropzone and preview.
//!
//! Dropped or picked files are read into a `data:` URL and stored on the
//! form; only the first file of a drop is used.

use leptos::prelude::*;
use stockmanager::dashboard::{DashboardState, Mutation};

#[component]
pub fn ProductCreateTab(dash: RwSignal<DashboardState>, submit: Callback<Mutation>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.run(dash.with_untracked(DashboardState::product_mutation));
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let files = ev.data_transfer().and_then(|dt| dt.files());
            if let Some(file) = crate::util::file::first_file(files) {
                load_image(dash, file);
            }
        }
    };

    let on_pick = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            let files = _ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files());
            if let Some(file) = crate::util::file::first_file(files) {
                load_image(dash, file);
            }
        }
    };

    let preview = move || dash.with(|d| d.product_form.image.clone());

    view! {
        <section class="product-create-tab">
            <h2>"Criar novo produto"</h2>
            <form class="product-form" on:submit=on_submit>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Nome"
                    prop:value=move || dash.with(|d| d.product_form.name.clone())
                    on:input=move |ev| dash.update(|d| d.product_form.name = event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Descrição"
                    prop:value=move || dash.with(|d| d.product_form.description.clone())
                    on:input=move |ev| dash.update(|d| d.product_form.description = event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Fabricante"
                    prop:value=move || dash.with(|d| d.product_form.manufacturer.clone())
                    on:input=move |ev| dash.update(|d| d.product_form.manufacturer = event_target_value(&ev))
                />
                <label
                    class="dropzone"
                    on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                    on:drop=on_drop
                >
                    <input class="dropzone__input" type="file" accept="image/*" on:change=on_pick/>
                    <span>"Arraste e solte uma imagem aqui, ou clique para selecionar uma imagem"</span>
                </label>
                {move || preview().map(|src| view! { <img class="image-preview" src=src alt="Pré-visualização"/> })}
                <button class="btn btn--primary" type="submit">"Confirmar"</button>
            </form>
        </section>
    }
}

#[cfg(feature = "csr")]
fn load_image(dash: RwSignal<DashboardState>, file: web_sys::File) {
    leptos::task::spawn_local(async move {
        if let Some(url) = crate::util::file::read_data_url(file).await {
            let _ = dash.try_update(|d| d.product_form.image = Some(url));
        }
    });
}
