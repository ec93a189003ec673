//! Edit / delete dialog for one product.

#[cfg(test)]
#[path = "product_modal_test.rs"]
mod product_modal_test;

use leptos::prelude::*;
use stockmanager::dashboard::{DashboardState, ModalMode, Mutation};

fn title(mode: ModalMode) -> &'static str {
    match mode {
        ModalMode::Edit => "Editar produto",
        ModalMode::Delete => "Excluir produto",
    }
}

fn confirm_label(mode: ModalMode) -> &'static str {
    match mode {
        ModalMode::Edit => "Salvar",
        ModalMode::Delete => "Excluir",
    }
}

#[component]
pub fn ProductModalView(dash: RwSignal<DashboardState>, submit: Callback<Mutation>) -> impl IntoView {
    let mode = Memo::new(move |_| dash.with(|d| d.modal.as_ref().map(|m| m.mode)));

    let on_confirm = move |_| {
        if let Some(mutation) = dash.with_untracked(DashboardState::modal_mutation) {
            submit.run(mutation);
        }
    };
    let on_cancel = move |_| dash.update(DashboardState::cancel_modal);

    let draft_field = move |read: fn(&stockmanager::types::ProductUpdate) -> String| {
        dash.with(|d| d.modal.as_ref().map(|m| read(&m.draft)).unwrap_or_default())
    };

    view! {
        <Show when=move || mode.get().is_some()>
            <div class="dialog-backdrop" on:click=on_cancel>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2>{move || mode.get().map(title).unwrap_or_default()}</h2>
                    {move || match mode.get() {
                        Some(ModalMode::Edit) => view! {
                            <div class="dialog__fields">
                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="Nome"
                                    prop:value=move || draft_field(|p| p.name.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        dash.update(|d| if let Some(m) = d.modal.as_mut() { m.draft.name = value; });
                                    }
                                />
                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="Descrição"
                                    prop:value=move || draft_field(|p| p.description.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        dash.update(|d| if let Some(m) = d.modal.as_mut() { m.draft.description = value; });
                                    }
                                />
                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="Fabricante"
                                    prop:value=move || draft_field(|p| p.manufacturer.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        dash.update(|d| if let Some(m) = d.modal.as_mut() { m.draft.manufacturer = value; });
                                    }
                                />
                            </div>
                        }
                        .into_any(),
                        _ => view! {
                            <p>
                                "Tem certeza que deseja excluir o produto "
                                <strong>{move || draft_field(|p| p.name.clone())}</strong>
                                "?"
                            </p>
                        }
                        .into_any(),
                    }}
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_cancel>"Cancelar"</button>
                        <button class="btn btn--primary" on:click=on_confirm>
                            {move || mode.get().map(confirm_label).unwrap_or_default()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
