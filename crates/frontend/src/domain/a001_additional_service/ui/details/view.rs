use super::view_model::{DraftField, ServiceForm};
use crate::domain::a002_company_reference::ui::picker::CompanySelect;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_additional_service::aggregate::ACCEPTED_EXTENSIONS;
use contracts::domain::a002_company_reference::aggregate::CompanyReference;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Modal de alta/edición de un servicio adicional.
///
/// No guarda estado propio: muestra `form` y avisa cada cambio por callback.
#[component]
pub fn ServiceFormModal(
    #[prop(into)]
    form: Signal<ServiceForm>,
    #[prop(into)]
    companies: Signal<Vec<CompanyReference>>,
    on_edit: Callback<DraftField>,
    /// Archivo elegido en el input (o `None` si se vació)
    on_attach: Callback<Option<web_sys::File>>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || form.with(|f| f.title().to_string()));
    let is_creating = move || form.with(|f| f.is_creating());
    let show_date_error = move || form.with(|f| f.is_creating() && f.date_error);
    let saving = move || form.with(|f| f.is_saving());

    let handle_file = move |ev: leptos::ev::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        on_attach.run(file);
    };

    view! {
        <ModalFrame title=title on_close=on_cancel max_width="560px">
            <form class="details-form" on:submit=|ev| ev.prevent_default()>
                <div class="form-group">
                    <label for="company_id">"Razón Social"</label>
                    <CompanySelect
                        companies=companies
                        value=Signal::derive(move || form.with(|f| f.draft.company_id.clone()))
                        on_change=Callback::new(move |v| on_edit.run(DraftField::Company(v)))
                    />
                </div>

                <div class="form-group">
                    <label for="installation_date">
                        "Fecha de Instalación "
                        <Show when=is_creating>
                            <span class="text-danger">"*"</span>
                        </Show>
                    </label>
                    <input
                        type="date"
                        id="installation_date"
                        class=move || {
                            if show_date_error() { "form-control is-invalid" } else { "form-control" }
                        }
                        required=is_creating
                        prop:value=move || form.with(|f| f.draft.installation_date.clone())
                        on:input=move |ev| {
                            on_edit.run(DraftField::InstallationDate(event_target_value(&ev)))
                        }
                    />
                    <Show when=show_date_error>
                        <small class="text-danger">"La fecha de instalación es obligatoria."</small>
                    </Show>
                </div>

                <div class="form-group">
                    <label for="notes">"Observación"</label>
                    <textarea
                        id="notes"
                        class="form-control"
                        rows="3"
                        prop:value=move || form.with(|f| f.draft.notes.clone())
                        on:input=move |ev| on_edit.run(DraftField::Notes(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="document">"Documento"</label>
                    <input
                        type="file"
                        id="document"
                        class="form-control"
                        accept=ACCEPTED_EXTENSIONS
                        on:change=handle_file
                    />
                    {move || form.with(|f| f.editing().and_then(|row| row.document_url.clone())).map(|url| view! {
                        <small class="form-hint">
                            "Documento actual: "
                            <a href=url target="_blank" rel="noopener noreferrer">"Ver Documento"</a>
                            " (se conserva si no se elige otro)"
                        </small>
                    })}
                </div>
            </form>

            <div class="details-actions">
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cerrar"
                </button>
                <button
                    class="btn btn-primary"
                    disabled=saving
                    on:click=move |_| on_save.run(())
                >
                    {icon("save")}
                    {move || form.with(|f| f.submit_label())}
                </button>
            </div>
        </ModalFrame>
    }
}
