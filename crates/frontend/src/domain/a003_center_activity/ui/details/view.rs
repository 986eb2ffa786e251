use crate::projections::p900_document_records::ui::list::columns::{DocumentCell, MissingDocument};
use crate::shared::date_utils::format_record_date;
use crate::shared::modal_frame::ModalFrame;
use contracts::projections::p900_document_records::dto::{ActivityRecord, ActivityStage};
use leptos::prelude::*;

fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => "—".to_string(),
    }
}

/// Detalle de solo lectura de una fila de actividades
#[component]
pub fn ActivityDetails(record: ActivityRecord, on_close: Callback<()>) -> impl IntoView {
    let title = format!(
        "Centro {}",
        text_or_dash(record.center_name.as_deref())
    );

    let summary = [
        ("Cliente", text_or_dash(record.client_name.as_deref())),
        ("Área", text_or_dash(record.area.as_deref())),
        ("Ubicación", text_or_dash(record.location.as_deref())),
        ("Estado", text_or_dash(record.status.as_deref())),
        (
            "Instalación del centro",
            text_or_dash(Some(format_record_date(record.center_installed_at.as_deref()).as_str())),
        ),
    ];

    let stages = ActivityStage::ALL
        .iter()
        .map(|stage| {
            let date = format_record_date(record.stage_date(*stage));
            let doc = DocumentCell::from_url(record.stage_document(*stage), MissingDocument::Marker);
            view! {
                <tr>
                    <td>{stage.label()}</td>
                    <td>{date}</td>
                    <td>{doc.into_view()}</td>
                </tr>
            }
        })
        .collect_view();

    let inventory = DocumentCell::from_url(record.inventory_document(), MissingDocument::Marker);

    view! {
        <ModalFrame title=title on_close=on_close max_width="720px">
            <div class="details-container activity-details">
                <dl class="details-summary">
                    {summary
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()}
                </dl>

                <table class="details-table">
                    <thead>
                        <tr>
                            <th>"Etapa"</th>
                            <th>"Fecha"</th>
                            <th>"Documento"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {stages}
                        <tr>
                            <td>"Inventario"</td>
                            <td></td>
                            <td>{inventory.into_view()}</td>
                        </tr>
                    </tbody>
                </table>
            </div>

            <div class="details-actions">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    "Cerrar"
                </button>
            </div>
        </ModalFrame>
    }
}
