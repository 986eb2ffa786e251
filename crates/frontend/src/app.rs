use crate::projections::p900_document_records::ui::list::DocumentRecordsList;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <DocumentRecordsList />
        </ConfigProvider>
    }
}
