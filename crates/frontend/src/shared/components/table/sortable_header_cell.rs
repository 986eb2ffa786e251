//! Celda de encabezado que ordena la tabla al hacer clic.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Centro"
//!     sort_field="center_name"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.activities_sort.field.clone()))
//!     sort_ascending=Signal::derive(move || state.with(|s| s.activities_sort.ascending))
//!     on_sort=Callback::new(move |field| dispatch(Intent::SortActivities(field)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Campo de ordenamiento que representa esta columna
    sort_field: &'static str,
    #[prop(into)]
    current_sort_field: Signal<String>,
    #[prop(into)]
    sort_ascending: Signal<bool>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let is_active = Memo::new(move |_| current_sort_field.with(|f| f == sort_field));
    let aria_sort = move || match (is_active.get(), sort_ascending.get()) {
        (false, _) => "none",
        (true, true) => "ascending",
        (true, false) => "descending",
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                role="button"
                aria-sort=aria_sort
                on:click=move |_| on_sort.run(sort_field.to_string())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), sort_field)>
                    {move || get_sort_indicator(&current_sort_field.get(), sort_field, sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
