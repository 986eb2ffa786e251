use crate::shared::components::ui::CountBadge;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Panel de filtros plegable.
///
/// El encabezado alterna `is_expanded` y muestra cuántos criterios hay
/// cargados; `actions` queda siempre visible a la derecha.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)]
    active_count: Signal<usize>,
    #[prop(into)]
    actions: ViewFn,
    children: Children,
) -> impl IntoView {
    let state_class = move |base: &str| {
        if is_expanded.get() {
            format!("{base} {base}--open")
        } else {
            base.to_string()
        }
    };

    view! {
        <section class="filter-panel">
            <div class="filter-panel__bar">
                <button
                    type="button"
                    class="filter-panel__toggle"
                    aria-expanded=move || is_expanded.get().to_string()
                    on:click=move |_| is_expanded.update(|open| *open = !*open)
                >
                    <span class=move || state_class("filter-panel__chevron")>{icon("chevron-right")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    <CountBadge count=active_count hide_when_zero=true unit="criterios activos"/>
                </button>
                <div class="filter-panel__actions">{actions.run()}</div>
            </div>
            // El contenido se oculta con CSS para no perder lo escrito al plegar
            <div class=move || state_class("filter-panel__body")>
                {children()}
            </div>
        </section>
    }
}
