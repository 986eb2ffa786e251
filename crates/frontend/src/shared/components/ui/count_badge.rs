use leptos::prelude::*;

/// Contador de filas o criterios junto a un título.
///
/// Con `hide_when_zero` no se pinta nada mientras el contador sea 0.
#[component]
pub fn CountBadge(
    #[prop(into)]
    count: Signal<usize>,
    #[prop(optional)]
    hide_when_zero: bool,
    /// Texto del tooltip, p. ej. "registros"
    #[prop(optional)]
    unit: &'static str,
) -> impl IntoView {
    move || {
        let n = count.get();
        if hide_when_zero && n == 0 {
            return None;
        }
        let title = if unit.is_empty() { String::new() } else { format!("{n} {unit}") };
        Some(view! {
            <span class="badge badge--primary" title=title>{n}</span>
        })
    }
}
