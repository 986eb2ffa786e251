use crate::shared::icons::icon;
use leptos::prelude::*;

/// Tamaños de página ofrecidos en el selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Tamaño de página inicial de ambas tablas
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Saltos de navegación; cada uno resuelve la página destino o `None` si no aplica
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageJump {
    First,
    Previous,
    Next,
    Last,
}

impl PageJump {
    const ALL: [PageJump; 4] = [PageJump::First, PageJump::Previous, PageJump::Next, PageJump::Last];

    fn target(self, page: usize, total_pages: usize) -> Option<usize> {
        let last = total_pages.max(1) - 1;
        let target = match self {
            PageJump::First => 0,
            PageJump::Previous => page.checked_sub(1)?,
            PageJump::Next => page + 1,
            PageJump::Last => last,
        };
        (target != page && target <= last).then_some(target)
    }

    fn icon_name(self) -> &'static str {
        match self {
            PageJump::First => "chevrons-left",
            PageJump::Previous => "chevron-left",
            PageJump::Next => "chevron-right",
            PageJump::Last => "chevrons-right",
        }
    }

    fn title(self) -> &'static str {
        match self {
            PageJump::First => "Primera página",
            PageJump::Previous => "Página anterior",
            PageJump::Next => "Página siguiente",
            PageJump::Last => "Última página",
        }
    }
}

/// Texto `desde–hasta de total` para la página (0-based) mostrada
fn range_label(page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "0 de 0".to_string();
    }
    let from = (page * page_size + 1).min(total_count);
    let to = ((page + 1) * page_size).min(total_count);
    format!("{from}–{to} de {total_count}")
}

/// Controles de paginación bajo una tabla
#[component]
pub fn PaginationControls(
    /// Página actual (desde 0)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Filas totales de la tabla
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let jump_button = move |jump: PageJump| {
        let target = move || jump.target(current_page.get(), total_pages.get());
        view! {
            <button
                class="pagination-btn"
                title=jump.title()
                disabled=move || target().is_none()
                on:click=move |_| {
                    if let Some(page) = target() {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(jump.icon_name())}
            </button>
        }
    };

    let (back, forward) = PageJump::ALL.split_at(2);

    view! {
        <div class="pagination-controls">
            {back.iter().map(|&j| jump_button(j)).collect_view()}
            <span class="pagination-info">
                {move || format!(
                    "Página {} de {} · {}",
                    current_page.get() + 1,
                    total_pages.get().max(1),
                    range_label(current_page.get(), page_size.get(), total_count.get()),
                )}
            </span>
            {forward.iter().map(|&j| jump_button(j)).collect_view()}
            <select
                class="page-size-select"
                title="Filas por página"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .into_iter()
                    .map(|size| view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_targets_in_middle() {
        assert_eq!(PageJump::First.target(2, 5), Some(0));
        assert_eq!(PageJump::Previous.target(2, 5), Some(1));
        assert_eq!(PageJump::Next.target(2, 5), Some(3));
        assert_eq!(PageJump::Last.target(2, 5), Some(4));
    }

    #[test]
    fn test_jump_targets_at_edges() {
        assert_eq!(PageJump::First.target(0, 5), None);
        assert_eq!(PageJump::Previous.target(0, 5), None);
        assert_eq!(PageJump::Next.target(4, 5), None);
        assert_eq!(PageJump::Last.target(4, 5), None);
        // tabla vacía: una sola página, sin saltos
        assert!(PageJump::ALL.iter().all(|j| j.target(0, 0).is_none()));
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(0, 25, 0), "0 de 0");
        assert_eq!(range_label(0, 25, 30), "1–25 de 30");
        assert_eq!(range_label(1, 25, 30), "26–30 de 30");
    }
}
