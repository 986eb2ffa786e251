//! Contenedor raíz de una página.
//!
//! El `id` sigue el formato `{entidad}--{categoría}`, p. ej.
//! `"p900_document_records--list"`; la categoría se expone en
//! `data-page-category` para los estilos.

use leptos::prelude::*;

/// Categorías reconocidas
const PAGE_CATEGORIES: &[&str] = &["list", "detail"];

/// Separa `{entidad}--{categoría}`; `None` si el id no respeta el formato
pub fn split_page_id(id: &str) -> Option<(&str, &str)> {
    let (entity, category) = id.split_once("--")?;
    (!entity.is_empty() && PAGE_CATEGORIES.contains(&category)).then_some((entity, category))
}

#[component]
pub fn PageFrame(page_id: &'static str, children: Children) -> impl IntoView {
    let category = match split_page_id(page_id) {
        Some((_, category)) => category,
        None => {
            log::warn!("PageFrame: id de página no estándar '{}'", page_id);
            "list"
        }
    };

    view! {
        <div id=page_id class=format!("page page--{category}") data-page-category=category>
            {children()}
        </div>
    }
}
