//! Modal de servicio adicional:
//! - view_model.rs: borrador, modo del formulario, validación y armado del cuerpo
//! - view.rs: componente Leptos (solo UI)

mod view;
mod view_model;

pub use view::ServiceFormModal;
pub use view_model::{build_payload, resolve_company_id, DraftField, FormMode, ServiceForm, ServiceFormDraft};
