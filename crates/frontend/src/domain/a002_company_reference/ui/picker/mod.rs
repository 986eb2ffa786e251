use contracts::domain::a002_company_reference::aggregate::CompanyReference;
use leptos::prelude::*;

/// Opción del selector: `(valor, texto)`
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyOption {
    pub value: String,
    pub label: String,
}

impl From<&CompanyReference> for CompanyOption {
    fn from(company: &CompanyReference) -> Self {
        Self {
            value: company.id.to_string(),
            label: company.display_label(),
        }
    }
}

/// Opciones en el orden del backend (por id)
pub fn company_options(companies: &[CompanyReference]) -> Vec<CompanyOption> {
    companies.iter().map(CompanyOption::from).collect()
}

/// Selector de razón social.
///
/// El valor es el id como texto; cadena vacía significa "sin seleccionar".
#[component]
pub fn CompanySelect(
    #[prop(into)]
    companies: Signal<Vec<CompanyReference>>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            id=id.unwrap_or("company_id")
            class="form-control"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"Seleccione una razón social"</option>
            {move || {
                let selected = value.get();
                company_options(&companies.get())
                    .into_iter()
                    .map(|opt| {
                        let is_selected = opt.value == selected;
                        view! {
                            <option value=opt.value selected=is_selected>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
