use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Título de la página con el botón de recarga.
///
/// Mientras `loading` está activo el botón queda deshabilitado y muestra
/// "Cargando...". `children` agrega acciones a la izquierda del botón.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(into)]
    loading: Signal<bool>,
    on_refresh: Callback<()>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <Flex gap=FlexGap::Small align=FlexAlign::Center class="page-header__actions">
                {children.map(|c| c())}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
            </Flex>
        </header>
    }
}
