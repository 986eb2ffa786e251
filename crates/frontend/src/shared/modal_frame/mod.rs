use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Ventana modal (fondo + superficie con encabezado).
///
/// El estado abierto/cerrado lo tiene quien la monta: el componente se renderiza
/// dentro de un `<Show>` y avisa con `on_close` cuando debe cerrarse.
#[component]
pub fn ModalFrame(
    /// Título del encabezado
    #[prop(into)]
    title: Signal<String>,
    /// Se llama al pedir el cierre (botón ×, clic en el fondo)
    on_close: Callback<()>,
    /// Ancho máximo de la superficie, p. ej. `"720px"`
    #[prop(optional)]
    max_width: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Solo se cierra si el clic empezó y terminó sobre el fondo
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let request_close = move || {
        // En el siguiente tick: el fondo no puede desmontarse durante su propio click
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            request_close();
        }
    };

    let modal_style = format!(
        "position: relative; max-width: {}; width: 100%;",
        max_width.unwrap_or("640px")
    );

    view! {
        <div
            class="modal-overlay"
            style="z-index: 1000;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class="modal"
                style=modal_style
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h3 class="modal-title">{move || title.get()}</h3>
                    <button
                        class="modal-close"
                        title="Cerrar"
                        on:click=move |_| request_close()
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
