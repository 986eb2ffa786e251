//! Utilidades para construir las URLs del backend de registros.

/// Puerto del backend cuando la base se deduce de `window.location`
pub const BACKEND_PORT: u16 = 5000;

/// Base de la API.
///
/// Si el bundle se compiló con `REGISTROS_API_BASE`, se usa ese valor;
/// si no, el mismo host de la página con el puerto del backend
/// (p. ej. `http://localhost:5000`). Sin `window` devuelve cadena vacía.
pub fn api_base() -> String {
    if let Some(base) = option_env!("REGISTROS_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// URL completa a partir de una ruta `/api/...`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
