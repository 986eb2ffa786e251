use crate::shared::api_utils::api_url;
use contracts::domain::a001_additional_service::aggregate::{
    AdditionalServiceSaveRequest, AdditionalServiceSaveResponse, DOCUMENT_FIELD,
};
use contracts::shared::api_message::ApiMessage;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;

const API_PATH: &str = "/api/servicios_adicionales";

/// Crear un servicio adicional (multipart)
pub async fn create_service(
    payload: &AdditionalServiceSaveRequest,
    file: Option<web_sys::File>,
) -> Result<AdditionalServiceSaveResponse, String> {
    let url = api_url(&format!("{}/", API_PATH));
    send_multipart("POST", &url, payload, file).await
}

/// Modificar un servicio adicional; sin archivo el backend conserva el documento guardado
pub async fn update_service(
    id: i64,
    payload: &AdditionalServiceSaveRequest,
    file: Option<web_sys::File>,
) -> Result<AdditionalServiceSaveResponse, String> {
    let url = api_url(&format!("{}/{}", API_PATH, id));
    send_multipart("PUT", &url, payload, file).await
}

/// Eliminar un servicio adicional
pub async fn delete_service(id: i64) -> Result<(), String> {
    let url = api_url(&format!("{}/{}", API_PATH, id));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiMessage::describe_failure(response.status(), &body));
    }

    Ok(())
}

async fn send_multipart(
    method: &str,
    url: &str,
    payload: &AdditionalServiceSaveRequest,
    file: Option<web_sys::File>,
) -> Result<AdditionalServiceSaveResponse, String> {
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in payload.form_fields() {
        form_data
            .append_with_str(name, &value)
            .map_err(|e| format!("{e:?}"))?;
    }
    // Solo se adjunta el archivo que corresponde al nombre elegido en el formulario
    if let Some(file) = file.filter(|f| payload.attachment.as_deref() == Some(f.name().as_str())) {
        form_data
            .append_with_blob_and_filename(DOCUMENT_FIELD, &file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Request failed: {e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(ApiMessage::describe_failure(resp.status(), &text));
    }

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
