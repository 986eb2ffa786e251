use crate::shared::api_utils::api_url;
use contracts::projections::p900_document_records::dto::{
    DocumentRecordsFilter, DocumentRecordsResponse,
};
use contracts::shared::api_message::ApiMessage;
use gloo_net::http::Request;

/// Actividades y servicios adicionales en una sola llamada
pub async fn load_document_records(
    filter: &DocumentRecordsFilter,
) -> Result<DocumentRecordsResponse, String> {
    let url = api_url(&format!("/api/actas/listar{}", filter.to_query_string()));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiMessage::describe_failure(response.status(), &body));
    }

    let data: DocumentRecordsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
