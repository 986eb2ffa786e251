use crate::shared::api_utils::api_url;
use contracts::domain::a002_company_reference::aggregate::{
    CompanyReference, CompanyReferenceListResponse,
};
use contracts::shared::api_message::ApiMessage;
use gloo_net::http::Request;

/// Todas las razones sociales, para el selector del formulario
pub async fn fetch_all_companies() -> Result<Vec<CompanyReference>, String> {
    let url = api_url("/api/razones_sociales/all");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiMessage::describe_failure(response.status(), &body));
    }

    let data: CompanyReferenceListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.items)
}
