use serde::{Deserialize, Serialize};

/// Razón social (empresa) a la que se asocia un servicio adicional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReference {
    #[serde(rename = "id_razon_social")]
    pub id: i64,
    #[serde(rename = "cliente_id", default)]
    pub client_id: Option<i64>,
    #[serde(rename = "razon_social")]
    pub name: String,
    #[serde(rename = "cliente_nombre", default)]
    pub client_name: Option<String>,
}

impl CompanyReference {
    /// Texto de la opción en el selector: `razón social — cliente`
    pub fn display_label(&self) -> String {
        match self.client_name.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(client) => format!("{} — {}", self.name, client),
            None => self.name.clone(),
        }
    }
}

/// Respuesta de `GET /api/razones_sociales/all`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyReferenceListResponse {
    #[serde(rename = "razones_sociales", default)]
    pub items: Vec<CompanyReference>,
}

fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Busca la razón social por nombre y cliente (sin distinguir mayúsculas).
///
/// El nombre de una razón social se repite entre clientes, así que solo se
/// devuelve un resultado si la coincidencia es única. Sin cliente se compara
/// solo el nombre, con la misma exigencia.
pub fn find_company<'a>(
    items: &'a [CompanyReference],
    name: &str,
    client_name: Option<&str>,
) -> Option<&'a CompanyReference> {
    if name.trim().is_empty() {
        return None;
    }
    let client_name = client_name.filter(|c| !c.trim().is_empty());
    let mut matches = items.iter().filter(|c| {
        same_text(&c.name, name)
            && client_name.map_or(true, |client| {
                c.client_name.as_deref().is_some_and(|own| same_text(own, client))
            })
    });
    match (matches.next(), matches.next()) {
        (Some(found), None) => Some(found),
        _ => None,
    }
}
