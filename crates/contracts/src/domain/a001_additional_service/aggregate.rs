use serde::{Deserialize, Serialize};

/// Campo multipart con el archivo adjunto
pub const DOCUMENT_FIELD: &str = "documento_asociado";

/// Extensiones que el backend guarda; el resto se ignora en silencio
pub const ACCEPTED_EXTENSIONS: &str = ".png,.jpg,.jpeg,.pdf";

/// Servicio adicional tal como viene en el listado de actas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalService {
    pub id: i64,
    #[serde(rename = "nombre_cliente", default)]
    pub client_name: Option<String>,
    #[serde(rename = "nombre_empresa", default)]
    pub company_name: Option<String>,
    /// Fecha de instalación
    #[serde(rename = "fecha", default)]
    pub installation_date: Option<String>,
    #[serde(rename = "fecha_inicio_monitoreo", default)]
    pub monitoring_start: Option<String>,
    /// URL de descarga del documento, si existe
    #[serde(rename = "documento", default)]
    pub document_url: Option<String>,
    #[serde(rename = "observacion", default)]
    pub notes: Option<String>,
    /// Razón social asociada; el listado no siempre la incluye
    #[serde(rename = "id_razon_social", default)]
    pub company_id: Option<i64>,
}

/// Cuerpo de alta/modificación de un servicio adicional.
///
/// `attachment` es el nombre del archivo nuevo elegido en el formulario;
/// `None` significa "conservar el documento guardado".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalServiceSaveRequest {
    pub company_id: Option<i64>,
    pub installation_date: Option<String>,
    pub notes: Option<String>,
    pub attachment: Option<String>,
}

impl AdditionalServiceSaveRequest {
    /// Campos de texto del multipart, en el orden que espera el backend.
    ///
    /// Los campos sin valor no se envían, así el backend conserva lo que tiene.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::with_capacity(3);
        if let Some(id) = self.company_id {
            fields.push(("id_razon_social", id.to_string()));
        }
        if let Some(date) = self.installation_date.as_deref().filter(|d| !d.is_empty()) {
            fields.push(("fecha_instalacion", date.to_string()));
        }
        if let Some(notes) = &self.notes {
            fields.push(("observaciones", notes.clone()));
        }
        fields
    }
}

/// Respuesta de `POST /api/servicios_adicionales/` y `PUT /api/servicios_adicionales/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalServiceSaveResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Solo viene al crear
    #[serde(rename = "id_servicio", default)]
    pub id: Option<i64>,
}
