use crate::domain::a001_additional_service::aggregate::AdditionalService;
use serde::{Deserialize, Serialize};

/// Etapas del ciclo de vida de un centro que tienen acta (fecha + documento)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityStage {
    Survey,
    Installation,
    Maintenance,
    Relocation,
    Closure,
    Removal,
}

impl ActivityStage {
    /// Orden de las columnas en la tabla de actividades
    pub const ALL: [ActivityStage; 6] = [
        ActivityStage::Survey,
        ActivityStage::Installation,
        ActivityStage::Maintenance,
        ActivityStage::Relocation,
        ActivityStage::Closure,
        ActivityStage::Removal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityStage::Survey => "Levantamiento",
            ActivityStage::Installation => "Instalación",
            ActivityStage::Maintenance => "Mantención",
            ActivityStage::Relocation => "Traslado",
            ActivityStage::Closure => "Cese",
            ActivityStage::Removal => "Retiro",
        }
    }

    /// Prefijo de los campos `<prefijo>_fecha` / `<prefijo>_documento`
    pub fn key(&self) -> &'static str {
        match self {
            ActivityStage::Survey => "levantamiento",
            ActivityStage::Installation => "instalacion",
            ActivityStage::Maintenance => "mantencion",
            ActivityStage::Relocation => "traslado",
            ActivityStage::Closure => "cese",
            ActivityStage::Removal => "retiro",
        }
    }
}

/// Fila de actividades: un centro con la fecha y el documento de cada etapa
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "id_centro", default)]
    pub center_id: Option<i64>,
    #[serde(rename = "nombre_centro", default)]
    pub center_name: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(rename = "ubicacion", default)]
    pub location: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "nombre_cliente", default)]
    pub client_name: Option<String>,
    #[serde(rename = "centro_fecha_instalacion", default)]
    pub center_installed_at: Option<String>,

    #[serde(rename = "levantamiento_fecha", default)]
    pub survey_date: Option<String>,
    #[serde(rename = "levantamiento_documento", default)]
    pub survey_document: Option<String>,
    #[serde(rename = "instalacion_fecha", default)]
    pub installation_date: Option<String>,
    #[serde(rename = "instalacion_documento", default)]
    pub installation_document: Option<String>,
    #[serde(rename = "mantencion_fecha", default)]
    pub maintenance_date: Option<String>,
    #[serde(rename = "mantencion_documento", default)]
    pub maintenance_document: Option<String>,
    #[serde(rename = "traslado_fecha", default)]
    pub relocation_date: Option<String>,
    #[serde(rename = "traslado_documento", default)]
    pub relocation_document: Option<String>,
    #[serde(rename = "cese_fecha", default)]
    pub closure_date: Option<String>,
    #[serde(rename = "cese_documento", default)]
    pub closure_document: Option<String>,
    #[serde(rename = "retiro_fecha", default)]
    pub removal_date: Option<String>,
    #[serde(rename = "retiro_documento", default)]
    pub removal_document: Option<String>,

    #[serde(rename = "inventario_documento", default)]
    pub inventory_document: Option<String>,
}

impl ActivityRecord {
    pub fn stage_date(&self, stage: ActivityStage) -> Option<&str> {
        match stage {
            ActivityStage::Survey => self.survey_date.as_deref(),
            ActivityStage::Installation => self.installation_date.as_deref(),
            ActivityStage::Maintenance => self.maintenance_date.as_deref(),
            ActivityStage::Relocation => self.relocation_date.as_deref(),
            ActivityStage::Closure => self.closure_date.as_deref(),
            ActivityStage::Removal => self.removal_date.as_deref(),
        }
    }

    pub fn stage_document(&self, stage: ActivityStage) -> Option<&str> {
        let doc = match stage {
            ActivityStage::Survey => self.survey_document.as_deref(),
            ActivityStage::Installation => self.installation_document.as_deref(),
            ActivityStage::Maintenance => self.maintenance_document.as_deref(),
            ActivityStage::Relocation => self.relocation_document.as_deref(),
            ActivityStage::Closure => self.closure_document.as_deref(),
            ActivityStage::Removal => self.removal_document.as_deref(),
        };
        doc.filter(|d| !d.trim().is_empty())
    }

    pub fn inventory_document(&self) -> Option<&str> {
        self.inventory_document
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }

    /// Identificador de centro requerido para abrir el detalle (0 no es un centro válido)
    pub fn detail_center_id(&self) -> Option<i64> {
        self.center_id.filter(|id| *id != 0)
    }
}

/// Respuesta de `GET /api/actas/listar`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecordsResponse {
    #[serde(rename = "actividades", default)]
    pub activities: Vec<ActivityRecord>,
    #[serde(rename = "servicios_adicionales", default)]
    pub services: Vec<AdditionalService>,
}

/// Criterios del panel de filtros
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecordsFilter {
    pub client_id: String,
    pub center_id: String,
    pub date_from: String,
    pub date_to: String,
}

impl DocumentRecordsFilter {
    /// Pares `(parámetro, valor)` no vacíos, ya recortados
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("cliente_id", self.client_id.as_str()),
            ("id_centro", self.center_id.as_str()),
            ("fecha_inicio", self.date_from.as_str()),
            ("fecha_fin", self.date_to.as_str()),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.trim()))
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }

    /// Query string con `?` inicial, o cadena vacía si no hay criterios
    pub fn to_query_string(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }

    pub fn active_count(&self) -> usize {
        self.query_pairs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}
