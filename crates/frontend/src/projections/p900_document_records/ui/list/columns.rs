//! Proyección de filas a celdas de las dos tablas.

use crate::shared::date_utils::format_record_date;
use crate::shared::list_utils::{compare_text, Sortable};
use contracts::domain::a001_additional_service::aggregate::AdditionalService;
use contracts::projections::p900_document_records::dto::{ActivityRecord, ActivityStage};
use contracts::shared::wire_date::parse_wire_date;
use leptos::prelude::*;
use std::cmp::Ordering;

pub const DOCUMENT_LINK_TEXT: &str = "Ver Documento";
pub const MISSING_DOCUMENT_TEXT: &str = "No Disponible";

/// Cómo se muestra un documento ausente en cada columna
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDocument {
    /// Texto rojo en negrita
    Marker,
    PlainText,
}

impl MissingDocument {
    /// Traslado mantiene el texto plano; las demás etapas usan la marca
    pub fn for_stage(stage: ActivityStage) -> Self {
        match stage {
            ActivityStage::Relocation => MissingDocument::PlainText,
            _ => MissingDocument::Marker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentCell {
    Link(String),
    Missing(MissingDocument),
}

impl DocumentCell {
    pub fn from_url(url: Option<&str>, missing: MissingDocument) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => DocumentCell::Link(url.to_string()),
            None => DocumentCell::Missing(missing),
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            DocumentCell::Link(_) => DOCUMENT_LINK_TEXT,
            DocumentCell::Missing(_) => MISSING_DOCUMENT_TEXT,
        }
    }

    pub fn into_view(self) -> AnyView {
        match self {
            DocumentCell::Link(url) => view! {
                <a href=url target="_blank" rel="noopener noreferrer">{DOCUMENT_LINK_TEXT}</a>
            }
            .into_any(),
            DocumentCell::Missing(MissingDocument::Marker) => view! {
                <span class="document-missing" style="color: red; font-weight: bold;">
                    {MISSING_DOCUMENT_TEXT}
                </span>
            }
            .into_any(),
            DocumentCell::Missing(MissingDocument::PlainText) => {
                view! { <span>{MISSING_DOCUMENT_TEXT}</span> }.into_any()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageCells {
    pub stage: ActivityStage,
    pub date: String,
    pub document: DocumentCell,
}

/// Fila de la tabla de actividades, lista para renderizar
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRowView {
    pub center_name: String,
    pub area: String,
    pub location: String,
    pub status: String,
    pub stages: Vec<StageCells>,
    pub inventory: DocumentCell,
}

impl From<&ActivityRecord> for ActivityRowView {
    fn from(r: &ActivityRecord) -> Self {
        Self {
            center_name: r.center_name.clone().unwrap_or_default(),
            area: r.area.clone().unwrap_or_default(),
            location: r.location.clone().unwrap_or_default(),
            status: r.status.clone().unwrap_or_default(),
            stages: ActivityStage::ALL
                .iter()
                .map(|&stage| StageCells {
                    stage,
                    date: format_record_date(r.stage_date(stage)),
                    document: DocumentCell::from_url(
                        r.stage_document(stage),
                        MissingDocument::for_stage(stage),
                    ),
                })
                .collect(),
            inventory: DocumentCell::from_url(r.inventory_document(), MissingDocument::Marker),
        }
    }
}

/// Fila de la tabla de servicios adicionales
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRowView {
    pub id: i64,
    pub client_name: String,
    pub company_name: String,
    pub installation_date: String,
    pub monitoring_start: String,
    pub document: DocumentCell,
    pub notes: String,
}

impl From<&AdditionalService> for ServiceRowView {
    fn from(s: &AdditionalService) -> Self {
        Self {
            id: s.id,
            client_name: s.client_name.clone().unwrap_or_default(),
            company_name: s.company_name.clone().unwrap_or_default(),
            installation_date: format_record_date(s.installation_date.as_deref()),
            monitoring_start: format_record_date(s.monitoring_start.as_deref()),
            document: DocumentCell::from_url(s.document_url.as_deref(), MissingDocument::PlainText),
            notes: s.notes.clone().unwrap_or_default(),
        }
    }
}

/// Fechas sin valor quedan al final en orden ascendente
fn compare_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(parse_wire_date), b.and_then(parse_wire_date)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Campo de orden de la columna de fecha de una etapa: `<prefijo>_fecha`
pub fn stage_sort_field(stage: ActivityStage) -> &'static str {
    match stage {
        ActivityStage::Survey => "levantamiento_fecha",
        ActivityStage::Installation => "instalacion_fecha",
        ActivityStage::Maintenance => "mantencion_fecha",
        ActivityStage::Relocation => "traslado_fecha",
        ActivityStage::Closure => "cese_fecha",
        ActivityStage::Removal => "retiro_fecha",
    }
}

impl Sortable for ActivityRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "center_name" => compare_text(self.center_name.as_deref(), other.center_name.as_deref()),
            "area" => compare_text(self.area.as_deref(), other.area.as_deref()),
            "location" => compare_text(self.location.as_deref(), other.location.as_deref()),
            "status" => compare_text(self.status.as_deref(), other.status.as_deref()),
            _ => match ActivityStage::ALL
                .iter()
                .find(|stage| stage_sort_field(**stage) == field)
            {
                Some(&stage) => compare_dates(self.stage_date(stage), other.stage_date(stage)),
                None => Ordering::Equal,
            },
        }
    }
}

impl Sortable for AdditionalService {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "client_name" => compare_text(self.client_name.as_deref(), other.client_name.as_deref()),
            "company_name" => {
                compare_text(self.company_name.as_deref(), other.company_name.as_deref())
            }
            "installation_date" => compare_dates(
                self.installation_date.as_deref(),
                other.installation_date.as_deref(),
            ),
            "monitoring_start" => compare_dates(
                self.monitoring_start.as_deref(),
                other.monitoring_start.as_deref(),
            ),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::sort_list;

    fn scenario_row() -> ActivityRecord {
        ActivityRecord {
            center_id: Some(15),
            center_name: Some("Centro A".into()),
            survey_date: Some("2024-01-10".into()),
            survey_document: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_row_cells() {
        let row = ActivityRowView::from(&scenario_row());
        assert_eq!(row.center_name, "Centro A");

        let survey = &row.stages[0];
        assert_eq!(survey.stage, ActivityStage::Survey);
        assert_eq!(survey.date, "miércoles 10/01/2024");
        assert_eq!(
            survey.document,
            DocumentCell::Missing(MissingDocument::Marker)
        );
        assert_eq!(survey.document.text(), "No Disponible");
    }

    #[test]
    fn test_missing_document_rendering_per_column() {
        let row = ActivityRowView::from(&ActivityRecord::default());
        for cells in &row.stages {
            let expected = if cells.stage == ActivityStage::Relocation {
                MissingDocument::PlainText
            } else {
                MissingDocument::Marker
            };
            assert_eq!(cells.document, DocumentCell::Missing(expected));
            assert_eq!(cells.date, "");
        }
        assert_eq!(row.inventory, DocumentCell::Missing(MissingDocument::Marker));

        let service = ServiceRowView::from(&AdditionalService {
            id: 1,
            client_name: None,
            company_name: None,
            installation_date: None,
            monitoring_start: None,
            document_url: None,
            notes: None,
            company_id: None,
        });
        assert_eq!(
            service.document,
            DocumentCell::Missing(MissingDocument::PlainText)
        );
    }

    #[test]
    fn test_document_link() {
        let cell = DocumentCell::from_url(Some(" http://x/doc/1 "), MissingDocument::Marker);
        assert_eq!(cell, DocumentCell::Link("http://x/doc/1".into()));
        assert_eq!(cell.text(), "Ver Documento");
    }

    #[test]
    fn test_stage_sort_field_matches_wire_name() {
        for stage in ActivityStage::ALL {
            assert_eq!(stage_sort_field(stage), format!("{}_fecha", stage.key()));
        }
    }

    #[test]
    fn test_sort_activities_by_stage_date() {
        let mut rows = vec![
            ActivityRecord {
                center_name: Some("B".into()),
                installation_date: Some("Fri, 02 Feb 2024 00:00:00 GMT".into()),
                ..Default::default()
            },
            ActivityRecord {
                center_name: Some("A".into()),
                installation_date: None,
                ..Default::default()
            },
            ActivityRecord {
                center_name: Some("C".into()),
                installation_date: Some("2024-01-15".into()),
                ..Default::default()
            },
        ];
        sort_list(&mut rows, stage_sort_field(ActivityStage::Installation), true);
        let names: Vec<_> = rows.iter().filter_map(|r| r.center_name.as_deref()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);

        sort_list(&mut rows, "center_name", true);
        let names: Vec<_> = rows.iter().filter_map(|r| r.center_name.as_deref()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
