use contracts::domain::a001_additional_service::aggregate::{
    AdditionalService, AdditionalServiceSaveRequest,
};
use contracts::domain::a002_company_reference::aggregate::{find_company, CompanyReference};
use contracts::shared::wire_date::to_wire_date;

/// Buffer de edición del formulario (valores tal como están en los inputs)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceFormDraft {
    /// Id de la razón social como texto; vacío = sin seleccionar
    pub company_id: String,
    /// `YYYY-MM-DD` (valor de `<input type="date">`)
    pub installation_date: String,
    pub notes: String,
    /// Nombre del archivo nuevo; `None` conserva el documento guardado
    pub attachment: Option<String>,
}

/// Cambio de un campo del formulario
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Company(String),
    InstallationDate(String),
    Notes(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    Editing(AdditionalService),
}

/// Estado del modal de servicio adicional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceForm {
    pub mode: FormMode,
    pub draft: ServiceFormDraft,
    /// Falta la fecha de instalación al crear
    pub date_error: bool,
    /// Guardado en curso de este formulario; la respuesta debe traer el mismo token
    pub save_token: Option<u64>,
}

impl ServiceForm {
    pub fn is_open(&self) -> bool {
        !matches!(self.mode, FormMode::Closed)
    }

    pub fn is_saving(&self) -> bool {
        self.save_token.is_some()
    }

    pub fn is_creating(&self) -> bool {
        matches!(self.mode, FormMode::Creating)
    }

    pub fn editing(&self) -> Option<&AdditionalService> {
        match &self.mode {
            FormMode::Editing(row) => Some(row),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Editing(_) => "Editar Servicio",
            _ => "Crear Servicio",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Editing(_) => "Actualizar Servicio",
            _ => "Guardar Servicio",
        }
    }

    /// Nuevo servicio: borrador vacío
    pub fn open_create(&mut self) {
        *self = ServiceForm {
            mode: FormMode::Creating,
            ..Default::default()
        };
    }

    /// Edición: el borrador se llena con la fila y se descarta cualquier archivo elegido antes
    pub fn open_edit(&mut self, row: AdditionalService, companies: &[CompanyReference]) {
        let draft = ServiceFormDraft::from_existing(&row, companies);
        *self = ServiceForm {
            mode: FormMode::Editing(row),
            draft,
            date_error: false,
            save_token: None,
        };
    }

    pub fn close(&mut self) {
        *self = ServiceForm::default();
    }

    pub fn edit(&mut self, field: DraftField) {
        match field {
            DraftField::Company(value) => self.draft.company_id = value,
            DraftField::InstallationDate(value) => {
                if !value.trim().is_empty() {
                    self.date_error = false;
                }
                self.draft.installation_date = value;
            }
            DraftField::Notes(value) => self.draft.notes = value,
        }
    }

    pub fn attach(&mut self, file_name: Option<String>) {
        self.draft.attachment = file_name.filter(|n| !n.is_empty());
    }

    /// Valida antes de guardar. Al crear, la fecha es obligatoria;
    /// si falta, deja marcado el error y devuelve `false`.
    pub fn validate(&mut self) -> bool {
        if self.is_creating() && self.draft.installation_date.trim().is_empty() {
            self.date_error = true;
            return false;
        }
        true
    }

    /// Cuerpo a enviar: lo no completado en el borrador se toma del registro original
    pub fn payload(&self, companies: &[CompanyReference]) -> AdditionalServiceSaveRequest {
        build_payload(&self.draft, self.editing(), companies)
    }
}

impl ServiceFormDraft {
    pub fn from_existing(row: &AdditionalService, companies: &[CompanyReference]) -> Self {
        Self {
            company_id: resolve_company_id(row, companies)
                .map(|id| id.to_string())
                .unwrap_or_default(),
            installation_date: row
                .installation_date
                .as_deref()
                .and_then(to_wire_date)
                .unwrap_or_default(),
            notes: row.notes.clone().unwrap_or_default(),
            attachment: None,
        }
    }
}

/// Id de razón social de una fila; el listado a veces trae solo los nombres.
///
/// Si la razón social y el cliente no identifican una única entrada se deja
/// `None` y el campo no se envía, así el backend conserva la que tiene.
pub fn resolve_company_id(row: &AdditionalService, companies: &[CompanyReference]) -> Option<i64> {
    row.company_id.or_else(|| {
        let name = row.company_name.as_deref()?;
        find_company(companies, name, row.client_name.as_deref()).map(|c| c.id)
    })
}

pub fn build_payload(
    draft: &ServiceFormDraft,
    original: Option<&AdditionalService>,
    companies: &[CompanyReference],
) -> AdditionalServiceSaveRequest {
    let company_id = draft
        .company_id
        .trim()
        .parse::<i64>()
        .ok()
        .or_else(|| original.and_then(|row| resolve_company_id(row, companies)));

    let installation_date = Some(draft.installation_date.trim())
        .filter(|d| !d.is_empty())
        .map(|d| to_wire_date(d).unwrap_or_else(|| d.to_string()))
        .or_else(|| {
            original
                .and_then(|row| row.installation_date.as_deref())
                .and_then(to_wire_date)
        });

    AdditionalServiceSaveRequest {
        company_id,
        installation_date,
        notes: Some(draft.notes.clone()),
        attachment: draft.attachment.clone(),
    }
}
