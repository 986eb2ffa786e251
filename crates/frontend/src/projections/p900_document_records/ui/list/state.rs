//! Estado de la página "Registros de Documentos".
//!
//! Todo el estado vive en [`DocumentRecordsState`] y cambia solo a través de
//! [`reduce`]: cada acción del usuario o respuesta del backend es un [`Intent`],
//! y los efectos (llamadas HTTP, alertas, logs) salen como [`Command`] que
//! ejecuta el componente.

use crate::domain::a001_additional_service::ui::details::{
    resolve_company_id, DraftField, FormMode, ServiceForm,
};
use crate::shared::components::pagination_controls::DEFAULT_PAGE_SIZE;
use crate::shared::list_utils::{page_slice, sort_list, total_pages, SortState};
use contracts::domain::a001_additional_service::aggregate::{
    AdditionalService, AdditionalServiceSaveRequest, AdditionalServiceSaveResponse,
};
use contracts::domain::a002_company_reference::aggregate::CompanyReference;
use contracts::projections::p900_document_records::dto::{
    ActivityRecord, DocumentRecordsFilter, DocumentRecordsResponse,
};

pub const SAVE_ERROR_ALERT: &str = "Error al guardar el servicio";
pub const CREATED_ALERT: &str = "Servicio creado exitosamente";
pub const UPDATED_ALERT: &str = "Servicio actualizado exitosamente";
pub const MISSING_CENTER_ALERT: &str =
    "No se puede abrir el detalle porque faltan datos de la actividad.";
pub const DELETE_CONFIRM: &str = "¿Estás seguro de que quieres eliminar este servicio?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Client,
    Center,
    DateFrom,
    DateTo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    EditFilter(FilterField, String),
    ApplyFilters,
    ClearFilters,
    Refresh,

    OpenCreate,
    OpenEdit(AdditionalService),
    EditDraft(DraftField),
    /// Nombre del archivo elegido (o `None` si se quitó)
    AttachFile(Option<String>),
    SaveService,
    CancelForm,
    DeleteService { id: i64, confirmed: bool },

    OpenDetail(ActivityRecord),
    CloseDetail,

    SortActivities(String),
    SortServices(String),
    ActivitiesPage(usize),
    ServicesPage(usize),
    ActivitiesPageSize(usize),
    ServicesPageSize(usize),

    Loaded {
        token: u64,
        result: Result<DocumentRecordsResponse, String>,
    },
    CompaniesLoaded(Result<Vec<CompanyReference>, String>),
    ServiceSaved {
        token: u64,
        result: Result<AdditionalServiceSaveResponse, String>,
    },
    ServiceDeleted { id: i64, result: Result<(), String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load {
        token: u64,
        filters: DocumentRecordsFilter,
    },
    LoadCompanies,
    CreateService {
        token: u64,
        payload: AdditionalServiceSaveRequest,
    },
    UpdateService {
        token: u64,
        id: i64,
        payload: AdditionalServiceSaveRequest,
    },
    DeleteService(i64),
    Alert(String),
    LogError(String),
    LogWarn(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecordsState {
    pub filters: DocumentRecordsFilter,

    pub activities: Vec<ActivityRecord>,
    pub services: Vec<AdditionalService>,
    pub loading: bool,
    /// Token de la última carga pedida; respuestas con otro token se descartan
    pub load_token: u64,

    pub companies: Vec<CompanyReference>,
    pub form: ServiceForm,
    /// Último token de guardado emitido
    pub save_seq: u64,
    pub detail: Option<ActivityRecord>,

    pub activities_sort: SortState,
    pub services_sort: SortState,
    pub activities_page: usize,
    pub activities_page_size: usize,
    pub services_page: usize,
    pub services_page_size: usize,
}

impl Default for DocumentRecordsState {
    fn default() -> Self {
        Self {
            filters: DocumentRecordsFilter::default(),
            activities: Vec::new(),
            services: Vec::new(),
            loading: false,
            load_token: 0,
            companies: Vec::new(),
            form: ServiceForm::default(),
            save_seq: 0,
            detail: None,
            activities_sort: SortState::new("center_name", true),
            services_sort: SortState::new("id", true),
            activities_page: 0,
            activities_page_size: DEFAULT_PAGE_SIZE,
            services_page: 0,
            services_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DocumentRecordsState {
    /// Primera carga al montar la página: razones sociales y listado
    pub fn start(&mut self) -> Vec<Command> {
        vec![Command::LoadCompanies, self.begin_load()]
    }

    fn begin_load(&mut self) -> Command {
        self.load_token += 1;
        self.loading = true;
        Command::Load {
            token: self.load_token,
            filters: self.filters.clone(),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn sorted_activities(&self) -> Vec<ActivityRecord> {
        let mut rows = self.activities.clone();
        sort_list(&mut rows, &self.activities_sort.field, self.activities_sort.ascending);
        rows
    }

    pub fn sorted_services(&self) -> Vec<AdditionalService> {
        let mut rows = self.services.clone();
        sort_list(&mut rows, &self.services_sort.field, self.services_sort.ascending);
        rows
    }

    pub fn activities_page_rows(&self) -> Vec<ActivityRecord> {
        page_slice(
            &self.sorted_activities(),
            self.activities_page,
            self.activities_page_size,
        )
    }

    pub fn services_page_rows(&self) -> Vec<AdditionalService> {
        page_slice(
            &self.sorted_services(),
            self.services_page,
            self.services_page_size,
        )
    }

    pub fn activities_total_pages(&self) -> usize {
        total_pages(self.activities.len(), self.activities_page_size)
    }

    pub fn services_total_pages(&self) -> usize {
        total_pages(self.services.len(), self.services_page_size)
    }

    fn clamp_pages(&mut self) {
        self.activities_page = self
            .activities_page
            .min(self.activities_total_pages().saturating_sub(1));
        self.services_page = self
            .services_page
            .min(self.services_total_pages().saturating_sub(1));
    }
}

/// Aplica una intención al estado y devuelve los efectos a ejecutar
pub fn reduce(state: &mut DocumentRecordsState, intent: Intent) -> Vec<Command> {
    match intent {
        Intent::EditFilter(field, value) => {
            let target = match field {
                FilterField::Client => &mut state.filters.client_id,
                FilterField::Center => &mut state.filters.center_id,
                FilterField::DateFrom => &mut state.filters.date_from,
                FilterField::DateTo => &mut state.filters.date_to,
            };
            *target = value;
            vec![]
        }
        Intent::ApplyFilters => {
            state.activities_page = 0;
            state.services_page = 0;
            vec![state.begin_load()]
        }
        Intent::ClearFilters => {
            state.filters = DocumentRecordsFilter::default();
            vec![]
        }
        Intent::Refresh => vec![state.begin_load()],

        Intent::OpenCreate => {
            state.form.open_create();
            vec![]
        }
        Intent::OpenEdit(row) => {
            state.form.open_edit(row, &state.companies);
            vec![]
        }
        Intent::EditDraft(field) => {
            if state.form.is_open() {
                state.form.edit(field);
            }
            vec![]
        }
        Intent::AttachFile(name) => {
            if state.form.is_open() {
                state.form.attach(name);
            }
            vec![]
        }
        Intent::SaveService => {
            if !state.form.is_open() || state.form.is_saving() {
                return vec![];
            }
            if !state.form.validate() {
                return vec![];
            }
            state.save_seq += 1;
            let token = state.save_seq;
            state.form.save_token = Some(token);
            let payload = state.form.payload(&state.companies);
            match &state.form.mode {
                FormMode::Editing(row) => vec![Command::UpdateService {
                    token,
                    id: row.id,
                    payload,
                }],
                _ => vec![Command::CreateService { token, payload }],
            }
        }
        Intent::CancelForm => {
            state.form.close();
            vec![]
        }
        Intent::DeleteService { id, confirmed } => {
            if confirmed {
                vec![Command::DeleteService(id)]
            } else {
                vec![]
            }
        }

        Intent::OpenDetail(row) => {
            if row.detail_center_id().is_none() {
                return vec![
                    Command::LogWarn(format!(
                        "Actividad sin id_centro: {}",
                        row.center_name.as_deref().unwrap_or("(sin nombre)")
                    )),
                    Command::Alert(MISSING_CENTER_ALERT.to_string()),
                ];
            }
            state.detail = Some(row);
            vec![]
        }
        Intent::CloseDetail => {
            state.detail = None;
            vec![]
        }

        Intent::SortActivities(field) => {
            state.activities_sort.toggle(&field);
            state.activities_page = 0;
            vec![]
        }
        Intent::SortServices(field) => {
            state.services_sort.toggle(&field);
            state.services_page = 0;
            vec![]
        }
        Intent::ActivitiesPage(page) => {
            state.activities_page = page.min(state.activities_total_pages().saturating_sub(1));
            vec![]
        }
        Intent::ServicesPage(page) => {
            state.services_page = page.min(state.services_total_pages().saturating_sub(1));
            vec![]
        }
        Intent::ActivitiesPageSize(size) => {
            state.activities_page_size = size.max(1);
            state.activities_page = 0;
            vec![]
        }
        Intent::ServicesPageSize(size) => {
            state.services_page_size = size.max(1);
            state.services_page = 0;
            vec![]
        }

        Intent::Loaded { token, result } => {
            if token != state.load_token {
                return vec![];
            }
            state.loading = false;
            match result {
                Ok(data) => {
                    state.activities = data.activities;
                    state.services = data.services;
                    state.clamp_pages();
                    vec![]
                }
                Err(e) => vec![Command::LogError(format!("Error al cargar los datos: {}", e))],
            }
        }
        Intent::CompaniesLoaded(result) => match result {
            Ok(companies) => {
                state.companies = companies;
                // Una edición abierta antes de tener la lista todavía no tiene razón social
                if let FormMode::Editing(row) = &state.form.mode {
                    if state.form.draft.company_id.is_empty() {
                        if let Some(id) = resolve_company_id(row, &state.companies) {
                            state.form.draft.company_id = id.to_string();
                        }
                    }
                }
                vec![]
            }
            Err(e) => vec![Command::LogError(format!(
                "Error al cargar las razones sociales: {}",
                e
            ))],
        },
        // El formulario se cerró o se reabrió mientras se guardaba: el borrador
        // actual no es el de esta respuesta y no se toca
        Intent::ServiceSaved { token, result } if state.form.save_token != Some(token) => {
            match result {
                Ok(_) => vec![state.begin_load()],
                Err(e) => vec![
                    Command::LogError(format!("{}: {}", SAVE_ERROR_ALERT, e)),
                    Command::Alert(SAVE_ERROR_ALERT.to_string()),
                ],
            }
        }
        Intent::ServiceSaved { result, .. } => match result {
            Ok(_) => {
                let message = match state.form.mode {
                    FormMode::Editing(_) => UPDATED_ALERT,
                    _ => CREATED_ALERT,
                };
                state.form.close();
                vec![state.begin_load(), Command::Alert(message.to_string())]
            }
            Err(e) => {
                state.form.save_token = None;
                vec![
                    Command::LogError(format!("{}: {}", SAVE_ERROR_ALERT, e)),
                    Command::Alert(SAVE_ERROR_ALERT.to_string()),
                ]
            }
        },
        Intent::ServiceDeleted { id, result } => {
            let mut commands = Vec::with_capacity(2);
            if let Err(e) = result {
                commands.push(Command::LogWarn(format!(
                    "Error al eliminar el servicio {}: {}",
                    id, e
                )));
            }
            commands.push(state.begin_load());
            commands
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: i64, company: &str, date: Option<&str>) -> AdditionalService {
        AdditionalService {
            id,
            client_name: Some("Salmones Austral".into()),
            company_name: Some(company.into()),
            installation_date: date.map(str::to_string),
            monitoring_start: None,
            document_url: None,
            notes: Some(format!("nota {}", id)),
            company_id: None,
        }
    }

    fn activity(name: &str, center_id: Option<i64>) -> ActivityRecord {
        ActivityRecord {
            center_id,
            center_name: Some(name.into()),
            ..Default::default()
        }
    }

    fn companies() -> Vec<CompanyReference> {
        vec![CompanyReference {
            id: 3,
            client_id: Some(1),
            name: "Austral SpA".into(),
            client_name: Some("Salmones Austral".into()),
        }]
    }

    fn response(activities: Vec<ActivityRecord>, services: Vec<AdditionalService>) -> DocumentRecordsResponse {
        DocumentRecordsResponse {
            activities,
            services,
        }
    }

    fn load_token(commands: &[Command]) -> u64 {
        commands
            .iter()
            .find_map(|c| match c {
                Command::Load { token, .. } => Some(*token),
                _ => None,
            })
            .expect("load command")
    }

    fn save_token(commands: &[Command]) -> u64 {
        commands
            .iter()
            .find_map(|c| match c {
                Command::CreateService { token, .. } | Command::UpdateService { token, .. } => Some(*token),
                _ => None,
            })
            .expect("save command")
    }

    fn has_network_call(commands: &[Command]) -> bool {
        commands.iter().any(|c| {
            matches!(
                c,
                Command::Load { .. }
                    | Command::LoadCompanies
                    | Command::CreateService { .. }
                    | Command::UpdateService { .. }
                    | Command::DeleteService(_)
            )
        })
    }

    fn loaded_state(services: Vec<AdditionalService>) -> DocumentRecordsState {
        let mut state = DocumentRecordsState::default();
        let commands = state.start();
        let token = load_token(&commands);
        reduce(&mut state, Intent::CompaniesLoaded(Ok(companies())));
        reduce(
            &mut state,
            Intent::Loaded {
                token,
                result: Ok(response(vec![activity("Centro A", Some(1))], services)),
            },
        );
        state
    }

    #[test]
    fn test_start_loads_companies_and_records() {
        let mut state = DocumentRecordsState::default();
        let commands = state.start();
        assert_eq!(
            commands,
            vec![
                Command::LoadCompanies,
                Command::Load {
                    token: 1,
                    filters: DocumentRecordsFilter::default()
                }
            ]
        );
        assert!(state.loading);
    }

    #[test]
    fn test_apply_empty_filters_matches_initial_load() {
        let mut state = DocumentRecordsState::default();
        let initial = state.start();
        let Command::Load { filters: initial_filters, .. } = &initial[1] else {
            panic!("expected load");
        };
        let initial_filters = initial_filters.clone();
        let data = response(vec![activity("Centro A", Some(1))], vec![service(1, "Austral SpA", None)]);
        reduce(&mut state, Intent::Loaded { token: 1, result: Ok(data.clone()) });
        let first = (state.activities.clone(), state.services.clone());

        let commands = reduce(&mut state, Intent::ApplyFilters);
        let Command::Load { token, filters } = &commands[0] else {
            panic!("expected load");
        };
        assert_eq!(filters, &initial_filters);
        assert_eq!(filters.to_query_string(), "");

        reduce(&mut state, Intent::Loaded { token: *token, result: Ok(data) });
        assert_eq!((state.activities.clone(), state.services.clone()), first);
    }

    #[test]
    fn test_filter_edits_are_last_write_wins_and_sent_on_apply() {
        let mut state = DocumentRecordsState::default();
        reduce(&mut state, Intent::EditFilter(FilterField::Client, "Aus".into()));
        reduce(&mut state, Intent::EditFilter(FilterField::Client, "Austral".into()));
        reduce(&mut state, Intent::EditFilter(FilterField::DateTo, "2024-12-31".into()));
        assert_eq!(state.active_filters_count(), 2);

        let commands = reduce(&mut state, Intent::ApplyFilters);
        match &commands[0] {
            Command::Load { filters, .. } => {
                assert_eq!(filters.client_id, "Austral");
                assert_eq!(filters.date_to, "2024-12-31");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_clear_filters_does_not_reload() {
        let mut state = DocumentRecordsState::default();
        reduce(&mut state, Intent::EditFilter(FilterField::Center, "101".into()));
        let commands = reduce(&mut state, Intent::ClearFilters);
        assert!(commands.is_empty());
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_load_failure_keeps_previous_data() {
        let mut state = loaded_state(vec![service(1, "Austral SpA", None)]);
        let token = load_token(&reduce(&mut state, Intent::Refresh));
        assert!(state.loading);

        let commands = reduce(
            &mut state,
            Intent::Loaded { token, result: Err("HTTP 500".into()) },
        );
        assert!(!state.loading);
        assert_eq!(state.services.len(), 1);
        assert_eq!(state.activities.len(), 1);
        assert!(matches!(&commands[..], [Command::LogError(msg)] if msg.contains("HTTP 500")));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = DocumentRecordsState::default();
        let first = load_token(&reduce(&mut state, Intent::ApplyFilters));
        let second = load_token(&reduce(&mut state, Intent::ApplyFilters));
        assert!(second > first);

        reduce(
            &mut state,
            Intent::Loaded {
                token: second,
                result: Ok(response(vec![activity("Nuevo", Some(2))], vec![])),
            },
        );
        reduce(
            &mut state,
            Intent::Loaded {
                token: first,
                result: Ok(response(vec![activity("Viejo", Some(1))], vec![])),
            },
        );
        assert_eq!(state.activities[0].center_name.as_deref(), Some("Nuevo"));
        assert!(!state.loading);
    }

    #[test]
    fn test_loading_stays_set_until_latest_completes() {
        let mut state = DocumentRecordsState::default();
        let first = load_token(&reduce(&mut state, Intent::Refresh));
        let _second = load_token(&reduce(&mut state, Intent::Refresh));
        reduce(&mut state, Intent::Loaded { token: first, result: Ok(response(vec![], vec![])) });
        assert!(state.loading);
    }

    #[test]
    fn test_create_without_date_issues_no_call() {
        let mut state = loaded_state(vec![]);
        reduce(&mut state, Intent::OpenCreate);
        reduce(&mut state, Intent::EditDraft(DraftField::Company("3".into())));

        let commands = reduce(&mut state, Intent::SaveService);
        assert!(!has_network_call(&commands));
        assert!(commands.is_empty());
        assert!(state.form.date_error);
        assert!(state.form.is_open());
        assert!(!state.form.is_saving());

        reduce(&mut state, Intent::EditDraft(DraftField::InstallationDate("2024-02-01".into())));
        assert!(!state.form.date_error);
    }

    #[test]
    fn test_create_success_reloads_and_closes() {
        let mut state = loaded_state(vec![]);
        reduce(&mut state, Intent::OpenCreate);
        reduce(&mut state, Intent::EditDraft(DraftField::Company("3".into())));
        reduce(&mut state, Intent::EditDraft(DraftField::InstallationDate("2024-02-01".into())));
        reduce(&mut state, Intent::AttachFile(Some("acta.pdf".into())));

        let commands = reduce(&mut state, Intent::SaveService);
        assert_eq!(
            commands,
            vec![Command::CreateService {
                token: 1,
                payload: AdditionalServiceSaveRequest {
                    company_id: Some(3),
                    installation_date: Some("2024-02-01".into()),
                    notes: Some(String::new()),
                    attachment: Some("acta.pdf".into()),
                },
            }]
        );
        assert!(state.form.is_saving());
        assert!(reduce(&mut state, Intent::SaveService).is_empty());

        let commands = reduce(
            &mut state,
            Intent::ServiceSaved {
                token: 1,
                result: Ok(AdditionalServiceSaveResponse {
                    message: Some("ok".into()),
                    id: Some(9),
                }),
            },
        );
        assert!(matches!(commands[0], Command::Load { .. }));
        assert_eq!(commands[1], Command::Alert(CREATED_ALERT.into()));
        assert!(!state.form.is_open());
        assert_eq!(state.form, ServiceForm::default());
    }

    #[test]
    fn test_save_failure_keeps_modal_open() {
        let mut state = loaded_state(vec![service(7, "Austral SpA", Some("2024-01-10"))]);
        let row = state.services[0].clone();
        reduce(&mut state, Intent::OpenEdit(row));
        let token = save_token(&reduce(&mut state, Intent::SaveService));

        let commands = reduce(
            &mut state,
            Intent::ServiceSaved { token, result: Err("HTTP 404: Razón social no encontrada".into()) },
        );
        assert!(state.form.is_open());
        assert!(!state.form.is_saving());
        assert!(commands.contains(&Command::Alert(SAVE_ERROR_ALERT.into())));
        assert!(commands.iter().any(|c| matches!(c, Command::LogError(m) if m.contains("Razón social no encontrada"))));
        assert!(!has_network_call(&commands));
    }

    #[test]
    fn test_unchanged_edit_round_trips() {
        let original = service(7, "Austral SpA", Some("Wed, 10 Jan 2024 00:00:00 GMT"));
        let mut state = loaded_state(vec![original.clone()]);
        reduce(&mut state, Intent::OpenEdit(original.clone()));

        let commands = reduce(&mut state, Intent::SaveService);
        let [Command::UpdateService { token, id, payload }] = &commands[..] else {
            panic!("expected update, got {:?}", commands);
        };
        assert_eq!(*id, 7);
        assert_eq!(payload.company_id, Some(3));
        assert_eq!(payload.installation_date.as_deref(), Some("2024-01-10"));
        assert_eq!(payload.notes, original.notes);
        assert_eq!(payload.attachment, None);

        let commands = reduce(
            &mut state,
            Intent::ServiceSaved { token: *token, result: Ok(AdditionalServiceSaveResponse::default()) },
        );
        assert_eq!(commands[1], Command::Alert(UPDATED_ALERT.into()));
        let token = load_token(&commands);
        reduce(
            &mut state,
            Intent::Loaded { token, result: Ok(response(vec![], vec![original.clone()])) },
        );
        assert_eq!(state.services, vec![original]);
    }

    #[test]
    fn test_late_save_does_not_touch_other_draft() {
        let mut state = loaded_state(vec![
            service(1, "Austral SpA", Some("2024-01-10")),
            service(2, "Austral SpA", Some("2024-03-05")),
        ]);
        let (first, second) = (state.services[0].clone(), state.services[1].clone());
        reduce(&mut state, Intent::OpenEdit(first));
        let token = save_token(&reduce(&mut state, Intent::SaveService));
        reduce(&mut state, Intent::CancelForm);
        reduce(&mut state, Intent::OpenEdit(second));
        reduce(&mut state, Intent::EditDraft(DraftField::Notes("escribiendo".into())));

        let commands = reduce(
            &mut state,
            Intent::ServiceSaved { token, result: Ok(AdditionalServiceSaveResponse::default()) },
        );
        assert!(matches!(&commands[..], [Command::Load { .. }]));
        assert_eq!(state.form.editing().map(|r| r.id), Some(2));
        assert_eq!(state.form.draft.notes, "escribiendo");

        // una respuesta repetida tampoco cierra el formulario
        let commands = reduce(
            &mut state,
            Intent::ServiceSaved { token, result: Err("HTTP 500".into()) },
        );
        assert!(state.form.is_open());
        assert_eq!(state.form.draft.notes, "escribiendo");
        assert!(commands.contains(&Command::Alert(SAVE_ERROR_ALERT.into())));
    }

    #[test]
    fn test_duplicate_save_completion_after_close_only_reloads() {
        let mut state = loaded_state(vec![]);
        reduce(&mut state, Intent::OpenCreate);
        reduce(&mut state, Intent::EditDraft(DraftField::InstallationDate("2024-02-01".into())));
        let token = save_token(&reduce(&mut state, Intent::SaveService));
        let done = Intent::ServiceSaved { token, result: Ok(AdditionalServiceSaveResponse::default()) };

        let commands = reduce(&mut state, done.clone());
        assert_eq!(commands[1], Command::Alert(CREATED_ALERT.into()));

        reduce(&mut state, Intent::OpenCreate);
        let commands = reduce(&mut state, done);
        assert!(matches!(&commands[..], [Command::Load { .. }]));
        assert!(state.form.is_creating());
    }

    #[test]
    fn test_filter_and_draft_edits_leave_table_rows_unchanged() {
        let mut state = loaded_state(vec![service(1, "Austral SpA", None), service(2, "Austral SpA", None)]);
        let activities = state.activities_page_rows();
        let services = state.services_page_rows();

        reduce(&mut state, Intent::EditFilter(FilterField::Client, "Aus".into()));
        let row = state.services[0].clone();
        reduce(&mut state, Intent::OpenEdit(row));
        reduce(&mut state, Intent::EditDraft(DraftField::Notes("otra".into())));

        assert_eq!(state.activities_page_rows(), activities);
        assert_eq!(state.services_page_rows(), services);
    }

    #[test]
    fn test_open_edit_replaces_prior_draft() {
        let mut state = loaded_state(vec![
            service(1, "Austral SpA", Some("2024-01-10")),
            service(2, "Austral SpA", Some("2024-03-05")),
        ]);
        let (first, second) = (state.services[0].clone(), state.services[1].clone());
        reduce(&mut state, Intent::OpenEdit(first));
        reduce(&mut state, Intent::EditDraft(DraftField::Notes("cambio".into())));
        reduce(&mut state, Intent::AttachFile(Some("acta.pdf".into())));
        reduce(&mut state, Intent::OpenEdit(second));

        assert_eq!(state.form.editing().map(|r| r.id), Some(2));
        assert_eq!(state.form.draft.notes, "nota 2");
        assert_eq!(state.form.draft.installation_date, "2024-03-05");
        assert_eq!(state.form.draft.attachment, None);
    }

    #[test]
    fn test_edit_opened_before_companies_resolves_later() {
        let mut state = DocumentRecordsState::default();
        reduce(&mut state, Intent::OpenEdit(service(1, "Austral SpA", None)));
        assert_eq!(state.form.draft.company_id, "");
        reduce(&mut state, Intent::CompaniesLoaded(Ok(companies())));
        assert_eq!(state.form.draft.company_id, "3");
    }

    #[test]
    fn test_cancel_closes_form() {
        let mut state = loaded_state(vec![]);
        reduce(&mut state, Intent::OpenCreate);
        reduce(&mut state, Intent::SaveService);
        assert!(state.form.date_error);
        reduce(&mut state, Intent::CancelForm);
        assert_eq!(state.form, ServiceForm::default());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = loaded_state(vec![service(1, "Austral SpA", None)]);
        assert!(reduce(&mut state, Intent::DeleteService { id: 1, confirmed: false }).is_empty());
        assert_eq!(
            reduce(&mut state, Intent::DeleteService { id: 1, confirmed: true }),
            vec![Command::DeleteService(1)]
        );
    }

    #[test]
    fn test_delete_removes_exactly_one_row_after_reload() {
        let rows = vec![
            service(1, "Austral SpA", None),
            service(2, "Austral SpA", None),
            service(3, "Austral SpA", None),
        ];
        let mut state = loaded_state(rows.clone());
        reduce(&mut state, Intent::DeleteService { id: 2, confirmed: true });

        let commands = reduce(&mut state, Intent::ServiceDeleted { id: 2, result: Ok(()) });
        let token = load_token(&commands);
        let remaining: Vec<_> = rows.into_iter().filter(|s| s.id != 2).collect();
        reduce(&mut state, Intent::Loaded { token, result: Ok(response(vec![], remaining)) });

        assert_eq!(state.services.len(), 2);
        assert!(state.services.iter().all(|s| s.id != 2));
    }

    #[test]
    fn test_delete_failure_still_reloads() {
        let mut state = loaded_state(vec![service(1, "Austral SpA", None)]);
        let commands = reduce(
            &mut state,
            Intent::ServiceDeleted { id: 1, result: Err("HTTP 404".into()) },
        );
        assert!(matches!(commands[0], Command::LogWarn(_)));
        assert!(matches!(commands[1], Command::Load { .. }));
    }

    #[test]
    fn test_detail_without_center_never_opens() {
        let mut state = loaded_state(vec![]);
        for row in [activity("Sin id", None), activity("Cero", Some(0))] {
            let before = state.clone();
            let commands = reduce(&mut state, Intent::OpenDetail(row));
            assert!(state.detail.is_none());
            assert_eq!(state, before);
            assert!(commands.contains(&Command::Alert(MISSING_CENTER_ALERT.into())));
        }
    }

    #[test]
    fn test_detail_open_and_close() {
        let mut state = loaded_state(vec![]);
        let row = activity("Centro A", Some(15));
        assert!(reduce(&mut state, Intent::OpenDetail(row.clone())).is_empty());
        assert_eq!(state.detail, Some(row));
        reduce(&mut state, Intent::CloseDetail);
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_sort_and_pagination() {
        let services: Vec<_> = (1..=30).map(|id| service(id, "Austral SpA", None)).collect();
        let mut state = loaded_state(services);
        assert_eq!(state.services_total_pages(), 2);
        assert_eq!(state.services_page_rows().len(), 25);

        reduce(&mut state, Intent::ServicesPage(5));
        assert_eq!(state.services_page, 1);
        assert_eq!(state.services_page_rows().len(), 5);

        reduce(&mut state, Intent::SortServices("id".into()));
        assert!(!state.services_sort.ascending);
        assert_eq!(state.services_page, 0);
        assert_eq!(state.services_page_rows()[0].id, 30);

        reduce(&mut state, Intent::ServicesPageSize(10));
        assert_eq!(state.services_total_pages(), 3);
    }

    #[test]
    fn test_apply_filters_resets_pages() {
        let services: Vec<_> = (1..=30).map(|id| service(id, "Austral SpA", None)).collect();
        let mut state = loaded_state(services);
        reduce(&mut state, Intent::ServicesPage(1));
        reduce(&mut state, Intent::ApplyFilters);
        assert_eq!(state.services_page, 0);
    }
}
