pub mod columns;
pub mod state;

use self::columns::{stage_sort_field, ActivityRowView, ServiceRowView};
use self::state::{reduce, Command, DocumentRecordsState, FilterField, Intent, DELETE_CONFIRM};
use crate::domain::a001_additional_service::api::{create_service, delete_service, update_service};
use crate::domain::a001_additional_service::ui::details::ServiceFormModal;
use crate::domain::a002_company_reference::api::fetch_all_companies;
use crate::domain::a003_center_activity::ui::details::ActivityDetails;
use crate::projections::p900_document_records::api::load_document_records;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::CountBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::projections::p900_document_records::dto::ActivityStage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Columnas de la tabla de actividades: 4 de texto, 2 por etapa, inventario y acciones
const ACTIVITY_COLUMNS: usize = 4 + ActivityStage::ALL.len() * 2 + 2;
const SERVICE_COLUMNS: usize = 8;

/// Despacha intenciones al reductor y ejecuta los efectos que devuelve.
///
/// El archivo elegido en el formulario no se puede clonar al estado
/// (es un objeto del navegador), así que se guarda aparte y se usa al enviar.
#[derive(Clone, Copy)]
pub struct DocumentRecordsController {
    pub state: RwSignal<DocumentRecordsState>,
    attachment: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl DocumentRecordsController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DocumentRecordsState::default()),
            attachment: StoredValue::new_local(None),
        }
    }

    pub fn start(&self) {
        let commands = self.state.try_update(|s| s.start()).unwrap_or_default();
        self.run_all(commands);
    }

    pub fn dispatch(&self, intent: Intent) {
        let commands = self
            .state
            .try_update(|s| reduce(s, intent))
            .unwrap_or_default();
        if self
            .state
            .with_untracked(|s| s.form.draft.attachment.is_none())
        {
            self.attachment.set_value(None);
        }
        self.run_all(commands);
    }

    pub fn attach(&self, file: Option<web_sys::File>) {
        let name = file.as_ref().map(|f| f.name());
        self.attachment.set_value(file);
        self.dispatch(Intent::AttachFile(name));
    }

    /// Pide confirmación antes de eliminar
    pub fn request_delete(&self, id: i64) {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(DELETE_CONFIRM).ok())
            .unwrap_or(false);
        self.dispatch(Intent::DeleteService { id, confirmed });
    }

    fn run_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&self, command: Command) {
        let this = *self;
        match command {
            Command::Load { token, filters } => {
                log::debug!("Cargando registros (#{}) con filtros {:?}", token, filters);
                spawn_local(async move {
                    let result = load_document_records(&filters).await;
                    if let Ok(data) = &result {
                        log::debug!(
                            "Registros cargados (#{}): {} actividades, {} servicios adicionales",
                            token,
                            data.activities.len(),
                            data.services.len()
                        );
                    }
                    this.dispatch(Intent::Loaded { token, result });
                });
            }
            Command::LoadCompanies => {
                spawn_local(async move {
                    let result = fetch_all_companies().await;
                    this.dispatch(Intent::CompaniesLoaded(result));
                });
            }
            Command::CreateService { token, payload } => {
                let file = this.attachment.get_value();
                spawn_local(async move {
                    let result = create_service(&payload, file).await;
                    this.dispatch(Intent::ServiceSaved { token, result });
                });
            }
            Command::UpdateService { token, id, payload } => {
                let file = this.attachment.get_value();
                spawn_local(async move {
                    let result = update_service(id, &payload, file).await;
                    this.dispatch(Intent::ServiceSaved { token, result });
                });
            }
            Command::DeleteService(id) => {
                spawn_local(async move {
                    let result = delete_service(id).await;
                    this.dispatch(Intent::ServiceDeleted { id, result });
                });
            }
            Command::Alert(message) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&message);
                }
            }
            Command::LogError(message) => log::error!("{}", message),
            Command::LogWarn(message) => log::warn!("{}", message),
        }
    }
}

impl Default for DocumentRecordsController {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn DocumentRecordsList() -> impl IntoView {
    let ctrl = DocumentRecordsController::new();
    let state = ctrl.state;
    ctrl.start();

    let is_filter_expanded = RwSignal::new(true);
    let is_loading = Memo::new(move |_| state.with(|s| s.loading));
    let active_filters_count = Memo::new(move |_| state.with(|s| s.active_filters_count()));

    let filter_value = move |field: FilterField| {
        state.with(|s| match field {
            FilterField::Client => s.filters.client_id.clone(),
            FilterField::Center => s.filters.center_id.clone(),
            FilterField::DateFrom => s.filters.date_from.clone(),
            FilterField::DateTo => s.filters.date_to.clone(),
        })
    };
    let edit_filter = move |field: FilterField, ev: leptos::ev::Event| {
        ctrl.dispatch(Intent::EditFilter(field, event_target_value(&ev)));
    };

    // Cada tabla depende solo de sus filas; editar filtros o el formulario no las redibuja
    let activities_rows = Memo::new(move |_| state.with(|s| s.activities_page_rows()));
    let services_rows = Memo::new(move |_| state.with(|s| s.services_page_rows()));

    let activities_sort_field = Memo::new(move |_| state.with(|s| s.activities_sort.field.clone()));
    let activities_sort_asc = Memo::new(move |_| state.with(|s| s.activities_sort.ascending));
    let services_sort_field = Memo::new(move |_| state.with(|s| s.services_sort.field.clone()));
    let services_sort_asc = Memo::new(move |_| state.with(|s| s.services_sort.ascending));
    let sort_activities = Callback::new(move |field: String| ctrl.dispatch(Intent::SortActivities(field)));
    let sort_services = Callback::new(move |field: String| ctrl.dispatch(Intent::SortServices(field)));

    view! {
        <PageFrame page_id="p900_document_records--list">
            <PageHeader
                title="Registros de Documentos"
                loading=is_loading
                on_refresh=Callback::new(move |_| ctrl.dispatch(Intent::Refresh))
            />

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_count=active_filters_count
                    actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| ctrl.dispatch(Intent::ClearFilters)
                        >
                            "Limpiar"
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Cliente:"</Label>
                            <input
                                type="text"
                                class="form-control"
                                placeholder="Buscar por Cliente"
                                prop:value=move || filter_value(FilterField::Client)
                                on:input=move |ev| edit_filter(FilterField::Client, ev)
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Centro:"</Label>
                            <input
                                type="text"
                                class="form-control"
                                placeholder="Buscar por Centro"
                                prop:value=move || filter_value(FilterField::Center)
                                on:input=move |ev| edit_filter(FilterField::Center, ev)
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Fecha inicio:"</Label>
                            <input
                                type="date"
                                class="form-control"
                                prop:value=move || filter_value(FilterField::DateFrom)
                                on:input=move |ev| edit_filter(FilterField::DateFrom, ev)
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Fecha fin:"</Label>
                            <input
                                type="date"
                                class="form-control"
                                prop:value=move || filter_value(FilterField::DateTo)
                                on:input=move |ev| edit_filter(FilterField::DateTo, ev)
                            />
                        </Flex>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctrl.dispatch(Intent::ApplyFilters)
                            disabled=is_loading
                        >
                            "Aplicar Filtros"
                        </Button>
                    </Flex>
                </FilterPanel>

                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Actividades"</h3>
                        <CountBadge
                            count=Memo::new(move |_| state.with(|s| s.activities.len()))
                            unit="registros"
                        />
                    </div>
                    <div class="card-body table-wrapper">
                        <Table attr:style="width: 100%; min-width: 1800px;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Centro" sort_field="center_name"
                                        current_sort_field=activities_sort_field sort_ascending=activities_sort_asc on_sort=sort_activities />
                                    <SortableHeaderCell label="Área" sort_field="area"
                                        current_sort_field=activities_sort_field sort_ascending=activities_sort_asc on_sort=sort_activities />
                                    <SortableHeaderCell label="Ubicación" sort_field="location"
                                        current_sort_field=activities_sort_field sort_ascending=activities_sort_asc on_sort=sort_activities />
                                    <SortableHeaderCell label="Estado" sort_field="status"
                                        current_sort_field=activities_sort_field sort_ascending=activities_sort_asc on_sort=sort_activities />
                                    {ActivityStage::ALL.iter().map(|stage| view! {
                                        <SortableHeaderCell
                                            label={format!("{} (Fecha)", stage.label())}
                                            sort_field={stage_sort_field(*stage)}
                                            current_sort_field=activities_sort_field
                                            sort_ascending=activities_sort_asc
                                            on_sort=sort_activities
                                            min_width=160.0
                                        />
                                        <TableHeaderCell min_width=120.0>
                                            {format!("{} (Documento)", stage.label())}
                                        </TableHeaderCell>
                                    }).collect_view()}
                                    <TableHeaderCell min_width=120.0>"Inventario (Documento)"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>"Acciones"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    if is_loading.get() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan={ACTIVITY_COLUMNS.to_string()}>
                                                    <TableCellLayout>"Cargando..."</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    let rows = activities_rows.get();
                                    if rows.is_empty() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan={ACTIVITY_COLUMNS.to_string()}>
                                                    <TableCellLayout>"No hay actividades disponibles"</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    rows.into_iter().map(|record| {
                                        let row = ActivityRowView::from(&record);
                                        let stage_cells = row.stages.into_iter().map(|cells| view! {
                                            <TableCell>
                                                <TableCellLayout truncate=true>{cells.date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{cells.document.into_view()}</TableCellLayout>
                                            </TableCell>
                                        }).collect_view();
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout truncate=true>{row.center_name}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{row.area}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{row.location}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{row.status}</TableCellLayout></TableCell>
                                                {stage_cells}
                                                <TableCell>
                                                    <TableCellLayout>{row.inventory.into_view()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| ctrl.dispatch(Intent::OpenDetail(record.clone()))
                                                    >
                                                        {icon("eye")}
                                                        " Detalles"
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </TableBody>
                        </Table>
                        <PaginationControls
                            current_page=Memo::new(move |_| state.with(|s| s.activities_page))
                            total_pages=Memo::new(move |_| state.with(|s| s.activities_total_pages()))
                            total_count=Memo::new(move |_| state.with(|s| s.activities.len()))
                            page_size=Memo::new(move |_| state.with(|s| s.activities_page_size))
                            on_page_change=Callback::new(move |page| ctrl.dispatch(Intent::ActivitiesPage(page)))
                            on_page_size_change=Callback::new(move |size| ctrl.dispatch(Intent::ActivitiesPageSize(size)))
                        />
                    </div>
                </div>

                <div class="card mt-4">
                    <div class="card-header">
                        <h3 class="card-title">"Servicios Adicionales"</h3>
                        <CountBadge
                            count=Memo::new(move |_| state.with(|s| s.services.len()))
                            unit="registros"
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctrl.dispatch(Intent::OpenCreate)
                        >
                            {icon("plus")}
                            " Agregar Servicio"
                        </Button>
                    </div>
                    <div class="card-body table-wrapper">
                        <Table attr:style="width: 100%; min-width: 1100px;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="ID" sort_field="id" min_width=60.0
                                        current_sort_field=services_sort_field sort_ascending=services_sort_asc on_sort=sort_services />
                                    <SortableHeaderCell label="Cliente" sort_field="client_name"
                                        current_sort_field=services_sort_field sort_ascending=services_sort_asc on_sort=sort_services />
                                    <SortableHeaderCell label="Razón social" sort_field="company_name"
                                        current_sort_field=services_sort_field sort_ascending=services_sort_asc on_sort=sort_services />
                                    <SortableHeaderCell label="Fecha Instalación" sort_field="installation_date" min_width=160.0
                                        current_sort_field=services_sort_field sort_ascending=services_sort_asc on_sort=sort_services />
                                    <SortableHeaderCell label="Inicio Monitoreo" sort_field="monitoring_start" min_width=160.0
                                        current_sort_field=services_sort_field sort_ascending=services_sort_asc on_sort=sort_services />
                                    <TableHeaderCell min_width=120.0>"Documento"</TableHeaderCell>
                                    <TableHeaderCell min_width=200.0>"Observaciones"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>"Acciones"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    if is_loading.get() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan={SERVICE_COLUMNS.to_string()}>
                                                    <TableCellLayout>"Cargando..."</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    let rows = services_rows.get();
                                    if rows.is_empty() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan={SERVICE_COLUMNS.to_string()}>
                                                    <TableCellLayout>"No hay servicios adicionales disponibles"</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    rows.into_iter().map(|service| {
                                        let row = ServiceRowView::from(&service);
                                        let id = row.id;
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{row.client_name}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{row.company_name}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{row.installation_date}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{row.monitoring_start}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{row.document.into_view()}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{row.notes}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| ctrl.dispatch(Intent::OpenEdit(service.clone()))
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| ctrl.request_delete(id)
                                                        >
                                                            {icon("delete")}
                                                        </Button>
                                                    </Flex>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </TableBody>
                        </Table>
                        <PaginationControls
                            current_page=Memo::new(move |_| state.with(|s| s.services_page))
                            total_pages=Memo::new(move |_| state.with(|s| s.services_total_pages()))
                            total_count=Memo::new(move |_| state.with(|s| s.services.len()))
                            page_size=Memo::new(move |_| state.with(|s| s.services_page_size))
                            on_page_change=Callback::new(move |page| ctrl.dispatch(Intent::ServicesPage(page)))
                            on_page_size_change=Callback::new(move |size| ctrl.dispatch(Intent::ServicesPageSize(size)))
                        />
                    </div>
                </div>
            </div>

            <Show when=move || state.with(|s| s.form.is_open())>
                <ServiceFormModal
                    form=Signal::derive(move || state.with(|s| s.form.clone()))
                    companies=Signal::derive(move || state.with(|s| s.companies.clone()))
                    on_edit=Callback::new(move |field| ctrl.dispatch(Intent::EditDraft(field)))
                    on_attach=Callback::new(move |file| ctrl.attach(file))
                    on_save=Callback::new(move |_| ctrl.dispatch(Intent::SaveService))
                    on_cancel=Callback::new(move |_| ctrl.dispatch(Intent::CancelForm))
                />
            </Show>

            {move || state.with(|s| s.detail.clone()).map(|record| view! {
                <ActivityDetails
                    record=record
                    on_close=Callback::new(move |_| ctrl.dispatch(Intent::CloseDetail))
                />
            })}
        </PageFrame>
    }
}
