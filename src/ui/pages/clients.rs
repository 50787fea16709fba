use chrono::Local;
use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::domain::entities::client::{Client, ClientDraft, ClientId};
use crate::domain::entities::column::{Column, ColumnSchema};
use crate::domain::entities::record::FieldValue;
use crate::domain::entities::role::Role;
use crate::domain::entities::view::ViewOptions;
use crate::domain::error::GridConfigError;
use crate::domain::grid::{GridView, RowActions};
use crate::platform::desktop::blocking::run_blocking;
use crate::platform::task::LatestRequest;
use crate::ui::components::client_form::ClientForm;
use crate::ui::components::data_grid::data_grid;
use crate::ui::state::app_state::AppServices;
use crate::ui::style::format_amount;
use crate::usecase::services::client_service::SaveError;
use crate::usecase::services::role_service::RoleSelection;

fn dash_if_null(value: &FieldValue) -> String {
    if value.is_null() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

pub fn client_schema() -> Result<ColumnSchema<Client>, GridConfigError> {
    ColumnSchema::new(vec![
        Column::new("company", "Company").width("220px"),
        Column::new("contact", "Contact"),
        Column::new("inn", "INN").width("130px"),
        Column::new("city", "City"),
        Column::new("fleet_size", "Fleet").width("80px"),
        Column::new("credit_limit", "Credit limit")
            .width("130px")
            .render(|value: &FieldValue, _: &Client| {
                value
                    .as_number()
                    .map(format_amount)
                    .unwrap_or_else(|| "-".to_string())
            }),
        Column::new("phone", "Phone")
            .unsortable()
            .render(|value: &FieldValue, _: &Client| dash_if_null(value)),
        Column::new("registered_on", "Registered").width("120px"),
    ])
}

// Handlers fire while the grid is borrowed, so they only set other signals.
pub fn client_actions(
    role: Role,
    mut editing: Signal<Option<ClientDraft>>,
    mut pending_delete: Signal<Option<ClientId>>,
) -> RowActions<Client> {
    let mut actions = RowActions::new();
    if role.can_add() {
        actions = actions.on_add(move || editing.set(Some(ClientDraft::default())));
    }
    if role.can_edit() {
        actions = actions.on_edit(move |client: &Client| editing.set(Some(ClientDraft::from(client))));
    }
    if role.can_delete() {
        actions = actions.on_delete(move |id: ClientId| pending_delete.set(Some(id)));
    }
    actions
}

// A list load that started before a save or delete may not contain it, so
// a newer load replaces it.
fn reload_if_loading(grid: Signal<GridView<Client>>, mut reload: Signal<u64>) {
    if grid.peek().is_loading() {
        *reload.write() += 1;
    }
}

#[component]
pub fn ClientsPage(mut status: Signal<String>) -> Element {
    let services = use_context::<AppServices>();
    let roles = use_context::<Signal<RoleSelection>>();
    let schema = match use_hook(client_schema) {
        Ok(schema) => schema,
        Err(err) => {
            return rsx! {
                div {
                    p { "Client table is misconfigured: {err}" }
                }
            };
        }
    };

    let mut editing = use_signal(|| None::<ClientDraft>);
    let mut form_error = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<ClientId>);
    let mut busy = use_signal(|| false);
    let mut reload = use_signal(|| 0_u64);
    let mut grid = use_signal(|| {
        GridView::new(schema.clone(), ViewOptions::default().with_loading(true))
    });
    let requests = use_hook(LatestRequest::new);

    use_effect(move || {
        let role = roles.read().current();
        grid.write()
            .set_actions(client_actions(role, editing, pending_delete));
    });

    let loader = services.clients.clone();
    let load_requests = requests.clone();
    use_effect(move || {
        let generation = reload();
        let ticket = load_requests.begin();
        let service = loader.clone();
        grid.write().set_loading(true);
        spawn(async move {
            let Some(result) = ticket.run(run_blocking(move || service.list_clients())).await
            else {
                log::debug!("dropped stale client list (reload {generation})");
                return;
            };
            match result {
                Ok(Ok(clients)) => {
                    let count = clients.len();
                    match grid.write().set_records(clients) {
                        Ok(()) => status.set(format!("Loaded {count} clients")),
                        Err(err) => {
                            log::error!("client list rejected by grid: {err}");
                            status.set(format!("Failed to show clients: {err}"));
                        }
                    }
                }
                Ok(Err(err)) => {
                    log::warn!("failed to load clients: {err}");
                    status.set(format!("Failed to load clients: {err}"));
                }
                Err(err) => {
                    log::error!("client loader did not finish: {err:#}");
                    status.set(format!("Failed to load clients: {err}"));
                }
            }
            grid.write().set_loading(false);
        });
    });

    let deleter = services.clients.clone();
    use_effect(move || {
        let Some(id) = pending_delete() else {
            return;
        };
        let service = deleter.clone();
        spawn(async move {
            pending_delete.set(None);
            let confirm = MessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("Delete client")
                .set_description("Delete this client? It will be hidden from the list.")
                .set_buttons(MessageButtons::YesNo)
                .show();
            if confirm != MessageDialogResult::Yes {
                return;
            }
            busy.set(true);
            let result = run_blocking(move || service.delete_client(id)).await;
            busy.set(false);
            match result {
                Ok(Ok(())) => {
                    if let Some(removed) = grid.write().remove_record(&id) {
                        status.set(format!("Deleted {}", removed.company));
                    }
                    reload_if_loading(grid, reload);
                }
                Ok(Err(err)) => {
                    log::warn!("failed to delete client {}: {err}", id.0);
                    status.set(format!("Failed to delete client: {err}"));
                }
                Err(err) => status.set(format!("Failed to delete client: {err}")),
            }
        });
    });

    let cancel_requests = requests.clone();
    use_drop(move || cancel_requests.cancel_all());

    let saver = services.clients.clone();
    let save_client = move |draft: ClientDraft| {
        let service = saver.clone();
        spawn(async move {
            busy.set(true);
            let today = Local::now().date_naive();
            let result = run_blocking(move || service.save(&draft, today)).await;
            busy.set(false);
            match result {
                Ok(Ok(client)) => {
                    let company = client.company.clone();
                    if let Err(err) = grid.write().upsert_record(client) {
                        log::error!("saved client rejected by grid: {err}");
                    }
                    reload_if_loading(grid, reload);
                    editing.set(None);
                    form_error.set(None);
                    status.set(format!("Saved {company}"));
                }
                Ok(Err(SaveError::Invalid(err))) => form_error.set(Some(err.to_string())),
                Ok(Err(err)) => {
                    log::warn!("failed to save client: {err}");
                    form_error.set(Some(err.to_string()));
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let loading = grid.read().is_loading();
    let open_draft = editing();
    let form_key = open_draft
        .as_ref()
        .and_then(|draft| draft.id)
        .map(|id| id.0.to_string())
        .unwrap_or_else(|| "new".to_string());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; flex: 1; min-height: 0;",
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                h2 { style: "margin: 0;", "Clients" }
                button {
                    disabled: loading || busy(),
                    onclick: move |_| *reload.write() += 1,
                    "Reload"
                }
            }
            {data_grid(grid)}
            if let Some(draft) = open_draft {
                ClientForm {
                    key: "{form_key}",
                    draft,
                    error: form_error(),
                    busy: busy(),
                    on_save: save_client,
                    on_cancel: move |_| {
                        editing.set(None);
                        form_error.set(None);
                    },
                }
            }
        }
    }
}
