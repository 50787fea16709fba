use std::str::FromStr;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::AppPaths;
use crate::domain::entities::role::Role;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::ui::pages::clients::ClientsPage;
use crate::ui::state::app_state::{AppServices, AppState};
use crate::usecase::services::client_service::ClientService;

#[component]
pub fn App() -> Element {
    let paths = match use_hook(|| AppPaths::resolve().map_err(|err| format!("{err:#}"))) {
        Ok(paths) => paths,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to resolve the data directory: {err}" }
                }
            };
        }
    };

    let repo = use_hook(|| Arc::new(SqliteRepo::new(paths.db_path.clone())));
    let services = use_hook(|| AppServices {
        clients: Arc::new(ClientService::new(repo.clone())),
    });
    // Schema first: the stored role is read right after.
    let init_error = use_hook({
        let clients = services.clients.clone();
        move || match clients.init() {
            Ok(()) => None,
            Err(err) => {
                log::error!("failed to initialise database: {err}");
                Some(err.to_string())
            }
        }
    });

    let AppState { mut roles, mut status } = AppState::new(repo.clone());
    use_context_provider(|| services);
    use_context_provider(|| roles);

    use_effect(move || {
        if let Some(err) = init_error.clone() {
            status.set(format!("Failed to initialise database: {err}"));
        }
    });

    let active_role = roles.read().current();
    let status_text = status();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; padding: 12px; box-sizing: border-box; gap: 8px; font-family: sans-serif;",
            div {
                style: "display: flex; gap: 12px; align-items: center; border-bottom: 1px solid #ddd; padding-bottom: 8px;",
                strong { "Lease Desk" }
                span { style: "margin-left: auto; color: #555;", "Role" }
                select {
                    onchange: move |event| {
                        let value = event.value();
                        let role = match Role::from_str(&value) {
                            Ok(role) => role,
                            Err(err) => {
                                status.set(err.to_string());
                                return;
                            }
                        };
                        if let Err(err) = roles.write().select(role) {
                            log::warn!("failed to store role: {err}");
                            status.set(format!("Failed to switch role: {err}"));
                        }
                    },
                    for role in Role::ALL {
                        option {
                            value: "{role.as_str()}",
                            selected: role == active_role,
                            "{role.label()}"
                        }
                    }
                }
            }
            ClientsPage { status }
            div { style: "color: #555; font-size: 12px;", "{status_text}" }
        }
    }
}
