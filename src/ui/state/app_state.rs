use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::usecase::ports::repo::PreferenceStore;
use crate::usecase::services::client_service::ClientService;
use crate::usecase::services::role_service::RoleSelection;

#[derive(Clone)]
pub struct AppServices {
    pub clients: Arc<ClientService>,
}

pub struct AppState {
    pub roles: Signal<RoleSelection>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(preferences: Arc<dyn PreferenceStore>) -> Self {
        Self {
            roles: use_signal(move || RoleSelection::load(preferences)),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
