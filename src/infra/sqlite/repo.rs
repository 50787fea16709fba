use std::path::PathBuf;

use crate::domain::entities::client::{Client, ClientId, NewClient};
use crate::domain::entities::role::Role;
use crate::infra::sqlite::queries::{
    insert_client, list_clients, load_setting, soft_delete_client, update_client, upsert_setting,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{ClientRepository, PreferenceStore, RepoError};

const ROLE_SETTING: &str = "active_role";

pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl SqliteRepo {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl ClientRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(RepoError::message)
    }

    fn list_clients(&self) -> Result<Vec<Client>, RepoError> {
        list_clients(&self.db_path, false).map_err(RepoError::message)
    }

    fn create_client(&self, client: NewClient) -> Result<ClientId, RepoError> {
        insert_client(&self.db_path, &client)
            .map(ClientId)
            .map_err(RepoError::message)
    }

    fn update_client(&self, id: ClientId, client: NewClient) -> Result<(), RepoError> {
        match update_client(&self.db_path, id.0, &client).map_err(RepoError::message)? {
            0 => Err(RepoError::NotFound(id.0)),
            _ => Ok(()),
        }
    }

    fn soft_delete_client(&self, id: ClientId) -> Result<(), RepoError> {
        match soft_delete_client(&self.db_path, id.0).map_err(RepoError::message)? {
            0 => Err(RepoError::NotFound(id.0)),
            _ => Ok(()),
        }
    }
}

impl PreferenceStore for SqliteRepo {
    fn load_role(&self) -> Result<Option<Role>, RepoError> {
        let Some(stored) = load_setting(&self.db_path, ROLE_SETTING).map_err(RepoError::message)?
        else {
            return Ok(None);
        };
        stored.parse::<Role>().map(Some).map_err(RepoError::message)
    }

    fn save_role(&self, role: Role) -> Result<(), RepoError> {
        upsert_setting(&self.db_path, ROLE_SETTING, role.as_str()).map_err(RepoError::message)
    }
}
