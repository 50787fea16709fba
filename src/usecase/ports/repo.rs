use crate::domain::entities::client::{Client, ClientId, NewClient};
use crate::domain::entities::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Message(String),
    #[error("client {0} was not found")]
    NotFound(i64),
}

impl RepoError {
    pub fn message(err: impl std::fmt::Display) -> Self {
        RepoError::Message(format!("{err:#}"))
    }
}

pub trait ClientRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn list_clients(&self) -> Result<Vec<Client>, RepoError>;
    fn create_client(&self, client: NewClient) -> Result<ClientId, RepoError>;
    fn update_client(&self, id: ClientId, client: NewClient) -> Result<(), RepoError>;
    fn soft_delete_client(&self, id: ClientId) -> Result<(), RepoError>;
}

pub trait PreferenceStore: Send + Sync {
    fn load_role(&self) -> Result<Option<Role>, RepoError>;
    fn save_role(&self, role: Role) -> Result<(), RepoError>;
}
