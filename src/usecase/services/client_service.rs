use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::client::{Client, ClientDraft, ClientId, DraftError};
use crate::usecase::ports::repo::{ClientRepository, RepoError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub struct ClientService {
    repo: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        Self { repo }
    }

    pub fn init(&self) -> Result<(), RepoError> {
        self.repo.init()
    }

    pub fn list_clients(&self) -> Result<Vec<Client>, RepoError> {
        self.repo.list_clients()
    }

    pub fn save(&self, draft: &ClientDraft, today: NaiveDate) -> Result<Client, SaveError> {
        let client = draft.validate(today)?;
        let id = match draft.id {
            Some(id) => {
                self.repo.update_client(id, client.clone())?;
                log::info!("updated client {}", id.0);
                id
            }
            None => {
                let id = self.repo.create_client(client.clone())?;
                log::info!("created client {}", id.0);
                id
            }
        };
        Ok(client.into_client(id))
    }

    pub fn delete_client(&self, id: ClientId) -> Result<(), RepoError> {
        self.repo.soft_delete_client(id)?;
        log::info!("soft-deleted client {}", id.0);
        Ok(())
    }
}
