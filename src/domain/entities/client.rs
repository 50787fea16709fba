use chrono::NaiveDate;

use crate::domain::entities::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub i64);

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub company: String,
    pub contact: String,
    pub inn: String,
    pub city: String,
    pub fleet_size: i64,
    pub credit_limit: Option<f64>,
    pub phone: Option<String>,
    pub registered_on: NaiveDate,
}

impl Record for Client {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.id
    }

    fn value(&self, key: &str) -> Option<FieldValue> {
        let value: FieldValue = match key {
            "id" => self.id.0.into(),
            "company" => self.company.as_str().into(),
            "contact" => self.contact.as_str().into(),
            "inn" => self.inn.as_str().into(),
            "city" => self.city.as_str().into(),
            "fleet_size" => self.fleet_size.into(),
            "credit_limit" => self.credit_limit.into(),
            "phone" => self.phone.clone().into(),
            "registered_on" => self.registered_on.into(),
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub company: String,
    pub contact: String,
    pub inn: String,
    pub city: String,
    pub fleet_size: i64,
    pub credit_limit: Option<f64>,
    pub phone: Option<String>,
    pub registered_on: NaiveDate,
}

impl NewClient {
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            company: self.company,
            contact: self.contact,
            inn: self.inn,
            city: self.city,
            fleet_size: self.fleet_size,
            credit_limit: self.credit_limit,
            phone: self.phone,
            registered_on: self.registered_on,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("company name is required")]
    MissingCompany,
    #[error("INN must be 10 or 12 digits, got `{0}`")]
    InvalidInn(String),
    #[error("fleet size must be a non-negative whole number, got `{0}`")]
    InvalidFleetSize(String),
    #[error("credit limit must be a non-negative number, got `{0}`")]
    InvalidCreditLimit(String),
    #[error("registration date must look like YYYY-MM-DD, got `{0}`")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientDraft {
    pub id: Option<ClientId>,
    pub company: String,
    pub contact: String,
    pub inn: String,
    pub city: String,
    pub fleet_size: String,
    pub credit_limit: String,
    pub phone: String,
    pub registered_on: String,
}

impl From<&Client> for ClientDraft {
    fn from(client: &Client) -> Self {
        Self {
            id: Some(client.id),
            company: client.company.clone(),
            contact: client.contact.clone(),
            inn: client.inn.clone(),
            city: client.city.clone(),
            fleet_size: client.fleet_size.to_string(),
            credit_limit: client
                .credit_limit
                .map(|limit| limit.to_string())
                .unwrap_or_default(),
            phone: client.phone.clone().unwrap_or_default(),
            registered_on: client.registered_on.format("%Y-%m-%d").to_string(),
        }
    }
}

impl ClientDraft {
    /// Validates the form. An empty registration date means `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<NewClient, DraftError> {
        let company = self.company.trim();
        if company.is_empty() {
            return Err(DraftError::MissingCompany);
        }

        let inn = self.inn.trim();
        if !(inn.len() == 10 || inn.len() == 12) || !inn.chars().all(|c| c.is_ascii_digit()) {
            return Err(DraftError::InvalidInn(inn.to_string()));
        }

        let fleet_text = self.fleet_size.trim();
        let fleet_size = if fleet_text.is_empty() {
            0
        } else {
            fleet_text
                .parse::<i64>()
                .ok()
                .filter(|size| *size >= 0)
                .ok_or_else(|| DraftError::InvalidFleetSize(fleet_text.to_string()))?
        };

        let limit_text = self.credit_limit.trim();
        let credit_limit = if limit_text.is_empty() {
            None
        } else {
            let limit = limit_text
                .replace(',', "")
                .parse::<f64>()
                .ok()
                .filter(|limit| limit.is_finite() && *limit >= 0.0)
                .ok_or_else(|| DraftError::InvalidCreditLimit(limit_text.to_string()))?;
            Some(limit)
        };

        let date_text = self.registered_on.trim();
        let registered_on = if date_text.is_empty() {
            today
        } else {
            NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
                .map_err(|_| DraftError::InvalidDate(date_text.to_string()))?
        };

        Ok(NewClient {
            company: company.to_string(),
            contact: self.contact.trim().to_string(),
            inn: inn.to_string(),
            city: self.city.trim().to_string(),
            fleet_size,
            credit_limit,
            phone: Some(self.phone.trim())
                .filter(|phone| !phone.is_empty())
                .map(str::to_string),
            registered_on,
        })
    }
}
