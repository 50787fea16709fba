use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::entities::client::{Client, ClientId, NewClient};
use crate::infra::sqlite::schema::open_connection;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn client_from_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    let registered_on: String = row.get(8)?;
    let registered_on = NaiveDate::parse_from_str(&registered_on, DATE_FORMAT)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(err)))?;

    Ok(Client {
        id: ClientId(row.get(0)?),
        company: row.get(1)?,
        contact: row.get(2)?,
        inn: row.get(3)?,
        city: row.get(4)?,
        fleet_size: row.get(5)?,
        credit_limit: row.get(6)?,
        phone: row.get(7)?,
        registered_on,
    })
}

pub fn list_clients(db_path: &Path, include_deleted: bool) -> Result<Vec<Client>> {
    let conn = open_connection(db_path)?;
    let sql = if include_deleted {
        "SELECT id, company, contact, inn, city, fleet_size, credit_limit, phone, registered_on
         FROM client
         ORDER BY id ASC"
    } else {
        "SELECT id, company, contact, inn, city, fleet_size, credit_limit, phone, registered_on
         FROM client
         WHERE deleted_at IS NULL
         ORDER BY id ASC"
    };

    let mut stmt = conn.prepare(sql).context("failed to prepare client list")?;
    let rows = stmt
        .query_map([], client_from_row)
        .context("failed to query clients")?;

    let mut clients = Vec::new();
    for row in rows {
        clients.push(row.context("failed to read client row")?);
    }
    Ok(clients)
}

pub fn insert_client(db_path: &Path, client: &NewClient) -> Result<i64> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO client(company, contact, inn, city, fleet_size, credit_limit, phone, registered_on)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            client.company,
            client.contact,
            client.inn,
            client.city,
            client.fleet_size,
            client.credit_limit,
            client.phone,
            client.registered_on.format(DATE_FORMAT).to_string(),
        ],
    )
    .context("failed to insert client")?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows touched; 0 means no live client has `id`.
pub fn update_client(db_path: &Path, id: i64, client: &NewClient) -> Result<usize> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "UPDATE client
         SET company = ?1, contact = ?2, inn = ?3, city = ?4, fleet_size = ?5,
             credit_limit = ?6, phone = ?7, registered_on = ?8
         WHERE id = ?9 AND deleted_at IS NULL",
        params![
            client.company,
            client.contact,
            client.inn,
            client.city,
            client.fleet_size,
            client.credit_limit,
            client.phone,
            client.registered_on.format(DATE_FORMAT).to_string(),
            id,
        ],
    )
    .context("failed to update client")
}

pub fn soft_delete_client(db_path: &Path, id: i64) -> Result<usize> {
    let conn = open_connection(db_path)?;
    let deleted_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    conn.execute(
        "UPDATE client SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
        params![deleted_at, id],
    )
    .context("failed to soft delete client")
}

pub fn load_setting(db_path: &Path, key: &str) -> Result<Option<String>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        "SELECT value FROM app_setting WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .optional()
    .with_context(|| format!("failed to load setting: {key}"))
}

pub fn upsert_setting(db_path: &Path, key: &str, value: &str) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO app_setting(key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )
    .with_context(|| format!("failed to store setting: {key}"))?;
    Ok(())
}
