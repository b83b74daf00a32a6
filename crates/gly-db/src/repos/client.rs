//! Client repository — CRUD, FTS search, and the lifetime-value setter.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use gly_core::entities::Client;
use gly_core::enums::{ClientStatus, LeadSource};
use gly_core::ids::PREFIX_CLIENT;
use gly_core::responses::ClientOverview;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_decimal, parse_enum, parse_optional_datetime};
use crate::service::GalleyService;
use crate::updates::client::ClientUpdate;

const SELECT_COLS: &str = "id, first_name, last_name, email, phone, institution, department, \
     title, field_of_study, status, lead_source, lifetime_value, notes, \
     created_at, updated_at, last_contact";

pub(crate) fn row_to_client(row: &libsql::Row) -> Result<Client, DatabaseError> {
    Ok(Client {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: get_opt_string(row, 4)?,
        institution: get_opt_string(row, 5)?,
        department: get_opt_string(row, 6)?,
        title: get_opt_string(row, 7)?,
        field_of_study: get_opt_string(row, 8)?,
        status: parse_enum(&row.get::<String>(9)?)?,
        lead_source: parse_enum(&row.get::<String>(10)?)?,
        lifetime_value: parse_decimal(&row.get::<String>(11)?)?,
        notes: get_opt_string(row, 12)?,
        created_at: parse_datetime(&row.get::<String>(13)?)?,
        updated_at: parse_datetime(&row.get::<String>(14)?)?,
        last_contact: parse_optional_datetime(get_opt_string(row, 15)?.as_deref())?,
    })
}

/// Fields for a new client record.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub title: Option<String>,
    pub field_of_study: Option<String>,
    pub status: ClientStatus,
    pub lead_source: LeadSource,
    pub notes: Option<String>,
}

impl Default for NewClient {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: None,
            institution: None,
            department: None,
            title: None,
            field_of_study: None,
            status: ClientStatus::Lead,
            lead_source: LeadSource::Website,
            notes: None,
        }
    }
}

impl GalleyService {
    pub async fn create_client(&self, new: NewClient) -> Result<Client, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_CLIENT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO clients ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
                ),
                libsql::params![
                    id.as_str(),
                    new.first_name.as_str(),
                    new.last_name.as_str(),
                    new.email.as_str(),
                    new.phone.as_deref(),
                    new.institution.as_deref(),
                    new.department.as_deref(),
                    new.title.as_deref(),
                    new.field_of_study.as_deref(),
                    new.status.as_str(),
                    new.lead_source.as_str(),
                    "0",
                    new.notes.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339(),
                    Option::<String>::None
                ],
            )
            .await?;

        Ok(Client {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            institution: new.institution,
            department: new.department,
            title: new.title,
            field_of_study: new.field_of_study,
            status: new.status,
            lead_source: new.lead_source,
            lifetime_value: Decimal::ZERO,
            notes: new.notes,
            created_at: now,
            updated_at: now,
            last_contact: None,
        })
    }

    pub async fn get_client(&self, id: &str) -> Result<Client, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM clients WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_client(&row)
    }

    /// Look up a client by email; `None` when no record matches.
    pub async fn find_client_by_email(&self, email: &str) -> Result<Option<Client>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM clients WHERE email = ?1"),
                [email],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_client(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn update_client(
        &self,
        client_id: &str,
        update: ClientUpdate,
    ) -> Result<Client, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref first_name) = update.first_name {
            sets.push(format!("first_name = ?{idx}"));
            params.push(first_name.clone().into());
            idx += 1;
        }
        if let Some(ref last_name) = update.last_name {
            sets.push(format!("last_name = ?{idx}"));
            params.push(last_name.clone().into());
            idx += 1;
        }
        if let Some(ref email) = update.email {
            sets.push(format!("email = ?{idx}"));
            params.push(email.clone().into());
            idx += 1;
        }
        if let Some(ref phone) = update.phone {
            sets.push(format!("phone = ?{idx}"));
            params.push(phone.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref institution) = update.institution {
            sets.push(format!("institution = ?{idx}"));
            params.push(institution.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref department) = update.department {
            sets.push(format!("department = ?{idx}"));
            params.push(department.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref field_of_study) = update.field_of_study {
            sets.push(format!("field_of_study = ?{idx}"));
            params.push(field_of_study.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(ref lead_source) = update.lead_source {
            sets.push(format!("lead_source = ?{idx}"));
            params.push(lead_source.as_str().into());
            idx += 1;
        }
        if let Some(ref notes) = update.notes {
            sets.push(format!("notes = ?{idx}"));
            params.push(notes.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_client(client_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(client_id.into());
        let sql = format!("UPDATE clients SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_client(client_id).await
    }

    pub async fn list_clients(
        &self,
        status: Option<ClientStatus>,
        limit: u32,
    ) -> Result<Vec<Client>, DatabaseError> {
        let mut rows = match status {
            Some(status) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM clients WHERE status = ?1 \
                             ORDER BY created_at DESC LIMIT {limit}"
                        ),
                        [status.as_str()],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM clients ORDER BY created_at DESC LIMIT {limit}"
                        ),
                        (),
                    )
                    .await?
            }
        };

        let mut clients = Vec::new();
        while let Some(row) = rows.next().await? {
            clients.push(row_to_client(&row)?);
        }
        Ok(clients)
    }

    /// Full-text search over names, email, and institution.
    pub async fn search_clients(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Client>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT c.id, c.first_name, c.last_name, c.email, c.phone, c.institution, \
                     c.department, c.title, c.field_of_study, c.status, c.lead_source, \
                     c.lifetime_value, c.notes, c.created_at, c.updated_at, c.last_contact \
                     FROM clients_fts \
                     JOIN clients c ON c.rowid = clients_fts.rowid \
                     WHERE clients_fts MATCH ?1 \
                     ORDER BY rank LIMIT ?2"
                ),
                libsql::params![query, limit],
            )
            .await?;

        let mut clients = Vec::new();
        while let Some(row) = rows.next().await? {
            clients.push(row_to_client(&row)?);
        }
        Ok(clients)
    }

    /// Clients annotated with project counts and summed final amounts.
    ///
    /// Money columns are TEXT, so the aggregation runs in Rust to stay exact
    /// instead of leaning on SQL float casts.
    pub async fn client_overview(&self, limit: u32) -> Result<Vec<ClientOverview>, DatabaseError> {
        let clients = self.list_clients(None, limit).await?;
        let projects = self.fetch_all_projects().await?;

        let mut overview = Vec::with_capacity(clients.len());
        for client in clients {
            let mut project_count: u32 = 0;
            let mut total_value = Decimal::ZERO;
            for project in projects.iter().filter(|p| p.client_id == client.id) {
                project_count += 1;
                total_value += project.final_amount.unwrap_or(Decimal::ZERO);
            }
            overview.push(ClientOverview {
                client,
                project_count,
                total_value,
            });
        }
        Ok(overview)
    }

    /// Stamp the client's last contact time.
    pub async fn touch_last_contact(
        &self,
        client_id: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE clients SET last_contact = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![at.to_rfc3339(), Utc::now().to_rfc3339(), client_id],
            )
            .await?;
        Ok(())
    }

    /// Persist a recomputed lifetime value. Only the maintenance batch calls this.
    pub(crate) async fn set_lifetime_value(
        &self,
        client_id: &str,
        value: Decimal,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE clients SET lifetime_value = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![value.to_string(), Utc::now().to_rfc3339(), client_id],
            )
            .await?;
        Ok(())
    }
}
