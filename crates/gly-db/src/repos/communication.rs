//! Communication repository — the client contact history.
//!
//! Logging a communication bumps the client's `last_contact`, which the
//! follow-up scan relies on.

use chrono::Utc;

use gly_core::entities::Communication;
use gly_core::enums::{CommunicationType, Direction};
use gly_core::ids::PREFIX_COMMUNICATION;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::service::GalleyService;

const SELECT_COLS: &str =
    "id, client_id, project_id, communication_type, direction, subject, content, created_at";

fn row_to_communication(row: &libsql::Row) -> Result<Communication, DatabaseError> {
    Ok(Communication {
        id: row.get(0)?,
        client_id: row.get(1)?,
        project_id: get_opt_string(row, 2)?,
        communication_type: parse_enum(&row.get::<String>(3)?)?,
        direction: parse_enum(&row.get::<String>(4)?)?,
        subject: row.get(5)?,
        content: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

/// Fields for a logged communication.
#[derive(Debug, Clone)]
pub struct NewCommunication {
    pub client_id: String,
    pub project_id: Option<String>,
    pub communication_type: CommunicationType,
    pub direction: Direction,
    pub subject: String,
    pub content: Option<String>,
}

impl GalleyService {
    pub async fn log_communication(
        &self,
        new: NewCommunication,
    ) -> Result<Communication, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COMMUNICATION).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO communications ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    new.client_id.as_str(),
                    new.project_id.as_deref(),
                    new.communication_type.as_str(),
                    new.direction.as_str(),
                    new.subject.as_str(),
                    new.content.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        self.touch_last_contact(&new.client_id, now).await?;

        Ok(Communication {
            id,
            client_id: new.client_id,
            project_id: new.project_id,
            communication_type: new.communication_type,
            direction: new.direction,
            subject: new.subject,
            content: new.content,
            created_at: now,
        })
    }

    pub async fn get_communication(&self, id: &str) -> Result<Communication, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM communications WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_communication(&row)
    }

    /// List communications, optionally scoped to a client and/or project.
    pub async fn list_communications(
        &self,
        client_id: Option<&str>,
        project_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Communication>, DatabaseError> {
        let mut wheres = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(client_id) = client_id {
            wheres.push(format!("client_id = ?{idx}"));
            params.push(client_id.into());
            idx += 1;
        }
        if let Some(project_id) = project_id {
            wheres.push(format!("project_id = ?{idx}"));
            params.push(project_id.into());
        }

        let where_clause = if wheres.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", wheres.join(" AND "))
        };
        let sql = format!(
            "SELECT {SELECT_COLS} FROM communications {where_clause}ORDER BY created_at DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut communications = Vec::new();
        while let Some(row) = rows.next().await? {
            communications.push(row_to_communication(&row)?);
        }
        Ok(communications)
    }
}
