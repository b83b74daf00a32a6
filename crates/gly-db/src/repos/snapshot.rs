//! Snapshot queries feeding the analytics core.
//!
//! The reports crate never touches the database; it consumes materialized
//! slices produced here. Each call reads the current state fresh.

use chrono::{DateTime, Utc};

use gly_core::entities::{Client, Communication, Project};
use gly_core::enums::ProjectStatus;

use crate::error::DatabaseError;
use crate::repos::client::row_to_client;
use crate::repos::project::row_to_project;
use crate::service::GalleyService;

/// Optional narrowing for project snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotFilter {
    pub status: Option<ProjectStatus>,
    /// Keep only projects completed on or after this instant.
    pub completed_since: Option<DateTime<Utc>>,
}

impl GalleyService {
    /// Every project, oldest first.
    pub async fn fetch_all_projects(&self) -> Result<Vec<Project>, DatabaseError> {
        self.fetch_projects(SnapshotFilter::default()).await
    }

    /// Projects matching the filter, oldest first.
    pub async fn fetch_projects(
        &self,
        filter: SnapshotFilter,
    ) -> Result<Vec<Project>, DatabaseError> {
        let mut wheres = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(status) = filter.status {
            wheres.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(since) = filter.completed_since {
            wheres.push(format!("completed_at IS NOT NULL AND completed_at >= ?{idx}"));
            params.push(since.to_rfc3339().into());
        }

        let where_clause = if wheres.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", wheres.join(" AND "))
        };
        let sql = format!(
            "SELECT id, client_id, title, project_type, description, status, priority, \
             quoted_amount, final_amount, paid, deadline, source_format, target_journal, \
             created_at, updated_at, completed_at \
             FROM projects {where_clause}ORDER BY created_at"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }

    /// Every client, oldest first.
    pub async fn fetch_all_clients(&self) -> Result<Vec<Client>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, first_name, last_name, email, phone, institution, department, \
                 title, field_of_study, status, lead_source, lifetime_value, notes, \
                 created_at, updated_at, last_contact \
                 FROM clients ORDER BY created_at",
                (),
            )
            .await?;

        let mut clients = Vec::new();
        while let Some(row) = rows.next().await? {
            clients.push(row_to_client(&row)?);
        }
        Ok(clients)
    }

    /// Most recently created projects, for the dashboard.
    pub async fn recent_projects(&self, limit: u32) -> Result<Vec<Project>, DatabaseError> {
        self.list_projects(super::project::ProjectFilter::default(), limit)
            .await
    }

    /// Most recent communications, for the dashboard.
    pub async fn recent_communications(
        &self,
        limit: u32,
    ) -> Result<Vec<Communication>, DatabaseError> {
        self.list_communications(None, None, limit).await
    }
}
