//! Follow-up scan queries.
//!
//! Two populations need a nudge: leads that were never contacted after a few
//! days, and quotes that sat unanswered for a week. Drafting and delivery are
//! the caller's concern; this module only finds the records.

use chrono::{DateTime, Utc};

use gly_core::entities::{Client, Project};

use crate::error::DatabaseError;
use crate::repos::client::row_to_client;
use crate::repos::project::row_to_project;
use crate::service::GalleyService;

impl GalleyService {
    /// Leads created before `cutoff` that were never contacted.
    pub async fn stale_leads(&self, cutoff: DateTime<Utc>) -> Result<Vec<Client>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, first_name, last_name, email, phone, institution, department, \
                 title, field_of_study, status, lead_source, lifetime_value, notes, \
                 created_at, updated_at, last_contact \
                 FROM clients \
                 WHERE status = 'lead' AND created_at < ?1 AND last_contact IS NULL \
                 ORDER BY created_at",
                [cutoff.to_rfc3339()],
            )
            .await?;

        let mut clients = Vec::new();
        while let Some(row) = rows.next().await? {
            clients.push(row_to_client(&row)?);
        }
        Ok(clients)
    }

    /// Quotes not touched since `cutoff`.
    pub async fn pending_quotes(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, client_id, title, project_type, description, status, priority, \
                 quoted_amount, final_amount, paid, deadline, source_format, target_journal, \
                 created_at, updated_at, completed_at \
                 FROM projects \
                 WHERE status = 'quoted' AND updated_at < ?1 \
                 ORDER BY updated_at",
                [cutoff.to_rfc3339()],
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }
}
