//! Project repository — CRUD, FTS, pipeline transitions, and filtered lists.

use chrono::Utc;
use rust_decimal::Decimal;

use gly_core::entities::Project;
use gly_core::enums::{Priority, ProjectStatus, ProjectType};
use gly_core::ids::PREFIX_PROJECT;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_decimal, get_opt_string, parse_datetime, parse_enum, parse_optional_datetime,
};
use crate::service::GalleyService;
use crate::updates::project::ProjectUpdate;

const SELECT_COLS: &str = "id, client_id, title, project_type, description, status, priority, \
     quoted_amount, final_amount, paid, deadline, source_format, target_journal, \
     created_at, updated_at, completed_at";

pub(crate) fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        client_id: row.get(1)?,
        title: row.get(2)?,
        project_type: parse_enum(&row.get::<String>(3)?)?,
        description: get_opt_string(row, 4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        priority: parse_enum(&row.get::<String>(6)?)?,
        quoted_amount: get_opt_decimal(row, 7)?,
        final_amount: get_opt_decimal(row, 8)?,
        paid: row.get::<i64>(9)? != 0,
        deadline: parse_optional_datetime(get_opt_string(row, 10)?.as_deref())?,
        source_format: get_opt_string(row, 11)?,
        target_journal: get_opt_string(row, 12)?,
        created_at: parse_datetime(&row.get::<String>(13)?)?,
        updated_at: parse_datetime(&row.get::<String>(14)?)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 15)?.as_deref())?,
    })
}

/// Fields for a new project. Every project enters the pipeline at `inquiry`.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub client_id: String,
    pub title: String,
    pub project_type: ProjectType,
    pub description: Option<String>,
    pub priority: Priority,
    pub quoted_amount: Option<Decimal>,
    pub deadline: Option<chrono::DateTime<Utc>>,
    pub source_format: Option<String>,
    pub target_journal: Option<String>,
}

impl Default for NewProject {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            title: String::new(),
            project_type: ProjectType::Custom,
            description: None,
            priority: Priority::Normal,
            quoted_amount: None,
            deadline: None,
            source_format: None,
            target_journal: None,
        }
    }
}

/// Filters for `list_projects`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    /// Restrict to open-pipeline projects whose deadline has passed.
    pub overdue: bool,
}

impl GalleyService {
    pub async fn create_project(&self, new: NewProject) -> Result<Project, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROJECT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO projects ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
                ),
                libsql::params![
                    id.as_str(),
                    new.client_id.as_str(),
                    new.title.as_str(),
                    new.project_type.as_str(),
                    new.description.as_deref(),
                    ProjectStatus::Inquiry.as_str(),
                    new.priority.as_str(),
                    new.quoted_amount.map(|amount| amount.to_string()),
                    Option::<String>::None,
                    0_i64,
                    new.deadline.map(|deadline| deadline.to_rfc3339()),
                    new.source_format.as_deref(),
                    new.target_journal.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339(),
                    Option::<String>::None
                ],
            )
            .await?;

        Ok(Project {
            id,
            client_id: new.client_id,
            title: new.title,
            project_type: new.project_type,
            description: new.description,
            status: ProjectStatus::Inquiry,
            priority: new.priority,
            quoted_amount: new.quoted_amount,
            final_amount: None,
            paid: false,
            deadline: new.deadline,
            source_format: new.source_format,
            target_journal: new.target_journal,
            created_at: now,
            updated_at: now,
            completed_at: None,
        })
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM projects WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_project(&row)
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        update: ProjectUpdate,
    ) -> Result<Project, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref project_type) = update.project_type {
            sets.push(format!("project_type = ?{idx}"));
            params.push(project_type.as_str().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref priority) = update.priority {
            sets.push(format!("priority = ?{idx}"));
            params.push(priority.as_str().into());
            idx += 1;
        }
        if let Some(ref quoted_amount) = update.quoted_amount {
            sets.push(format!("quoted_amount = ?{idx}"));
            params.push(
                quoted_amount
                    .map(|amount| amount.to_string())
                    .map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }
        if let Some(ref final_amount) = update.final_amount {
            sets.push(format!("final_amount = ?{idx}"));
            params.push(
                final_amount
                    .map(|amount| amount.to_string())
                    .map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }
        if let Some(paid) = update.paid {
            sets.push(format!("paid = ?{idx}"));
            params.push(i64::from(paid).into());
            idx += 1;
        }
        if let Some(ref deadline) = update.deadline {
            sets.push(format!("deadline = ?{idx}"));
            params.push(
                deadline
                    .map(|deadline| deadline.to_rfc3339())
                    .map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }
        if let Some(ref source_format) = update.source_format {
            sets.push(format!("source_format = ?{idx}"));
            params.push(source_format.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref target_journal) = update.target_journal {
            sets.push(format!("target_journal = ?{idx}"));
            params.push(target_journal.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_project(project_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(project_id.into());
        let sql = format!("UPDATE projects SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_project(project_id).await
    }

    /// Move a project to the next pipeline stage.
    ///
    /// Enforces the state machine and stamps `completed_at` exactly when the
    /// project enters `completed` (the invariant: non-null iff completed).
    pub async fn transition_project(
        &self,
        project_id: &str,
        new_status: ProjectStatus,
    ) -> Result<Project, DatabaseError> {
        let current = self.get_project(project_id).await?;

        if !current.status.can_transition_to(new_status) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot transition project {} from {} to {}",
                project_id, current.status, new_status
            )));
        }

        let now = Utc::now();
        let completed_at = (new_status == ProjectStatus::Completed).then_some(now);

        self.db()
            .conn()
            .execute(
                "UPDATE projects SET status = ?1, updated_at = ?2, completed_at = ?3 WHERE id = ?4",
                libsql::params![
                    new_status.as_str(),
                    now.to_rfc3339(),
                    completed_at.map(|at| at.to_rfc3339()),
                    project_id
                ],
            )
            .await?;

        tracing::debug!(
            project_id,
            from = %current.status,
            to = %new_status,
            "project transitioned"
        );

        Ok(Project {
            status: new_status,
            updated_at: now,
            completed_at,
            ..current
        })
    }

    pub async fn list_projects(
        &self,
        filter: ProjectFilter,
        limit: u32,
    ) -> Result<Vec<Project>, DatabaseError> {
        let mut wheres = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(status) = filter.status {
            wheres.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(priority) = filter.priority {
            wheres.push(format!("priority = ?{idx}"));
            params.push(priority.as_str().into());
            idx += 1;
        }
        if filter.overdue {
            wheres.push(format!(
                "deadline IS NOT NULL AND deadline < ?{idx} \
                 AND status IN ('quoted', 'approved', 'in_progress', 'review')"
            ));
            params.push(Utc::now().to_rfc3339().into());
        }

        let where_clause = if wheres.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", wheres.join(" AND "))
        };
        let sql = format!(
            "SELECT {SELECT_COLS} FROM projects {where_clause}ORDER BY created_at DESC LIMIT {limit}"
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

    /// Full-text search over title, description, and target journal.
    pub async fn search_projects(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT p.id, p.client_id, p.title, p.project_type, p.description, p.status, \
                     p.priority, p.quoted_amount, p.final_amount, p.paid, p.deadline, \
                     p.source_format, p.target_journal, p.created_at, p.updated_at, p.completed_at \
                     FROM projects_fts \
                     JOIN projects p ON p.rowid = projects_fts.rowid \
                     WHERE projects_fts MATCH ?1 \
                     ORDER BY rank LIMIT ?2"
                ),
                libsql::params![query, limit],
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }

    pub async fn projects_for_client(
        &self,
        client_id: &str,
    ) -> Result<Vec<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM projects WHERE client_id = ?1 ORDER BY created_at DESC"
                ),
                [client_id],
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }
}
