//! Project file repository — attachment metadata only.

use chrono::Utc;

use gly_core::entities::ProjectFile;
use gly_core::enums::FileType;
use gly_core::ids::PREFIX_FILE;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::service::GalleyService;

const SELECT_COLS: &str =
    "id, project_id, file_type, filename, path, description, version, uploaded_at";

fn row_to_file(row: &libsql::Row) -> Result<ProjectFile, DatabaseError> {
    Ok(ProjectFile {
        id: row.get(0)?,
        project_id: row.get(1)?,
        file_type: parse_enum(&row.get::<String>(2)?)?,
        filename: row.get(3)?,
        path: row.get(4)?,
        description: get_opt_string(row, 5)?,
        version: get_opt_string(row, 6)?,
        uploaded_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

/// Fields for a new attachment record.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub project_id: String,
    pub file_type: FileType,
    pub filename: String,
    pub path: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

impl GalleyService {
    pub async fn attach_file(&self, new: NewFile) -> Result<ProjectFile, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_FILE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO project_files ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    new.project_id.as_str(),
                    new.file_type.as_str(),
                    new.filename.as_str(),
                    new.path.as_str(),
                    new.description.as_deref(),
                    new.version.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(ProjectFile {
            id,
            project_id: new.project_id,
            file_type: new.file_type,
            filename: new.filename,
            path: new.path,
            description: new.description,
            version: new.version,
            uploaded_at: now,
        })
    }

    pub async fn files_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectFile>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM project_files WHERE project_id = ?1 \
                     ORDER BY uploaded_at DESC"
                ),
                [project_id],
            )
            .await?;

        let mut files = Vec::new();
        while let Some(row) = rows.next().await? {
            files.push(row_to_file(&row)?);
        }
        Ok(files)
    }
}
