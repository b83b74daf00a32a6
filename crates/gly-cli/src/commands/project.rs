//! Handlers for `gly project ...`.

use gly_core::entities::Project;
use gly_core::enums::{FileType, Priority, ProjectStatus, ProjectType};
use gly_db::repos::file::NewFile;
use gly_db::repos::project::{NewProject, ProjectFilter};
use gly_db::updates::project::ProjectUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_amount, parse_enum, parse_timestamp};
use crate::context::AppContext;
use crate::output::output;

#[allow(clippy::too_many_lines)]
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create {
            client,
            title,
            project_type,
            description,
            priority,
            quoted,
            deadline,
            source_format,
            target_journal,
        } => {
            let project_type = match project_type.as_deref() {
                Some(raw) => parse_enum::<ProjectType>(raw, "type")?,
                None => ProjectType::Custom,
            };
            let priority = match priority.as_deref() {
                Some(raw) => parse_enum::<Priority>(raw, "priority")?,
                None => Priority::Normal,
            };
            let quoted_amount = quoted
                .as_deref()
                .map(|raw| parse_amount(raw, "quoted"))
                .transpose()?;
            let deadline = deadline
                .as_deref()
                .map(|raw| parse_timestamp(raw, "deadline"))
                .transpose()?;

            let project = ctx
                .service
                .create_project(NewProject {
                    client_id: client.clone(),
                    title: title.clone(),
                    project_type,
                    description: description.clone(),
                    priority,
                    quoted_amount,
                    deadline,
                    source_format: source_format.clone(),
                    target_journal: target_journal.clone(),
                })
                .await?;
            output(&project, flags.format)
        }
        ProjectCommands::Get { id } => {
            let project = ctx.service.get_project(id).await?;
            output(&project, flags.format)
        }
        ProjectCommands::Update {
            id,
            title,
            project_type,
            description,
            priority,
            quoted,
            final_amount,
            paid,
            deadline,
            source_format,
            target_journal,
        } => {
            let mut builder = ProjectUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title.clone());
            }
            if let Some(project_type) = project_type {
                builder = builder.project_type(parse_enum::<ProjectType>(project_type, "type")?);
            }
            if let Some(description) = description {
                builder = builder.description(Some(description.clone()));
            }
            if let Some(priority) = priority {
                builder = builder.priority(parse_enum::<Priority>(priority, "priority")?);
            }
            if let Some(quoted) = quoted {
                builder = builder.quoted_amount(Some(parse_amount(quoted, "quoted")?));
            }
            if let Some(final_amount) = final_amount {
                builder = builder.final_amount(Some(parse_amount(final_amount, "final-amount")?));
            }
            if let Some(paid) = paid {
                builder = builder.paid(*paid);
            }
            if let Some(deadline) = deadline {
                builder = builder.deadline(Some(parse_timestamp(deadline, "deadline")?));
            }
            if let Some(source_format) = source_format {
                builder = builder.source_format(Some(source_format.clone()));
            }
            if let Some(target_journal) = target_journal {
                builder = builder.target_journal(Some(target_journal.clone()));
            }

            let project = ctx.service.update_project(id, builder.build()).await?;
            output(&project, flags.format)
        }
        ProjectCommands::List {
            status,
            priority,
            overdue,
            search,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let status = status
                .as_deref()
                .map(|raw| parse_enum::<ProjectStatus>(raw, "status"))
                .transpose()?;
            let priority = priority
                .as_deref()
                .map(|raw| parse_enum::<Priority>(raw, "priority"))
                .transpose()?;

            let mut projects: Vec<Project> = if let Some(query) = search {
                ctx.service.search_projects(query, limit).await?
            } else {
                ctx.service
                    .list_projects(
                        ProjectFilter {
                            status,
                            priority,
                            overdue: *overdue,
                        },
                        limit,
                    )
                    .await?
            };

            // FTS results still need the structured filters applied.
            if search.is_some() {
                if let Some(status) = status {
                    projects.retain(|project| project.status == status);
                }
                if let Some(priority) = priority {
                    projects.retain(|project| project.priority == priority);
                }
            }

            output(&projects, flags.format)
        }
        ProjectCommands::Transition { id, status } => {
            let status = parse_enum::<ProjectStatus>(status, "status")?;
            let project = ctx.service.transition_project(id, status).await?;
            output(&project, flags.format)
        }
        ProjectCommands::Attach {
            id,
            file_type,
            filename,
            path,
            description,
            version,
        } => {
            let file_type = parse_enum::<FileType>(file_type, "type")?;
            let file = ctx
                .service
                .attach_file(NewFile {
                    project_id: id.clone(),
                    file_type,
                    filename: filename.clone(),
                    path: path.clone(),
                    description: description.clone(),
                    version: version.clone(),
                })
                .await?;
            output(&file, flags.format)
        }
        ProjectCommands::Files { id } => {
            let files = ctx.service.files_for_project(id).await?;
            output(&files, flags.format)
        }
    }
}
