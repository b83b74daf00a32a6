//! Handlers for `gly comm ...`.

use gly_core::enums::{CommunicationType, Direction};
use gly_db::repos::communication::NewCommunication;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &CommCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommCommands::Log {
            client,
            project,
            communication_type,
            direction,
            subject,
            content,
        } => {
            let communication = ctx
                .service
                .log_communication(NewCommunication {
                    client_id: client.clone(),
                    project_id: project.clone(),
                    communication_type: parse_enum::<CommunicationType>(
                        communication_type,
                        "type",
                    )?,
                    direction: parse_enum::<Direction>(direction, "direction")?,
                    subject: subject.clone(),
                    content: content.clone(),
                })
                .await?;
            output(&communication, flags.format)
        }
        CommCommands::List {
            client,
            project,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let communications = ctx
                .service
                .list_communications(client.as_deref(), project.as_deref(), limit)
                .await?;
            output(&communications, flags.format)
        }
    }
}
