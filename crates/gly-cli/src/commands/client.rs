//! Handlers for `gly client ...`.

use gly_core::entities::Client;
use gly_core::enums::{ClientStatus, LeadSource};
use gly_db::repos::client::NewClient;
use gly_db::updates::client::ClientUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &ClientCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClientCommands::Create {
            first_name,
            last_name,
            email,
            phone,
            institution,
            department,
            title,
            field_of_study,
            status,
            lead_source,
            notes,
        } => {
            let status = match status.as_deref() {
                Some(raw) => parse_enum::<ClientStatus>(raw, "status")?,
                None => ClientStatus::Lead,
            };
            let lead_source = match lead_source.as_deref() {
                Some(raw) => parse_enum::<LeadSource>(raw, "lead-source")?,
                None => LeadSource::Website,
            };

            let client = ctx
                .service
                .create_client(NewClient {
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    email: email.clone(),
                    phone: phone.clone(),
                    institution: institution.clone(),
                    department: department.clone(),
                    title: title.clone(),
                    field_of_study: field_of_study.clone(),
                    status,
                    lead_source,
                    notes: notes.clone(),
                })
                .await?;
            output(&client, flags.format)
        }
        ClientCommands::Get { id } => {
            let client = ctx.service.get_client(id).await?;
            output(&client, flags.format)
        }
        ClientCommands::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
            institution,
            status,
            lead_source,
            notes,
        } => {
            let mut builder = ClientUpdateBuilder::new();
            if let Some(first_name) = first_name {
                builder = builder.first_name(first_name.clone());
            }
            if let Some(last_name) = last_name {
                builder = builder.last_name(last_name.clone());
            }
            if let Some(email) = email {
                builder = builder.email(email.clone());
            }
            if let Some(phone) = phone {
                builder = builder.phone(Some(phone.clone()));
            }
            if let Some(institution) = institution {
                builder = builder.institution(Some(institution.clone()));
            }
            if let Some(status) = status {
                builder = builder.status(parse_enum::<ClientStatus>(status, "status")?);
            }
            if let Some(lead_source) = lead_source {
                builder = builder.lead_source(parse_enum::<LeadSource>(lead_source, "lead-source")?);
            }
            if let Some(notes) = notes {
                builder = builder.notes(Some(notes.clone()));
            }

            let client = ctx.service.update_client(id, builder.build()).await?;
            output(&client, flags.format)
        }
        ClientCommands::List {
            status,
            search,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let status = status
                .as_deref()
                .map(|raw| parse_enum::<ClientStatus>(raw, "status"))
                .transpose()?;

            let mut clients: Vec<Client> = if let Some(query) = search {
                ctx.service.search_clients(query, limit).await?
            } else {
                ctx.service.list_clients(status, limit).await?
            };

            // FTS results still need the status narrowing applied.
            if search.is_some() {
                if let Some(status) = status {
                    clients.retain(|client| client.status == status);
                }
            }

            output(&clients, flags.format)
        }
        ClientCommands::Overview { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let overview = ctx.service.client_overview(limit).await?;
            output(&overview, flags.format)
        }
    }
}
