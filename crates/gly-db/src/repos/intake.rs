//! Webhook intake — inbound contact-form inquiries.
//!
//! One inquiry produces: a client (created, or matched by email), an inquiry
//! project, and an inbound email communication. A bare lead is bumped to
//! contacted once the inquiry lands.

use gly_core::enums::{
    ClientStatus, CommunicationType, Direction, LeadSource, Priority, ProjectType,
};
use gly_core::responses::{InquiryPayload, InquiryReceipt};

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::repos::client::NewClient;
use crate::repos::communication::NewCommunication;
use crate::repos::project::NewProject;
use crate::service::GalleyService;
use crate::updates::client::ClientUpdateBuilder;

fn inquiry_project_type(raw: Option<&str>) -> ProjectType {
    // Unknown or missing tiers fall back to custom, like the contact form
    // has always been handled.
    raw.and_then(|value| parse_enum::<ProjectType>(value).ok())
        .unwrap_or(ProjectType::Custom)
}

fn inquiry_priority(timeline: Option<&str>) -> Priority {
    if timeline == Some("rush") {
        Priority::Urgent
    } else {
        Priority::Normal
    }
}

impl GalleyService {
    /// Ingest one contact-form inquiry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Payload` when the payload is missing an email,
    /// or any `DatabaseError` from the underlying inserts.
    pub async fn ingest_inquiry(
        &self,
        payload: &InquiryPayload,
    ) -> Result<InquiryReceipt, DatabaseError> {
        payload.validate()?;

        let (client, client_created) = match self.find_client_by_email(&payload.email).await? {
            Some(existing) => (existing, false),
            None => {
                let (first_name, last_name) = payload.split_name();
                let created = self
                    .create_client(NewClient {
                        first_name,
                        last_name,
                        email: payload.email.clone(),
                        institution: payload.institution.clone(),
                        status: ClientStatus::Lead,
                        lead_source: LeadSource::Website,
                        notes: payload
                            .description
                            .as_deref()
                            .map(|description| format!("Initial inquiry: {description}")),
                        ..Default::default()
                    })
                    .await?;
                (created, true)
            }
        };

        let type_label = payload.project_type.as_deref().unwrap_or("Unknown");
        let project = self
            .create_project(NewProject {
                client_id: client.id.clone(),
                title: format!("Project Inquiry - {type_label}"),
                project_type: inquiry_project_type(payload.project_type.as_deref()),
                description: payload.description.clone(),
                priority: inquiry_priority(payload.timeline.as_deref()),
                ..Default::default()
            })
            .await?;

        let communication = self
            .log_communication(NewCommunication {
                client_id: client.id.clone(),
                project_id: Some(project.id.clone()),
                communication_type: CommunicationType::Email,
                direction: Direction::Inbound,
                subject: format!(
                    "Website inquiry - {}",
                    payload.project_type.as_deref().unwrap_or("Project")
                ),
                content: payload.description.clone(),
            })
            .await?;

        let client = if client.status == ClientStatus::Lead {
            self.update_client(
                &client.id,
                ClientUpdateBuilder::new()
                    .status(ClientStatus::Contacted)
                    .build(),
            )
            .await?
        } else {
            self.get_client(&client.id).await?
        };

        tracing::info!(
            client_id = %client.id,
            project_id = %project.id,
            client_created,
            "inquiry ingested"
        );

        Ok(InquiryReceipt {
            client,
            client_created,
            project,
            communication,
        })
    }
}

#[cfg(test)]
mod tests {
    use gly_core::enums::ProjectStatus;

    use super::*;
    use crate::test_support::test_service;

    fn payload(email: &str) -> InquiryPayload {
        InquiryPayload {
            email: email.into(),
            name: Some("Maria Garcia".into()),
            institution: Some("UC Berkeley".into()),
            project_type: Some("standard_conversion".into()),
            description: Some("Need my thesis converted to LaTeX".into()),
            timeline: None,
        }
    }

    #[tokio::test]
    async fn new_inquiry_creates_client_project_and_communication() {
        let svc = test_service().await;
        let receipt = svc.ingest_inquiry(&payload("maria@berkeley.edu")).await.unwrap();

        assert!(receipt.client_created);
        assert_eq!(receipt.client.first_name, "Maria");
        assert_eq!(receipt.client.last_name, "Garcia");
        // Lead was bumped to contacted by the inquiry itself.
        assert_eq!(receipt.client.status, ClientStatus::Contacted);
        assert_eq!(receipt.client.lead_source, LeadSource::Website);

        assert_eq!(receipt.project.status, ProjectStatus::Inquiry);
        assert_eq!(receipt.project.project_type, ProjectType::StandardConversion);
        assert_eq!(receipt.project.priority, Priority::Normal);

        assert_eq!(receipt.communication.direction, Direction::Inbound);
        assert_eq!(
            receipt.communication.project_id.as_deref(),
            Some(receipt.project.id.as_str())
        );
    }

    #[tokio::test]
    async fn repeat_inquiry_reuses_client_by_email() {
        let svc = test_service().await;
        let first = svc.ingest_inquiry(&payload("repeat@u.edu")).await.unwrap();
        let second = svc.ingest_inquiry(&payload("repeat@u.edu")).await.unwrap();

        assert!(!second.client_created);
        assert_eq!(first.client.id, second.client.id);
        assert_ne!(first.project.id, second.project.id);

        let projects = svc.projects_for_client(&first.client.id).await.unwrap();
        assert_eq!(projects.len(), 2);
    }

    #[tokio::test]
    async fn rush_timeline_escalates_priority() {
        let svc = test_service().await;
        let receipt = svc
            .ingest_inquiry(&InquiryPayload {
                timeline: Some("rush".into()),
                ..payload("rush@u.edu")
            })
            .await
            .unwrap();
        assert_eq!(receipt.project.priority, Priority::Urgent);
    }

    #[tokio::test]
    async fn unknown_project_type_falls_back_to_custom() {
        let svc = test_service().await;
        let receipt = svc
            .ingest_inquiry(&InquiryPayload {
                project_type: Some("something_else".into()),
                ..payload("odd@u.edu")
            })
            .await
            .unwrap();
        assert_eq!(receipt.project.project_type, ProjectType::Custom);
        assert_eq!(receipt.project.title, "Project Inquiry - something_else");
    }

    #[tokio::test]
    async fn missing_email_is_rejected() {
        let svc = test_service().await;
        let result = svc
            .ingest_inquiry(&InquiryPayload {
                email: "  ".into(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::Payload(_))));
    }

    #[tokio::test]
    async fn active_client_status_is_untouched() {
        let svc = test_service().await;
        let first = svc.ingest_inquiry(&payload("active@u.edu")).await.unwrap();
        svc.update_client(
            &first.client.id,
            ClientUpdateBuilder::new().status(ClientStatus::Active).build(),
        )
        .await
        .unwrap();

        let second = svc.ingest_inquiry(&payload("active@u.edu")).await.unwrap();
        assert_eq!(second.client.status, ClientStatus::Active);
    }
}
