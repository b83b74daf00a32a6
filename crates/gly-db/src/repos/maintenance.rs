//! Maintenance batches.
//!
//! The lifetime-value recompute walks every client, applies the pure
//! [`gly_reports::ltv::lifetime_value`] function to that client's projects,
//! and persists the result. Reports that read `lifetime_value` assume this
//! ran to completion first.

use crate::error::DatabaseError;
use crate::service::GalleyService;

impl GalleyService {
    /// Recompute and persist every client's lifetime value.
    ///
    /// Returns the number of clients updated.
    pub async fn recompute_lifetime_values(&self) -> Result<u32, DatabaseError> {
        let clients = self.fetch_all_clients().await?;
        let mut updated: u32 = 0;

        for client in clients {
            let projects = self.projects_for_client(&client.id).await?;
            let value = gly_reports::ltv::lifetime_value(&projects);
            self.set_lifetime_value(&client.id, value).await?;
            updated += 1;
        }

        tracing::info!(clients = updated, "lifetime values recomputed");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use gly_core::enums::ProjectStatus;

    use crate::repos::client::NewClient;
    use crate::repos::project::NewProject;
    use crate::test_support::test_service;
    use crate::updates::project::ProjectUpdateBuilder;

    #[tokio::test]
    async fn recompute_sets_value_from_completed_projects() {
        let svc = test_service().await;
        let client = svc
            .create_client(NewClient {
                first_name: "A".into(),
                last_name: "B".into(),
                email: "ltv@u.edu".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        // One completed project worth 450, one open project worth nothing yet.
        let done = svc
            .create_project(NewProject {
                client_id: client.id.clone(),
                title: "Done".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        for status in [
            ProjectStatus::Quoted,
            ProjectStatus::Approved,
            ProjectStatus::InProgress,
            ProjectStatus::Review,
            ProjectStatus::Completed,
        ] {
            svc.transition_project(&done.id, status).await.unwrap();
        }
        svc.update_project(
            &done.id,
            ProjectUpdateBuilder::new()
                .final_amount(Some(Decimal::from(450)))
                .build(),
        )
        .await
        .unwrap();

        svc.create_project(NewProject {
            client_id: client.id.clone(),
            title: "Open".into(),
            ..Default::default()
        })
        .await
        .unwrap();

        let updated = svc.recompute_lifetime_values().await.unwrap();
        assert_eq!(updated, 1);

        let fetched = svc.get_client(&client.id).await.unwrap();
        assert_eq!(fetched.lifetime_value, Decimal::from(450));
    }

    #[tokio::test]
    async fn recompute_resets_when_nothing_is_completed() {
        let svc = test_service().await;
        let client = svc
            .create_client(NewClient {
                first_name: "A".into(),
                last_name: "B".into(),
                email: "zero@u.edu".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        svc.recompute_lifetime_values().await.unwrap();
        let fetched = svc.get_client(&client.id).await.unwrap();
        assert_eq!(fetched.lifetime_value, Decimal::ZERO);
    }
}
