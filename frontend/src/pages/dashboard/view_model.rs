use crate::api::{ApiClient, ApiError, CreateCashAdvanceRequest};
use crate::pages::dashboard::{repository::CashAdvanceRepository, utils::CashAdvanceFormState};
use leptos::*;
use serde_json::Value;

/// Signals and async handles for the dashboard. The listing resource loads
/// once on mount and is never re-keyed; the submit action runs independently
/// and does not refresh the listing.
#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub form_state: CashAdvanceFormState,
    pub submit_action: Action<CreateCashAdvanceRequest, Result<Value, ApiError>>,
    pub requests_resource: Resource<(), Result<Vec<Value>, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(CashAdvanceRepository::new(api));

        let form_state = CashAdvanceFormState::default();

        let requests_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_requests().await }
            },
        );

        let submit_action = create_action(move |payload: &CreateCashAdvanceRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit(payload).await }
        });

        // The created record is logged and otherwise ignored; the upstream
        // system owns the identifier and status it assigned.
        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match result {
                    Ok(created) => log::info!("cash advance created: {}", created),
                    Err(err) => log::error!("cash advance submission failed: {}", err),
                }
            }
        });

        create_effect(move |_| {
            if let Some(Err(err)) = requests_resource.get() {
                log::error!("failed to load cash advance requests: {}", err);
            }
        });

        Self {
            form_state,
            submit_action,
            requests_resource,
        }
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
