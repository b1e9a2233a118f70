use crate::api::{ApiClient, ApiError, CreateCashAdvanceRequest};
use serde_json::Value;
use std::rc::Rc;

#[derive(Clone)]
pub struct CashAdvanceRepository {
    client: Rc<ApiClient>,
}

impl CashAdvanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit(&self, payload: CreateCashAdvanceRequest) -> Result<Value, ApiError> {
        self.client.create_request(&payload).await
    }

    pub async fn list_requests(&self) -> Result<Vec<Value>, ApiError> {
        self.client.list_requests().await
    }
}
