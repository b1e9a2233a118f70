use crate::api::CreateCashAdvanceRequest;
use chrono::Utc;
use leptos::*;

// Placeholder until a session supplies the officer id.
pub const SUBMITTER_USER_ID: i64 = 1;

#[derive(Clone, Copy)]
pub struct CashAdvanceFormState {
    amount: RwSignal<String>,
    purpose: RwSignal<String>,
}

impl Default for CashAdvanceFormState {
    fn default() -> Self {
        Self {
            amount: create_rw_signal(String::new()),
            purpose: create_rw_signal(String::new()),
        }
    }
}

impl CashAdvanceFormState {
    pub fn amount_signal(&self) -> RwSignal<String> {
        self.amount
    }

    pub fn purpose_signal(&self) -> RwSignal<String> {
        self.purpose
    }

    /// Snapshot the fields into the POST body. The only submission guard is
    /// the native `required` attribute on the inputs, so this never fails;
    /// the request date is stamped from the client clock.
    pub fn to_payload(&self) -> CreateCashAdvanceRequest {
        CreateCashAdvanceRequest {
            amount: self.amount.get(),
            purpose: self.purpose.get(),
            user_id: SUBMITTER_USER_ID,
            request_date: Utc::now(),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn payload_carries_fields_and_fixed_submitter() {
        with_runtime(|| {
            let state = CashAdvanceFormState::default();
            state.amount_signal().set("100".into());
            state.purpose_signal().set("Travel".into());
            let payload = state.to_payload();
            assert_eq!(payload.amount, "100");
            assert_eq!(payload.purpose, "Travel");
            assert_eq!(payload.user_id, 1);
        });
    }

    #[test]
    fn payload_snapshots_whatever_the_fields_hold() {
        with_runtime(|| {
            let state = CashAdvanceFormState::default();
            let payload = state.to_payload();
            assert_eq!(payload.amount, "");
            assert_eq!(payload.purpose, "");
        });
    }
}
