use crate::api::{ApiError, CreateCashAdvanceRequest};
use crate::pages::dashboard::utils::CashAdvanceFormState;
use leptos::*;
use serde_json::Value;

#[component]
pub fn CashAdvanceForm(
    state: CashAdvanceFormState,
    action: Action<CreateCashAdvanceRequest, Result<Value, ApiError>>,
) -> impl IntoView {
    let pending = action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        action.dispatch(state.to_payload());
    };

    let amount = state.amount_signal();
    let purpose = state.purpose_signal();
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-gray-900">"New Cash Advance"</h3>
                <p class="text-sm text-gray-600">"Enter the amount and what it is for, then submit the request."</p>
            </div>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Amount"</label>
                    <input
                        type="number"
                        required=true
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Purpose"</label>
                    <textarea
                        required=true
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || purpose.get()
                        on:input=move |ev| purpose.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit Cash Advance" }}
                </button>
            </form>
        </div>
    }
}
