use crate::pages::dashboard::{
    components::{form::CashAdvanceForm, table::RequestTable},
    layout::DashboardLayout,
    types::project_rows,
    view_model::DashboardViewModel,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = DashboardViewModel::new();

    let rows = Signal::derive(move || {
        vm.requests_resource
            .get()
            .and_then(|result| result.ok())
            .map(|records| project_rows(&records))
            .unwrap_or_default()
    });

    view! {
        <DashboardLayout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Officer Dashboard"</h1>
                </div>
                <CashAdvanceForm state=vm.form_state action=vm.submit_action />
                <RequestTable rows=rows />
            </div>
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_composes_sidebar_form_and_listing() {
        let html = render_to_string(move || view! { <DashboardPage /> });
        assert!(html.contains("Officer Dashboard"));
        assert!(html.contains("Dashboard Overview"));
        assert!(html.contains("Submit Cash Advance"));
        assert!(html.contains("Request ID"));
    }
}
