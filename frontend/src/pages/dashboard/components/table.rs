use crate::pages::dashboard::types::{status_badge_class, RequestRow};
use crate::utils::time::format_request_date;
use leptos::*;

/// Read-only listing of the collection endpoint's records. Renders the header
/// unconditionally and one body row per record; an empty or failed fetch
/// leaves the body empty.
#[component]
pub fn RequestTable(#[prop(into)] rows: Signal<Vec<RequestRow>>) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Request ID"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Amount"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Purpose"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Status"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Date"</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    <For
                        each=move || rows.get()
                        key=|row| row.id.clone()
                        children=move |row: RequestRow| {
                            let date = row
                                .request_date
                                .as_deref()
                                .map(format_request_date)
                                .unwrap_or_default();
                            let badge = status_badge_class(&row.status);
                            view! {
                                <tr>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{row.id.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{row.amount.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{row.purpose.clone()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                                        <span class=format!("inline-flex px-2 py-1 rounded-full text-xs font-medium {}", badge)>
                                            {row.status.clone()}
                                        </span>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{date}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::dashboard::types::project_rows;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn renders_one_row_per_record() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(project_rows(&[json!({
                "id": 1,
                "amount": 50,
                "purpose": "Food",
                "status": "pending",
                "request_date": "2024-01-01T00:00:00Z"
            })]));
            view! { <RequestTable rows=rows /> }
        });
        assert_eq!(html.matches("<td").count(), 5);
        assert!(html.contains("50"));
        assert!(html.contains("Food"));
        assert!(html.contains("pending"));
        assert!(html.contains("1/1/2024"));
    }

    #[test]
    fn empty_collection_renders_header_only() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(Vec::<RequestRow>::new());
            view! { <RequestTable rows=rows /> }
        });
        assert!(html.contains("Request ID"));
        assert_eq!(html.matches("<tr").count(), 1);
    }
}
