use leptos::*;

/// Static navigation panel. `/requests` and `/logout` have no routed view in
/// this client; the links are part of the portal shell.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 bg-white border-r border-gray-200 min-h-screen">
            <div class="px-4 py-6">
                <h2 class="text-lg font-semibold text-gray-900">"Cashdesk"</h2>
            </div>
            <nav class="px-2">
                <ul class="space-y-1">
                    <li>
                        <a href="/dashboard" class="block text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50">
                            "Dashboard Overview"
                        </a>
                    </li>
                    <li>
                        <a href="/requests" class="block text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50">
                            "My Requests"
                        </a>
                    </li>
                    <li>
                        <a href="/logout" class="block text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50">
                            "Logout"
                        </a>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}
