use crate::components::sidebar::Sidebar;
use leptos::*;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex">
            <Sidebar/>
            <main class="flex-1 py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}
