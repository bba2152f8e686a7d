//! Admin back-office pages. Both sit behind `AdminLayout`'s admin-only guard.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AdminLayout title="Dashboard">
            <p class="admin-layout__lead">"Welcome to the admin dashboard"</p>
        </AdminLayout>
    }
}

#[component]
pub fn AdminBatchesPage() -> impl IntoView {
    view! {
        <AdminLayout title="Batches">
            <p class="admin-layout__lead">"Manage lesson batches."</p>
        </AdminLayout>
    }
}
