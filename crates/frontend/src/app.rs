use crate::domain::a001_invoice::ui::dashboard::InvoiceDashboard;
use crate::shared::toast::{ToastService, Toasts};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Уведомления доступны всем компонентам через контекст
    provide_context(ToastService::new());

    view! {
        <InvoiceDashboard />
        <Toasts />
    }
}
