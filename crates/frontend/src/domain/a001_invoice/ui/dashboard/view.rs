use super::state::ActivePanel;
use super::view_model::InvoiceDashboardViewModel;
use crate::domain::a001_invoice::ui::charts::{ExpiredChart, PriceTrendChart};
use crate::domain::a001_invoice::ui::details::InvoiceFormPanel;
use crate::domain::a001_invoice::ui::list::InvoiceTable;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use leptos::prelude::*;

#[component]
pub fn InvoiceDashboard() -> impl IntoView {
    let vm = InvoiceDashboardViewModel::new(use_toasts());

    // Первичная загрузка при монтировании
    vm.resync();

    view! {
        <Shell
            left=move || view! { <Sidebar active=vm.active_panel /> }.into_any()
            center=move || view! { <DashboardContent vm=vm /> }.into_any()
        />
    }
}

#[component]
fn DashboardContent(vm: InvoiceDashboardViewModel) -> impl IntoView {
    let panel = move || match vm.active_panel.get() {
        ActivePanel::Table => view! { <InvoiceTable vm=vm /> }.into_any(),
        ActivePanel::Chart => view! { <PriceTrendChart vm=vm /> }.into_any(),
        ActivePanel::Expired => view! { <ExpiredChart vm=vm /> }.into_any(),
        ActivePanel::Form => view! { <InvoiceFormPanel vm=vm /> }.into_any(),
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__header">
                <h1 class="dashboard__title">"EXP STOCK MANAGEMENT"</h1>
                <span class="dashboard__subtitle">{move || vm.active_panel.get().label()}</span>
            </div>

            {move || {
                vm.error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">{icon("alert")}</span>
                                <span class="warning-box__text">{message}</span>
                            </div>
                        }
                    })
            }}

            <div class="dashboard__panel">{panel}</div>
        </div>
    }
}
