use crate::domain::a001_invoice::ui::dashboard::InvoiceDashboardViewModel;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::number_format::format_price;
use chrono::Utc;
use contracts::domain::a001_invoice::charts::{expired_chart, price_trend_chart};
use leptos::prelude::*;

/// Цены по счетам: выполненные и ожидающие отдельными сериями
#[component]
pub fn PriceTrendChart(vm: InvoiceDashboardViewModel) -> impl IntoView {
    let data = Memo::new(move |_| vm.invoices.with(|invoices| price_trend_chart(invoices)));

    view! {
        <div class="panel">
            <div class="panel__summary">
                <span>"Done: " {move || format_price(data.get().total(0))}</span>
                <span>"Pending: " {move || format_price(data.get().total(1))}</span>
            </div>
            <BarChart data=data empty_text="No invoices yet" />
        </div>
    }
}

#[component]
pub fn ExpiredChart(vm: InvoiceDashboardViewModel) -> impl IntoView {
    let data = Memo::new(move |_| vm.invoices.with(|invoices| expired_chart(invoices, Utc::now())));

    view! {
        <div class="panel">
            <div class="panel__summary">
                <span>"Expired value: " {move || format_price(data.get().total(0))}</span>
            </div>
            <BarChart data=data empty_text="No expired invoices" />
        </div>
    }
}
