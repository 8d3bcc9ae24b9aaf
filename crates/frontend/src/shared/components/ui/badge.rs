use contracts::domain::a001_invoice::ExpiryStatus;
use leptos::prelude::*;

/// Badge showing how close an invoice is to its expiry date
#[component]
pub fn ExpiryBadge(#[prop(into)] status: Signal<ExpiryStatus>) -> impl IntoView {
    let class = move || match status.get() {
        ExpiryStatus::Expired => "badge badge--error",
        ExpiryStatus::ExpiringSoon => "badge badge--warning",
        ExpiryStatus::Fresh => "badge badge--success",
        ExpiryStatus::Unknown => "badge badge--neutral",
    };

    view! { <span class=class>{move || status.get().label()}</span> }
}
