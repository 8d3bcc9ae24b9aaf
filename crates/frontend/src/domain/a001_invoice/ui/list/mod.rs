use crate::domain::a001_invoice::ui::dashboard::{InvoiceDashboardViewModel, MutationKey};
use crate::shared::components::ui::{Button, ExpiryBadge};
use crate::shared::icons::icon;
use crate::shared::number_format::format_price;
use chrono::Utc;
use contracts::domain::a001_invoice::{Invoice, SortKey};
use contracts::shared::format_date;
use leptos::prelude::*;

/// Таблица счетов: поиск, сортировка, отметка и удаление
#[component]
pub fn InvoiceTable(vm: InvoiceDashboardViewModel) -> impl IntoView {
    let rows = move || {
        let rows = vm.rows();
        if rows.is_empty() {
            return view! {
                <tr>
                    <td colspan="8" class="table__empty">"No invoices found"</td>
                </tr>
            }
            .into_any();
        }
        rows.into_iter()
            .map(|invoice| view! { <InvoiceRow vm=vm invoice=invoice /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="panel">
            <div class="panel__toolbar">
                <div class="search-box">
                    <span class="search-box__icon">{icon("search")}</span>
                    <input
                        type="text"
                        class="search-box__input"
                        placeholder="Search by item name..."
                        prop:value=move || vm.search.get()
                        on:input=move |ev| vm.search.set(event_target_value(&ev))
                    />
                </div>

                <select
                    class="form__select"
                    prop:value=move || vm.sort_key.get().map(|k| k.key()).unwrap_or_default()
                    on:change=move |ev| vm.sort_key.set(SortKey::from_key(&event_target_value(&ev)))
                >
                    <option value="">"Sort by"</option>
                    {SortKey::all()
                        .into_iter()
                        .map(|key| view! { <option value=key.key()>{key.label()}</option> })
                        .collect_view()}
                </select>

                <Button
                    variant="secondary"
                    title="Reload invoices"
                    disabled=Signal::derive(move || vm.loading.get())
                    on_click=Callback::new(move |_| vm.resync())
                >
                    {icon("refresh")}
                </Button>

                <Show when=move || vm.loading.get()>
                    <span class="panel__status">"Loading..."</span>
                </Show>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Invoice Number"</th>
                        <th>"Invoice Date"</th>
                        <th>"Item Name"</th>
                        <th class="table__cell--right">"Price"</th>
                        <th>"Expiry Date"</th>
                        <th>"Expiry"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn InvoiceRow(vm: InvoiceDashboardViewModel, invoice: Invoice) -> impl IntoView {
    let now = Utc::now();
    let highlighted = invoice.highlights_row_at(now);
    let status = invoice.expiry_status_at(now);
    let done = invoice.done;

    let key = StoredValue::new(MutationKey::Record(invoice.id.clone()));
    let busy = Signal::derive(move || key.with_value(|k| vm.is_busy(k)));

    let toggle_id = invoice.id.clone();
    let delete_id = invoice.id.clone();

    view! {
        <tr class="table__row" class:table__row--warning=highlighted class:table__row--done=done>
            <td>{invoice.invoice_number}</td>
            <td>{format_date(&invoice.invoice_date)}</td>
            <td>{invoice.item_name}</td>
            <td class="table__cell--right">{format_price(invoice.price)}</td>
            <td>{format_date(&invoice.expiry_date)}</td>
            <td>
                <ExpiryBadge status=Signal::derive(move || status) />
            </td>
            <td>
                <Button
                    variant=if done { "success" } else { "secondary" }
                    title="Toggle done"
                    disabled=busy
                    on_click=Callback::new(move |_| vm.toggle_done_command(toggle_id.clone()))
                >
                    {icon(if done { "check" } else { "clock" })}
                    {if done { " Done" } else { " Pending" }}
                </Button>
            </td>
            <td>
                <Button
                    variant="danger"
                    title="Delete invoice"
                    disabled=busy
                    on_click=Callback::new(move |_| vm.delete_command(delete_id.clone()))
                >
                    {icon("delete")}
                </Button>
            </td>
        </tr>
    }
}
