use crate::domain::a001_invoice::ui::dashboard::{InvoiceDashboardViewModel, MutationKey};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::a001_invoice::InvoiceForm;
use leptos::prelude::*;

/// Форма добавления счета
#[component]
pub fn InvoiceFormPanel(vm: InvoiceDashboardViewModel) -> impl IntoView {
    let submitting = Signal::derive(move || vm.is_busy(&MutationKey::Create));
    let can_submit = Signal::derive(move || !submitting.get() && vm.form.with(|f| f.is_complete()));

    view! {
        <form
            class="form panel"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.create_command();
            }
        >
            <FormField
                vm=vm
                label="Invoice Number"
                input_type="text"
                get=|f| f.invoice_number.clone()
                set=|f, v| f.invoice_number = v
            />
            <FormField
                vm=vm
                label="Invoice Date"
                input_type="date"
                get=|f| f.invoice_date.clone()
                set=|f, v| f.invoice_date = v
            />
            <FormField
                vm=vm
                label="Item Name"
                input_type="text"
                get=|f| f.item_name.clone()
                set=|f, v| f.item_name = v
            />
            <FormField
                vm=vm
                label="Price"
                input_type="number"
                get=|f| f.price.clone()
                set=|f, v| f.price = v
            />
            <FormField
                vm=vm
                label="Expiry Date"
                input_type="date"
                get=|f| f.expiry_date.clone()
                set=|f, v| f.expiry_date = v
            />

            <div class="form__actions">
                <Button
                    variant="primary"
                    button_type="submit"
                    disabled=Signal::derive(move || !can_submit.get())
                >
                    {icon("plus")}
                    {move || if submitting.get() { " Saving..." } else { " Add Invoice" }}
                </Button>
            </div>
        </form>
    }
}

#[component]
fn FormField(
    vm: InvoiceDashboardViewModel,
    label: &'static str,
    input_type: &'static str,
    get: fn(&InvoiceForm) -> String,
    set: fn(&mut InvoiceForm, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type
                step=if input_type == "number" { Some("0.01") } else { None }
                min=if input_type == "number" { Some("0") } else { None }
                required=true
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}
