use super::state::ActivePanel;
use crate::domain::a001_invoice::api;
use crate::shared::request_guard::{InFlightGuard, ResyncSequencer};
use crate::shared::toast::ToastService;
use contracts::domain::a001_invoice::{query, Invoice, InvoiceForm, InvoiceId, SortKey};
use contracts::shared::ApiError;
use leptos::prelude::*;
use std::future::Future;

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this invoice?";

/// What a running mutation is about; at most one mutation per key
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MutationKey {
    Create,
    Record(InvoiceId),
}

impl MutationKey {
    /// Уведомление, когда такая же операция уже выполняется
    pub fn busy_message(&self) -> &'static str {
        match self {
            Self::Create => "An invoice is already being added",
            Self::Record(_) => "This invoice is already being updated",
        }
    }
}

/// View state of the invoice dashboard.
///
/// Owned by `InvoiceDashboard` and handed to the sidebar and panels as a prop.
/// The collection is only ever replaced wholesale by [`Self::resync`].
#[derive(Clone, Copy)]
pub struct InvoiceDashboardViewModel {
    pub invoices: RwSignal<Vec<Invoice>>,
    pub search: RwSignal<String>,
    pub sort_key: RwSignal<Option<SortKey>>,
    pub form: RwSignal<InvoiceForm>,
    pub active_panel: RwSignal<ActivePanel>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    in_flight: RwSignal<InFlightGuard<MutationKey>>,
    resync_seq: StoredValue<ResyncSequencer>,
    toasts: ToastService,
}

impl InvoiceDashboardViewModel {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            invoices: RwSignal::new(Vec::new()),
            search: RwSignal::new(String::new()),
            sort_key: RwSignal::new(None),
            form: RwSignal::new(InvoiceForm::default()),
            active_panel: RwSignal::new(ActivePanel::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            in_flight: RwSignal::new(InFlightGuard::default()),
            resync_seq: StoredValue::new(ResyncSequencer::default()),
            toasts,
        }
    }

    /// Rows for the table: search filter, then the selected sort
    pub fn rows(&self) -> Vec<Invoice> {
        self.invoices.with(|invoices| {
            query::visible_rows(invoices, &self.search.get(), self.sort_key.get())
        })
    }

    pub fn is_busy(&self, key: &MutationKey) -> bool {
        self.in_flight.with(|guard| guard.is_active(key))
    }

    pub fn show_panel(&self, panel: ActivePanel) {
        self.active_panel.set(panel);
    }

    /// Re-fetch the whole collection; the only path that writes `invoices`
    pub fn resync(&self) {
        let mut ticket = 0;
        self.resync_seq.update_value(|seq| ticket = seq.issue());
        self.loading.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::list_invoices().await;

            let mut accepted = false;
            vm.resync_seq.update_value(|seq| accepted = seq.accept(ticket));
            if !accepted {
                log::debug!("dropping stale invoice list (ticket {})", ticket);
                return;
            }
            vm.loading
                .set(vm.resync_seq.with_value(|seq| seq.is_pending()));

            match result {
                Ok(invoices) => {
                    log::debug!("loaded {} invoices", invoices.len());
                    vm.invoices.set(invoices);
                    vm.error.set(None);
                }
                Err(e) => vm.report_error(&e),
            }
        });
    }

    /// Submit the form; on success the form is cleared
    pub fn create_command(&self) {
        let draft = match self.form.get_untracked().to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.report_error(&e);
                return;
            }
        };

        self.run_mutation(
            MutationKey::Create,
            async move { api::create_invoice(&draft).await },
            |vm| {
                vm.form.set(InvoiceForm::default());
                vm.toasts.success("Invoice added successfully!");
            },
        );
    }

    /// Delete after the user confirms
    pub fn delete_command(&self, id: InvoiceId) {
        let key = MutationKey::Record(id.clone());
        if self.in_flight.with_untracked(|guard| guard.is_active(&key)) {
            self.toasts.info(key.busy_message());
            return;
        }
        if !confirm(DELETE_CONFIRMATION) {
            return;
        }

        self.run_mutation(
            key,
            async move { api::delete_invoice(&id).await },
            |vm| vm.toasts.success("Invoice deleted successfully!"),
        );
    }

    pub fn toggle_done_command(&self, id: InvoiceId) {
        self.run_mutation(
            MutationKey::Record(id.clone()),
            async move { api::toggle_done(&id).await },
            |vm| vm.toasts.info("Invoice status updated!"),
        );
    }

    /// Run one mutation under the in-flight guard, then resync whatever the outcome
    fn run_mutation<Fut>(&self, key: MutationKey, request: Fut, on_success: impl FnOnce(Self) + 'static)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let mut started = false;
        self.in_flight
            .update(|guard| started = guard.try_begin(key.clone()));
        if !started {
            log::info!("mutation {:?} already in flight, ignoring", key);
            self.toasts.info(key.busy_message());
            return;
        }

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            vm.in_flight.update(|guard| guard.finish(&key));

            match result {
                Ok(()) => on_success(vm),
                Err(e) => vm.report_error(&e),
            }
            vm.resync();
        });
    }

    fn report_error(&self, error: &ApiError) {
        log::error!("{}", error);
        self.toasts.error(error.user_message());
        if !matches!(error, ApiError::Validation(_)) {
            self.error.set(Some(error.user_message()));
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_message_depends_on_mutation() {
        assert_eq!(MutationKey::Create.busy_message(), "An invoice is already being added");
        assert_eq!(
            MutationKey::Record(InvoiceId::new("65f1c0")).busy_message(),
            "This invoice is already being updated"
        );
    }
}
