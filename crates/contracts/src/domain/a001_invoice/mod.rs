pub mod aggregate;
pub mod charts;
pub mod expiry;
pub mod query;

pub use aggregate::{Invoice, InvoiceDraft, InvoiceForm, InvoiceId};
pub use expiry::ExpiryStatus;
pub use query::SortKey;
