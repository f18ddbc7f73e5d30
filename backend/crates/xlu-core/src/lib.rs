pub mod error;
pub mod models;
pub mod reconcile;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::sheet_row::SheetRow;
pub use models::user_record::UserRecord;
pub use reconcile::reconcile_action::ReconcileAction;
pub use reconcile::reconcile_summary::ReconcileSummary;
pub use reconcile::reconciler::Reconciler;
pub use store::UserStore;
