pub mod reconcile_action;
pub mod reconcile_summary;
pub mod reconciler;
