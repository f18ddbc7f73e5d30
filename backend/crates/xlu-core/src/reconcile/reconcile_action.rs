/// Which branch a row took during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    UpdatedById,
    UpdatedByEmail,
    Created,
}

impl ReconcileAction {
    pub fn is_update(self) -> bool {
        matches!(
            self,
            ReconcileAction::UpdatedById | ReconcileAction::UpdatedByEmail
        )
    }
}
