//! Row reconciliation
//!
//! Decides, for each incoming spreadsheet row, whether it updates an existing
//! user (matched by id, then by email) or creates a new one, and applies the
//! mutation through a [`UserStore`].

use crate::{ReconcileAction, ReconcileSummary, Result, SheetRow, UserRecord, UserStore};

use log::{debug, info};

pub struct Reconciler<'a, S: UserStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: UserStore + ?Sized> Reconciler<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Apply a single row: exactly one insert or update.
    ///
    /// Rows with a blank email are still processed; they can only match by id.
    pub async fn apply(&self, row: SheetRow) -> Result<ReconcileAction> {
        let (mut record, action) = self.resolve(&row).await?;

        // Incoming values always win, including empty ones.
        record.username = row.username;
        record.city = row.city;
        record.email = row.email;

        let saved = self.store.save(record).await?;
        debug!("Saved user {:?} ({:?})", saved.id, action);

        Ok(action)
    }

    /// Apply every row in order, stopping at the first failure.
    ///
    /// There is no rollback: rows saved before a failing row stay saved.
    pub async fn apply_all<I>(&self, rows: I) -> Result<ReconcileSummary>
    where
        I: IntoIterator<Item = Result<SheetRow>>,
    {
        let mut summary = ReconcileSummary::default();

        for row in rows {
            let action = self.apply(row?).await?;
            summary.record(action);
        }

        info!(
            "Reconciled {} rows: {} updated, {} created",
            summary.total(),
            summary.updated,
            summary.created
        );

        Ok(summary)
    }

    async fn resolve(&self, row: &SheetRow) -> Result<(UserRecord, ReconcileAction)> {
        if let Some(id) = row.id
            && let Some(existing) = self.store.find_by_id(id).await?
        {
            debug!("Updating user with ID {}", id);
            return Ok((existing, ReconcileAction::UpdatedById));
        }

        if let Some(email) = row.lookup_email()
            && let Some(existing) = self.store.find_by_email(email).await?
        {
            debug!("Updating user by email: {}", email);
            return Ok((existing, ReconcileAction::UpdatedByEmail));
        }

        debug!("Creating new user: {}", row.username);
        Ok((
            UserRecord::new(String::new(), String::new(), String::new()),
            ReconcileAction::Created,
        ))
    }
}
