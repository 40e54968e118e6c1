use crate::form::RowId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveExpenseRow(RowId),
    DeleteReceipt(i64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub action: ConfirmAction,
}

impl PendingConfirmation {
    pub fn remove_expense_row(row: RowId) -> Self {
        PendingConfirmation {
            title: "Delete Expense".into(),
            message: "Are you sure you want to remove this expense row?".into(),
            confirm_label: "Delete".into(),
            action: ConfirmAction::RemoveExpenseRow(row),
        }
    }

    pub fn delete_receipt(id: i64) -> Self {
        PendingConfirmation {
            title: "Delete Receipt".into(),
            message: "This will remove the receipt record and its PDF file.".into(),
            confirm_label: "Delete".into(),
            action: ConfirmAction::DeleteReceipt(id),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pending: Option<PendingConfirmation>,
    /// Set while a confirmed action is still running; the dialog stays up.
    busy: bool,
}

impl ModalState {
    pub fn open(&mut self, confirmation: PendingConfirmation) {
        self.pending = Some(confirmation);
        self.busy = false;
    }

    pub fn pending(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Hands out the action to run and marks the dialog busy.
    ///
    /// Returns `None` when nothing is pending or the action is already running.
    pub fn confirm(&mut self) -> Option<ConfirmAction> {
        if self.busy {
            return None;
        }
        let action = self.pending.as_ref()?.action;
        self.busy = true;
        Some(action)
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    /// Closes the dialog once `action` has completed. A dialog opened for
    /// anything else in the meantime stays up.
    pub fn finish(&mut self, action: ConfirmAction) -> bool {
        match &self.pending {
            Some(pending) if pending.action == action => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        self.pending = None;
        self.busy = false;
    }
}
