use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{NewReceipt, NewReceiptItem};
use crate::money::{amount_or_zero, format_money, round_cents, Currency};
use crate::validate::{self, FieldErrors};

pub type RowId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReceiptField {
    StudentName,
    StudentClass,
    ItemName(RowId),
    Amount(RowId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseRow {
    pub id: RowId,
    pub item_name: String,
    pub amount: String,
}

impl ExpenseRow {
    fn empty(id: RowId) -> Self {
        ExpenseRow {
            id,
            item_name: String::new(),
            amount: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormCommand {
    SetStudentName(String),
    SetStudentClass(String),
    SetDepartment(String),
    AddRow,
    RemoveRow(RowId),
    SetItemName(RowId, String),
    SetAmount(RowId, String),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("At least one expense row is required")]
    LastRow,
    #[error("Expense row {0} no longer exists")]
    UnknownRow(RowId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    pub fn labels(&self, currency: &Currency) -> TotalsView {
        TotalsView {
            subtotal: format_money(self.subtotal, currency),
            tax: format_money(self.tax, currency),
            total: format_money(self.total, currency),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TotalsView {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptForm {
    pub student_name: String,
    pub student_class: String,
    pub department: String,
    rows: Vec<ExpenseRow>,
    next_row: RowId,
    pub errors: FieldErrors<ReceiptField>,
}

impl Default for ReceiptForm {
    fn default() -> Self {
        ReceiptForm {
            student_name: String::new(),
            student_class: String::new(),
            department: String::new(),
            rows: vec![ExpenseRow::empty(0)],
            next_row: 1,
            errors: FieldErrors::default(),
        }
    }
}

impl ReceiptForm {
    pub fn rows(&self) -> &[ExpenseRow] {
        &self.rows
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut ExpenseRow, FormError> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(FormError::UnknownRow(id))
    }

    pub fn check_removal(&self, id: RowId) -> Result<(), FormError> {
        if !self.rows.iter().any(|r| r.id == id) {
            return Err(FormError::UnknownRow(id));
        }
        if self.rows.len() <= 1 {
            return Err(FormError::LastRow);
        }
        Ok(())
    }

    pub fn apply(&mut self, command: FormCommand) -> Result<(), FormError> {
        match command {
            FormCommand::SetStudentName(value) => {
                self.errors.record(
                    ReceiptField::StudentName,
                    validate::required(&value, "Student name"),
                );
                self.student_name = value;
            }
            FormCommand::SetStudentClass(value) => {
                self.errors
                    .record(ReceiptField::StudentClass, validate::required(&value, "Class"));
                self.student_class = value;
            }
            FormCommand::SetDepartment(value) => self.department = value,
            FormCommand::AddRow => {
                let id = self.next_row;
                self.next_row += 1;
                self.rows.push(ExpenseRow::empty(id));
            }
            FormCommand::RemoveRow(id) => {
                self.check_removal(id)?;
                self.rows.retain(|r| r.id != id);
                self.errors.retain(|field| match field {
                    ReceiptField::ItemName(row) | ReceiptField::Amount(row) => row != id,
                    _ => true,
                });
            }
            FormCommand::SetItemName(id, value) => {
                let outcome = validate::required(&value, "Item name");
                self.row_mut(id)?.item_name = value;
                self.errors.record(ReceiptField::ItemName(id), outcome);
            }
            FormCommand::SetAmount(id, value) => {
                let outcome = validate::amount(&value);
                self.row_mut(id)?.amount = value;
                self.errors.record(ReceiptField::Amount(id), outcome);
            }
            FormCommand::Reset => *self = ReceiptForm {
                next_row: self.next_row + 1,
                rows: vec![ExpenseRow::empty(self.next_row)],
                ..ReceiptForm::default()
            },
        }
        Ok(())
    }

    /// Tax is not modelled; it is always zero and total equals subtotal.
    pub fn totals(&self) -> Totals {
        let subtotal = self
            .rows
            .iter()
            .map(|r| amount_or_zero(&r.amount))
            .fold(Decimal::ZERO, |acc, n| acc + n);
        Totals {
            subtotal,
            tax: Decimal::ZERO,
            total: subtotal,
        }
    }

    pub fn validate(&mut self) -> bool {
        let mut ok = self.errors.record(
            ReceiptField::StudentName,
            validate::required(&self.student_name, "Student name"),
        );
        ok &= self.errors.record(
            ReceiptField::StudentClass,
            validate::required(&self.student_class, "Class"),
        );
        let checks: Vec<_> = self
            .rows
            .iter()
            .map(|r| {
                (
                    r.id,
                    validate::required(&r.item_name, "Item name"),
                    validate::amount(&r.amount),
                )
            })
            .collect();
        for (id, name, amount) in checks {
            ok &= self.errors.record(ReceiptField::ItemName(id), name);
            ok &= self.errors.record(ReceiptField::Amount(id), amount);
        }
        ok
    }

    pub fn payload(&self) -> NewReceipt {
        NewReceipt {
            student_name: self.student_name.trim().to_string(),
            student_class: self.student_class.trim().to_string(),
            department: self.department.trim().to_string(),
            items: self
                .rows
                .iter()
                .map(|r| NewReceiptItem {
                    item_name: r.item_name.trim().to_string(),
                    amount: format!("{:.2}", round_cents(amount_or_zero(&r.amount))),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReceiptForm {
        let mut form = ReceiptForm::default();
        form.apply(FormCommand::SetStudentName(" Jane Doe ".into())).unwrap();
        form.apply(FormCommand::SetStudentClass("5B".into())).unwrap();
        form.apply(FormCommand::SetItemName(0, "Tuition".into())).unwrap();
        form.apply(FormCommand::SetAmount(0, "1500".into())).unwrap();
        form
    }

    #[test]
    fn starts_with_one_row() {
        let form = ReceiptForm::default();
        assert_eq!(form.rows().len(), 1);
    }

    #[test]
    fn row_count_never_drops_below_one() {
        let mut form = ReceiptForm::default();
        let script = [
            FormCommand::RemoveRow(0),
            FormCommand::AddRow,
            FormCommand::AddRow,
            FormCommand::RemoveRow(0),
            FormCommand::RemoveRow(1),
            FormCommand::RemoveRow(2),
            FormCommand::RemoveRow(2),
            FormCommand::AddRow,
            FormCommand::Reset,
            FormCommand::RemoveRow(4),
        ];
        for command in script {
            let _ = form.apply(command);
            assert!(!form.rows().is_empty());
        }
        assert_eq!(form.rows().len(), 1);
    }

    #[test]
    fn removing_last_row_is_refused() {
        let mut form = ReceiptForm::default();
        assert_eq!(form.check_removal(0), Err(FormError::LastRow));
        assert_eq!(form.apply(FormCommand::RemoveRow(0)), Err(FormError::LastRow));
        assert_eq!(form.check_removal(9), Err(FormError::UnknownRow(9)));
    }

    #[test]
    fn comma_amount_is_rejected_not_merged() {
        let mut form = filled();
        form.apply(FormCommand::SetAmount(0, "1,5".into())).unwrap();
        assert!(form.errors.get(ReceiptField::Amount(0)).is_some());
        assert_eq!(form.totals().subtotal, Decimal::ZERO);
        assert!(!form.validate());
    }

    #[test]
    fn subtotal_treats_garbage_as_zero() {
        let mut form = ReceiptForm::default();
        form.apply(FormCommand::AddRow).unwrap();
        form.apply(FormCommand::AddRow).unwrap();
        form.apply(FormCommand::SetAmount(0, "100.50".into())).unwrap();
        form.apply(FormCommand::SetAmount(1, "abc".into())).unwrap();
        form.apply(FormCommand::SetAmount(2, "20".into())).unwrap();
        let totals = form.totals();
        assert_eq!(totals.subtotal, Decimal::new(12050, 2));
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, totals.subtotal);

        let labels = totals.labels(&Currency::default());
        assert_eq!(labels.subtotal, "₦120.50");
        assert_eq!(labels.tax, "₦0.00");
        assert_eq!(labels.total, "₦120.50");
    }

    #[test]
    fn empty_student_name_fails_validation() {
        let mut form = filled();
        form.apply(FormCommand::SetStudentName("   ".into())).unwrap();
        assert!(!form.validate());
        assert_eq!(
            form.errors.get(ReceiptField::StudentName),
            Some("Student name is required")
        );
    }

    #[test]
    fn full_validation_covers_every_row() {
        let mut form = filled();
        form.apply(FormCommand::AddRow).unwrap();
        assert!(!form.validate());
        assert_eq!(form.errors.get(ReceiptField::ItemName(1)), Some("Item name is required"));
        assert_eq!(form.errors.get(ReceiptField::Amount(1)), Some("Amount is required"));

        form.apply(FormCommand::RemoveRow(1)).unwrap();
        assert!(form.errors.get(ReceiptField::Amount(1)).is_none());
        assert!(form.validate());
    }

    #[test]
    fn input_revalidates_the_edited_field() {
        let mut form = ReceiptForm::default();
        form.apply(FormCommand::SetAmount(0, "-3".into())).unwrap();
        assert_eq!(form.errors.get(ReceiptField::Amount(0)), Some("Amount must be 0 or greater"));
        form.apply(FormCommand::SetAmount(0, "3".into())).unwrap();
        assert!(form.errors.get(ReceiptField::Amount(0)).is_none());
    }

    #[test]
    fn payload_is_trimmed_with_two_decimals() {
        let mut form = filled();
        form.apply(FormCommand::SetDepartment("  Science ".into())).unwrap();
        let payload = form.payload();
        assert_eq!(payload.student_name, "Jane Doe");
        assert_eq!(payload.department, "Science");
        assert_eq!(payload.items[0].item_name, "Tuition");
        assert_eq!(payload.items[0].amount, "1500.00");
    }

    #[test]
    fn reset_leaves_one_fresh_row() {
        let mut form = filled();
        form.apply(FormCommand::AddRow).unwrap();
        form.apply(FormCommand::Reset).unwrap();
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.student_name, "");
        assert!(form.errors.is_empty());
        assert_eq!(form.rows()[0].amount, "");
        // Fresh id so stale row callbacks cannot touch the new row.
        assert_ne!(form.rows()[0].id, 0);
    }
}
