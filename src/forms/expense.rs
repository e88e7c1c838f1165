use chrono::NaiveDate;

use super::FormMessages;
use crate::models::{Expense, ExpensePayload, ExpenseType};
use crate::validation::{date_input, is_blank, is_positive_amount, parse_amount, FieldErrors};

pub const MESSAGES: FormMessages = FormMessages {
    created: "Pengeluaran berhasil ditambahkan",
    updated: "Pengeluaran berhasil diperbarui",
    invalid: "Mohon perbaiki kesalahan di formulir",
    create_failed: "Gagal mencatat pengeluaran",
    update_failed: "Gagal memperbarui pengeluaran",
};

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub expense_type: ExpenseType,
    /// Raw number input.
    pub amount: String,
    pub expense_date: String,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            expense_type: ExpenseType::default(),
            amount: String::new(),
            expense_date: date_input(today),
        }
    }

    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            expense_type: expense.expense_type,
            amount: expense.amount.to_string(),
            expense_date: crate::format::date_only(&expense.expense_date).to_string(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.description) {
            errors.insert("description", "Deskripsi pengeluaran wajib diisi");
        }
        if is_blank(&self.expense_date) {
            errors.insert("expense_date", "Tanggal pengeluaran wajib diisi");
        }
        if !is_positive_amount(&self.amount) {
            errors.insert(
                "amount",
                "Jumlah pengeluaran wajib diisi dan harus lebih dari 0",
            );
        }
        errors
    }

    pub fn payload(&self) -> ExpensePayload {
        ExpensePayload {
            description: self.description.trim().to_string(),
            expense_type: self.expense_type,
            amount: parse_amount(&self.amount).unwrap_or_default(),
            expense_date: self.expense_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_expense_defaults_to_today() {
        let form = ExpenseForm::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(form.expense_date, "2024-03-09");
        assert_eq!(form.expense_type, ExpenseType::Security);
    }

    #[test]
    fn amount_must_be_positive() {
        let mut form = ExpenseForm::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        form.description = "Gaji satpam".to_string();
        form.amount = "0".to_string();
        assert!(form.validate().has("amount"));

        form.amount = "50000".to_string();
        assert!(form.validate().is_empty());
        assert_eq!(form.payload().amount, 50000.0);
    }

    #[test]
    fn missing_description_and_date_are_reported() {
        let form = ExpenseForm {
            description: String::new(),
            expense_type: ExpenseType::Other,
            amount: "1000".to_string(),
            expense_date: String::new(),
        };
        let errors = form.validate();
        assert!(errors.has("description"));
        assert!(errors.has("expense_date"));
        assert!(!errors.has("amount"));
    }
}
