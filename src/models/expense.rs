use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    #[default]
    Security,
    Cleaning,
    Maintenance,
    Other,
    #[serde(other)]
    Unknown,
}

impl ExpenseType {
    /// Types selectable in the expense form.
    pub const ALL: [ExpenseType; 4] = [
        Self::Security,
        Self::Cleaning,
        Self::Maintenance,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Cleaning => "cleaning",
            Self::Maintenance => "maintenance",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Security => "Keamanan",
            Self::Cleaning => "Kebersihan",
            Self::Maintenance => "Perawatan",
            Self::Other => "Lainnya",
            Self::Unknown => "Tidak Diketahui",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Expense {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expense_type: ExpenseType,
    #[serde(deserialize_with = "super::amount")]
    pub amount: f64,
    #[serde(default)]
    pub expense_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpensePayload {
    pub description: String,
    pub expense_type: ExpenseType,
    pub amount: f64,
    pub expense_date: String,
}

/// Sum of the amounts shown in an expense table.
pub fn expense_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_rupiah;

    #[test]
    fn filtered_expenses_total_is_formatted_in_rupiah() {
        let expenses: Vec<Expense> = serde_json::from_str(
            r#"[
                {"id": 1, "description": "Satpam", "expense_type": "security", "amount": "50000", "expense_date": "2024-03-04"},
                {"id": 2, "description": "Sapu", "expense_type": "cleaning", "amount": "25000", "expense_date": "2024-03-09"}
            ]"#,
        )
        .unwrap();

        assert_eq!(expense_total(&expenses), 75000.0);
        assert_eq!(format_rupiah(expense_total(&expenses)), "Rp 75.000");
    }

    #[test]
    fn unknown_expense_type_still_decodes() {
        let expense: Expense = serde_json::from_str(
            r#"{"id": 3, "description": "Pesta", "expense_type": "party", "amount": 1000, "expense_date": "2024-03-09"}"#,
        )
        .unwrap();
        assert_eq!(expense.expense_type, ExpenseType::Unknown);
        assert_eq!(expense.expense_type.label(), "Tidak Diketahui");
    }
}
