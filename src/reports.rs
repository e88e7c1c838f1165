//! Chart data and totals for the dashboard and the report screens.

use crate::models::{Expense, ExpenseType, MonthlyDetail, MonthlySummary, Payment, PaymentType};

pub const SECURITY_COLOR: &str = "#36a2eb";
pub const CLEANING_COLOR: &str = "#4bc0c0";
pub const EXPENSE_COLOR: &str = "#ff6384";
pub const MAINTENANCE_COLOR: &str = "#ffce56";
pub const OTHER_COLOR: &str = "#9966ff";

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Grouped bars: one group per label, one bar per dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl BarChart {
    /// Largest absolute value, for scaling the bars.
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.values.iter())
            .fold(0.0_f64, |max, v| max.max(v.abs()))
    }

    pub fn has_negative(&self) -> bool {
        self.datasets.iter().flat_map(|d| d.values.iter()).any(|v| *v < 0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub color: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Doughnut {
    pub slices: Vec<Slice>,
}

impl Doughnut {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Fraction of the ring taken by each slice; all zero when nothing was recorded.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| if total > 0.0 { s.value / total } else { 0.0 })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

fn dataset(label: &str, color: &'static str, months: &[MonthlySummary], f: fn(&MonthlySummary) -> f64) -> Dataset {
    Dataset {
        label: label.to_string(),
        color,
        values: months.iter().map(f).collect(),
    }
}

fn labels(months: &[MonthlySummary]) -> Vec<String> {
    months.iter().map(|m| m.month.clone()).collect()
}

/// Security income, cleaning income and expenses per month.
pub fn summary_chart(months: &[MonthlySummary]) -> BarChart {
    BarChart {
        labels: labels(months),
        datasets: vec![
            dataset("Pemasukan Keamanan", SECURITY_COLOR, months, |m| m.security_income),
            dataset("Pemasukan Kebersihan", CLEANING_COLOR, months, |m| m.cleaning_income),
            dataset("Pengeluaran", EXPENSE_COLOR, months, |m| m.total_expenses),
        ],
    }
}

/// Income, expenses and net balance per month.
pub fn dashboard_chart(months: &[MonthlySummary]) -> BarChart {
    BarChart {
        labels: labels(months),
        datasets: vec![
            dataset("Pemasukan", SECURITY_COLOR, months, |m| m.total_income),
            dataset("Pengeluaran", EXPENSE_COLOR, months, |m| m.total_expenses),
            dataset("Saldo Bersih", CLEANING_COLOR, months, |m| m.balance),
        ],
    }
}

/// Year totals summed over the monthly buckets.
pub fn summary_totals(months: &[MonthlySummary]) -> Totals {
    months.iter().fold(Totals::default(), |acc, m| Totals {
        income: acc.income + m.total_income,
        expenses: acc.expenses + m.total_expenses,
        balance: acc.balance + m.balance,
    })
}

pub fn monthly_totals(detail: &MonthlyDetail) -> Totals {
    Totals {
        income: detail.total_income,
        expenses: detail.total_expenses,
        balance: detail.total_income - detail.total_expenses,
    }
}

fn paid_income(payments: &[Payment], payment_type: PaymentType) -> f64 {
    payments
        .iter()
        .filter(|p| p.is_paid && p.payment_type == payment_type)
        .map(|p| p.amount)
        .sum()
}

/// Paid income split by dues type. Unpaid payments are not income yet.
pub fn income_breakdown(payments: &[Payment]) -> Doughnut {
    Doughnut {
        slices: vec![
            Slice {
                label: PaymentType::Security.label(),
                color: SECURITY_COLOR,
                value: paid_income(payments, PaymentType::Security),
            },
            Slice {
                label: PaymentType::Cleaning.label(),
                color: CLEANING_COLOR,
                value: paid_income(payments, PaymentType::Cleaning),
            },
        ],
    }
}

pub fn expense_breakdown(expenses: &[Expense]) -> Doughnut {
    let colors = [SECURITY_COLOR, CLEANING_COLOR, MAINTENANCE_COLOR, OTHER_COLOR];
    let slices = ExpenseType::ALL
        .into_iter()
        .zip(colors)
        .map(|(expense_type, color)| Slice {
            label: expense_type.label(),
            color,
            value: expenses
                .iter()
                .filter(|e| e.expense_type == expense_type)
                .map(|e| e.amount)
                .sum(),
        })
        .collect();
    Doughnut { slices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(name: &str, security: f64, cleaning: f64, expenses: f64) -> MonthlySummary {
        let income = security + cleaning;
        MonthlySummary {
            month: name.to_string(),
            security_income: security,
            cleaning_income: cleaning,
            total_income: income,
            total_expenses: expenses,
            balance: income - expenses,
        }
    }

    #[test]
    fn summary_totals_add_up_every_month() {
        let months = vec![
            month("Jan", 100_000.0, 15_000.0, 40_000.0),
            month("Feb", 200_000.0, 30_000.0, 300_000.0),
        ];

        let totals = summary_totals(&months);
        assert_eq!(totals.income, 345_000.0);
        assert_eq!(totals.expenses, 340_000.0);
        assert_eq!(totals.balance, 5_000.0);
    }

    #[test]
    fn summary_chart_has_one_value_per_month_per_series() {
        let months = vec![month("Jan", 100.0, 10.0, 5.0), month("Feb", 0.0, 0.0, 50.0)];
        let chart = summary_chart(&months);

        assert_eq!(chart.labels, vec!["Jan", "Feb"]);
        assert_eq!(chart.datasets.len(), 3);
        assert_eq!(chart.datasets[2].values, vec![5.0, 50.0]);
        assert_eq!(chart.max_value(), 100.0);
        assert!(dashboard_chart(&months).has_negative());
    }

    #[test]
    fn monthly_balance_is_income_minus_expenses() {
        let detail = MonthlyDetail {
            total_income: 115_000.0,
            total_expenses: 140_000.0,
            ..MonthlyDetail::default()
        };
        assert_eq!(monthly_totals(&detail).balance, -25_000.0);
    }

    #[test]
    fn income_breakdown_counts_paid_payments_only() {
        let payments: Vec<Payment> = serde_json::from_str(
            r#"[
                {"id": 1, "payment_type": "security", "amount": "100000", "is_paid": true},
                {"id": 2, "payment_type": "security", "amount": "100000", "is_paid": false},
                {"id": 3, "payment_type": "cleaning", "amount": 15000, "is_paid": 1}
            ]"#,
        )
        .unwrap();

        let doughnut = income_breakdown(&payments);
        assert_eq!(doughnut.slices[0].value, 100_000.0);
        assert_eq!(doughnut.slices[1].value, 15_000.0);
        assert_eq!(doughnut.total(), 115_000.0);
    }

    #[test]
    fn expense_breakdown_covers_the_four_types() {
        let expenses: Vec<Expense> = serde_json::from_str(
            r#"[
                {"id": 1, "expense_type": "maintenance", "amount": 30000},
                {"id": 2, "expense_type": "maintenance", "amount": 20000},
                {"id": 3, "expense_type": "party", "amount": 99999}
            ]"#,
        )
        .unwrap();

        let doughnut = expense_breakdown(&expenses);
        let labels: Vec<&str> = doughnut.slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Keamanan", "Kebersihan", "Perawatan", "Lainnya"]);
        assert_eq!(doughnut.slices[2].value, 50_000.0);
        assert_eq!(doughnut.total(), 50_000.0);
        assert_eq!(doughnut.fractions()[2], 1.0);
    }

    #[test]
    fn empty_doughnut_has_zero_fractions() {
        let doughnut = expense_breakdown(&[]);
        assert!(doughnut.fractions().iter().all(|f| *f == 0.0));
    }
}
