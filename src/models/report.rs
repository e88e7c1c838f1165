use serde::Deserialize;

use super::{Expense, Payment};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MonthlySummary {
    #[serde(deserialize_with = "super::label")]
    pub month: String,
    #[serde(default, deserialize_with = "super::amount")]
    pub security_income: f64,
    #[serde(default, deserialize_with = "super::amount")]
    pub cleaning_income: f64,
    #[serde(default, deserialize_with = "super::amount")]
    pub total_income: f64,
    #[serde(default, deserialize_with = "super::amount")]
    pub total_expenses: f64,
    #[serde(default, deserialize_with = "super::amount")]
    pub balance: f64,
}

/// Yearly report, pre-aggregated by the backend into monthly buckets.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PaymentSummary {
    #[serde(default)]
    pub monthly_data: Vec<MonthlySummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MonthlyDetail {
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default, deserialize_with = "super::amount")]
    pub total_income: f64,
    #[serde(default, deserialize_with = "super::amount")]
    pub total_expenses: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub residents: u64,
    #[serde(default)]
    pub houses: u64,
    #[serde(default)]
    pub occupied_houses: u64,
    #[serde(default)]
    pub pending_payments: u64,
    #[serde(default, deserialize_with = "super::amount")]
    pub yearly_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_statistics_use_camel_case_keys() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"residents": 20, "houses": 15, "occupiedHouses": 12, "pendingPayments": 3, "yearlyBalance": "1250000.50"}"#,
        )
        .unwrap();

        assert_eq!(stats.occupied_houses, 12);
        assert_eq!(stats.pending_payments, 3);
        assert_eq!(stats.yearly_balance, 1250000.5);
    }

    #[test]
    fn summary_months_accept_string_amounts() {
        let summary: PaymentSummary = serde_json::from_str(
            r#"{"monthly_data": [{"month": "Jan", "security_income": "100000", "cleaning_income": 15000, "total_income": "115000", "total_expenses": "40000", "balance": "75000"}]}"#,
        )
        .unwrap();

        let jan = &summary.monthly_data[0];
        assert_eq!(jan.month, "Jan");
        assert_eq!(jan.total_income, 115000.0);
        assert_eq!(jan.balance, 75000.0);
    }
}
