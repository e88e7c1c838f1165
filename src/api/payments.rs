use super::{ApiClient, Endpoint, PeriodFilter};
use crate::error::ApiError;
use crate::models::{MonthlyDetail, Payment, PaymentPayload, PaymentSummary};

pub(crate) fn list(filter: Option<PeriodFilter>) -> Endpoint {
    let endpoint = Endpoint::get("/api/payments");
    match filter {
        Some(filter) => filter.apply(endpoint),
        None => endpoint,
    }
}

pub(crate) fn get(id: u64) -> Endpoint {
    Endpoint::get(format!("/api/payments/{}", id))
}

pub(crate) fn create() -> Endpoint {
    Endpoint::post("/api/payments")
}

pub(crate) fn update(id: u64) -> Endpoint {
    Endpoint::put(format!("/api/payments/{}", id))
}

pub(crate) fn delete(id: u64) -> Endpoint {
    Endpoint::delete(format!("/api/payments/{}", id))
}

pub(crate) fn summary(year: i32) -> Endpoint {
    Endpoint::get("/api/payments/summary").with_query("year", year)
}

pub(crate) fn monthly_detail(filter: PeriodFilter) -> Endpoint {
    Endpoint::get("/api/payments/monthly-detail")
        .with_query("year", filter.year)
        .with_query("month", filter.month)
}

impl ApiClient {
    pub async fn list_payments(&self, filter: Option<PeriodFilter>) -> Result<Vec<Payment>, ApiError> {
        self.fetch_json(list(filter)).await
    }

    pub async fn get_payment(&self, id: u64) -> Result<Payment, ApiError> {
        self.fetch_json(get(id)).await
    }

    pub async fn create_payment(&self, payload: &PaymentPayload) -> Result<(), ApiError> {
        self.send_json(create(), payload).await
    }

    pub async fn update_payment(&self, id: u64, payload: &PaymentPayload) -> Result<(), ApiError> {
        self.send_json(update(id), payload).await
    }

    pub async fn delete_payment(&self, id: u64) -> Result<(), ApiError> {
        self.send_empty(delete(id)).await
    }

    pub async fn payment_summary(&self, year: i32) -> Result<PaymentSummary, ApiError> {
        self.fetch_json(summary(year)).await
    }

    pub async fn monthly_detail(&self, filter: PeriodFilter) -> Result<MonthlyDetail, ApiError> {
        self.fetch_json(monthly_detail(filter)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn report_endpoints_take_year_and_month() {
        let s = summary(2024);
        assert_eq!(s.path, "/api/payments/summary");
        assert_eq!(s.query, vec![("year", "2024".to_string())]);

        let d = monthly_detail(PeriodFilter { month: 2, year: 2025 });
        assert_eq!(d.path, "/api/payments/monthly-detail");
        assert_eq!(
            d.query,
            vec![("year", "2025".to_string()), ("month", "2".to_string())]
        );
    }

    #[test]
    fn payment_crud_paths() {
        assert_eq!(list(None).path, "/api/payments");
        assert_eq!(list(Some(PeriodFilter { month: 1, year: 2024 })).query.len(), 2);
        assert_eq!(get(5).path, "/api/payments/5");
        assert_eq!(update(5).method, Method::Put);
        assert_eq!(delete(5).method, Method::Delete);
        assert_eq!(create().method, Method::Post);
    }
}
