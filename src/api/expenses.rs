use super::{ApiClient, Endpoint, PeriodFilter};
use crate::error::ApiError;
use crate::models::{Expense, ExpensePayload};

pub(crate) fn list(filter: Option<PeriodFilter>) -> Endpoint {
    let endpoint = Endpoint::get("/api/expenses");
    match filter {
        Some(filter) => filter.apply(endpoint),
        None => endpoint,
    }
}

pub(crate) fn get(id: u64) -> Endpoint {
    Endpoint::get(format!("/api/expenses/{}", id))
}

pub(crate) fn create() -> Endpoint {
    Endpoint::post("/api/expenses")
}

pub(crate) fn update(id: u64) -> Endpoint {
    Endpoint::put(format!("/api/expenses/{}", id))
}

pub(crate) fn delete(id: u64) -> Endpoint {
    Endpoint::delete(format!("/api/expenses/{}", id))
}

impl ApiClient {
    pub async fn list_expenses(&self, filter: Option<PeriodFilter>) -> Result<Vec<Expense>, ApiError> {
        self.fetch_json(list(filter)).await
    }

    pub async fn get_expense(&self, id: u64) -> Result<Expense, ApiError> {
        self.fetch_json(get(id)).await
    }

    pub async fn create_expense(&self, payload: &ExpensePayload) -> Result<(), ApiError> {
        self.send_json(create(), payload).await
    }

    pub async fn update_expense(&self, id: u64, payload: &ExpensePayload) -> Result<(), ApiError> {
        self.send_json(update(id), payload).await
    }

    pub async fn delete_expense(&self, id: u64) -> Result<(), ApiError> {
        self.send_empty(delete(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn filtered_list_sends_month_and_year() {
        let endpoint = list(Some(PeriodFilter { month: 3, year: 2024 }));
        assert_eq!(endpoint.path, "/api/expenses");
        assert_eq!(
            endpoint.query,
            vec![("month", "3".to_string()), ("year", "2024".to_string())]
        );
        assert!(list(None).query.is_empty());
    }

    #[test]
    fn expense_update_uses_put() {
        assert_eq!(update(8).method, Method::Put);
        assert_eq!(update(8).path, "/api/expenses/8");
        assert_eq!(get(8).path, "/api/expenses/8");
        assert_eq!(delete(8).method, Method::Delete);
        assert_eq!(create().method, Method::Post);
    }
}
