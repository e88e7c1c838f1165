use super::{ApiClient, Endpoint};
use crate::error::ApiError;
use crate::models::DashboardStats;

pub(crate) fn dashboard(year: i32) -> Endpoint {
    Endpoint::get("/api/statistics/dashboard").with_query("year", year)
}

impl ApiClient {
    pub async fn dashboard_statistics(&self, year: i32) -> Result<DashboardStats, ApiError> {
        self.fetch_json(dashboard(year)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_is_keyed_by_year() {
        let endpoint = dashboard(2023);
        assert_eq!(endpoint.path, "/api/statistics/dashboard");
        assert_eq!(endpoint.query, vec![("year", "2023".to_string())]);
    }
}
