//! HTTP client for the neighborhood backend.
//!
//! One [`ApiClient`] is built at startup and shared through context. Each
//! resource module adds its operations to the client and exposes the
//! [`Endpoint`] values they call, so the URL mapping can be checked without a
//! browser.

mod expenses;
mod houses;
mod payments;
mod residents;
mod scope;
mod statistics;

pub use scope::RequestScope;

use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortSignal, FormData};

use crate::config::AppConfig;
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Method, path and query string of one backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
}

/// Month/year filter for the payment and expense lists and the monthly report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodFilter {
    pub month: u32,
    pub year: i32,
}

impl PeriodFilter {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    pub fn apply(&self, endpoint: Endpoint) -> Endpoint {
        endpoint
            .with_query("month", self.month)
            .with_query("year", self.year)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: Rc<str>,
    signal: Option<AbortSignal>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: Rc::from(config.api_base_url.as_str()),
            signal: None,
        }
    }

    /// Copy of this client whose requests are aborted when `scope` is dropped.
    pub fn scoped(&self, scope: &RequestScope) -> Self {
        Self {
            base_url: self.base_url.clone(),
            signal: scope.signal(),
        }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path)
    }

    /// Public URL of a file kept in the backend storage, such as an ID card photo.
    pub fn storage_url(&self, path: &str) -> String {
        format!("{}/storage/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn builder(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.url(endpoint);
        let builder = match endpoint.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        builder
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Accept", "application/json")
            .query(endpoint.query.iter().map(|(k, v)| (*k, v.as_str())))
            .abort_signal(self.signal.as_ref())
    }

    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let request = self
            .builder(&endpoint)
            .build()
            .map_err(|e| self.fail(&endpoint, ApiError::from_transport(e)))?;
        let response = self.dispatch(&endpoint, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| self.fail(&endpoint, ApiError::from_transport(e)))
    }

    async fn send_json<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<(), ApiError> {
        // `json` also sets `Content-Type: application/json`.
        let request = self
            .builder(&endpoint)
            .json(body)
            .map_err(|e| self.fail(&endpoint, ApiError::from_transport(e)))?;
        self.dispatch(&endpoint, request).await.map(|_| ())
    }

    async fn send_form(&self, endpoint: Endpoint, form: FormData) -> Result<(), ApiError> {
        // The browser sets the multipart boundary header itself.
        let request = self
            .builder(&endpoint)
            .body(form)
            .map_err(|e| self.fail(&endpoint, ApiError::from_transport(e)))?;
        self.dispatch(&endpoint, request).await.map(|_| ())
    }

    async fn send_empty(&self, endpoint: Endpoint) -> Result<(), ApiError> {
        let request = self
            .builder(&endpoint)
            .build()
            .map_err(|e| self.fail(&endpoint, ApiError::from_transport(e)))?;
        self.dispatch(&endpoint, request).await.map(|_| ())
    }

    /// Sends the request and classifies any non-2xx response.
    async fn dispatch(&self, endpoint: &Endpoint, request: Request) -> Result<Response, ApiError> {
        tracing::debug!(method = endpoint.method.as_str(), path = %endpoint.path, "sending request");
        match request.send().await {
            Ok(response) if response.ok() => Ok(response),
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(self.fail(endpoint, ApiError::from_status(status, &body)))
            }
            Err(e) => Err(self.fail(endpoint, ApiError::from_transport(e))),
        }
    }

    fn fail(&self, endpoint: &Endpoint, error: ApiError) -> ApiError {
        error.log(endpoint.method.as_str(), &self.url(endpoint));
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let config = AppConfig::with_base_url("http://localhost:8000/").unwrap();
        let client = ApiClient::new(&config);

        assert_eq!(
            client.url(&Endpoint::get("/api/houses")),
            "http://localhost:8000/api/houses"
        );
        assert_eq!(
            client.storage_url("ktp/siti.jpg"),
            "http://localhost:8000/storage/ktp/siti.jpg"
        );
    }

    #[test]
    fn query_parameters_keep_insertion_order() {
        let endpoint = Endpoint::get("/api/payments/monthly-detail")
            .with_query("year", 2024)
            .with_query("month", 3);

        assert_eq!(
            endpoint.query,
            vec![("year", "2024".to_string()), ("month", "3".to_string())]
        );
        assert_eq!(endpoint.method.as_str(), "GET");
    }

    #[test]
    fn period_filter_follows_the_given_date() {
        let filter = PeriodFilter::containing(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap());
        assert_eq!(filter, PeriodFilter { month: 11, year: 2024 });
    }
}
