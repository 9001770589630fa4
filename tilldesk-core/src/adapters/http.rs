//! HTTP backend adapter
//!
//! Talks to the POS REST backend over reqwest. Auth endpoints live under
//! /auth, records under /sale, /purchase, /exchange, /service, /customer,
//! /product, /expense, and the summary payload under /dashboard. Every
//! call except login sends the bearer token.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{
    Customer, Exchange, Expense, MetricPoint, PopularProduct, Product, Purchase, Sale, ServiceJob,
    UserProfile,
};
use crate::ports::{BackendApi, DashboardData, LoginOutcome};

/// HTTP client for the POS backend
#[derive(Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

/// Login request body
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Login response from the backend
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: UserProfile,
}

/// Dashboard response from the backend
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    #[serde(default)]
    sale_summary: Vec<MetricPoint>,
    #[serde(default)]
    purchase_summary: Vec<MetricPoint>,
    #[serde(default)]
    exchange_summary: Vec<MetricPoint>,
    #[serde(default)]
    service_summary: Vec<MetricPoint>,
    #[serde(default)]
    expense_summary: Vec<MetricPoint>,
    #[serde(default)]
    popular_products: Vec<PopularProduct>,
}

impl HttpBackend {
    /// Create a backend client for a base URL
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|_| Error::config(format!("invalid backend URL: {}", base_url)))?;

        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(Error::config(format!(
                "backend URL must use http or https, got {}",
                parsed.scheme()
            )));
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(Error::config("backend URL must include a host"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON payload from an authenticated endpoint
    fn get_json<T: serde::de::DeserializeOwned>(&self, token: &str, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .map_err(map_request_error)?;

        check_response_status(&response)?;

        response
            .json::<T>()
            .map_err(|e| Error::Http(format!("failed to parse backend response: {}", e)))
    }

    /// DELETE an authenticated resource
    fn delete(&self, token: &str, path: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .map_err(map_request_error)?;

        check_response_status(&response)
    }
}

/// Map transport errors to user-friendly messages
fn map_request_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::Http("connection timed out".to_string())
    } else if error.is_connect() {
        Error::Http("unable to reach the backend".to_string())
    } else {
        Error::Http(format!("request failed: {}", error))
    }
}

/// Check response status and return appropriate errors
fn check_response_status(response: &Response) -> Result<()> {
    match response.status().as_u16() {
        200..=299 => Ok(()),
        401 | 403 => Err(Error::auth(
            "the backend rejected the credentials; the token may be expired or revoked",
        )),
        404 => Err(Error::not_found("resource does not exist on the backend")),
        status => Err(Error::Api {
            status,
            message: "unexpected backend response".to_string(),
        }),
    }
}

impl BackendApi for HttpBackend {
    fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .map_err(map_request_error)?;

        check_response_status(&response)?;

        let data: LoginResponse = response
            .json()
            .map_err(|e| Error::Http(format!("failed to parse login response: {}", e)))?;

        Ok(LoginOutcome {
            token: data.token,
            user: data.user,
        })
    }

    fn fetch_profile(&self, token: &str) -> Result<UserProfile> {
        self.get_json(token, "/auth/me")
    }

    fn dashboard_summary(&self, token: &str) -> Result<DashboardData> {
        let data: DashboardResponse = self.get_json(token, "/dashboard")?;
        Ok(DashboardData {
            sale_summary: data.sale_summary,
            purchase_summary: data.purchase_summary,
            exchange_summary: data.exchange_summary,
            service_summary: data.service_summary,
            expense_summary: data.expense_summary,
            popular_products: data.popular_products,
        })
    }

    fn list_products(&self, token: &str) -> Result<Vec<Product>> {
        self.get_json(token, "/product")
    }

    fn delete_product(&self, token: &str, id: Uuid) -> Result<()> {
        self.delete(token, &format!("/product/{}", id))
    }

    fn list_sales(&self, token: &str) -> Result<Vec<Sale>> {
        self.get_json(token, "/sale")
    }

    fn delete_sale(&self, token: &str, id: Uuid) -> Result<()> {
        self.delete(token, &format!("/sale/{}", id))
    }

    fn list_purchases(&self, token: &str) -> Result<Vec<Purchase>> {
        self.get_json(token, "/purchase")
    }

    fn delete_purchase(&self, token: &str, id: Uuid) -> Result<()> {
        self.delete(token, &format!("/purchase/{}", id))
    }

    fn list_exchanges(&self, token: &str) -> Result<Vec<Exchange>> {
        self.get_json(token, "/exchange")
    }

    fn delete_exchange(&self, token: &str, id: Uuid) -> Result<()> {
        self.delete(token, &format!("/exchange/{}", id))
    }

    fn list_service_jobs(&self, token: &str) -> Result<Vec<ServiceJob>> {
        self.get_json(token, "/service")
    }

    fn delete_service_job(&self, token: &str, id: Uuid) -> Result<()> {
        self.delete(token, &format!("/service/{}", id))
    }

    fn list_customers(&self, token: &str) -> Result<Vec<Customer>> {
        self.get_json(token, "/customer")
    }

    fn create_customer(&self, token: &str, customer: &Customer) -> Result<Customer> {
        let response = self
            .client
            .post(self.url("/customer"))
            .bearer_auth(token)
            .json(customer)
            .send()
            .map_err(map_request_error)?;

        check_response_status(&response)?;

        response
            .json()
            .map_err(|e| Error::Http(format!("failed to parse backend response: {}", e)))
    }

    fn delete_customer(&self, token: &str, id: Uuid) -> Result<()> {
        self.delete(token, &format!("/customer/{}", id))
    }

    fn list_expenses(&self, token: &str) -> Result<Vec<Expense>> {
        self.get_json(token, "/expense")
    }

    fn delete_expense(&self, token: &str, id: Uuid) -> Result<()> {
        self.delete(token, &format!("/expense/{}", id))
    }
}
