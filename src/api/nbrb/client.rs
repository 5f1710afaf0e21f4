use reqwest::Client as HttpClient;
use tracing::{info, warn};

use super::models::{NbrbCurrency, NbrbError, NbrbRate};
use crate::models::{CurrencyInfo, CurrencyRate};

/// Client for the national bank's public exchange-rate API
#[derive(Clone)]
pub struct NbrbClient {
    http_client: HttpClient,
    base_url: String,
}

impl NbrbClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.nbrb.by/exrates";

    /// Create a client pointed at the bank's public API
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Classify a non-success response by its status code range
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> NbrbError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        if status.is_client_error() {
            NbrbError::Client {
                status: status_code,
                message: body_text,
            }
        } else {
            warn!("upstream server error {}: {}", status_code, body_text);
            NbrbError::Server {
                status: status_code,
                message: body_text,
            }
        }
    }

    /// GET /currencies
    ///
    /// Fetches the bank's full currency directory.
    pub async fn fetch_currencies(&self) -> Result<Vec<CurrencyInfo>, NbrbError> {
        let url = format!("{}/currencies", self.base_url);
        info!("fetching currency directory from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| NbrbError::Transport(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let currencies = response
            .json::<Vec<NbrbCurrency>>()
            .await
            .map_err(|e| NbrbError::Decode(format!("failed to parse response: {}", e)))?;
        info!("fetched {} currencies", currencies.len());

        Ok(currencies.into_iter().map(CurrencyInfo::from).collect())
    }

    /// GET /rates/{id}
    ///
    /// Fetches the official rate for one currency by the bank's currency ID.
    pub async fn fetch_rate(&self, currency_id: i64) -> Result<CurrencyRate, NbrbError> {
        let url = format!("{}/rates/{}", self.base_url, currency_id);
        info!("fetching rate for currency {} from {}", currency_id, url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| NbrbError::Transport(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let rate = response
            .json::<NbrbRate>()
            .await
            .map_err(|e| NbrbError::Decode(format!("failed to parse response: {}", e)))?;

        Ok(rate.into())
    }
}

impl Default for NbrbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CURRENCIES_JSON: &str = r#"[
        {"Cur_ID": 431, "Cur_Code": "840", "Cur_Abbreviation": "USD", "Cur_Name": "Доллар США", "Cur_Scale": 1},
        {"Cur_ID": 451, "Cur_Code": "978", "Cur_Abbreviation": "EUR", "Cur_Name": "Евро", "Cur_Scale": 1}
    ]"#;

    const RATE_JSON: &str = r#"{
        "Cur_ID": 431,
        "Date": "2025-03-14T00:00:00",
        "Cur_Abbreviation": "USD",
        "Cur_Scale": 1,
        "Cur_Name": "Доллар США",
        "Cur_OfficialRate": 3.2954
    }"#;

    async fn create_mock_server(request_path: &str, template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn fetches_the_currency_directory() {
        let server = create_mock_server(
            "/currencies",
            ResponseTemplate::new(200).set_body_string(CURRENCIES_JSON),
        )
        .await;
        let client = NbrbClient::with_base_url(server.uri());

        let currencies = client.fetch_currencies().await.unwrap();

        assert_eq!(currencies.len(), 2);
        assert_eq!(
            currencies[0],
            CurrencyInfo {
                id: 431,
                abbreviation: "USD".to_string()
            }
        );
        assert_eq!(currencies[1].abbreviation, "EUR");
    }

    #[tokio::test]
    async fn fetches_a_single_rate() {
        let server = create_mock_server(
            "/rates/431",
            ResponseTemplate::new(200).set_body_string(RATE_JSON),
        )
        .await;
        let client = NbrbClient::with_base_url(server.uri());

        let rate = client.fetch_rate(431).await.unwrap();

        assert_eq!(rate.id, 431);
        assert_eq!(rate.abbreviation, "USD");
        assert_eq!(rate.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(rate.rate, "3.2954".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn classifies_client_errors() {
        let server = create_mock_server(
            "/rates/999999",
            ResponseTemplate::new(404).set_body_string("Валюта не найдена"),
        )
        .await;
        let client = NbrbClient::with_base_url(server.uri());

        let error = client.fetch_rate(999999).await.unwrap_err();

        assert!(matches!(error, NbrbError::Client { status: 404, .. }));
    }

    #[tokio::test]
    async fn classifies_server_errors() {
        let server = create_mock_server(
            "/currencies",
            ResponseTemplate::new(503).set_body_string("maintenance"),
        )
        .await;
        let client = NbrbClient::with_base_url(server.uri());

        let error = client.fetch_currencies().await.unwrap_err();

        assert!(matches!(error, NbrbError::Server { status: 503, .. }));
    }

    #[tokio::test]
    async fn classifies_transport_failures() {
        // Nothing listens on port 1
        let client = NbrbClient::with_base_url("http://127.0.0.1:1".to_string());

        let error = client.fetch_currencies().await.unwrap_err();

        assert!(matches!(error, NbrbError::Transport(_)));
    }

    #[tokio::test]
    async fn flags_bodies_that_do_not_match_the_wire_format() {
        let server = create_mock_server(
            "/currencies",
            ResponseTemplate::new(200).set_body_string("<html>definitely not json</html>"),
        )
        .await;
        let client = NbrbClient::with_base_url(server.uri());

        let error = client.fetch_currencies().await.unwrap_err();

        assert!(matches!(error, NbrbError::Decode(_)));
    }
}
