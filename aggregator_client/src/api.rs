use std::{sync::Arc, time::Duration};

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
    StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use spg_common::Money;

use crate::{
    config::AggregatorConfig,
    data_objects::{ChargeRequest, ChargeResponse, ChargeStatus, RefundRequest, RefundResult},
    AggregatorApiError,
};

#[derive(Clone)]
pub struct AggregatorApi {
    config: AggregatorConfig,
    client: Arc<Client>,
}

impl AggregatorApi {
    pub fn new(config: AggregatorConfig) -> Result<Self, AggregatorApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let bearer = format!("Bearer {}", config.api_key.reveal());
        let mut val =
            HeaderValue::from_str(bearer.as_str()).map_err(|e| AggregatorApiError::Initialization(e.to_string()))?;
        val.set_sensitive(true);
        headers.insert("Authorization", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AggregatorApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn url(&self, path: &str) -> String {
        format!("https://{}/{}{path}", self.config.host, self.config.api_version)
    }

    async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AggregatorApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                AggregatorApiError::Timeout(self.config.timeout_secs)
            } else {
                AggregatorApiError::RestResponseError(e.to_string())
            }
        })?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| AggregatorApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| AggregatorApiError::RestResponseError(e.to_string()))?;
            Err(AggregatorApiError::QueryError { status, message })
        }
    }

    /// Creates a new charge. The aggregator responds synchronously with its reference, the checkout link the user
    /// must visit, and the charge's initial status.
    pub async fn create_charge(&self, charge: ChargeRequest) -> Result<ChargeResponse, AggregatorApiError> {
        debug!("Creating charge for {} ({} {})", charge.merchant_reference, charge.amount, charge.currency);
        let result = self.rest_query::<ChargeResponse, ChargeRequest>(Method::POST, "/charges", Some(charge)).await?;
        info!("Created charge {}. Status: {}", result.id, result.status);
        Ok(result)
    }

    /// Fetches the authoritative status of a previously created charge.
    pub async fn charge_status(&self, reference: &str) -> Result<ChargeStatus, AggregatorApiError> {
        let path = format!("/charges/{reference}");
        debug!("Fetching status of charge {reference}");
        let result = self.rest_query::<ChargeStatus, ()>(Method::GET, &path, None).await?;
        Ok(result)
    }

    /// Requests a refund of `amount` against a charge.
    pub async fn refund_charge(&self, reference: &str, amount: Money) -> Result<RefundResult, AggregatorApiError> {
        let path = format!("/charges/{reference}/refunds");
        debug!("Requesting a refund of {amount} against charge {reference}");
        let result =
            self.rest_query::<RefundResult, RefundRequest>(Method::POST, &path, Some(RefundRequest { amount })).await?;
        info!("Refund of {amount} against {reference} accepted. Status: {}", result.status);
        Ok(result)
    }
}

impl AggregatorApiError {
    /// Whether the server refused our credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AggregatorApiError::QueryError { status, .. }
            if *status == StatusCode::UNAUTHORIZED.as_u16() || *status == StatusCode::FORBIDDEN.as_u16())
    }
}
