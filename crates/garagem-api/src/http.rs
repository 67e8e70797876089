//! HTTP implementation of [`VehicleApi`] using [`reqwest`].

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use garagem_core::prelude::*;
use garagem_core::{Vehicle, VehicleId, VehiclePayload};

use crate::client::{VehicleApi, COLLECTION_PATH};

/// HTTP client for one registry instance.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpVehicleClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpVehicleClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3000`).
    ///
    /// `timeout` bounds every request, connect included.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(client, base_url)
    }

    /// Reuse an existing [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| Error::invalid_url(base_url, e.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_url(base_url, "expected an http(s) base URL"));
        }
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// `{base}/veiculos` or `{base}/veiculos/{id}`; the id is percent-encoded.
    fn endpoint(&self, id: Option<&VehicleId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(COLLECTION_PATH);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }

    /// Map non-2xx responses to errors. A 404 on an item path is `NotFound`.
    async fn ensure_success(response: Response, id: Option<&VehicleId>) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(Error::not_found(id));
            }
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::network(format!("HTTP {}: {}", status.as_u16(), body.trim())))
    }

    async fn read_body(response: Response) -> Result<Vec<u8>> {
        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(transport_error)
    }

    fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
        serde_json::from_slice(body)
            .map_err(|e| Error::network(format!("unexpected response body: {e}")))
    }

    async fn parse_response<T: DeserializeOwned>(
        response: Response,
        id: Option<&VehicleId>,
    ) -> Result<T> {
        let response = Self::ensure_success(response, id).await?;
        let body = Self::read_body(response).await?;
        Self::decode(&body)
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::network(format!("request timed out: {err}"))
    } else if err.is_connect() {
        Error::network(format!("connection failed: {err}"))
    } else {
        Error::network(err.to_string())
    }
}

impl VehicleApi for HttpVehicleClient {
    async fn list(&self) -> Result<Vec<Vehicle>> {
        let url = self.endpoint(None);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let vehicles: Vec<Vehicle> = Self::parse_response(response, None).await?;
        debug!("Fetched {} vehicles", vehicles.len());
        Ok(vehicles)
    }

    async fn get(&self, id: &VehicleId) -> Result<Vehicle> {
        let url = self.endpoint(Some(id));
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        Self::parse_response(response, Some(id)).await
    }

    async fn create(&self, payload: &VehiclePayload) -> Result<Vehicle> {
        let url = self.endpoint(None);
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;
        let vehicle: Vehicle = Self::parse_response(response, None).await?;
        info!("Created vehicle {}", vehicle.id);
        Ok(vehicle)
    }

    async fn update(&self, id: &VehicleId, payload: &VehiclePayload) -> Result<Vehicle> {
        let url = self.endpoint(Some(id));
        debug!("PUT {}", url);
        let response = self
            .client
            .put(url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;
        let response = Self::ensure_success(response, Some(id)).await?;
        let body = Self::read_body(response).await?;

        // Registries answering 204 No Content stored exactly what was sent
        if body.iter().all(u8::is_ascii_whitespace) {
            info!("Updated vehicle {} (empty response)", id);
            return Ok(Vehicle::from_payload(id.clone(), payload.clone()));
        }
        let vehicle: Vehicle = Self::decode(&body)?;
        info!("Updated vehicle {}", vehicle.id);
        Ok(vehicle)
    }

    async fn delete(&self, id: &VehicleId) -> Result<()> {
        let url = self.endpoint(Some(id));
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;
        Self::ensure_success(response, Some(id)).await?;
        info!("Deleted vehicle {}", id);
        Ok(())
    }
}
