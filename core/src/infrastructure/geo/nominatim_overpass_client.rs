use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use crate::{
    domain::{
        common::{GeoConfig, entities::app_errors::CoreError},
        provider::{
            entities::{GeoPoint, GeocodedLocation, LocationElement},
            ports::LocationSearchPort,
            strategies::SearchStrategy,
        },
    },
    infrastructure::geo::mappers::{
        NominatimPlace, OverpassResponse, map_nominatim_place, map_overpass_elements,
    },
};

/// Geocodes through Nominatim and finds healthcare features through Overpass.
#[derive(Debug, Clone)]
pub struct NominatimOverpassClient {
    client: Client,
    nominatim_url: String,
    overpass_url: String,
    query_timeout_secs: u64,
}

impl NominatimOverpassClient {
    pub fn new(config: &GeoConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.overpass_timeout_secs + 5))
            .build()?;

        Ok(Self {
            client,
            nominatim_url: config.nominatim_url.trim_end_matches('/').to_string(),
            overpass_url: config.overpass_url.clone(),
            query_timeout_secs: config.overpass_timeout_secs,
        })
    }
}

/// Overpass QL for one strategy around `center`.
pub fn overpass_query(
    strategy: SearchStrategy,
    center: GeoPoint,
    radius_km: f64,
    timeout_secs: u64,
) -> String {
    let selectors: &[&str] = match strategy {
        SearchStrategy::HealthcareAmenities => &[
            r#"node["amenity"~"^(doctors|hospital|clinic|pharmacy)$"]"#,
            r#"way["amenity"~"^(doctors|hospital|clinic|pharmacy)$"]"#,
        ],
        SearchStrategy::HealthcareTag => &[r#"node["healthcare"]"#, r#"way["healthcare"]"#],
        SearchStrategy::MedicalOffices => &[
            r#"node["office"="healthcare"]"#,
            r#"node["office"="physician"]"#,
            r#"way["office"="healthcare"]"#,
        ],
    };

    let around = format!(
        "(around:{},{},{})",
        (radius_km * 1000.0).round() as u64,
        center.lat,
        center.lon
    );
    let body: String = selectors
        .iter()
        .map(|selector| format!("{selector}{around};"))
        .collect();

    format!("[out:json][timeout:{timeout_secs}];({body});out center meta;")
}

fn collaborator_error(context: &str, e: reqwest::Error) -> CoreError {
    error!(error = %e, "{context}");
    let reason = if e.is_timeout() {
        "timed out".to_string()
    } else {
        e.to_string()
    };
    CoreError::ExternalServiceError(format!("{context}: {reason}"))
}

impl LocationSearchPort for NominatimOverpassClient {
    async fn geocode(&self, query: String) -> Result<Option<GeocodedLocation>, CoreError> {
        let response = self
            .client
            .get(format!("{}/search", self.nominatim_url))
            .query(&[("q", query.as_str()), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| collaborator_error("location lookup failed", e))?;

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| collaborator_error("location lookup returned unreadable data", e))?;

        Ok(map_nominatim_place(&query, places))
    }

    async fn search(
        &self,
        strategy: SearchStrategy,
        center: GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<LocationElement>, CoreError> {
        let query = overpass_query(strategy, center, radius_km, self.query_timeout_secs);
        debug!(strategy = strategy.as_str(), %query, "querying overpass");

        let response = self
            .client
            .post(&self.overpass_url)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| collaborator_error("provider search failed", e))?;

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| collaborator_error("provider search returned unreadable data", e))?;

        Ok(map_overpass_elements(body))
    }
}
