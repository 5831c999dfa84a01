use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    provider::{
        entities::{GeoPoint, GeocodedLocation, LocationElement},
        strategies::SearchStrategy,
        value_objects::{ProviderSearchInput, ProviderSearchOutcome},
    },
};

/// Geocoding and map-feature search collaborator.
pub trait LocationSearchPort: Send + Sync {
    /// `None` when the query does not resolve to a place.
    fn geocode(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<GeocodedLocation>, CoreError>> + Send;

    fn search(
        &self,
        strategy: SearchStrategy,
        center: GeoPoint,
        radius_km: f64,
    ) -> impl Future<Output = Result<Vec<LocationElement>, CoreError>> + Send;
}

pub trait ProviderService: Send + Sync {
    fn search_providers(
        &self,
        input: ProviderSearchInput,
    ) -> impl Future<Output = Result<ProviderSearchOutcome, CoreError>> + Send;

    /// Downloadable resource list built from the session's last search.
    fn provider_resource_report(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<(String, String), CoreError>> + Send;
}
