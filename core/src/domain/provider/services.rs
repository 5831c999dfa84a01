use chrono::Utc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    analysis::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    provider::{
        entities::{GeoPoint, LocationElement},
        normalizer::{NormalizeContext, normalize_providers},
        ports::{LocationSearchPort, ProviderService},
        resources::{render_resource_list, resource_report_file_name},
        strategies::{SEARCH_STRATEGIES, SearchStrategy},
        value_objects::{
            ProviderSearchInput, ProviderSearchOutcome, SEARCH_RADIUS_KM, location_query,
        },
    },
    session::ports::SessionRepository,
};

impl<LLM, LS, SR> Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    /// Tries each strategy in order and keeps the first non-empty result.
    /// Fails only when every strategy failed.
    async fn search_with_strategies(
        &self,
        input: &ProviderSearchInput,
        center: GeoPoint,
    ) -> Result<(Option<SearchStrategy>, Vec<LocationElement>), CoreError> {
        let mut last_error = None;
        let mut any_succeeded = false;

        for strategy in SEARCH_STRATEGIES {
            match self
                .location_search
                .search(strategy, center, f64::from(input.radius_km))
                .await
            {
                Ok(elements) if !elements.is_empty() => {
                    info!(strategy = strategy.as_str(), results = elements.len(), "search strategy returned results");
                    return Ok((Some(strategy), elements));
                }
                Ok(_) => {
                    any_succeeded = true;
                    info!(strategy = strategy.as_str(), "search strategy returned nothing");
                }
                Err(e) => {
                    warn!(strategy = strategy.as_str(), error = %e, "search strategy failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if !any_succeeded => Err(e),
            _ => Ok((None, Vec::new())),
        }
    }
}

impl<LLM, LS, SR> ProviderService for Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    #[instrument(
        skip(self, input),
        fields(session_id = %input.session_id, city = %input.city, state = %input.state, radius_km = input.radius_km)
    )]
    async fn search_providers(
        &self,
        input: ProviderSearchInput,
    ) -> Result<ProviderSearchOutcome, CoreError> {
        // 1. Validate
        if input.city.trim().is_empty() || input.state.trim().is_empty() {
            return Err(CoreError::Invalid(
                "both city and state are required".to_string(),
            ));
        }
        if !SEARCH_RADIUS_KM.contains(&input.radius_km) {
            return Err(CoreError::Invalid(format!(
                "search radius must be between {} and {} km",
                SEARCH_RADIUS_KM.start(),
                SEARCH_RADIUS_KM.end()
            )));
        }

        let session = self.session(input.session_id).await?;

        // 2. Geocode
        let query = location_query(&input.city, &input.state);
        let location = self
            .location_search
            .geocode(query.clone())
            .await
            .inspect_err(|e| error!(error = %e, "geocoding failed"))?
            .ok_or_else(|| {
                warn!(query = %query, "location not found");
                CoreError::GeocodeMiss(query.clone())
            })?;

        info!(location = %location.display_name, lat = location.point.lat, lon = location.point.lon, "searching around location");

        // 3. Search and normalize
        let (strategy, elements) = self
            .search_with_strategies(&input, location.point)
            .await
            .inspect_err(|e| error!(error = %e, "every search strategy failed"))?;

        let providers = normalize_providers(
            &elements,
            NormalizeContext {
                origin: location.point,
                radius_km: f64::from(input.radius_km),
                city: input.city.trim(),
                state: input.state.trim(),
            },
        );

        info!(raw_results = elements.len(), providers = providers.len(), "provider search finished");

        let outcome = ProviderSearchOutcome {
            location,
            city: input.city.trim().to_string(),
            state: input.state.trim().to_string(),
            radius_km: input.radius_km,
            service_type: input.service_type,
            strategy,
            raw_results: elements.len(),
            providers,
            searched_at: Utc::now(),
        };

        // 4. Keep it for the resource list
        session.lock().await.last_provider_search = Some(outcome.clone());

        Ok(outcome)
    }

    async fn provider_resource_report(&self, session_id: Uuid) -> Result<(String, String), CoreError> {
        let session = self.session(session_id).await?;
        let session = session.lock().await;

        let outcome = session
            .last_provider_search
            .as_ref()
            .ok_or(CoreError::NotFound)?;

        let now = Utc::now();
        Ok((
            resource_report_file_name(outcome, now),
            render_resource_list(outcome, now),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{FakeLLM, FakeLocationSearch, test_service_with},
        provider::{entities::FacilityType, value_objects::ServiceType},
        session::ports::SessionService,
    };

    fn input(session_id: Uuid, radius_km: u16) -> ProviderSearchInput {
        ProviderSearchInput {
            session_id,
            city: "New Delhi".into(),
            state: "Delhi".into(),
            radius_km,
            service_type: ServiceType::Gynecologist,
        }
    }

    #[tokio::test]
    async fn falls_through_to_the_first_non_empty_strategy() {
        let search = FakeLocationSearch::delhi()
            .with_strategy(
                SearchStrategy::HealthcareAmenities,
                Err(CoreError::ExternalServiceError("timeout".into())),
            )
            .with_strategy(
                SearchStrategy::HealthcareTag,
                Ok(vec![FakeLocationSearch::node(
                    28.62,
                    77.21,
                    &[("name", "Lotus Hospital"), ("healthcare", "hospital")],
                )]),
            )
            .with_strategy(
                SearchStrategy::MedicalOffices,
                Ok(vec![FakeLocationSearch::node(
                    28.6145,
                    77.2095,
                    &[("name", "Never Asked")],
                )]),
            );
        let service = test_service_with(FakeLLM::replying(&[""]), search);
        let session = service.resolve_session(None).await.unwrap();

        let outcome = service.search_providers(input(session.id, 10)).await.unwrap();

        assert_eq!(outcome.strategy, Some(SearchStrategy::HealthcareTag));
        assert_eq!(outcome.location.query, "New Delhi, Delhi, India");
        assert_eq!(outcome.providers.len(), 1);
        assert_eq!(outcome.providers[0].facility_type, FacilityType::Hospital);
        assert_eq!(service.location_search.searches(), 2);

        let (file_name, report) = service.provider_resource_report(session.id).await.unwrap();
        assert!(file_name.starts_with("yshy_resources_New_Delhi_Delhi_"));
        assert!(report.contains("1. Lotus Hospital"));
    }

    #[tokio::test]
    async fn unknown_location_is_a_geocode_miss() {
        let service = test_service_with(FakeLLM::replying(&[""]), FakeLocationSearch::nowhere());
        let session = service.resolve_session(None).await.unwrap();

        let err = service.search_providers(input(session.id, 10)).await.unwrap_err();

        assert_eq!(err, CoreError::GeocodeMiss("New Delhi, Delhi, India".into()));
        assert!(service.provider_resource_report(session.id).await.is_err());
    }

    #[tokio::test]
    async fn all_strategies_failing_is_a_collaborator_error() {
        let failure = || Err(CoreError::ExternalServiceError("down".into()));
        let search = FakeLocationSearch::delhi()
            .with_strategy(SearchStrategy::HealthcareAmenities, failure())
            .with_strategy(SearchStrategy::HealthcareTag, failure())
            .with_strategy(SearchStrategy::MedicalOffices, failure());
        let service = test_service_with(FakeLLM::replying(&[""]), search);
        let session = service.resolve_session(None).await.unwrap();

        let err = service.search_providers(input(session.id, 10)).await.unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn empty_results_are_not_an_error() {
        let service = test_service_with(FakeLLM::replying(&[""]), FakeLocationSearch::delhi());
        let session = service.resolve_session(None).await.unwrap();

        let outcome = service.search_providers(input(session.id, 10)).await.unwrap();

        assert!(outcome.providers.is_empty());
        assert_eq!(outcome.strategy, None);
        let (_, report) = service.provider_resource_report(session.id).await.unwrap();
        assert!(report.contains("NO PROVIDERS FOUND IN SEARCH"));
    }

    #[tokio::test]
    async fn radius_is_validated() {
        let service = test_service_with(FakeLLM::replying(&[""]), FakeLocationSearch::delhi());
        let session = service.resolve_session(None).await.unwrap();

        let err = service.search_providers(input(session.id, 80)).await.unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
        assert_eq!(service.location_search.searches(), 0);
    }
}
