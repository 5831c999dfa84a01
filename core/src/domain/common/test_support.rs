//! In-crate fakes for the collaborator ports.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use crate::{
    domain::{
        analysis::{ports::LLMClient, value_objects::ImageInput},
        common::{SessionConfig, entities::app_errors::CoreError, services::Service},
        provider::{
            entities::{ElementKind, GeoPoint, GeocodedLocation, LocationElement},
            ports::LocationSearchPort,
            strategies::SearchStrategy,
        },
        trends::value_objects::TrendThresholds,
    },
    infrastructure::session::in_memory::InMemorySessionRepository,
};

pub(crate) type TestService = Service<FakeLLM, FakeLocationSearch, InMemorySessionRepository>;

pub(crate) fn test_service(llm: FakeLLM) -> TestService {
    test_service_with(llm, FakeLocationSearch::delhi())
}

pub(crate) fn test_service_with(llm: FakeLLM, search: FakeLocationSearch) -> TestService {
    Service::new(
        llm,
        search,
        InMemorySessionRepository::new(),
        TrendThresholds::default(),
        SessionConfig::default(),
    )
}

/// Replies with the given texts in turn, repeating the last one.
pub(crate) struct FakeLLM {
    replies: Vec<String>,
    calls: AtomicUsize,
    fail_next: AtomicBool,
}

impl FakeLLM {
    pub(crate) fn replying(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            calls: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
        }
    }

    pub(crate) fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn reply(&self) -> Result<String, CoreError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(CoreError::ExternalServiceError("LLM unavailable".into()));
        }

        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let index = call.min(self.replies.len().saturating_sub(1));
        Ok(self.replies.get(index).cloned().unwrap_or_default())
    }
}

impl LLMClient for FakeLLM {
    async fn generate_with_image(&self, _prompt: String, _image: ImageInput) -> Result<String, CoreError> {
        self.reply()
    }

    async fn generate_with_text(&self, _prompt: String, _input: String) -> Result<String, CoreError> {
        self.reply()
    }
}

pub(crate) struct FakeLocationSearch {
    location: Option<GeocodedLocation>,
    results: HashMap<&'static str, Result<Vec<LocationElement>, CoreError>>,
    searches: AtomicUsize,
}

impl FakeLocationSearch {
    pub(crate) fn delhi() -> Self {
        Self {
            location: Some(GeocodedLocation {
                query: "New Delhi, Delhi, India".into(),
                display_name: "New Delhi, Delhi, India".into(),
                point: GeoPoint::new(28.6139, 77.2090),
            }),
            results: HashMap::new(),
            searches: AtomicUsize::new(0),
        }
    }

    pub(crate) fn nowhere() -> Self {
        Self {
            location: None,
            ..Self::delhi()
        }
    }

    pub(crate) fn with_strategy(
        mut self,
        strategy: SearchStrategy,
        result: Result<Vec<LocationElement>, CoreError>,
    ) -> Self {
        self.results.insert(strategy.as_str(), result);
        self
    }

    pub(crate) fn node(lat: f64, lon: f64, tags: &[(&str, &str)]) -> LocationElement {
        LocationElement {
            kind: ElementKind::Node,
            lat: Some(lat),
            lon: Some(lon),
            center: None,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub(crate) fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

impl LocationSearchPort for FakeLocationSearch {
    async fn geocode(&self, query: String) -> Result<Option<GeocodedLocation>, CoreError> {
        Ok(self.location.clone().map(|mut location| {
            location.query = query;
            location
        }))
    }

    async fn search(
        &self,
        strategy: SearchStrategy,
        _center: GeoPoint,
        _radius_km: f64,
    ) -> Result<Vec<LocationElement>, CoreError> {
        self.searches.fetch_add(1, Ordering::SeqCst);

        self.results
            .get(strategy.as_str())
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
