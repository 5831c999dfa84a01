use crate::{
    domain::common::{YshyConfig, services::Service},
    infrastructure::{
        geo::nominatim_overpass_client::NominatimOverpassClient,
        llm::gemini_client::GeminiLLMClient,
        session::in_memory::InMemorySessionRepository,
    },
};

pub type YshyService =
    Service<GeminiLLMClient, NominatimOverpassClient, InMemorySessionRepository>;

pub fn create_service(config: YshyConfig) -> Result<YshyService, anyhow::Error> {
    if config.llm.gemini_api_key.trim().is_empty() {
        tracing::warn!("no AI service key configured; analyses will fail until one is set");
    }

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.base_url,
    );
    let location_search = NominatimOverpassClient::new(&config.geo)?;

    Ok(Service::new(
        llm_client,
        location_search,
        InMemorySessionRepository::new(),
        config.trend,
        config.session,
    ))
}
