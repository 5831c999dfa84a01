pub mod mappers;
pub mod nominatim_overpass_client;
