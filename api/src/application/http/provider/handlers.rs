pub mod get_resource_report;
pub mod get_resources;
pub mod search_providers;
