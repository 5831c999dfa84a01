use axum::extract::Query;
use serde::Serialize;
use utoipa::ToSchema;
use yshy_core::domain::provider::resources::{ResourceListing, resource_listing};

use crate::application::http::{
    provider::validators::ResourceParams, server::api_entities::response::Response,
};

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct ResourcesResponse {
    pub data: ResourceListing,
}

#[utoipa::path(
    get,
    path = "/resources",
    tag = "providers",
    summary = "Static healthcare resources for a region",
    description = "Emergency numbers, coverage schemes, telehealth and support communities",
    params(ResourceParams),
    responses(
        (status = 200, body = ResourcesResponse)
    ),
)]
pub async fn get_resources(Query(params): Query<ResourceParams>) -> Response<ResourcesResponse> {
    Response::OK(ResourcesResponse {
        data: resource_listing(params.region()),
    })
}
