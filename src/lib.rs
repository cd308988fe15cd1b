use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::presentation::http::{
    endpoints::{
        health::HealthEndpoints, root::ApiState, todos::TodosV1Endpoints, users::UsersV2Endpoints,
    },
    errors::detail_body,
};

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub type Api = (HealthEndpoints, TodosV1Endpoints, UsersV2Endpoints);

pub fn api_service(state: Arc<ApiState>, server_url: &str) -> OpenApiService<Api, ()> {
    OpenApiService::new(
        (
            HealthEndpoints,
            TodosV1Endpoints::new(state.clone()),
            UsersV2Endpoints::new(state),
        ),
        "Todos API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url)
}

/// Routes: the API at the root, Swagger UI under `/docs`. Every error body
/// carries a `detail` string.
pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = api_service(state, &server_url);
    let ui = api_service.swagger_ui();
    let openapi_json = api_service.spec_endpoint();

    Route::new()
        .at("/openapi.json", openapi_json)
        .nest("/docs", ui)
        .nest("/", api_service)
        .around(detail_body)
        .with(Tracing)
}
