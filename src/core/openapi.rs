use utoipa::{Modify, OpenApi};

use crate::features::quote_requests::{
    dtos as quote_requests_dtos, handlers as quote_requests_handlers,
};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Quote requests (public)
        quote_requests_handlers::submit_request,
    ),
    components(
        schemas(
            quote_requests_dtos::SubmitRequestDto,
            quote_requests_dtos::SubmitResponseDto,
            ErrorBody,
        )
    ),
    tags(
        (name = "quote-requests", description = "Treatment quote request intake (public)"),
    ),
    info(
        title = "MedQuote API",
        version = "0.1.0",
        description = "API documentation for MedQuote",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
