//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::ErrorBody;
use crate::purchase::PurchaseRequest;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Airtime Gateway API",
        version = "1.0.0",
        description = "Buy mobile airtime through the upstream provider and keep a record of completed purchases.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::airtime::get_networks,
        crate::gateway::handlers::airtime::purchase_airtime,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            PurchaseRequest,
            ErrorBody,
            HealthResponse,
        )
    ),
    tags(
        (name = "Airtime", description = "Network catalog and airtime purchase"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
