use crate::application::http::{
    authentication::{handlers::get_me::__path_get_me, router::AuthenticationApiDoc},
    category::router::CategoryApiDoc,
    health::router::HealthApiDoc,
    product::router::ProductApiDoc,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API"
    ),
    modifiers(&BearerSecurity),
    paths(get_me),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/categories", api = CategoryApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
