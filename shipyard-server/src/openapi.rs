//! OpenAPI specification for Shipyard server.

use utoipa::OpenApi;

use shipyard_core::{Ship, ShipDraft, ShipOrder, ShipPatch, ShipType};

use crate::routes::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::list_ships,
        crate::routes::count_ships,
        crate::routes::create_ship,
        crate::routes::get_ship,
        crate::routes::update_ship,
        crate::routes::delete_ship,
        crate::routes::openapi_json
    ),
    components(
        schemas(
            Ship,
            ShipDraft,
            ShipPatch,
            ShipType,
            ShipOrder,
            ErrorResponse
        )
    ),
    tags(
        (name = "ships", description = "Ship registry"),
        (name = "system", description = "System endpoints")
    )
)]
/// OpenAPI specification for the Shipyard server.
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn openapi_includes_expected_paths() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;

        assert!(paths.contains_key("/rest/ships"));
        assert!(paths.contains_key("/rest/ships/count"));
        assert!(paths.contains_key("/rest/ships/{id}"));
        assert!(paths.contains_key("/rest/openapi.json"));
    }

    #[test]
    fn openapi_registers_ship_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;

        for name in ["Ship", "ShipDraft", "ShipPatch", "ShipType", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
