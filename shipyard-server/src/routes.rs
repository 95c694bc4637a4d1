//! HTTP handlers for Shipyard server.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde::{Deserialize, Serialize};
use shipyard_core::{
    ListOptions, ShipCriteria, ShipDraft, ShipOrder, ShipPatch, ShipService, ShipType,
    ShipyardError, parse_id,
};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::openapi::ApiDoc;

#[derive(Clone)]
/// Shared application state for handlers.
pub struct AppState {
    /// Ship record service.
    pub ships: ShipService,
}

/// Error response payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub message: String,
}

/// Query parameters for ship listings: filters plus order and paging.
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShipListQuery {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the planet.
    pub planet: Option<String>,
    /// Exact category.
    pub ship_type: Option<ShipType>,
    /// Produced at or after (epoch milliseconds).
    pub after: Option<i64>,
    /// Produced at or before (epoch milliseconds).
    pub before: Option<i64>,
    /// Exact used flag.
    pub is_used: Option<bool>,
    /// Minimum speed.
    pub min_speed: Option<f64>,
    /// Maximum speed.
    pub max_speed: Option<f64>,
    /// Minimum crew size.
    pub min_crew_size: Option<i32>,
    /// Maximum crew size.
    pub max_crew_size: Option<i32>,
    /// Minimum rating.
    pub min_rating: Option<f64>,
    /// Maximum rating.
    pub max_rating: Option<f64>,
    /// Sort key.
    pub order: Option<ShipOrder>,
    /// Zero-indexed page number (default 0).
    pub page_number: Option<usize>,
    /// Page size (default 3).
    pub page_size: Option<usize>,
}

impl ShipListQuery {
    fn into_parts(self) -> (ShipCriteria, ListOptions) {
        let criteria = ShipCriteria {
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            after: self.after,
            before: self.before,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        };
        let options = ListOptions {
            order: self.order,
            page_number: self.page_number,
            page_size: self.page_size,
        };
        (criteria, options)
    }
}

fn error_response(err: &ShipyardError) -> HttpResponse {
    let body = ErrorResponse {
        message: err.to_string(),
    };
    match err {
        ShipyardError::NotFound(_) => HttpResponse::NotFound().json(body),
        ShipyardError::Storage(_) => {
            log::error!("{err}");
            HttpResponse::InternalServerError().json(body)
        }
        _ => {
            log::debug!("rejected request: {err}");
            HttpResponse::BadRequest().json(body)
        }
    }
}

fn malformed(detail: impl std::fmt::Display) -> HttpResponse {
    error_response(&ShipyardError::MalformedRequest(detail.to_string()))
}

/// Run a service call on the blocking pool.
async fn with_ships<T, F>(state: &web::Data<AppState>, call: F) -> Result<T, ShipyardError>
where
    F: FnOnce(ShipService) -> shipyard_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let ships = state.ships.clone();
    web::block(move || call(ships))
        .await
        .map_err(|err| ShipyardError::Storage(format!("ship task failed: {err}")))?
}

/// Register extractor configuration and ship routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| {
                let response = malformed(&err);
                InternalError::from_response(err, response).into()
            }),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| {
                let response = malformed(&err);
                InternalError::from_response(err, response).into()
            }),
    )
    // `count` must be registered before the `{id}` routes.
    .service(count_ships)
    .service(list_ships)
    .service(create_ship)
    .service(get_ship)
    .service(update_ship)
    .service(delete_ship)
    .service(openapi_json);
}

#[utoipa::path(
    get,
    path = "/rest/ships",
    params(ShipListQuery),
    responses(
        (status = 200, description = "Requested page of matching ships", body = [Ship]),
        (status = 400, description = "Malformed query", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[get("/rest/ships")]
/// List ships matching the filters, sorted and paged.
pub async fn list_ships(
    state: web::Data<AppState>,
    query: web::Query<ShipListQuery>,
) -> impl Responder {
    let (criteria, options) = query.into_inner().into_parts();
    match with_ships(&state, move |ships| ships.list(&criteria, options)).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    get,
    path = "/rest/ships/count",
    params(ShipCriteria),
    responses(
        (status = 200, description = "Number of matching ships", body = u64),
        (status = 400, description = "Malformed query", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[get("/rest/ships/count")]
/// Count ships matching the filters.
pub async fn count_ships(
    state: web::Data<AppState>,
    query: web::Query<ShipCriteria>,
) -> impl Responder {
    let criteria = query.into_inner();
    match with_ships(&state, move |ships| ships.count(&criteria)).await {
        Ok(count) => HttpResponse::Ok().json(count),
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    post,
    path = "/rest/ships",
    request_body = ShipDraft,
    responses(
        (status = 200, description = "Created ship", body = Ship),
        (status = 400, description = "Invalid ship", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[post("/rest/ships")]
/// Create a ship; the rating is derived server-side.
pub async fn create_ship(
    state: web::Data<AppState>,
    payload: web::Json<ShipDraft>,
) -> impl Responder {
    let draft = payload.into_inner();
    match with_ships(&state, move |ships| ships.create(draft)).await {
        Ok(ship) => {
            log::info!("created ship {}", ship.id);
            HttpResponse::Ok().json(ship)
        }
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    get,
    path = "/rest/ships/{id}",
    params(
        ("id" = i64, Path, description = "Ship identifier")
    ),
    responses(
        (status = 200, description = "Ship", body = Ship),
        (status = 400, description = "Invalid identifier", body = ErrorResponse),
        (status = 404, description = "Ship not found", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[get("/rest/ships/{id}")]
/// Fetch a ship by id.
pub async fn get_ship(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_id(&path.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    match with_ships(&state, move |ships| ships.get(id)).await {
        Ok(ship) => HttpResponse::Ok().json(ship),
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    post,
    path = "/rest/ships/{id}",
    params(
        ("id" = i64, Path, description = "Ship identifier")
    ),
    request_body = ShipPatch,
    responses(
        (status = 200, description = "Updated ship", body = Ship),
        (status = 400, description = "Invalid identifier or field", body = ErrorResponse),
        (status = 404, description = "Ship not found", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[post("/rest/ships/{id}")]
/// Apply a partial update to a ship.
pub async fn update_ship(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ShipPatch>,
) -> impl Responder {
    let id = match parse_id(&path.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    let patch = payload.into_inner();
    match with_ships(&state, move |ships| ships.update(id, &patch)).await {
        Ok(ship) => HttpResponse::Ok().json(ship),
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    delete,
    path = "/rest/ships/{id}",
    params(
        ("id" = i64, Path, description = "Ship identifier")
    ),
    responses(
        (status = 200, description = "Ship deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorResponse),
        (status = 404, description = "Ship not found", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[delete("/rest/ships/{id}")]
/// Delete a ship.
pub async fn delete_ship(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_id(&path.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    match with_ships(&state, move |ships| ships.delete(id)).await {
        Ok(()) => {
            log::info!("deleted ship {id}");
            HttpResponse::Ok().finish()
        }
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    get,
    path = "/rest/openapi.json",
    responses(
        (status = 200, description = "OpenAPI document", body = serde_json::Value)
    ),
    tag = "system"
)]
#[get("/rest/openapi.json")]
/// Serve the OpenAPI document.
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
