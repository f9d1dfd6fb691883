use axum::{
    async_trait,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::error::ApiError,
    app::AppState,
    domain::{EnergyAnalysis, House},
};

/// JSON house body that has been decoded and validated.
///
/// Malformed JSON, wrong field types and out-of-range attributes are all
/// rejected as bad requests.
pub struct ValidHouse(pub House);

#[async_trait]
impl<S> FromRequest<S> for ValidHouse
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(house) = Json::<House>::from_request(req, state).await?;
        house.validate()?;
        Ok(Self(house))
    }
}

async fn load(st: &AppState, id: &str) -> Result<House, ApiError> {
    st.store
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Object with id '{}' not found", id)))
}

/// POST /houses - Create a house under a generated id, returned as plain text
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/houses",
    request_body(content = House, description = "The new house to be created"),
    responses(
        (
            status = 200,
            description = "Id of the house that has been created",
            body = String,
            content_type = "text/plain"
        ),
        (status = 400, description = "Invalid house attributes"),
    ),
    tag = "houses"
))]
pub async fn create_house(
    State(st): State<AppState>,
    ValidHouse(house): ValidHouse,
) -> Result<String, ApiError> {
    let id = st.store.insert(&house).await?;
    info!(%id, "created house");
    Ok(id)
}

/// POST /houses/:id - Create a house with the given id, overwriting any previous one
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/houses/{id}",
    params(("id" = String, Path, description = "The id. Format is UUID")),
    request_body(
        content = House,
        description = "The new house to be created, or updated if an old id is used"
    ),
    responses(
        (status = 204, description = "House stored"),
        (status = 400, description = "Id is not a UUID or the house attributes are invalid"),
    ),
    tag = "houses"
))]
pub async fn put_house(
    State(st): State<AppState>,
    Path(id): Path<String>,
    ValidHouse(house): ValidHouse,
) -> Result<StatusCode, ApiError> {
    if Uuid::parse_str(&id).is_err() {
        return Err(ApiError::BadRequest(format!("Id '{}' is not a valid UUID", id)));
    }
    st.store.put(&id, &house).await?;
    info!(%id, "stored house");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /houses/:id - Get a house by id
#[cfg_attr(feature = "swagger", utoipa::path(
    get,
    path = "/houses/{id}",
    params(("id" = String, Path, description = "The id. Format is UUID")),
    responses(
        (status = 200, description = "The stored house", body = House),
        (status = 404, description = "No house with this id"),
    ),
    tag = "houses"
))]
pub async fn get_house(
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<House>, ApiError> {
    Ok(Json(load(&st, &id).await?))
}

/// DELETE /houses/:id - Delete the house with the given id
#[cfg_attr(feature = "swagger", utoipa::path(
    delete,
    path = "/houses/{id}",
    params(("id" = String, Path, description = "The id. Format is UUID")),
    responses((status = 204, description = "House removed, or there was none")),
    tag = "houses"
))]
pub async fn delete_house(
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    st.store.delete(&id).await?;
    info!(%id, "deleted house");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /houses/:id/energy - Energy features of a stored house
#[cfg_attr(feature = "swagger", utoipa::path(
    get,
    path = "/houses/{id}/energy",
    params(("id" = String, Path, description = "The id. Format is UUID")),
    responses(
        (status = 200, description = "Energy analysis of the house", body = EnergyAnalysis),
        (status = 404, description = "No house with this id"),
    ),
    tag = "houses"
))]
pub async fn get_energy(
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EnergyAnalysis>, ApiError> {
    let house = load(&st, &id).await?;
    let analysis = st.calculator.analyze(&house)?;
    Ok(Json(analysis))
}
