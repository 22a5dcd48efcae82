use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct GarageViewDoc { pub gid: String, pub location: String, pub budget: i32 }

#[derive(ToSchema)]
pub struct OwnerViewDoc { pub cid: String, pub name: String }

#[derive(ToSchema)]
pub struct MechanicViewDoc {
    pub mid: String,
    pub name: String,
    pub salary: f64,
    pub garage: Option<GarageViewDoc>,
}

#[derive(ToSchema)]
pub struct VehicleViewDoc {
    pub reg: String,
    pub make: String,
    pub model: String,
    pub owner: Option<OwnerViewDoc>,
    pub mechanic: Option<MechanicViewDoc>,
}

/// Accepted body for vehicle registration. `id`, `owner` and `mechanic` are refused.
#[derive(ToSchema)]
pub struct CreateVehicleDoc { pub reg: String, pub make: String, pub model: String }

/// Accepted body for mechanic reassignment. Any other mechanic attribute is refused.
#[derive(ToSchema)]
pub struct ReassignMechanicDoc { pub mid: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::vehicles::list_all,
        crate::routes::vehicles::list_raw,
        crate::routes::vehicles::list_by_make,
        crate::routes::vehicles::create,
        crate::routes::vehicles::reassign_mechanic,
        crate::routes::mechanics::delete,
    ),
    components(
        schemas(
            HealthResponse,
            GarageViewDoc,
            OwnerViewDoc,
            MechanicViewDoc,
            VehicleViewDoc,
            CreateVehicleDoc,
            ReassignMechanicDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "vehicle"),
        (name = "mechanic")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn document_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for p in ["/health", "/api/vehicle/all", "/api/vehicle/raw", "/api/vehicle", "/api/vehicle/{reg}", "/api/mechanic/{mid}"] {
            assert!(paths.contains_key(p), "missing {p}");
        }
    }
}
