use crate::server::error::Error;

/// Answers requests whose path matches no route with a 404 `{"msg": "Route not found"}`
pub async fn route_not_found() -> Error {
    Error::NotFound("Route")
}

/// Answers known paths requested with an unsupported method with a 405 `{"msg": ...}`
pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
