//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope used by the records API.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": ... }` acknowledgement used by the name roster endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "hydra:member": [...] }` collection envelope used by the batch listing.
#[derive(Debug, Serialize)]
pub struct MemberCollection<T: Serialize> {
    #[serde(rename = "hydra:member")]
    pub member: Vec<T>,
}
