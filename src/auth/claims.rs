use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity embedded in the token payload, wrapped under a `user` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserClaim {
    pub id: Uuid, // store-assigned user ID
}

/// JWT payload used for authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: UserClaim, // identity claim
    pub iat: usize,      // issued at (unix timestamp)
    pub exp: usize,      // expires at (unix timestamp)
}
