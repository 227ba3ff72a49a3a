use std::env;

use actix_identity::{Identity, IdentityPolicy, IdentityService};
use actix_web::{
    dev::{ServiceRequest, ServiceResponse},
    error,
};
use chrono::{Duration, Utc};
use futures_util::future::{ok, Ready};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use errors::Error;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub enum Role {
    Admin,
    Viewer,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrivateClaim {
    pub id: i32,
    pub user_name: String,
    pub role: Role,
    exp: i64,
}

impl PrivateClaim {
    pub fn new(id: i32, user_name: String, role: Role) -> Self {
        PrivateClaim {
            id,
            user_name,
            role,
            exp: (Utc::now() + Duration::hours(3)).timestamp(),
        }
    }

    pub fn set_exp(&mut self, exp: i64) {
        self.exp = exp;
    }
}

/// Reads the session token from the `Authorization` header instead of a cookie.
pub struct AuthHeaderIdentityPolicy;

impl AuthHeaderIdentityPolicy {
    fn new() -> Self {
        AuthHeaderIdentityPolicy {}
    }
}

impl IdentityPolicy for AuthHeaderIdentityPolicy {
    type Future = Ready<Result<Option<String>, error::Error>>;
    type ResponseFuture = Ready<Result<(), error::Error>>;

    fn from_request(&self, request: &mut ServiceRequest) -> Self::Future {
        let token = request
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.replace("Bearer ", ""));

        ok(token)
    }

    fn to_response<B>(
        &self,
        _identity: Option<String>,
        _changed: bool,
        _response: &mut ServiceResponse<B>,
    ) -> Self::ResponseFuture {
        ok(())
    }
}

fn jwt_key() -> Result<String, Error> {
    env::var("JWT_KEY").map_err(|_| Error::InternalServerError("JWT_KEY must be set".into()))
}

pub fn create_jwt(private_claim: PrivateClaim) -> Result<String, Error> {
    let jwt_key = jwt_key()?;
    let encoding_key = EncodingKey::from_secret(jwt_key.as_bytes());
    encode(&Header::default(), &private_claim, &encoding_key)
        .map_err(|e| Error::CannotEncodeJwtToken(e.to_string()))
}

pub fn decode_jwt(token: &str) -> Result<PrivateClaim, Error> {
    let jwt_key = jwt_key()?;
    let decoding_key = DecodingKey::from_secret(jwt_key.as_bytes());
    decode::<PrivateClaim>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| Error::CannotDecodeJwtToken(e.to_string()))
}

pub fn get_identity_service() -> IdentityService<AuthHeaderIdentityPolicy> {
    IdentityService::new(AuthHeaderIdentityPolicy::new())
}

pub fn get_claim_from_identity(id: Identity) -> Result<(PrivateClaim, String), Error> {
    if let Some(token) = id.identity() {
        let claim = decode_jwt(&token)?;
        return Ok((claim, token));
    }
    Err(Error::Unauthorized)
}

pub fn require_admin(id: Identity) -> Result<PrivateClaim, Error> {
    let (claim, _) = get_claim_from_identity(id)?;
    if claim.role != Role::Admin {
        return Err(Error::Forbidden);
    }

    Ok(claim)
}
