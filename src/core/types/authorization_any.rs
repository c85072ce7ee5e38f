use cosmwasm_std::{from_json, to_json_binary, Binary};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::util::aliases::AuthzResult;
use crate::util::traits::ResultExtensions;

/// The serialized form of any authorization: a discriminating type url and the variant payload.
/// Converted to and from concrete variants by the
/// [AuthorizationRegistry](crate::authorization::registry::AuthorizationRegistry).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AuthorizationAny {
    pub type_url: String,
    pub value: Binary,
}
impl AuthorizationAny {
    pub fn new<S: Into<String>>(type_url: S, value: Binary) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }

    /// Packs a serializable variant under the given type url.
    pub fn pack<S: Into<String>, T: Serialize>(type_url: S, variant: &T) -> AuthzResult<Self> {
        Self::new(type_url, to_json_binary(variant)?).to_ok()
    }

    /// Unpacks the payload as `T` without consulting the type url.
    pub fn unpack<T: DeserializeOwned>(&self) -> AuthzResult<T> {
        from_json::<T>(self.value.as_slice())?.to_ok()
    }
}
