use std::collections::BTreeMap;

use crate::core::error::ContractError;
use crate::core::types::authorization_any::AuthorizationAny;
use crate::util::aliases::AuthzResult;
use crate::util::traits::ResultExtensions;

use super::capability::{Authorization, RegisteredAuthorization};
use super::generic_authorization::GenericAuthorization;
use super::send_authorization::SendAuthorization;
use super::stake_authorization::StakeAuthorization;

type Decoder = fn(&AuthorizationAny) -> AuthzResult<Box<dyn Authorization>>;

fn decode_as<T: RegisteredAuthorization>(
    any: &AuthorizationAny,
) -> AuthzResult<Box<dyn Authorization>> {
    let authorization: Box<dyn Authorization> =
        Box::new(any.unpack::<T>().map_err(|e| ContractError::ValidationError {
            msg_type_url: any.type_url.clone(),
            explanation: format!("payload does not decode: {}", e),
        })?);
    authorization.to_ok()
}

/// Maps authorization type urls to the decoders for their concrete variants.  Built once per
/// entry point and handed down by reference; new capabilities are added here without touching
/// the dispatcher.
pub struct AuthorizationRegistry {
    decoders: BTreeMap<&'static str, Decoder>,
}
impl AuthorizationRegistry {
    /// An empty registry that decodes nothing.
    pub fn new() -> Self {
        Self {
            decoders: BTreeMap::new(),
        }
    }

    pub fn register<T: RegisteredAuthorization>(&mut self) -> &mut Self {
        self.decoders.insert(T::TYPE_URL, decode_as::<T>);
        self
    }

    pub fn type_urls(&self) -> Vec<&'static str> {
        self.decoders.keys().copied().collect()
    }

    pub fn decode(&self, any: &AuthorizationAny) -> AuthzResult<Box<dyn Authorization>> {
        match self.decoders.get(any.type_url.as_str()) {
            Some(decoder) => decoder(any),
            None => ContractError::UnregisteredAuthorization {
                type_url: any.type_url.clone(),
            }
            .to_err(),
        }
    }
}
impl Default for AuthorizationRegistry {
    /// A registry containing every capability this contract ships with.
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register::<GenericAuthorization>()
            .register::<SendAuthorization>()
            .register::<StakeAuthorization>();
        registry
    }
}
