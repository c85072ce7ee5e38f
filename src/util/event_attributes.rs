use super::constants::{
    AUTHZ_EVENT_TYPE_KEY, GRANTEE_KEY, GRANTER_KEY, MSG_TYPE_URL_KEY, NEW_VALUE_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    Grant,
    Revoke,
    Exec,
    PruneExpiredGrants,
    Deposit,
    Withdraw,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::Grant => "grant",
            EventType::Revoke => "revoke",
            EventType::Exec => "exec",
            EventType::PruneExpiredGrants => "prune_expired_grants",
            EventType::Deposit => "deposit",
            EventType::Withdraw => "withdraw",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(AUTHZ_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    /// Shorthand for the attributes every grant-targeting route emits.
    pub fn for_grant_event<T1: Into<String>, T2: Into<String>, T3: Into<String>>(
        event_type: EventType,
        granter: T1,
        grantee: T2,
        msg_type_url: T3,
    ) -> Self {
        Self::new(event_type)
            .set_granter(granter)
            .set_grantee(grantee)
            .set_msg_type_url(msg_type_url)
    }

    pub fn set_granter<T: Into<String>>(mut self, granter: T) -> Self {
        self.attributes.push((GRANTER_KEY.into(), granter.into()));
        self
    }

    pub fn set_grantee<T: Into<String>>(mut self, grantee: T) -> Self {
        self.attributes.push((GRANTEE_KEY.into(), grantee.into()));
        self
    }

    pub fn set_msg_type_url<T: Into<String>>(mut self, msg_type_url: T) -> Self {
        self.attributes
            .push((MSG_TYPE_URL_KEY.into(), msg_type_url.into()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
