/// The address used as the contract admin after default instantiation.
pub const DEFAULT_ADMIN_ADDRESS: &str = "admin";
/// The account delegating authority in most tests.
pub const DEFAULT_GRANTER_ADDRESS: &str = "granter";
/// The account receiving delegated authority in most tests.
pub const DEFAULT_GRANTEE_ADDRESS: &str = "grantee";
/// Receives funds sent through authorized bank messages.
pub const DEFAULT_RECIPIENT_ADDRESS: &str = "recipient";
pub const DEFAULT_VALIDATOR_ADDRESS: &str = "validator";
pub const DEFAULT_DENOM: &str = "stake";
/// The balance credited to the granter by [fund_account](super::test_utilities::fund_account)
/// helpers when no amount is specified.
pub const DEFAULT_GRANTER_FUNDS: u128 = 1000;
/// Default spend limit for send authorizations built by the test utilities.
pub const DEFAULT_SPEND_LIMIT: u128 = 100;
/// Seconds added to the mocked block time to produce a valid expiration.
pub const DEFAULT_GRANT_DURATION_SECONDS: u64 = 3600;
