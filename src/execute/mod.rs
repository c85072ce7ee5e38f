//! Contains all execution routes used by the [contract file](crate::contract).

/// Contains the functionality used by the [Deposit](crate::core::msg::ExecuteMsg::Deposit)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod deposit;
/// Contains the functionality used by the [Exec](crate::core::msg::ExecuteMsg::Exec)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod exec;
/// Contains the functionality used by the [Grant](crate::core::msg::ExecuteMsg::Grant)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod grant;
/// Contains the functionality used by the [PruneExpiredGrants](crate::core::msg::ExecuteMsg::PruneExpiredGrants)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod prune_expired_grants;
/// Contains the functionality used by the [Revoke](crate::core::msg::ExecuteMsg::Revoke)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod revoke;
/// Contains the functionality used by the [Withdraw](crate::core::msg::ExecuteMsg::Withdraw)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod withdraw;
