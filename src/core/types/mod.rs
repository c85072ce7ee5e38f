pub mod authorization_any;
pub mod authz_msg;
pub mod block_context;
pub mod exec_result;
pub mod genesis_grant;
pub mod grant;
