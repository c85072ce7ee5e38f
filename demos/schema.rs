use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use authz_smart_contract::core::msg::{
    BalanceResponse, DelegationResponse, ExecuteMsg, GrantsResponse, InitMsg, MigrateMsg,
    QueryMsg,
};
use authz_smart_contract::core::state::StateV1;
use authz_smart_contract::core::types::authorization_any::AuthorizationAny;
use authz_smart_contract::core::types::authz_msg::AuthzMsg;
use authz_smart_contract::core::types::exec_result::ExecResponse;
use authz_smart_contract::core::types::genesis_grant::GenesisState;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(InitMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(AuthorizationAny), &out_dir);
    export_schema(&schema_for!(AuthzMsg), &out_dir);
    export_schema(&schema_for!(ExecResponse), &out_dir);
    export_schema(&schema_for!(GrantsResponse), &out_dir);
    export_schema(&schema_for!(BalanceResponse), &out_dir);
    export_schema(&schema_for!(DelegationResponse), &out_dir);
    export_schema(&schema_for!(GenesisState), &out_dir);
    export_schema(&schema_for!(StateV1), &out_dir);
}
