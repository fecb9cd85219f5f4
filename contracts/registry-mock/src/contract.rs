use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{ADMIN, CONTRACT_NAME, CONTRACT_VERSION, TOKENS};
use common::registry::{IsAllowedResponse, IsEligibleResponse};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    match msg {
        ExecuteMsg::RegisterToken { token, eligible } => {
            let token = deps.api.addr_validate(&token)?;
            TOKENS.save(deps.storage, &token, &eligible)?;
            Ok(Response::new()
                .add_attribute("method", "register_token")
                .add_attribute("token", token)
                .add_attribute("eligible", eligible.to_string()))
        }
        ExecuteMsg::SetEligibility { token, eligible } => {
            let token = deps.api.addr_validate(&token)?;
            TOKENS.save(deps.storage, &token, &eligible)?;
            Ok(Response::new()
                .add_attribute("method", "set_eligibility")
                .add_attribute("token", token)
                .add_attribute("eligible", eligible.to_string()))
        }
        ExecuteMsg::DeregisterToken { token } => {
            let token = deps.api.addr_validate(&token)?;
            TOKENS.remove(deps.storage, &token);
            Ok(Response::new()
                .add_attribute("method", "deregister_token")
                .add_attribute("token", token))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsAllowed { token } => {
            let token = deps.api.addr_validate(&token)?;
            let allowed = TOKENS.may_load(deps.storage, &token)?.is_some();
            to_json_binary(&IsAllowedResponse { allowed })
        }
        QueryMsg::IsEligible { token } => {
            let token = deps.api.addr_validate(&token)?;
            let eligible = TOKENS.may_load(deps.storage, &token)?.unwrap_or(false);
            to_json_binary(&IsEligibleResponse { eligible })
        }
    }
}
