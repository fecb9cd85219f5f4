//! Carbon Bridge Contract Implementation

use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env,
    MessageInfo, Order, Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg, Cw20ReceiveMsg, TokenInfoResponse};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, LiabilitiesResponse, LiabilityResponse,
    MigrateMsg, OriginProcessedResponse, PausersResponse, QueryMsg, ReceiveMsg,
    TotalTransferredResponse,
};
use crate::state::{
    Config, OriginKey, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LIABILITIES, PAUSERS,
    PROCESSED_ORIGINS, SETTLEMENT_DECIMALS, TOTAL_TRANSFERRED,
};
use common::registry::{IsAllowedResponse, IsEligibleResponse, RegistryQueryMsg};
use common::validate_settlement_address;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let token_issuer = deps.api.addr_validate(&msg.token_issuer)?;
    let registry = deps.api.addr_validate(&msg.registry)?;

    if msg.settlement_prefix.is_empty() {
        return Err(ContractError::Std(cosmwasm_std::StdError::generic_err(
            "settlement prefix must not be empty",
        )));
    }

    let config = Config {
        owner,
        token_issuer,
        issuer_rotated: false,
        registry,
        settlement_prefix: msg.settlement_prefix,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    TOTAL_TRANSFERRED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("token_issuer", config.token_issuer)
        .add_attribute("registry", config.registry)
        .add_attribute("settlement_prefix", config.settlement_prefix))
}

// ============================================================================
// Roles
// ============================================================================

/// Capabilities a caller can hold. Every privileged entry point funnels
/// through [`require_role`] instead of checking identities inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Owner,
    Issuer,
    Pauser,
}

fn require_role(
    deps: Deps,
    config: &Config,
    sender: &Addr,
    role: Role,
) -> Result<(), ContractError> {
    let authorized = match role {
        Role::Owner => *sender == config.owner,
        Role::Issuer => *sender == config.token_issuer,
        // the owner always qualifies as a pauser without an explicit grant
        Role::Pauser => {
            *sender == config.owner
                || PAUSERS.may_load(deps.storage, sender)?.unwrap_or(false)
        }
    };

    if authorized {
        Ok(())
    } else if role == Role::Issuer {
        Err(ContractError::InvalidCaller)
    } else {
        Err(ContractError::Unauthorized)
    }
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::IssueTokens {
            origin,
            recipient,
            token,
            amount,
            note,
        } => execute_issue_tokens(deps, info, origin, recipient, token, amount, note),
        ExecuteMsg::Pause {} => execute_set_pause(deps, info, true),
        ExecuteMsg::Unpause {} => execute_set_pause(deps, info, false),
        ExecuteMsg::GrantPauser { address } => execute_grant_pauser(deps, info, address),
        ExecuteMsg::RevokePauser { address } => execute_revoke_pauser(deps, info, address),
        ExecuteMsg::SetTokenIssuer { new_issuer } => {
            execute_set_token_issuer(deps, info, new_issuer)
        }
    }
}

fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    // the calling cw20 contract is the token being bridged
    let token = info.sender;
    let caller = deps.api.addr_validate(&cw20_msg.sender)?;

    match from_json(&cw20_msg.msg)? {
        ReceiveMsg::Bridge { recipient } => {
            execute_bridge(deps, config, token, caller, recipient, cw20_msg.amount)
        }
    }
}

fn execute_bridge(
    deps: DepsMut,
    config: Config,
    token: Addr,
    caller: Addr,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::NonPositiveAmount);
    }

    validate_settlement_address(&recipient, &config.settlement_prefix)?;

    let allowed: IsAllowedResponse = deps.querier.query_wasm_smart(
        config.registry.clone(),
        &RegistryQueryMsg::IsAllowed {
            token: token.to_string(),
        },
    )?;
    if !allowed.allowed {
        return Err(ContractError::TokenNotRecognized {
            token: token.to_string(),
        });
    }

    let eligible: IsEligibleResponse = deps.querier.query_wasm_smart(
        config.registry,
        &RegistryQueryMsg::IsEligible {
            token: token.to_string(),
        },
    )?;
    if !eligible.eligible {
        return Err(ContractError::TokenNotEligible {
            token: token.to_string(),
        });
    }

    ensure_settlement_precision(deps.as_ref(), &token, amount)?;

    // record the liability; the received tokens stay in bridge custody
    let liability = LIABILITIES
        .may_load(deps.storage, &token)?
        .unwrap_or_default();
    LIABILITIES.save(deps.storage, &token, &(liability + amount))?;

    let total = TOTAL_TRANSFERRED.load(deps.storage)?;
    TOTAL_TRANSFERRED.save(deps.storage, &(total + amount))?;

    Ok(Response::new()
        .add_attribute("method", "bridge")
        .add_attribute("caller", caller)
        .add_attribute("recipient", recipient)
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string()))
}

/// The settlement chain carries at most [`SETTLEMENT_DECIMALS`] decimals.
/// An amount with a finer-grained remainder relative to the token's native
/// unit is rejected outright rather than silently truncated.
fn ensure_settlement_precision(
    deps: Deps,
    token: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let token_info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(token.clone(), &Cw20QueryMsg::TokenInfo {})?;

    if token_info.decimals <= SETTLEMENT_DECIMALS {
        return Ok(());
    }

    let granularity = 10u128.pow(u32::from(token_info.decimals - SETTLEMENT_DECIMALS));
    if amount.u128() % granularity != 0 {
        return Err(ContractError::PrecisionTooFine {
            amount,
            max_decimals: SETTLEMENT_DECIMALS,
        });
    }

    Ok(())
}

fn execute_issue_tokens(
    deps: DepsMut,
    info: MessageInfo,
    origin: String,
    recipient: String,
    token: String,
    amount: Uint128,
    note: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    require_role(deps.as_ref(), &config, &info.sender, Role::Issuer)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    if amount.is_zero() {
        return Err(ContractError::NonPositiveAmount);
    }

    // the settlement-chain sender must at least be well-formed; whether the
    // funds really arrived there is attested by the token issuer alone
    validate_settlement_address(&origin, &config.settlement_prefix)?;

    let token_addr = deps.api.addr_validate(&token)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let liability = LIABILITIES
        .may_load(deps.storage, &token_addr)?
        .unwrap_or_default();
    if amount > liability {
        return Err(ContractError::InsufficientLiability {
            token: token_addr.to_string(),
            requested: amount,
            available: liability,
        });
    }

    let key = OriginKey {
        origin: origin.clone(),
        recipient: recipient_addr.to_string(),
        token: token_addr.to_string(),
        amount,
        note: note.clone(),
    }
    .storage_key()?;
    if PROCESSED_ORIGINS
        .may_load(deps.storage, &key)?
        .unwrap_or(false)
    {
        return Err(ContractError::DuplicateOrigin);
    }
    PROCESSED_ORIGINS.save(deps.storage, &key, &true)?;

    LIABILITIES.save(deps.storage, &token_addr, &(liability - amount))?;

    let total = TOTAL_TRANSFERRED.load(deps.storage)?;
    TOTAL_TRANSFERRED.save(deps.storage, &(total - amount))?;

    // release from custody
    let release = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(release)
        .add_attribute("method", "issue_tokens")
        .add_attribute("origin", origin)
        .add_attribute("recipient", recipient_addr)
        .add_attribute("token", token_addr)
        .add_attribute("amount", amount.to_string())
        .add_attribute("note", note))
}

// Admin functions

fn execute_set_pause(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    require_role(deps.as_ref(), &config, &info.sender, Role::Pauser)?;

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    let method = if paused { "pause" } else { "unpause" };
    Ok(Response::new().add_attribute("method", method))
}

fn execute_grant_pauser(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    require_role(deps.as_ref(), &config, &info.sender, Role::Owner)?;

    let pauser = deps.api.addr_validate(&address)?;
    PAUSERS.save(deps.storage, &pauser, &true)?;

    Ok(Response::new()
        .add_attribute("method", "grant_pauser")
        .add_attribute("pauser", pauser))
}

fn execute_revoke_pauser(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    require_role(deps.as_ref(), &config, &info.sender, Role::Owner)?;

    let pauser = deps.api.addr_validate(&address)?;
    PAUSERS.remove(deps.storage, &pauser);

    Ok(Response::new()
        .add_attribute("method", "revoke_pauser")
        .add_attribute("pauser", pauser))
}

fn execute_set_token_issuer(
    deps: DepsMut,
    info: MessageInfo,
    new_issuer: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    require_role(deps.as_ref(), &config, &info.sender, Role::Owner)?;

    // the issuer may be rotated exactly once over the contract's lifetime
    if config.issuer_rotated {
        return Err(ContractError::AlreadySet);
    }

    let new_addr = deps.api.addr_validate(&new_issuer)?;
    let old_issuer = config.token_issuer.clone();
    config.token_issuer = new_addr.clone();
    config.issuer_rotated = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_token_issuer")
        .add_attribute("old_issuer", old_issuer)
        .add_attribute("new_issuer", new_addr))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TotalTransferred {} => to_json_binary(&query_total_transferred(deps)?),
        QueryMsg::Liability { token } => to_json_binary(&query_liability(deps, token)?),
        QueryMsg::Liabilities { start_after, limit } => {
            to_json_binary(&query_liabilities(deps, start_after, limit)?)
        }
        QueryMsg::OriginProcessed {
            origin,
            recipient,
            token,
            amount,
            note,
        } => to_json_binary(&query_origin_processed(
            deps, origin, recipient, token, amount, note,
        )?),
        QueryMsg::Pausers {} => to_json_binary(&query_pausers(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        token_issuer: config.token_issuer,
        issuer_rotated: config.issuer_rotated,
        registry: config.registry,
        settlement_prefix: config.settlement_prefix,
        paused: config.paused,
    })
}

fn query_total_transferred(deps: Deps) -> StdResult<TotalTransferredResponse> {
    let total = TOTAL_TRANSFERRED.load(deps.storage)?;
    Ok(TotalTransferredResponse { total })
}

fn query_liability(deps: Deps, token: String) -> StdResult<LiabilityResponse> {
    let token_addr = deps.api.addr_validate(&token)?;
    let amount = LIABILITIES
        .may_load(deps.storage, &token_addr)?
        .unwrap_or_default();
    Ok(LiabilityResponse { token, amount })
}

fn query_liabilities(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<LiabilitiesResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let liabilities: Vec<LiabilityResponse> = LIABILITIES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token, amount) = item?;
            Ok(LiabilityResponse {
                token: token.to_string(),
                amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(LiabilitiesResponse { liabilities })
}

fn query_origin_processed(
    deps: Deps,
    origin: String,
    recipient: String,
    token: String,
    amount: Uint128,
    note: String,
) -> StdResult<OriginProcessedResponse> {
    let key = OriginKey {
        origin,
        recipient,
        token,
        amount,
        note,
    }
    .storage_key()?;
    let processed = PROCESSED_ORIGINS
        .may_load(deps.storage, &key)?
        .unwrap_or(false);
    Ok(OriginProcessedResponse { processed })
}

fn query_pausers(deps: Deps) -> StdResult<PausersResponse> {
    let pausers: Vec<Addr> = PAUSERS
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|item| {
            let (addr, active) = item.ok()?;
            if active {
                Some(addr)
            } else {
                None
            }
        })
        .collect();

    Ok(PausersResponse { pausers })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
