#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, Symbol, TryFromVal, Val,
};

use crate::{AdminUpgradeabilityProxy, AdminUpgradeabilityProxyClient};
use avatar::Avatar;
use avatar_v2::AvatarV2;
use shared::{CallData, ContractError};

// ── Test Helpers ─────────────────────────────────────────────────────────────

struct Setup {
    env: Env,
    proxy: AdminUpgradeabilityProxyClient<'static>,
    admin: Address,
    user: Address,
    v1: Address,
    v2: Address,
}

fn init_call(env: &Env, org_name: &str) -> CallData {
    CallData::new(env, "initialize", vec![env, String::from_str(env, org_name).into_val(env)])
}

/// Proxy in front of Avatar v1, initialized as "genesis".
fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let v1 = env.register(Avatar, ());
    let v2 = env.register(AvatarV2, ());
    let admin = Address::generate(&env);
    let user = Address::generate(&env);

    let id = env.register(AdminUpgradeabilityProxy, ());
    let proxy = AdminUpgradeabilityProxyClient::new(&env, &id);
    proxy.initialize(&admin, &v1, &Some(init_call(&env, "genesis")));

    Setup {
        env,
        proxy,
        admin,
        user,
        v1,
        v2,
    }
}

fn read_name(s: &Setup) -> String {
    let out = s.proxy.call(&s.user, &CallData::bare(&s.env, "org_name"));
    String::try_from_val(&s.env, &out).unwrap()
}

fn read_id(s: &Setup) -> u32 {
    let out = s.proxy.call(&s.user, &CallData::bare(&s.env, "get_id"));
    u32::try_from_val(&s.env, &out).unwrap()
}

// ── Initialization ───────────────────────────────────────────────────────────

#[test]
fn test_initialize_runs_initializer() {
    let s = setup();

    assert_eq!(read_name(&s), String::from_str(&s.env, "genesis"));
    assert_eq!(read_id(&s), 1);
    assert_eq!(s.proxy.admin(), s.admin);
    assert_eq!(s.proxy.implementation(), s.v1);
}

#[test]
fn test_initialize_twice_fails() {
    let s = setup();

    let result = s.proxy.try_initialize(&s.admin, &s.v2, &None);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
    assert_eq!(s.proxy.implementation(), s.v1);
}

#[test]
fn test_failing_initializer_stores_nothing() {
    let env = Env::default();
    env.mock_all_auths();
    let v1 = env.register(Avatar, ());
    let id = env.register(AdminUpgradeabilityProxy, ());
    let proxy = AdminUpgradeabilityProxyClient::new(&env, &id);

    // Missing the org name argument.
    let bad = CallData::bare(&env, "initialize");
    let result = proxy.try_initialize(&Address::generate(&env), &v1, &Some(bad));

    assert_eq!(result, Err(Ok(ContractError::InitializationFailed)));
    assert_eq!(proxy.try_admin(), Err(Ok(ContractError::NotInitialized)));
}

#[test]
fn test_initialize_without_initializer() {
    let env = Env::default();
    env.mock_all_auths();
    let v1 = env.register(Avatar, ());
    let id = env.register(AdminUpgradeabilityProxy, ());
    let proxy = AdminUpgradeabilityProxyClient::new(&env, &id);
    let user = Address::generate(&env);

    proxy.initialize(&Address::generate(&env), &v1, &None);

    assert!(matches!(
        proxy.try_call(&user, &CallData::bare(&env, "org_name")),
        Err(Ok(ContractError::NotInitialized))
    ));
}

// ── Forwarding ───────────────────────────────────────────────────────────────

#[test]
fn test_component_errors_reach_caller_unchanged() {
    let s = setup();

    assert!(matches!(
        s.proxy.try_call(&s.user, &init_call(&s.env, "again")),
        Err(Ok(ContractError::AlreadyInitialized))
    ));
    assert!(matches!(
        s.proxy.try_call(&s.user, &CallData::bare(&s.env, "unknown")),
        Err(Ok(ContractError::UnknownFunction))
    ));
}

#[test]
fn test_forward_to_non_component_fails() {
    let s = setup();
    // A contract without the component ABI.
    let not_a_component = s.env.register(AdminUpgradeabilityProxy, ());
    s.proxy.upgrade_to(&not_a_component);

    assert!(matches!(
        s.proxy.try_call(&s.user, &CallData::bare(&s.env, "org_name")),
        Err(Ok(ContractError::DelegateCallFailed))
    ));
}

#[test]
fn test_instances_have_independent_state() {
    let s = setup();
    let other_id = s.env.register(AdminUpgradeabilityProxy, ());
    let other = AdminUpgradeabilityProxyClient::new(&s.env, &other_id);
    other.initialize(&s.admin, &s.v1, &Some(init_call(&s.env, "genesis2")));

    let out = other.call(&s.user, &CallData::bare(&s.env, "org_name"));
    assert_eq!(
        String::try_from_val(&s.env, &out).unwrap(),
        String::from_str(&s.env, "genesis2")
    );
    assert_eq!(read_name(&s), String::from_str(&s.env, "genesis"));
}

// ── Transparent dispatch ─────────────────────────────────────────────────────

#[test]
fn test_admin_cannot_fall_back() {
    let s = setup();

    assert!(matches!(
        s.proxy.try_call(&s.admin, &CallData::bare(&s.env, "org_name")),
        Err(Ok(ContractError::AdminCannotFallback))
    ));
}

#[test]
fn test_admin_calls_through_generic_entry() {
    let s = setup();

    let out = s.proxy.call(&s.admin, &CallData::bare(&s.env, "implementation"));
    assert_eq!(Address::try_from_val(&s.env, &out).unwrap(), s.v1);

    let upgrade = CallData::new(&s.env, "upgrade_to", vec![&s.env, s.v2.into_val(&s.env)]);
    s.proxy.call(&s.admin, &upgrade);
    assert_eq!(read_id(&s), 2);
}

#[test]
fn test_user_named_like_admin_function_is_forwarded() {
    let s = setup();
    let upgrade = CallData::new(&s.env, "upgrade_to", vec![&s.env, s.v2.into_val(&s.env)]);

    assert!(matches!(
        s.proxy.try_call(&s.user, &upgrade),
        Err(Ok(ContractError::UnknownFunction))
    ));
    assert_eq!(s.proxy.implementation(), s.v1);
}

#[test]
fn test_implementation_view_is_admin_only() {
    let s = setup();

    // Users asking through the generic entry reach the component.
    assert!(matches!(
        s.proxy
            .try_call(&s.user, &CallData::bare(&s.env, "implementation")),
        Err(Ok(ContractError::UnknownFunction))
    ));

    s.env.set_auths(&[]);
    assert!(s.proxy.try_implementation().is_err());
    assert_eq!(s.proxy.admin(), s.admin);
}

#[test]
fn test_malformed_admin_call() {
    let s = setup();

    assert!(matches!(
        s.proxy.try_call(&s.admin, &CallData::bare(&s.env, "upgrade_to")),
        Err(Ok(ContractError::InvalidInput))
    ));
}

// ── Upgrades ─────────────────────────────────────────────────────────────────

#[test]
fn test_upgrade_keeps_state() {
    let s = setup();

    s.proxy.upgrade_to(&s.v2);

    let (contract, topics, data) = s.env.events().all().last().unwrap();
    assert_eq!(contract, s.proxy.address);
    let topic = Symbol::try_from_val(&s.env, &topics.get(0).unwrap()).unwrap();
    assert_eq!(topic, Symbol::new(&s.env, "upgraded"));
    let emitted: Address = data.into_val(&s.env);
    assert_eq!(emitted, s.v2);

    assert_eq!(read_id(&s), 2);
    assert_eq!(read_name(&s), String::from_str(&s.env, "genesis"));
    assert_eq!(s.proxy.implementation(), s.v2);
}

#[test]
fn test_upgrade_is_idempotent() {
    let s = setup();

    s.proxy.upgrade_to(&s.v2);
    s.proxy.upgrade_to(&s.v2);

    assert_eq!(s.proxy.implementation(), s.v2);
    assert_eq!(read_name(&s), String::from_str(&s.env, "genesis"));
}

#[test]
fn test_upgrade_and_call_migrates() {
    let s = setup();

    s.proxy.upgrade_to_and_call(&s.v2, &CallData::bare(&s.env, "migrate"));

    let out: Val = s.proxy.call(&s.user, &CallData::bare(&s.env, "is_migrated"));
    assert!(bool::try_from_val(&s.env, &out).unwrap());
    assert_eq!(s.proxy.implementation(), s.v2);
}

#[test]
fn test_rejected_migration_leaves_proxy_unchanged() {
    let s = setup();

    let result = s
        .proxy
        .try_upgrade_to_and_call(&s.v2, &CallData::bare(&s.env, "no_such_migration"));
    assert!(matches!(result, Err(Ok(ContractError::UpgradeRejected))));

    assert_eq!(s.proxy.implementation(), s.v1);
    assert_eq!(read_id(&s), 1);
}

#[test]
fn test_upgrade_requires_admin() {
    let env = Env::default();
    let v1 = env.register(Avatar, ());
    let v2 = env.register(AvatarV2, ());
    let id = env.register(AdminUpgradeabilityProxy, ());
    let proxy = AdminUpgradeabilityProxyClient::new(&env, &id);
    proxy.initialize(&Address::generate(&env), &v1, &None);

    assert!(proxy.try_upgrade_to(&v2).is_err());
    assert!(proxy.try_change_admin(&Address::generate(&env)).is_err());
}

// ── Admin role ───────────────────────────────────────────────────────────────

#[test]
fn test_change_admin() {
    let s = setup();
    let next = Address::generate(&s.env);

    s.proxy.change_admin(&next);
    assert_eq!(s.env.auths()[0].0, s.admin);
    assert_eq!(s.proxy.admin(), next);

    // The previous admin is an ordinary caller now.
    assert_eq!(
        String::try_from_val(
            &s.env,
            &s.proxy.call(&s.admin, &CallData::bare(&s.env, "org_name"))
        )
        .unwrap(),
        String::from_str(&s.env, "genesis")
    );
    assert!(matches!(
        s.proxy.try_call(&next, &CallData::bare(&s.env, "org_name")),
        Err(Ok(ContractError::AdminCannotFallback))
    ));
}
