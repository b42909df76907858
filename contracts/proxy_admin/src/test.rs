#![cfg(test)]

use soroban_sdk::{testutils::Address as _, vec, Address, Env, IntoVal, String, TryFromVal};

use crate::{ProxyAdmin, ProxyAdminClient};
use avatar::Avatar;
use avatar_v2::AvatarV2;
use proxy::{AdminUpgradeabilityProxy, AdminUpgradeabilityProxyClient};
use shared::{CallData, ContractError};

// ── Test Helpers ─────────────────────────────────────────────────────────────

struct Setup {
    env: Env,
    admin: ProxyAdminClient<'static>,
    proxy: AdminUpgradeabilityProxyClient<'static>,
    owner: Address,
    v1: Address,
    v2: Address,
}

/// Avatar proxy administered by a ProxyAdmin.
fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let admin_id = env.register(ProxyAdmin, ());
    let admin = ProxyAdminClient::new(&env, &admin_id);
    admin.initialize(&owner);

    let v1 = env.register(Avatar, ());
    let v2 = env.register(AvatarV2, ());
    let proxy_id = env.register(AdminUpgradeabilityProxy, ());
    let proxy = AdminUpgradeabilityProxyClient::new(&env, &proxy_id);
    let init = CallData::new(&env, "initialize", vec![&env, String::from_str(&env, "genesis").into_val(&env)]);
    proxy.initialize(&admin_id, &v1, &Some(init));

    Setup {
        env,
        admin,
        proxy,
        owner,
        v1,
        v2,
    }
}

fn read_id(s: &Setup) -> u32 {
    let user = Address::generate(&s.env);
    let out = s.proxy.call(&user, &CallData::bare(&s.env, "get_id"));
    u32::try_from_val(&s.env, &out).unwrap()
}

// ── Queries ──────────────────────────────────────────────────────────────────

#[test]
fn test_reads_proxy_state() {
    let s = setup();

    assert_eq!(s.admin.get_proxy_implementation(&s.proxy.address), s.v1);
    assert_eq!(s.admin.get_proxy_admin(&s.proxy.address), s.admin.address);
}

#[test]
fn test_foreign_proxy_is_unauthorized() {
    let s = setup();
    let other_id = s.env.register(AdminUpgradeabilityProxy, ());
    let other = AdminUpgradeabilityProxyClient::new(&s.env, &other_id);
    other.initialize(&Address::generate(&s.env), &s.v1, &None);

    assert_eq!(
        s.admin.try_get_proxy_implementation(&other_id),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        s.admin.try_upgrade(&other_id, &s.v2),
        Err(Ok(ContractError::Unauthorized))
    );
}

// ── Upgrades ─────────────────────────────────────────────────────────────────

#[test]
fn test_upgrade() {
    let s = setup();

    s.admin.upgrade(&s.proxy.address, &s.v2);

    assert_eq!(s.env.auths()[0].0, s.owner);
    assert_eq!(s.admin.get_proxy_implementation(&s.proxy.address), s.v2);
    assert_eq!(read_id(&s), 2);
}

#[test]
fn test_upgrade_and_call() {
    let s = setup();

    s.admin
        .upgrade_and_call(&s.proxy.address, &s.v2, &CallData::bare(&s.env, "migrate"));

    let user = Address::generate(&s.env);
    let out = s.proxy.call(&user, &CallData::bare(&s.env, "is_migrated"));
    assert!(bool::try_from_val(&s.env, &out).unwrap());
}

#[test]
fn test_rejected_upgrade_and_call() {
    let s = setup();

    let result = s.admin.try_upgrade_and_call(
        &s.proxy.address,
        &s.v2,
        &CallData::bare(&s.env, "no_such_migration"),
    );
    assert!(matches!(result, Err(Ok(ContractError::UpgradeRejected))));
    assert_eq!(s.admin.get_proxy_implementation(&s.proxy.address), s.v1);
    assert_eq!(read_id(&s), 1);
}

#[test]
fn test_upgrade_requires_owner() {
    let env = Env::default();
    let admin_id = env.register(ProxyAdmin, ());
    let admin = ProxyAdminClient::new(&env, &admin_id);
    admin.initialize(&Address::generate(&env));

    let v1 = env.register(Avatar, ());
    let proxy_id = env.register(AdminUpgradeabilityProxy, ());
    AdminUpgradeabilityProxyClient::new(&env, &proxy_id).initialize(&admin_id, &v1, &None);

    assert!(admin.try_upgrade(&proxy_id, &env.register(AvatarV2, ())).is_err());
}

// ── Admin hand-over ──────────────────────────────────────────────────────────

#[test]
fn test_change_proxy_admin() {
    let s = setup();
    let next = Address::generate(&s.env);

    s.admin.change_proxy_admin(&s.proxy.address, &next);

    assert_eq!(s.proxy.admin(), next);
    assert_eq!(
        s.admin.try_upgrade(&s.proxy.address, &s.v2),
        Err(Ok(ContractError::Unauthorized))
    );
}
