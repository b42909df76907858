use soroban_sdk::{Address, BytesN, Env};

/// Deploy the proxy wasm at the App-derived address for `salt`.
#[cfg(not(any(test, feature = "testutils")))]
pub fn deploy_proxy(env: &Env, wasm_hash: BytesN<32>, salt: BytesN<32>) -> Address {
    env.deployer()
        .with_current_contract(salt)
        .deploy_v2(wasm_hash, ())
}

/// Test builds have no proxy wasm to deploy; the native proxy contract is
/// registered at the address the wasm would have landed on.
#[cfg(any(test, feature = "testutils"))]
pub fn deploy_proxy(env: &Env, _wasm_hash: BytesN<32>, salt: BytesN<32>) -> Address {
    let address = env
        .deployer()
        .with_current_contract(salt)
        .deployed_address();
    env.register_at(&address, proxy::AdminUpgradeabilityProxy, ())
}
