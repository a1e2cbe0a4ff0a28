use soroban_sdk::{contracttype, Address, Env};

// ~7 days at 5s ledgers, same bump as the pair contract.
pub const BUMP_AMOUNT: u32 = 120_960;
// Bump once less than ~6 days remain.
pub const BUMP_THRESHOLD: u32 = BUMP_AMOUNT - 17_280;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Owner,
    Treasury,
    Maintainer(Address),
}

/// Collaborator addresses fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub router: Address,
    pub base_asset: Address,
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("config is written by the constructor")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("owner is written by the constructor")
}

pub fn get_treasury(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .unwrap_or(0)
}

pub fn set_treasury(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Treasury, &amount);
}

pub fn get_maintainer(env: &Env, maintainer: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Maintainer(maintainer.clone()))
        .unwrap_or(false)
}

pub fn set_maintainer(env: &Env, maintainer: &Address, enabled: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Maintainer(maintainer.clone()), &enabled);
    extend_maintainer_ttl(env, maintainer);
}

pub fn extend_maintainer_ttl(env: &Env, maintainer: &Address) {
    env.storage().persistent().extend_ttl(
        &DataKey::Maintainer(maintainer.clone()),
        BUMP_THRESHOLD,
        BUMP_AMOUNT,
    );
}
