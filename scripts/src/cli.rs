use std::path::PathBuf;

use alloy::primitives::Address;
use clap::Parser;
use serde::Serialize;

use crate::manifest;

#[derive(Clone, Parser, Serialize)]
pub struct BaseArgs {
    /// Path to the network manifest
    #[arg(long, env = "CONFIG", default_value = manifest::FILENAME)]
    pub config: PathBuf,

    /// Named network profile from the manifest
    #[arg(long, env = "NETWORK", default_value = "devnet")]
    pub network: String,

    /// Directory holding the deployment record
    #[arg(long, env = "DEPLOYMENTS_DIR", default_value = "deployments")]
    pub deployments_dir: String,
}

#[derive(Clone, Parser, Serialize)]
#[command(author, version, about, long_about = None)]
pub struct DeployArgs {
    #[clap(flatten)]
    pub base: BaseArgs,

    /// ROY token address passed to the constructor
    #[arg(long, env = "ROY_ADDRESS", default_value_t = Address::ZERO)]
    pub roy_address: Address,
}

#[derive(Clone, Parser, Serialize)]
#[command(author, version, about, long_about = None)]
pub struct CollectionArgs {
    #[clap(flatten)]
    pub base: BaseArgs,

    /// Collection whose approval flag is toggled
    #[arg(long, env = "COLLECTION", default_value_t = Address::ZERO)]
    pub collection: Address,
}

#[derive(Clone, Parser, Serialize)]
#[command(author, version, about, long_about = None)]
pub struct AccountsArgs {
    #[clap(flatten)]
    pub base: BaseArgs,
}
