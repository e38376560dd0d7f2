use std::path::Path;

use alloy::primitives::Address;
use anyhow::Result;
use clap::Parser;
use scripts::{
    checkpoint::Checkpointer,
    cli::DeployArgs,
    deployer,
    env::{connect, init_console_subscriber},
    manifest::Manifest,
};
use tracing::info;

async fn deploy_contract(args: DeployArgs) -> Result<Address> {
    info!("{}", serde_json::to_string_pretty(&args).unwrap());

    let manifest = Manifest::load(&args.base.config)?;
    let network = manifest.network(&args.base.network)?;
    info!(
        "Deploying to {} with the solc {} artifact",
        args.base.network, manifest.solidity
    );

    let provider = connect(network)?;
    let address = deployer::deploy(provider, args.roy_address).await?;

    let checkpointer = {
        let checkpointer_root_dir = Path::new(&args.base.deployments_dir);
        Checkpointer::new(checkpointer_root_dir)
    };
    checkpointer.save_deployed(address)?;
    Ok(address)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_console_subscriber();
    let args = DeployArgs::parse();
    let address = deploy_contract(args).await?;
    println!("Deployed at {address}");
    Ok(())
}
