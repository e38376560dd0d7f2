use std::path::Path;

use anyhow::Result;
use clap::Parser;
use contract::buy_it_now::BuyItNow;
use scripts::{
    checkpoint::Checkpointer,
    cli::CollectionArgs,
    env::{connect, init_console_subscriber},
    manifest::Manifest,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_console_subscriber();
    let args = CollectionArgs::parse();
    info!("{}", serde_json::to_string_pretty(&args).unwrap());

    let manifest = Manifest::load(&args.base.config)?;
    let network = manifest.network(&args.base.network)?;

    let address = {
        let checkpointer_root_dir = Path::new(&args.base.deployments_dir);
        Checkpointer::new(checkpointer_root_dir).load_deployed()?
    };
    let buy_it_now = BuyItNow::new(address, connect(network)?);

    info!(
        "Approving collection {:#} on BuyItNow at {:#}",
        args.collection, address
    );
    buy_it_now
        .approveCollection(args.collection)
        .send()
        .await?
        .watch()
        .await?;

    println!("Successfully approved collection {}", args.collection);
    Ok(())
}
