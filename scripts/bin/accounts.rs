use anyhow::Result;
use clap::Parser;
use scripts::{cli::AccountsArgs, env::init_console_subscriber, manifest::Manifest};

fn main() -> Result<()> {
    init_console_subscriber();
    let args = AccountsArgs::parse();

    let manifest = Manifest::load(&args.base.config)?;
    let network = manifest.network(&args.base.network)?;
    for signer in network.signers()? {
        println!("{}", signer.address());
    }
    Ok(())
}
