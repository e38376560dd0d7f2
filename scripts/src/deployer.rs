use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::Provider,
    transports::http::{Client, Http},
};
use anyhow::Result;
use contract::buy_it_now::BuyItNow;
use tracing::info;

pub async fn deploy(
    provider: impl Provider<Http<Client>, Ethereum>,
    roy_address: Address,
) -> Result<Address> {
    info!("Deploying BuyItNow");
    let contract = BuyItNow::deploy(&provider, roy_address).await?;
    let address = *contract.address();
    info!("Deployed BuyItNow at {:#}", address);
    Ok(address)
}
