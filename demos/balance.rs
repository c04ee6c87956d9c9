//! Example: Checking the account balance.
//!
//! Run with: cargo run --example balance -- <client_key>

use antigate::AntiGate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client_key = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: balance <client_key>"))?;

    let client = AntiGate::builder(client_key).build()?;
    println!("{}", client.balance().await?);

    Ok(())
}
