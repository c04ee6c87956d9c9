//! Example: Solving a reCAPTCHA v2 through Anti-Captcha.
//!
//! Run with: ANTIGATE_CLIENT_KEY=... cargo run --example solve_recaptcha

use antigate::{AntiGate, AntiGateBuilder, ClientConfig, Task};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let client: AntiGate = AntiGateBuilder::from_config(ClientConfig::from_env()?)
        // Optionally add proxy:
        // .proxy("http://127.0.0.1:8080")
        .build()?;

    println!("Balance: {}", client.balance().await?);

    // Google's public reCAPTCHA demo
    let task = Task::recaptcha(
        "https://www.google.com/recaptcha/api2/demo",
        "6Le-wvkSAAAAAPBMRTvw0Q4Muexq9bi0DJwx_mJ-",
    );

    match client.solve(task).await {
        Ok(token) if token.is_empty() => println!("Task still processing, no token yet"),
        Ok(token) => {
            println!("Success!");
            println!("  gRecaptchaResponse: {}...", &token[..50.min(token.len())]);
        }
        Err(e) => println!("Failed: {}", e),
    }

    Ok(())
}
