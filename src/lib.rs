//! # antigate
//!
//! An async Rust client for the [Anti-Captcha](https://anti-captcha.com) solving service.
//!
//! ## Features
//!
//! - **Typed Tasks**: Image-to-text and reCAPTCHA v2 (with or without proxy) tasks,
//!   each carrying only the fields its kind uses.
//! - **Solve and Wait**: Submits a task and polls it on a shrinking 20s..1s countdown.
//! - **Cancellation**: Stop a running solve with a `CancellationToken`.
//! - **Proxy Support**: HTTP and SOCKS5 proxies for reaching the API.
//! - **Pluggable Transport**: Swap the `reqwest` transport for your own.
//!
//! ## Quick Start
//!
//! ```ignore
//! use antigate::{AntiGate, Task};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AntiGate::builder("your_client_key").build()?;
//!
//!     println!("balance: {}", client.balance().await?);
//!
//!     let token = client
//!         .solve(Task::recaptcha("https://example.com", "6Lc3DE8UAAAAAIc2N3jarTo9_R_DuooXFxJYPqa"))
//!         .await?;
//!     println!("gRecaptchaResponse: {}", token);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Image Captchas
//!
//! ```ignore
//! use antigate::{ImageToTextTask, NumericMode};
//!
//! let task = ImageToTextTask::from_file("captcha.png")
//!     .await?
//!     .numeric(NumericMode::OnlyDigits)
//!     .length(4, 6);
//! let text = client.solve(task.into()).await?;
//! ```
//!
//! ## Step by Step
//!
//! `solve` is `create_task` followed by repeated `task_result` calls. Both are
//! public for callers that want their own polling policy.
//!
//! ```ignore
//! let task_id = client.create_task(&task).await?;
//! let snapshot = client.task_result(task_id).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod models;
pub mod transport;

// Re-exports for convenience
pub use client::{AntiGate, AntiGateBuilder};
pub use config::{ClientConfig, Endpoints, PollSchedule};
pub use error::{AntiGateError, Result};
pub use models::{
    ImageToTextTask, NoCaptchaProxylessTask, NoCaptchaTask, NumericMode, ProxyType, Solution,
    Task, TaskId, TaskKind, TaskProxy, TaskResult, TaskStatus,
};
pub use tokio_util::sync::CancellationToken;
pub use transport::{HttpTransport, Transport};
