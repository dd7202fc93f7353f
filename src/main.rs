/*
 * Responsibility
 * - tokio runtime entry
 * - delegates to app::run() (no logic here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    health_api::app::run().await
}
