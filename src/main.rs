/// Main entry point for the catalog admin service
///
/// This serves as a thin wrapper that delegates to the interfaces layer.
/// The actual application logic is implemented in `interfaces::cli`.

use catalog_admin::interfaces::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}
