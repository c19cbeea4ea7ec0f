use anyhow::Result;

use xrule::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is initialized in App::run() so nothing reaches the terminal
    App::new()?.run().await?;

    Ok(())
}
