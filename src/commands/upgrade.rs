//! Upgrade command implementation

use console::Style;

use crate::cli::UpgradeArgs;
use crate::domain::AppId;
use crate::error::Result;
use crate::normalize::UrlBuilder;
use crate::orchestrator::AppCenter;
use crate::snapd::Transport;

/// Run upgrade command
pub async fn run<T: Transport, U: UrlBuilder>(
    center: &AppCenter<T, U>,
    args: UpgradeArgs,
) -> Result<()> {
    let id = AppId::parse(args.app)?;
    center.upgrade(&id).await?;

    println!(
        "{} upgrade of {}",
        Style::new().green().bold().apply_to("Accepted"),
        Style::new().bold().apply_to(&id)
    );
    Ok(())
}
