//! Install command implementation
//!
//! snapd installs in the background; the command returns once the request
//! has been queued.

use console::Style;

use crate::cli::InstallArgs;
use crate::domain::AppId;
use crate::error::Result;
use crate::normalize::UrlBuilder;
use crate::orchestrator::AppCenter;
use crate::snapd::Transport;

/// Run install command
pub async fn run<T: Transport, U: UrlBuilder>(
    center: &AppCenter<T, U>,
    args: InstallArgs,
) -> Result<()> {
    let id = AppId::parse(args.app)?;
    center.install(&id).await?;

    println!(
        "{} installation of {}",
        Style::new().green().bold().apply_to("Requested"),
        Style::new().bold().apply_to(&id)
    );
    Ok(())
}
