//! Remove command implementation
//!
//! Removal is fire-and-forget on the daemon side, so success here only means
//! the request was delivered.

use console::Style;
use inquire::Confirm;

use crate::cli::RemoveArgs;
use crate::domain::AppId;
use crate::error::Result;
use crate::normalize::UrlBuilder;
use crate::orchestrator::AppCenter;
use crate::snapd::Transport;

/// Run remove command
pub async fn run<T: Transport, U: UrlBuilder>(
    center: &AppCenter<T, U>,
    args: RemoveArgs,
) -> Result<()> {
    let id = AppId::parse(args.app)?;

    if !args.yes && !confirm_remove(&id)? {
        println!("Remove cancelled.");
        return Ok(());
    }

    center.remove(&id).await?;

    println!(
        "{} removal of {}",
        Style::new().green().bold().apply_to("Requested"),
        Style::new().bold().apply_to(&id)
    );
    Ok(())
}

/// Ask before removing; app data goes with the app
fn confirm_remove(id: &AppId) -> Result<bool> {
    let answer = Confirm::new(&format!("Remove {id} and its data?"))
        .with_default(false)
        .prompt()?;
    Ok(answer)
}
