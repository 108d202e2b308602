//! List command implementation
//!
//! Lists the reconciled view by default, or one side of it when a filter
//! flag is given.

use crate::cli::ListArgs;
use crate::domain::VersionedApp;
use crate::error::Result;
use crate::normalize::UrlBuilder;
use crate::orchestrator::AppCenter;
use crate::snapd::Transport;
use crate::ui::{Spinner, print_app_list, print_json};

/// Run list command
pub async fn run<T: Transport, U: UrlBuilder>(center: &AppCenter<T, U>, args: ListArgs) -> Result<()> {
    let spinner = Spinner::start("Querying package daemon...");
    let (title, apps) = fetch(center, &args).await?;
    spinner.finish();

    if args.json {
        return print_json(&apps);
    }
    print_app_list(title, &apps);
    Ok(())
}

async fn fetch<T: Transport, U: UrlBuilder>(
    center: &AppCenter<T, U>,
    args: &ListArgs,
) -> Result<(&'static str, Vec<VersionedApp>)> {
    if args.installed {
        Ok(("Installed apps", center.list_installed_apps().await?))
    } else if args.available {
        Ok(("Store apps", center.list_available_apps().await?))
    } else if args.upgradable {
        Ok(("Upgradable apps", center.list_upgradable_apps().await?))
    } else {
        Ok(("Apps", center.list_all_apps().await?))
    }
}
