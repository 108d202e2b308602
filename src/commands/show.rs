//! Show command implementation

use crate::cli::ShowArgs;
use crate::domain::AppId;
use crate::error::Result;
use crate::normalize::UrlBuilder;
use crate::orchestrator::AppCenter;
use crate::snapd::Transport;
use crate::ui::{Spinner, print_app_detail, print_json};

/// Run show command
pub async fn run<T: Transport, U: UrlBuilder>(center: &AppCenter<T, U>, args: ShowArgs) -> Result<()> {
    let id = AppId::parse(args.app)?;

    let spinner = Spinner::start(format!("Looking up {id}..."));
    let app = center.get_app(&id).await?;
    spinner.finish();

    if args.json {
        return print_json(&app);
    }
    print_app_detail(&app);
    Ok(())
}
