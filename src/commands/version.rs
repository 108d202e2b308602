//! Version command implementation

use crate::config::DEFAULT_CONFIG_PATH;
use crate::error::Result;
use crate::snapd::DEFAULT_SOCKET;

/// Run version command
pub fn run() -> Result<()> {
    println!("appcenter {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Defaults:");
    println!("  Config: {DEFAULT_CONFIG_PATH}");
    println!("  Socket: {DEFAULT_SOCKET}");
    println!(
        "  Profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );

    Ok(())
}
