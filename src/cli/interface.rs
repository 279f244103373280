//! Interface command.

use crate::cli::output;
use crate::core::config::{ProbeKind, Settings};
use crate::core::interface;
use crate::error::Result;

/// Print the active network interface.
pub fn execute(settings: &Settings, probe: Option<ProbeKind>) -> Result<()> {
    let probe = probe.unwrap_or(settings.interface.probe);
    let iface = interface::detect_internet_interface(probe)?;

    if iface.is_empty() {
        output::dimmed(&format!("{} probe reported no interface", probe));
    }
    output::data(&iface);
    Ok(())
}
