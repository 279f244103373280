//! Active network interface detection.
//!
//! Two probes sit behind `detect_internet_interface`:
//!
//! - `route` reads the kernel routing table and returns the interface that
//!   carries the default route.
//! - `nmcli` runs `nmcli device` and takes the second-to-last column of the
//!   first data row. This assumes NetworkManager's table layout; unexpected
//!   output yields an empty string rather than an error.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace, warn};

use crate::core::config::ProbeKind;
use crate::error::{InterfaceError, Result};

/// Kernel IPv4 routing table.
const ROUTE_TABLE: &str = "/proc/net/route";

/// NetworkManager CLI.
const NMCLI: &str = "nmcli";

/// Return the name reported for the active internet connection.
///
/// # Errors
///
/// `route` fails with `InterfaceError::NoDefaultRoute`; `nmcli` fails with
/// `InterfaceError::ToolMissing` or `CommandFailed`. `auto` only fails if
/// both probes do, reporting the nmcli error.
pub fn detect_internet_interface(probe: ProbeKind) -> Result<String> {
    detect_with(probe, Path::new(ROUTE_TABLE), NMCLI)
}

/// Run `probe` against an explicit route table and nmcli executable.
fn detect_with(probe: ProbeKind, table: &Path, nmcli: &str) -> Result<String> {
    match probe {
        ProbeKind::Route => route_interface(table),
        ProbeKind::Nmcli => nmcli_interface(nmcli),
        ProbeKind::Auto => match route_interface(table) {
            Ok(iface) => Ok(iface),
            Err(e) => {
                debug!(error = %e, "route probe failed, falling back to nmcli");
                nmcli_interface(nmcli)
            }
        },
    }
}

/// Default-route interface from a `/proc/net/route` style table.
pub fn route_interface(table: &Path) -> Result<String> {
    let contents = fs::read_to_string(table)?;
    parse_route_table(&contents).ok_or_else(|| InterfaceError::NoDefaultRoute.into())
}

/// First interface whose destination is `00000000`.
pub fn parse_route_table(contents: &str) -> Option<String> {
    contents.lines().skip(1).find_map(|line| {
        let mut fields = line.split_whitespace();
        let iface = fields.next()?;
        let destination = fields.next()?;
        (destination == "00000000").then(|| iface.to_string())
    })
}

fn nmcli_interface(nmcli: &str) -> Result<String> {
    let program = which::which(nmcli).map_err(|_| InterfaceError::ToolMissing(NMCLI))?;

    let output = Command::new(program)
        .arg("device")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| InterfaceError::CommandFailed {
            tool: NMCLI,
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(InterfaceError::CommandFailed {
            tool: NMCLI,
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    trace!(lines = stdout.lines().count(), "nmcli output");

    let iface = parse_nmcli_output(&stdout);
    if iface.is_empty() {
        warn!("nmcli output did not have the expected layout");
    }
    Ok(iface)
}

/// Second-to-last whitespace-separated field of line 2, or an empty string.
pub fn parse_nmcli_output(output: &str) -> String {
    let Some(line) = output.lines().nth(1) else {
        return String::new();
    };
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return String::new();
    }
    fields[fields.len() - 2].to_string()
}
