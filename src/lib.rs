//! Flare - personal automation notifications.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # Print a secret
//! │   ├── notify        # Send email or push notifications
//! │   ├── interface     # Report the active network interface
//! │   ├── encode        # Write the encoded secrets file
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # config.toml settings
//!     ├── secrets/      # Secret backends
//!     │   ├── file      # base64-armored JSON file (~/.911)
//!     │   └── env       # Environment variables
//!     ├── notify/       # Channels
//!     │   ├── email     # SMTP
//!     │   └── push      # ntfy-style HTTP POST
//!     ├── machine       # Hostname prefix
//!     └── interface     # Routing table / nmcli probes
//! ```

pub mod cli;
pub mod core;
pub mod error;
