//! Test fixtures and constants.

/// Secrets document with every key the notifier consumes.
pub const NOTIFIER_SECRETS: &str = r#"{
    "EMAIL_USER": "me@example.com",
    "EMAIL_APPPW": "abcd efgh ijkl mnop",
    "EMAIL_RECEIVER": "you@example.com",
    "NTFY_URL": "https://ntfy.example/alerts",
    "NTFY_TOKEN": "tk_test"
}"#;

/// Secrets document with non-string values.
pub const STRUCTURED_SECRETS: &str = r#"{
    "PORTS": [22, 80, 443],
    "BACKUP": {"enabled": true, "keep": 7},
    "GREETING": "hello world"
}"#;

/// Route table with a default route on eth0.
pub const ROUTE_TABLE: &str = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask
eth0\t00000000\t0101A8C0\t0003\t0\t0\t100\t00000000
";
