use std::str::FromStr;

use serde::Deserialize;

/// How the server obtains its upstream feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamMode {
    /// No ingestion; the push channel still accepts clients.
    Disabled,
    /// In-process development feed generates records.
    Simulated,
    /// Source A is pulled from an HTTP endpoint.
    Http,
}

impl FromStr for UpstreamMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disabled" => Ok(Self::Disabled),
            "simulated" => Ok(Self::Simulated),
            "http" => Ok(Self::Http),
            other => Err(format!("unknown upstream mode: {other}")),
        }
    }
}

impl std::fmt::Display for UpstreamMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Disabled => "disabled",
            Self::Simulated => "simulated",
            Self::Http => "http",
        };
        f.write_str(s)
    }
}
