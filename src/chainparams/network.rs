//! Network identifiers

use super::ParamsError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the four mutually exclusive networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    Main,
    Test,
    RegTest,
    UnitTest,
}

impl NetworkId {
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Test,
        NetworkId::RegTest,
        NetworkId::UnitTest,
    ];

    /// Network name as used on the command line and in data directories
    pub fn name(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::RegTest => "regtest",
            NetworkId::UnitTest => "unittest",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Test),
            "regtest" => Ok(NetworkId::RegTest),
            "unittest" => Ok(NetworkId::UnitTest),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
