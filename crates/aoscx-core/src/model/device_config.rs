// ── Configuration retrieval and session status ──

use serde::Serialize;
use strum::{Display, EnumString};

/// Which configuration(s) to retrieve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigRetrieval {
    Running,
    Startup,
    Candidate,
    #[default]
    All,
}

impl ConfigRetrieval {
    pub fn includes_running(self) -> bool {
        matches!(self, Self::Running | Self::All)
    }

    pub fn includes_startup(self) -> bool {
        matches!(self, Self::Startup | Self::All)
    }
}

/// Configuration texts. Kinds not requested are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceConfig {
    pub running: String,
    pub startup: String,
    /// Always empty: there is no staged configuration.
    pub candidate: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Liveness {
    pub is_alive: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn retrieval_parses_known_kinds_only() {
        assert_eq!("running".parse::<ConfigRetrieval>().unwrap(), ConfigRetrieval::Running);
        assert_eq!("all".parse::<ConfigRetrieval>().unwrap(), ConfigRetrieval::All);
        assert!("merged".parse::<ConfigRetrieval>().is_err());
    }

    #[test]
    fn retrieval_coverage() {
        assert!(ConfigRetrieval::All.includes_running());
        assert!(ConfigRetrieval::All.includes_startup());
        assert!(!ConfigRetrieval::Candidate.includes_running());
        assert!(!ConfigRetrieval::Candidate.includes_startup());
        assert!(!ConfigRetrieval::Running.includes_startup());
    }
}
