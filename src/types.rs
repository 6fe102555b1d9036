use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Build configuration selected in the launcher.
///
/// This is selection state only. None of the current actions pass it to the
/// commands they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfiguration {
    #[default]
    Debug,
    Profile,
    Release,
}

impl BuildConfiguration {
    pub const ALL: [BuildConfiguration; 3] = [
        BuildConfiguration::Debug,
        BuildConfiguration::Profile,
        BuildConfiguration::Release,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "debug",
            BuildConfiguration::Profile => "profile",
            BuildConfiguration::Release => "release",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildConfiguration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(BuildConfiguration::Debug),
            "profile" => Ok(BuildConfiguration::Profile),
            "release" => Ok(BuildConfiguration::Release),
            other => Err(format!(
                "invalid build configuration: {other} (expected \"debug\", \"profile\" or \"release\")"
            )),
        }
    }
}
