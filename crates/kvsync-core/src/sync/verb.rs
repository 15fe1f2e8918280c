use std::fmt;
use std::str::FromStr;

use crate::sync::SyncError;

/// Synchronization action requested by the model layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Read,
    Create,
    Update,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Read => "read",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Delete => "delete",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Verb::Read),
            "create" => Ok(Verb::Create),
            "update" => Ok(Verb::Update),
            "delete" => Ok(Verb::Delete),
            other => Err(SyncError::new(format!("unknown sync verb '{}'", other))),
        }
    }
}
