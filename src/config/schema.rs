use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Survey catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Force colored output on or off (default: auto-detect TTY)
    #[serde(default)]
    pub colors: Option<bool>,
}
