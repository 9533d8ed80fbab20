use serde::Serialize;

/// File name of the generated manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Line ending appended after the serialised manifest.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const INITIAL_VERSION: &str = "1.0.0";
const START_SCRIPT: &str = "parcel src/index.html --port 3000";
const BUILD_SCRIPT: &str = "parcel build src/index.html --dist-dir dist";

/// The project descriptor written once per scaffold run.
///
/// Field order is the serialised key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub scripts: Scripts,
}

/// Runnable scripts, keyed by script name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    pub start: String,
    pub build: String,
}

impl Manifest {
    /// Fresh manifest for a new project named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: INITIAL_VERSION.to_owned(),
            private: true,
            scripts: Scripts::default(),
        }
    }
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            start: START_SCRIPT.to_owned(),
            build: BUILD_SCRIPT.to_owned(),
        }
    }
}
