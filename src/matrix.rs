/*!
Typed, read-only model of the extension support matrix.

The matrix is a tree: API families own ordered versions, versions own
extensions, and extensions own one level of sub-extensions. Extensions and
sub-extensions carry the reference implementation's own [Status] plus the set
of third-party drivers that fully support them (presence of a driver name
means done; partial support is not modeled). Vendors group the drivers
tracked for an API family; driver identity is name-based.
*/

use derive_more::Display;
use indexmap::IndexSet;
use serde::Deserialize;

pub mod version;

pub use version::{VersionNumber, VersionParseError};

/// The main raster/compute API family.
pub const OPENGL: &str = "OpenGL";

/// The mobile profile of OpenGL. Not a primary family for ranking purposes.
pub const OPENGL_ES: &str = "OpenGL ES";

/// The low-level API family.
pub const VULKAN: &str = "Vulkan";

/// Primary API families, highest leaderboard priority first. Families not
/// listed here all share the same, lowest priority.
pub const PRIMARY_APIS: [&str; 2] = [VULKAN, OPENGL];

/// Display name of the reference implementation.
pub const REFERENCE_NAME: &str = "mesa";

/// Completion status an extension carries for the reference implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The distinguished "fully done" value.
    #[display("complete")]
    Complete,
    #[display("incomplete")]
    Incomplete,
    #[display("in progress")]
    InProgress,
}

impl Status {
    pub fn is_done(self) -> bool {
        matches!(self, Status::Complete)
    }
}

/// Key identifying an implementation in completion counts.
///
/// The reference implementation is its own variant rather than a magic name,
/// so a third-party driver that happens to be called "mesa" can never collide
/// with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum DriverId {
    #[display("{}", REFERENCE_NAME)]
    Reference,
    #[display("{_0}")]
    Driver(String),
}

impl DriverId {
    pub fn driver(name: impl Into<String>) -> Self {
        DriverId::Driver(name.into())
    }
}

/// Root of the matrix document.
#[derive(Clone, Debug, Deserialize)]
pub struct Matrix {
    pub apis: Vec<Api>,
}

impl Matrix {
    /// Looks up an API family by name.
    pub fn api(&self, name: &str) -> Option<&Api> {
        self.apis.iter().find(|api| api.name == name)
    }
}

/// One API family: its ordered versions plus the vendor/driver roster
/// tracked for it.
#[derive(Clone, Debug, Deserialize)]
pub struct Api {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<ApiVersion>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

impl Api {
    /// Names of every driver under every vendor, deduplicated by name, in
    /// document order.
    pub fn driver_names(&self) -> IndexSet<&str> {
        self.vendors
            .iter()
            .flat_map(|vendor| vendor.drivers.iter().map(|driver| driver.name.as_str()))
            .collect()
    }
}

/// One numbered release of an API family.
///
/// The family name is an attribute of the version node itself; aggregates
/// take their identity from here, not from the enclosing [Api].
#[derive(Clone, Debug, Deserialize)]
pub struct ApiVersion {
    pub name: String,
    pub version: VersionNumber,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// A discrete optional capability of a version.
#[derive(Clone, Debug, Deserialize)]
pub struct Extension {
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub supported_drivers: IndexSet<String>,
    #[serde(default)]
    pub subextensions: Vec<SubExtension>,
}

impl Extension {
    pub fn supports(&self, driver: &str) -> bool {
        self.supported_drivers.contains(driver)
    }
}

/// A capability nested one level under an [Extension]. Counted exactly like
/// its parent; no further nesting.
#[derive(Clone, Debug, Deserialize)]
pub struct SubExtension {
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub supported_drivers: IndexSet<String>,
}

impl SubExtension {
    pub fn supports(&self, driver: &str) -> bool {
        self.supported_drivers.contains(driver)
    }
}

/// A vendor and the drivers it ships.
#[derive(Clone, Debug, Deserialize)]
pub struct Vendor {
    pub name: String,
    #[serde(default)]
    pub drivers: Vec<Driver>,
}

/// A third-party driver, tracked through per-extension supported-driver
/// markers.
#[derive(Clone, Debug, Deserialize)]
pub struct Driver {
    pub name: String,
}
