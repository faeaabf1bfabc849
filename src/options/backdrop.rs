//! Translucent window backdrop

use serde::{Deserialize, Serialize};

/// First Windows build that honours the system backdrop attribute
pub const MIN_BACKDROP_BUILD: u32 = 22621;

/// Type of translucent backdrop drawn behind the window.
///
/// The discriminants match the DWM `DWM_SYSTEMBACKDROP_TYPE` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum BackdropType {
    /// Let the system decide
    #[default]
    Auto = 0,
    /// No backdrop
    None = 1,
    /// Mica, for long-lived main windows
    Mica = 2,
    /// Acrylic, for transient windows
    Acrylic = 3,
    /// Tabbed Mica variant
    Tabbed = 4,
}

impl BackdropType {
    /// All backdrop types in discriminant order
    pub const ALL: [BackdropType; 5] = [
        BackdropType::Auto,
        BackdropType::None,
        BackdropType::Mica,
        BackdropType::Acrylic,
        BackdropType::Tabbed,
    ];

    /// Try to convert a raw value back into a BackdropType
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| *b as i32 == value)
    }

    /// Whether the given Windows build can apply a backdrop at all.
    /// The minimum build is the same for every variant.
    pub fn supported_on_build(build: u32) -> bool {
        build >= MIN_BACKDROP_BUILD
    }
}
