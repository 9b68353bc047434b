//! Supported point-buy rulesets.

/// A ruleset with its own score cost table and budget ceiling.
///
/// Chosen once per allocation request and never mutated afterwards.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Edition {
    /// D&D 5th edition (default ruleset)
    #[default]
    FifthEdition,
    /// D&D 4th edition
    FourthEdition,
    /// D&D 3rd edition revised (3.5e)
    ThirdEditionRevised,
    /// Pathfinder 1st edition
    Pathfinder,
}

impl Edition {
    /// Total number of supported editions.
    pub const COUNT: usize = 4;

    /// Returns all editions in declaration order.
    pub const fn all() -> [Edition; Self::COUNT] {
        [
            Edition::FifthEdition,
            Edition::FourthEdition,
            Edition::ThirdEditionRevised,
            Edition::Pathfinder,
        ]
    }
}
