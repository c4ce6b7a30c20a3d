use serde::{Deserialize, Serialize};

/// Classification of a single vertex during growth and optimization.
///
/// Fringe classes hold vertices that are still candidates for expansion (growth)
/// or for promotion into the separator (optimization). Fixed classes are only used
/// by the optimizer, for border vertices that are not currently worth promoting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Class {
    Neutral,
    WardenSeed,
    WardenInterior,
    WardenFringe,
    WardenFixed,
    OppositeInterior,
    OppositeFringe,
    OppositeFixed,
    Separator,
}

/// Which side of the cut a class belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Neutral,
    Warden,
    Opposite,
    Separator,
}

/// One of the two growing sides. Code that runs symmetrically for both sides is
/// written once against a `Shore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shore {
    Warden,
    Opposite,
}

impl Class {
    pub const COUNT: usize = 9;

    pub const ALL: [Class; Class::COUNT] = [
        Class::Neutral,
        Class::WardenSeed,
        Class::WardenInterior,
        Class::WardenFringe,
        Class::WardenFixed,
        Class::OppositeInterior,
        Class::OppositeFringe,
        Class::OppositeFixed,
        Class::Separator,
    ];

    #[inline] pub(crate) fn index(self) -> usize { self as usize }

    pub fn side(self) -> Side {
        match self {
            Class::Neutral => Side::Neutral,
            Class::WardenSeed | Class::WardenInterior | Class::WardenFringe | Class::WardenFixed => Side::Warden,
            Class::OppositeInterior | Class::OppositeFringe | Class::OppositeFixed => Side::Opposite,
            Class::Separator => Side::Separator,
        }
    }
}

impl Shore {
    #[inline]
    pub fn other(self) -> Shore {
        match self {
            Shore::Warden => Shore::Opposite,
            Shore::Opposite => Shore::Warden,
        }
    }

    #[inline]
    pub fn side(self) -> Side {
        match self {
            Shore::Warden => Side::Warden,
            Shore::Opposite => Side::Opposite,
        }
    }

    #[inline] pub fn contains(self, class: Class) -> bool { class.side() == self.side() }

    #[inline]
    pub(crate) fn interior(self) -> Class {
        match self {
            Shore::Warden => Class::WardenInterior,
            Shore::Opposite => Class::OppositeInterior,
        }
    }

    #[inline]
    pub(crate) fn fringe(self) -> Class {
        match self {
            Shore::Warden => Class::WardenFringe,
            Shore::Opposite => Class::OppositeFringe,
        }
    }

    #[inline]
    pub(crate) fn fixed(self) -> Class {
        match self {
            Shore::Warden => Class::WardenFixed,
            Shore::Opposite => Class::OppositeFixed,
        }
    }
}
