//! The thirteen standard card ranks.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseRankError;

/// The face value of a playing card, independent of suit.
///
/// Ranks are totally ordered by strength: [`Rank::R2`] is the lowest and
/// [`Rank::RA`] the highest. Each rank has a one-character canonical token
/// (`'2'`-`'9'`, `'T'`, `'J'`, `'Q'`, `'K'`, `'A'`); parsing and rendering
/// are exact inverses.
///
/// ```
/// use cardrank::Rank;
///
/// assert!(Rank::R2 < Rank::RA);
/// assert_eq!(Rank::RT.token(), 'T');
/// assert_eq!("Q".parse(), Ok(Rank::RQ));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Rank {
    /// Deuce.
    #[default]
    R2 = 0,
    /// Three.
    R3 = 1,
    /// Four.
    R4 = 2,
    /// Five.
    R5 = 3,
    /// Six.
    R6 = 4,
    /// Seven.
    R7 = 5,
    /// Eight.
    R8 = 6,
    /// Nine.
    R9 = 7,
    /// Ten.
    RT = 8,
    /// Jack.
    RJ = 9,
    /// Queen.
    RQ = 10,
    /// King.
    RK = 11,
    /// Ace.
    RA = 12,
}

impl Rank {
    /// Number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks in ascending strength order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
        Self::R8,
        Self::R9,
        Self::RT,
        Self::RJ,
        Self::RQ,
        Self::RK,
        Self::RA,
    ];

    /// Returns the canonical one-character token for this rank.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::R2 => '2',
            Self::R3 => '3',
            Self::R4 => '4',
            Self::R5 => '5',
            Self::R6 => '6',
            Self::R7 => '7',
            Self::R8 => '8',
            Self::R9 => '9',
            Self::RT => 'T',
            Self::RJ => 'J',
            Self::RQ => 'Q',
            Self::RK => 'K',
            Self::RA => 'A',
        }
    }

    /// Returns the rank with the given strength index, where 0 is
    /// [`Rank::R2`] and 12 is [`Rank::RA`]. Returns `None` for indices
    /// outside `0..13`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::R2),
            1 => Some(Self::R3),
            2 => Some(Self::R4),
            3 => Some(Self::R5),
            4 => Some(Self::R6),
            5 => Some(Self::R7),
            6 => Some(Self::R8),
            7 => Some(Self::R9),
            8 => Some(Self::RT),
            9 => Some(Self::RJ),
            10 => Some(Self::RQ),
            11 => Some(Self::RK),
            12 => Some(Self::RA),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::R2 => "R2",
            Self::R3 => "R3",
            Self::R4 => "R4",
            Self::R5 => "R5",
            Self::R6 => "R6",
            Self::R7 => "R7",
            Self::R8 => "R8",
            Self::R9 => "R9",
            Self::RT => "RT",
            Self::RJ => "RJ",
            Self::RQ => "RQ",
            Self::RK => "RK",
            Self::RA => "RA",
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseRankError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Self::R2),
            '3' => Ok(Self::R3),
            '4' => Ok(Self::R4),
            '5' => Ok(Self::R5),
            '6' => Ok(Self::R6),
            '7' => Ok(Self::R7),
            '8' => Ok(Self::R8),
            '9' => Ok(Self::R9),
            'T' => Ok(Self::RT),
            'J' => Ok(Self::RJ),
            'Q' => Ok(Self::RQ),
            'K' => Ok(Self::RK),
            'A' => Ok(Self::RA),
            _ => Err(ParseRankError::InvalidToken),
        }
    }
}

impl From<Rank> for char {
    fn from(rank: Rank) -> Self {
        rank.token()
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank as Self
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    // Exactly one canonical token, case-sensitive. No trimming or other
    // normalization.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ParseRankError::InvalidToken),
        }
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rank::{}", self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
