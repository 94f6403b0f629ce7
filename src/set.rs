//! Compact sets of ranks.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::rank::Rank;

const MASK: u16 = (1 << Rank::COUNT) - 1;

/// A set of ranks stored as a 13-bit mask.
///
/// Bit `i` holds the rank with strength index `i`, so membership and set
/// algebra are single integer operations and iteration yields ranks in
/// ascending strength order.
///
/// ```
/// use cardrank::{Rank, RankSet};
///
/// let mut set = RankSet::EMPTY;
/// set.insert(Rank::RK);
/// set.insert(Rank::R2);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.to_string(), "2K");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RankSet(u16);

impl RankSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all thirteen ranks.
    pub const FULL: Self = Self(MASK);

    /// Creates a set from a raw bit mask, ignoring bits outside the
    /// thirteen rank positions.
    #[must_use]
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & MASK)
    }

    /// Returns the raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns whether the set contains no ranks.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether the set contains all thirteen ranks.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == MASK
    }

    /// Returns the number of ranks in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set contains the given rank.
    #[must_use]
    pub const fn contains(self, rank: Rank) -> bool {
        self.0 & (1 << rank as u8) != 0
    }

    /// Adds a rank to the set.
    pub const fn insert(&mut self, rank: Rank) {
        self.0 |= 1 << rank as u8;
    }

    /// Removes a rank from the set.
    pub const fn remove(&mut self, rank: Rank) {
        self.0 &= !(1 << rank as u8);
    }

    /// Flips a rank's membership in the set.
    pub const fn toggle(&mut self, rank: Rank) {
        self.0 ^= 1 << rank as u8;
    }

    /// Returns the set of ranks in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the set of ranks in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the set of ranks in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the lowest rank in the set, or `None` if empty.
    #[must_use]
    pub const fn min(self) -> Option<Rank> {
        if self.0 == 0 {
            None
        } else {
            Rank::from_index(self.0.trailing_zeros() as u8)
        }
    }

    /// Returns the highest rank in the set, or `None` if empty.
    #[must_use]
    pub const fn max(self) -> Option<Rank> {
        if self.0 == 0 {
            None
        } else {
            Rank::from_index(15 - self.0.leading_zeros() as u8)
        }
    }

    /// Returns an iterator over the ranks in the set, ascending.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl From<Rank> for RankSet {
    fn from(rank: Rank) -> Self {
        Self(1 << rank as u8)
    }
}

impl FromIterator<Rank> for RankSet {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Rank> for RankSet {
    fn extend<I: IntoIterator<Item = Rank>>(&mut self, iter: I) {
        for rank in iter {
            self.insert(rank);
        }
    }
}

impl BitOr for RankSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for RankSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RankSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for RankSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl IntoIterator for RankSet {
    type Item = Rank;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Display for RankSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in *self {
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for RankSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RankSet(\"{self}\")")
    }
}

/// Iterator over the ranks in a [`RankSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Rank;

    fn next(&mut self) -> Option<Rank> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        // Clear the lowest set bit
        self.0 &= self.0 - 1;
        Rank::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}
