//! Logical to physical pixel mapping
//!
//! Strips are often wired in a different order than they are seen.
//! A [`PixelOrder`] maps each left-to-right (logical) position to the
//! index of the LED on the wire (physical).

use core::fmt;

/// Error returned when a pixel order is not a permutation of `0..N`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// A logical position points past the end of the strip
    OutOfRange { logical: usize, physical: usize },
    /// A physical pixel is used by more than one logical position
    Duplicate { physical: usize },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { logical, physical } => {
                write!(f, "logical pixel {logical} maps to out of range pixel {physical}")
            }
            Self::Duplicate { physical } => {
                write!(f, "physical pixel {physical} is mapped more than once")
            }
        }
    }
}

/// Fixed bijection from logical position to physical strip index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelOrder<const N: usize> {
    physical: [usize; N],
}

impl<const N: usize> PixelOrder<N> {
    /// Create a pixel order, checking that every physical index is used exactly once
    ///
    /// `physical[logical]` is the strip index of the pixel seen at `logical`.
    pub const fn new(physical: [usize; N]) -> Result<Self, TopologyError> {
        let mut seen = [false; N];
        let mut logical = 0;
        while logical < N {
            let index = physical[logical];
            if index >= N {
                return Err(TopologyError::OutOfRange {
                    logical,
                    physical: index,
                });
            }
            if seen[index] {
                return Err(TopologyError::Duplicate { physical: index });
            }
            seen[index] = true;
            logical += 1;
        }
        Ok(Self { physical })
    }

    /// Pixels wired in the order they are seen
    pub const fn identity() -> Self {
        let mut physical = [0; N];
        let mut i = 0;
        while i < N {
            physical[i] = i;
            i += 1;
        }
        Self { physical }
    }

    /// Get the physical index for a logical position
    ///
    /// Returns None if the position is outside the strip
    pub const fn physical(&self, logical: usize) -> Option<usize> {
        if logical < N {
            Some(self.physical[logical])
        } else {
            None
        }
    }

    pub const fn as_array(&self) -> &[usize; N] {
        &self.physical
    }
}

impl<const N: usize> Default for PixelOrder<N> {
    fn default() -> Self {
        Self::identity()
    }
}
