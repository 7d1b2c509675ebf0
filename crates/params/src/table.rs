use crate::base::BaseParameters;
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Bitmask selecting which result matrices the table service returns.
///
/// Flags combine via set-union only; once a bit is set, no later option can
/// clear it within the same request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnnotationsType(u8);

impl AnnotationsType {
    /// No matrices selected.
    pub const NONE: Self = Self(0);
    /// Travel-time matrix.
    pub const DURATION: Self = Self(1);
    /// Travel-distance matrix.
    pub const DISTANCE: Self = Self(2);
    /// Every available matrix.
    pub const ALL: Self = Self(Self::DURATION.0 | Self::DISTANCE.0);

    /// `true` if every flag in `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` if no flag is set.
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

impl BitOr for AnnotationsType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AnnotationsType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Parameters for the table/matrix service.
///
/// `sources` and `destinations` restrict the matrix to subsets of the
/// coordinate list; `None` means "all coordinates". When present, each list
/// holds at least one index, in request order, duplicates preserved. Whether
/// the indices are in bounds of `base.coordinates` is checked by a later
/// stage, not at parse time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableParameters {
    /// Fields shared with every other service.
    #[serde(flatten)]
    pub base: BaseParameters,
    /// Row subset of the coordinate list; `None` means all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<usize>>,
    /// Column subset of the coordinate list; `None` means all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<usize>>,
    /// Which result matrices to return.
    #[serde(default)]
    pub annotations_type: AnnotationsType,
    /// Derived: `annotations_type` selects at least one matrix.
    ///
    /// Kept in sync by [`combine_annotations`](Self::combine_annotations);
    /// never write `annotations_type` directly.
    #[serde(default)]
    pub annotations: bool,
}

impl TableParameters {
    /// Union `flags` into `annotations_type` and recompute `annotations`.
    ///
    /// This is the only mutation path for the annotation fields, so the
    /// `annotations == (annotations_type != NONE)` invariant holds after
    /// every write.
    pub fn combine_annotations(&mut self, flags: AnnotationsType) {
        self.annotations_type |= flags;
        self.annotations = self.annotations_type != AnnotationsType::NONE;
    }
}
