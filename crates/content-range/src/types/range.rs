//! The right-hand side of a Content-Range: a satisfied range or an
//! unsatisfied one.
//!
//! With the `serde` feature these types use the structural camelCase form,
//! where the presence of `firstPos` and `lastPos` is what marks a
//! [`RangeResp`]:
//!
//! ```text
//! { "firstPos": 0, "lastPos": 100, "completeLength": 1000 }   range-resp
//! { "firstPos": 0, "lastPos": 100, "completeLength": null }   range-resp, length "*"
//! { "completeLength": 1000 }                                  unsatisfied-range
//! ```

/// `first-pos "-" last-pos`.
///
/// `first_pos <= last_pos` is not enforced here; see
/// [`validate_range_resp`](crate::validate_range_resp).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct InclRange {
    pub first_pos: u64,
    pub last_pos: u64,
}

impl InclRange {
    #[inline]
    #[must_use]
    pub fn new(first_pos: u64, last_pos: u64) -> Self {
        InclRange {
            first_pos,
            last_pos,
        }
    }
}

/// `incl-range "/" ( complete-length / "*" )`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RangeResp {
    pub first_pos: u64,
    pub last_pos: u64,
    /// `None` when the complete length is unknown (`*`).
    pub complete_length: Option<u64>,
}

impl RangeResp {
    #[inline]
    #[must_use]
    pub fn new(first_pos: u64, last_pos: u64, complete_length: Option<u64>) -> Self {
        RangeResp {
            first_pos,
            last_pos,
            complete_length,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_incl_range(incl_range: InclRange, complete_length: Option<u64>) -> Self {
        Self::new(incl_range.first_pos, incl_range.last_pos, complete_length)
    }

    #[inline]
    #[must_use]
    pub fn incl_range(&self) -> InclRange {
        InclRange::new(self.first_pos, self.last_pos)
    }
}

/// `"*/" complete-length`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct UnsatisfiedRange {
    pub complete_length: u64,
}

impl UnsatisfiedRange {
    #[inline]
    #[must_use]
    pub fn new(complete_length: u64) -> Self {
        UnsatisfiedRange { complete_length }
    }
}

/// Either a range response or an unsatisfied range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Range {
    Resp(RangeResp),
    Unsatisfied(UnsatisfiedRange),
}

impl Range {
    #[inline]
    #[must_use]
    pub fn is_resp(&self) -> bool {
        matches!(self, Range::Resp(_))
    }

    #[inline]
    #[must_use]
    pub fn is_unsatisfied(&self) -> bool {
        matches!(self, Range::Unsatisfied(_))
    }

    /// The complete length, if known.
    #[must_use]
    pub fn complete_length(&self) -> Option<u64> {
        match self {
            Range::Resp(resp) => resp.complete_length,
            Range::Unsatisfied(unsatisfied) => Some(unsatisfied.complete_length),
        }
    }

    #[must_use]
    pub fn incl_range(&self) -> Option<InclRange> {
        match self {
            Range::Resp(resp) => Some(resp.incl_range()),
            Range::Unsatisfied(_) => None,
        }
    }
}

impl From<RangeResp> for Range {
    fn from(resp: RangeResp) -> Self {
        Range::Resp(resp)
    }
}

impl From<UnsatisfiedRange> for Range {
    fn from(unsatisfied: UnsatisfiedRange) -> Self {
        Range::Unsatisfied(unsatisfied)
    }
}
