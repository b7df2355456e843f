//! Source spans.
//!
//! A `Span` is a half-open byte range `[pos, end)` into the original source
//! text. Synthesized nodes that have no source location use `Span::NONE`.

use serde::Serialize;

/// Half-open byte range into the source text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub pos: u32,
    pub end: u32,
}

impl Span {
    /// Sentinel for nodes with no source position.
    pub const NONE: Span = Span {
        pos: u32::MAX,
        end: u32::MAX,
    };

    #[inline]
    #[must_use]
    pub const fn new(pos: u32, end: u32) -> Self {
        Span { pos, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    #[must_use]
    pub const fn at(pos: u32) -> Self {
        Span { pos, end: pos }
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.pos == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        if self.is_none() {
            0
        } else {
            self.end.saturating_sub(self.pos)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    /// A missing span on either side yields the other one.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        if self.is_none() {
            return other;
        }
        if other.is_none() {
            return self;
        }
        Span {
            pos: self.pos.min(other.pos),
            end: self.end.max(other.end),
        }
    }

    #[must_use]
    pub const fn contains(self, offset: u32) -> bool {
        self.is_some() && self.pos <= offset && offset < self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "<synthetic>")
        } else {
            write!(f, "{}..{}", self.pos, self.end)
        }
    }
}
