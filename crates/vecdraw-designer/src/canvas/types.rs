//! Canvas type definitions: HitOrder.

/// Order in which overlapping shapes are hit-tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOrder {
    /// Insertion order; the earliest-created shape wins. Used for selection.
    FrontToBack,
    /// Reverse insertion order; the topmost shape wins. Used for erasing.
    BackToFront,
}
