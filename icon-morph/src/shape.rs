use crate::error::{MorphError, Result};

/// Steady-state appearance of the icon. Declaration order is the total order
/// used to name the first and second shape of a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IconShape {
    /// Three parallel horizontal lines.
    Stack,
    Arrow,
    Cross,
    Check,
    /// No visible strokes.
    Hidden,
}

impl IconShape {
    pub const ALL: [Self; 5] = [Self::Stack, Self::Arrow, Self::Cross, Self::Check, Self::Hidden];
}

/// One animatable pair of distinct shapes. Each variant owns its own
/// geometry recipes in the stroke solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    StackArrow,
    StackCross,
    StackCheck,
    StackHidden,
    ArrowCross,
    ArrowCheck,
    ArrowHidden,
    CrossCheck,
    CrossHidden,
    CheckHidden,
}

impl Transition {
    pub const ALL: [Self; 10] = [
        Self::StackArrow,
        Self::StackCross,
        Self::StackCheck,
        Self::StackHidden,
        Self::ArrowCross,
        Self::ArrowCheck,
        Self::ArrowHidden,
        Self::CrossCheck,
        Self::CrossHidden,
        Self::CheckHidden,
    ];

    /// Shape at progress 0 (and again at 2).
    pub const fn first(self) -> IconShape {
        match self {
            Self::StackArrow | Self::StackCross | Self::StackCheck | Self::StackHidden => {
                IconShape::Stack
            }
            Self::ArrowCross | Self::ArrowCheck | Self::ArrowHidden => IconShape::Arrow,
            Self::CrossCheck | Self::CrossHidden => IconShape::Cross,
            Self::CheckHidden => IconShape::Check,
        }
    }

    /// Shape at progress 1.
    pub const fn second(self) -> IconShape {
        match self {
            Self::StackArrow => IconShape::Arrow,
            Self::StackCross | Self::ArrowCross => IconShape::Cross,
            Self::StackCheck | Self::ArrowCheck | Self::CrossCheck => IconShape::Check,
            Self::StackHidden | Self::ArrowHidden | Self::CrossHidden | Self::CheckHidden => {
                IconShape::Hidden
            }
        }
    }

    pub fn involves(self, shape: IconShape) -> bool {
        self.first() == shape || self.second() == shape
    }

    /// Finds the transition linking `current` and `target`.
    ///
    /// The returned flag is `true` when `current` is the transition's first
    /// shape, i.e. the run traverses progress `[0, 1]` rather than `[1, 2]`.
    pub fn resolve(current: IconShape, target: IconShape) -> Result<(Self, bool)> {
        let (lo, hi) = if current <= target {
            (current, target)
        } else {
            (target, current)
        };

        Self::ALL
            .into_iter()
            .find(|t| t.first() == lo && t.second() == hi)
            .map(|t| (t, t.first() == current))
            .ok_or(MorphError::UnsupportedTransition {
                from: current,
                to: target,
            })
    }

    /// Transitions whose stroke shortening runs from full length toward zero.
    pub(crate) const fn shrinks_shortening(self) -> bool {
        matches!(self, Self::ArrowCross | Self::CrossCheck)
    }
}
