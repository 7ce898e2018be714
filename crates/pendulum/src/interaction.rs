//! Advisory drag state.
//!
//! Nothing in the physics branches on these values. They record which
//! point the user is holding so the host can decide, each frame, whether to
//! call [`DoublePendulum::step`](crate::DoublePendulum::step) or one of the
//! interactive setters.

/// What the host should do with the pendulum on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionMode {
    /// Nothing is held; advance the dynamics.
    #[default]
    Simulating,
    /// The anchor is being dragged; the upper bob stays put.
    DraggingBase,
    /// The upper bob is being dragged; the anchor stays put.
    DraggingUpperBob,
    /// The lower bob is being dragged; the upper bob stays put.
    DraggingLowerBob,
}

/// The three hold flags, one per draggable point.
///
/// Flags are independent; several may be set at once. [`Holds::mode`]
/// collapses them into a single [`InteractionMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct Holds {
    /// The anchor is held.
    pub base: bool,
    /// The upper bob is held.
    pub upper_bob: bool,
    /// The lower bob is held.
    pub lower_bob: bool,
}

impl Holds {
    /// The mode implied by the flags.
    ///
    /// When more than one flag is set the base wins over the upper bob,
    /// which wins over the lower bob.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pendulum::{Holds, InteractionMode};
    ///
    /// let holds = Holds { upper_bob: true, lower_bob: true, ..Holds::default() };
    /// assert_eq!(holds.mode(), InteractionMode::DraggingUpperBob);
    /// assert_eq!(Holds::default().mode(), InteractionMode::Simulating);
    /// ```
    pub const fn mode(self) -> InteractionMode {
        if self.base {
            InteractionMode::DraggingBase
        } else if self.upper_bob {
            InteractionMode::DraggingUpperBob
        } else if self.lower_bob {
            InteractionMode::DraggingLowerBob
        } else {
            InteractionMode::Simulating
        }
    }
}
