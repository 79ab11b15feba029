// state.rs - Two-slot animation register
//
// `camera` and `slide` are independent. Each instance owns its own register.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Idle,
    Hovering,
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideState {
    #[default]
    Idle,
    Sliding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    pub camera: CameraState,
    pub slide: SlideState,
}

impl AnimationState {
    pub fn is_idle(&self) -> bool {
        self.camera == CameraState::Idle && self.slide == SlideState::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Advance,
    Retreat,
}

/// The three image planes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Current,
    Next,
    Previous,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Current, Slot::Next, Slot::Previous];

    #[inline]
    pub(crate) fn idx(self) -> usize {
        match self {
            Slot::Current => 0,
            Slot::Next => 1,
            Slot::Previous => 2,
        }
    }
}

impl Direction {
    /// The neighbour that slides into the centre
    pub fn incoming(self) -> Slot {
        match self {
            Direction::Advance => Slot::Next,
            Direction::Retreat => Slot::Previous,
        }
    }

    /// Where the current screen ends up: opposite to travel
    pub fn exit_x(self, spacing: f32) -> f32 {
        match self {
            Direction::Advance => -spacing,
            Direction::Retreat => spacing,
        }
    }
}
