// carousel/ - Monitor showcase controller
//
// Host-agnostic. The browser host lives in `web`; tests drive the same
// controller with recording fakes.

mod controller;
mod layout;
mod ring;
mod stage;
mod state;

pub use controller::Carousel;
pub use layout::{CLIP_X, MonitorLayout, SCREEN_SIZE, SCREEN_Z};
pub use ring::ImageRing;
pub use stage::{Cursor, LoadTicket, Loaded, Stage, TextureSource};
pub use state::{AnimationState, CameraState, Direction, SlideState, Slot};
