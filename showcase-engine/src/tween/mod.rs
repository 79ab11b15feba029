// tween/ - Time-bounded interpolation
//
// Polled, not pushed: the frame callback drives every tween with the
// animation clock (milliseconds, same timeline as requestAnimationFrame).

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::{Lerp, Tween, TweenStep};
