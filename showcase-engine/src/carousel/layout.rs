// layout.rs - Monitor scene geometry
//
// Shared by the controller (screen offsets, pick triangles) and the host
// (mesh construction), so both agree on where things are.

use glam::{Vec2, Vec3};

use super::state::{Direction, Slot};
use crate::config::Tuning;
use crate::pick::Triangle;

/// Screen panel size in world units
pub const SCREEN_SIZE: Vec2 = Vec2::new(4.0, 2.3);
pub const SCREEN_Z: f32 = 0.1;

/// Screens are clipped to |x| <= CLIP_X so only the centred one shows
pub const CLIP_X: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorLayout {
    pub spacing: f32,
    pub button_x: f32,
    pub button_z: f32,
    pub button_scale: Vec2,
}

impl MonitorLayout {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            spacing: tuning.spacing,
            button_x: tuning.button_x,
            button_z: tuning.button_z,
            button_scale: tuning.button_scale,
        }
    }

    /// Canonical x offset of a slot
    pub fn slot_x(&self, slot: Slot) -> f32 {
        match slot {
            Slot::Current => 0.0,
            Slot::Next => self.spacing,
            Slot::Previous => -self.spacing,
        }
    }

    /// Unit arrow outline pointing the way the button slides
    pub fn button_outline(dir: Direction) -> [Vec2; 3] {
        let tip = match dir {
            Direction::Advance => 1.0,
            Direction::Retreat => -1.0,
        };
        [Vec2::new(0.0, 1.0), Vec2::new(tip, 0.0), Vec2::new(0.0, -1.0)]
    }

    /// Button placement on the centred screen: left edge retreats, right advances
    pub fn button_position(&self, dir: Direction) -> Vec3 {
        let x = match dir {
            Direction::Advance => self.button_x,
            Direction::Retreat => -self.button_x,
        };
        Vec3::new(x, 0.0, self.button_z)
    }

    pub fn button_triangle(&self, dir: Direction) -> Triangle {
        let origin = self.button_position(dir);
        let s = self.button_scale;
        Triangle(Self::button_outline(dir).map(|p| origin + Vec3::new(p.x * s.x, p.y * s.y, 0.0)))
    }

    pub fn hit_regions(&self) -> [(Direction, Triangle); 2] {
        [
            (Direction::Retreat, self.button_triangle(Direction::Retreat)),
            (Direction::Advance, self.button_triangle(Direction::Advance)),
        ]
    }
}
