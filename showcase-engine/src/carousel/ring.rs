// ring.rs - Circular image list

use super::state::{Direction, Slot};
use crate::error::ShowcaseError;

#[derive(Debug, Clone)]
pub struct ImageRing {
    urls: Vec<String>,
    current: usize,
}

impl ImageRing {
    pub fn new(name: &str, urls: Vec<String>) -> Result<Self, ShowcaseError> {
        if urls.is_empty() {
            return Err(ShowcaseError::EmptyImageList(name.to_owned()));
        }
        Ok(Self { urls, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn url(&self, index: usize) -> &str {
        &self.urls[index % self.urls.len()]
    }

    /// Index shown by a slot for the current position
    pub fn index_for(&self, slot: Slot) -> usize {
        let n = self.urls.len();
        match slot {
            Slot::Current => self.current,
            Slot::Next => (self.current + 1) % n,
            Slot::Previous => (self.current + n - 1) % n,
        }
    }

    /// Index one step away, without moving
    pub fn stepped(&self, dir: Direction) -> usize {
        match dir {
            Direction::Advance => self.index_for(Slot::Next),
            Direction::Retreat => self.index_for(Slot::Previous),
        }
    }

    pub fn set_current(&mut self, index: usize) {
        self.current = index % self.urls.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: usize) -> ImageRing {
        ImageRing::new("t", (0..n).map(|i| format!("{i}.png")).collect()).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = ImageRing::new("gallery", Vec::new()).unwrap_err();
        assert!(matches!(err, ShowcaseError::EmptyImageList(name) if name == "gallery"));
    }

    #[test]
    fn neighbours_wrap() {
        let r = ring(3);
        assert_eq!(r.index_for(Slot::Current), 0);
        assert_eq!(r.index_for(Slot::Next), 1);
        assert_eq!(r.index_for(Slot::Previous), 2);
        assert_eq!(r.url(r.index_for(Slot::Previous)), "2.png");
    }

    #[test]
    fn single_image_is_its_own_neighbour() {
        let r = ring(1);
        for slot in Slot::ALL {
            assert_eq!(r.index_for(slot), 0);
        }
        assert_eq!(r.stepped(Direction::Advance), 0);
        assert_eq!(r.stepped(Direction::Retreat), 0);
    }

    #[test]
    fn stepping_full_circle_returns_home() {
        for n in 1..=6 {
            for start in 0..n {
                let mut r = ring(n);
                r.set_current(start);
                for _ in 0..n {
                    let next = r.stepped(Direction::Advance);
                    r.set_current(next);
                }
                assert_eq!(r.current(), start, "n={n} start={start}");
                for _ in 0..n {
                    let prev = r.stepped(Direction::Retreat);
                    r.set_current(prev);
                }
                assert_eq!(r.current(), start, "n={n} start={start} (retreat)");
            }
        }
    }
}
