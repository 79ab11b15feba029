// Recording fakes for driving the carousel without a browser.

#![allow(dead_code)]

use std::collections::HashMap;

use glam::Vec3;
use showcase_engine::camera::CameraRig;
use showcase_engine::carousel::{Cursor, LoadTicket, Stage, TextureSource};
use showcase_engine::{Carousel, ShowcaseError, Slot, Tuning};

pub const FRAME_MS: f64 = 16.0;

/// Textures are just their URL
pub type Tex = String;

#[derive(Debug, Default)]
pub struct RecordingStage {
    pub size: (u32, u32),
    pub output_size: Option<(u32, u32)>,
    pub screens: HashMap<Slot, f32>,
    pub textures: HashMap<Slot, Tex>,
    pub button_opacity: Vec<f32>,
    pub eye: Option<Vec3>,
    pub aspect: Option<f32>,
    pub cursor: Cursor,
    pub renders: usize,
}

impl RecordingStage {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }
}

impl Stage for RecordingStage {
    type Texture = Tex;

    fn mount_size(&self) -> (u32, u32) {
        self.size
    }

    fn place_screen(&mut self, slot: Slot, x: f32) {
        self.screens.insert(slot, x);
    }

    fn show_texture(&mut self, slot: Slot, texture: &Tex) {
        self.textures.insert(slot, texture.clone());
    }

    fn clear_texture(&mut self, slot: Slot) {
        self.textures.remove(&slot);
    }

    fn set_button_opacity(&mut self, opacity: f32) {
        self.button_opacity.push(opacity);
    }

    fn set_camera(&mut self, camera: &CameraRig) {
        self.eye = Some(camera.eye);
        self.aspect = Some(camera.aspect);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.output_size = Some((width, height));
    }

    fn render(&mut self) {
        self.renders += 1;
    }
}

/// Holds requests until the test decides to complete them
#[derive(Debug, Default)]
pub struct QueuedLoader {
    pub pending: Vec<(String, LoadTicket)>,
    pub issued: usize,
}

impl TextureSource for QueuedLoader {
    type Texture = Tex;

    fn request(&mut self, url: &str, ticket: LoadTicket) {
        self.pending.push((url.to_owned(), ticket));
        self.issued += 1;
    }
}

pub type TestCarousel = Carousel<RecordingStage, QueuedLoader>;

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn urls(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn carousel(names: &[&str], sliding: bool) -> TestCarousel {
    init_logs();
    Carousel::new(
        "threejs-background-1".into(),
        RecordingStage::sized(800, 450),
        QueuedLoader::default(),
        urls(names),
        sliding,
        Tuning::default(),
    )
    .unwrap()
}

/// Complete every outstanding load successfully, in request order
pub fn complete_all(c: &mut TestCarousel) {
    let pending = std::mem::take(&mut c.loader_mut().pending);
    for (url, ticket) in pending {
        c.texture_loaded(ticket, Ok(url));
    }
}

/// Fail every outstanding load
pub fn fail_all(c: &mut TestCarousel) {
    let pending = std::mem::take(&mut c.loader_mut().pending);
    for (url, ticket) in pending {
        c.texture_loaded(
            ticket,
            Err(ShowcaseError::TextureLoadFailed { url, reason: "404".into() }),
        );
    }
}

/// Run frames from `from` until `until` inclusive; returns the last clock value
pub fn run_frames(c: &mut TestCarousel, from: f64, until: f64) -> f64 {
    let mut now = from;
    while now <= until {
        c.frame(now);
        now += FRAME_MS;
    }
    now
}

pub fn texture_on(c: &TestCarousel, slot: Slot) -> Option<&str> {
    c.stage().textures.get(&slot).map(String::as_str)
}
