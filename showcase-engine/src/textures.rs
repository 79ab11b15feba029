// textures.rs - Filesystem texture source (native builds)
//
// Decodes screenshots with the `image` crate so the controller can run
// headless against the real asset tree. Requests complete immediately but
// are still handed back through `drain`, same as the browser's async path.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;

use crate::carousel::{LoadTicket, Loaded, TextureSource};
use crate::error::ShowcaseError;

/// Decoded RGBA8 texture, cheap to clone
#[derive(Debug, Clone)]
pub struct DiskTexture {
    pub url: String,
    pub pixels: Arc<RgbaImage>,
}

impl DiskTexture {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

pub struct DiskTextures {
    root: PathBuf,
    done: VecDeque<Loaded<DiskTexture>>,
}

impl DiskTextures {
    /// URLs resolve relative to `root` (a leading `./` is ignored)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            done: VecDeque::new(),
        }
    }

    fn resolve(&self, url: &str) -> PathBuf {
        self.root.join(Path::new(url.trim_start_matches("./")))
    }

    /// Take every completion since the last drain, in request order
    pub fn drain(&mut self) -> Vec<Loaded<DiskTexture>> {
        self.done.drain(..).collect()
    }
}

impl TextureSource for DiskTextures {
    type Texture = DiskTexture;

    fn request(&mut self, url: &str, ticket: LoadTicket) {
        let path = self.resolve(url);
        let result = image::open(&path)
            .map(|img| DiskTexture {
                url: url.to_owned(),
                pixels: Arc::new(img.to_rgba8()),
            })
            .map_err(|err| ShowcaseError::TextureLoadFailed {
                url: url.to_owned(),
                reason: err.to_string(),
            });
        self.done.push_back((ticket, result));
    }
}
