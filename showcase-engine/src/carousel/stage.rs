// stage.rs - Collaborator seams
//
// The controller never touches the renderer directly. `Stage` is the scene
// graph it drives, `TextureSource` the asynchronous image loader feeding it.

use super::state::Slot;
use crate::camera::CameraRig;
use crate::error::ShowcaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// Identity of one texture request. A completion is applied only while its
/// generation is still the latest issued for that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    pub slot: Slot,
    pub index: usize,
    pub generation: u64,
}

/// A finished (or failed) texture request
pub type Loaded<T> = (LoadTicket, Result<T, ShowcaseError>);

pub trait Stage {
    type Texture: Clone;

    /// Current box size of the mount element
    fn mount_size(&self) -> (u32, u32);

    fn place_screen(&mut self, slot: Slot, x: f32);
    fn show_texture(&mut self, slot: Slot, texture: &Self::Texture);
    fn clear_texture(&mut self, slot: Slot);
    fn set_button_opacity(&mut self, opacity: f32);

    /// Pose and projection; the stage re-aims at `camera.target`
    fn set_camera(&mut self, camera: &CameraRig);
    fn set_cursor(&mut self, cursor: Cursor);

    /// Renderer and post-process output size
    fn set_size(&mut self, width: u32, height: u32);
    fn render(&mut self);
}

pub trait TextureSource {
    type Texture;

    /// Fire and forget. The completion comes back through
    /// `Carousel::texture_loaded` with the same ticket.
    fn request(&mut self, url: &str, ticket: LoadTicket);
}
