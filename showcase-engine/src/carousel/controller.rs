// controller.rs - Carousel scene controller
//
// Owns one showcase: three screens, two buttons, the hover camera and the
// animation register. Every entry point takes the animation clock `now`
// (ms) explicitly; hosts pass performance.now() / the rAF timestamp.
//
// Frame order:
//   1. host drains texture completions into `texture_loaded`
//   2. `frame` polls tweens, applies them, renders
//   3. a finished centring tween runs `finalize_slide`

use std::collections::HashMap;

use glam::Vec2;
use log::{debug, error, info, warn};

use super::layout::MonitorLayout;
use super::ring::ImageRing;
use super::stage::{Cursor, LoadTicket, Stage, TextureSource};
use super::state::{AnimationState, CameraState, Direction, SlideState, Slot};
use crate::camera::CameraRig;
use crate::config::{ShowcaseSpec, Tuning};
use crate::error::ShowcaseError;
use crate::pick::{CanvasRect, Ray, Triangle, pick_nearest};
use crate::tween::{Easing, Tween};

struct Tweens {
    eye: Tween<glam::Vec3>,
    opacity: Tween<f32>,
    outgoing: Tween<f32>,
    incoming: Tween<f32>,
}

impl Tweens {
    fn new(tuning: &Tuning) -> Self {
        Self {
            eye: Tween::new(tuning.rest_eye, tuning.duration_ms, tuning.zoom_easing),
            opacity: Tween::new(0.0, tuning.duration_ms, Easing::QuadraticIn),
            outgoing: Tween::new(0.0, tuning.duration_ms, tuning.slide_easing),
            incoming: Tween::new(0.0, tuning.duration_ms, tuning.slide_easing),
        }
    }

    fn hover_active(&self) -> bool {
        self.eye.is_active() || self.opacity.is_active()
    }
}

pub struct Carousel<S, L>
where
    S: Stage,
    L: TextureSource<Texture = S::Texture>,
{
    name: String,
    stage: S,
    loader: L,
    ring: ImageRing,
    tuning: Tuning,
    layout: MonitorLayout,
    hit_regions: [(Direction, Triangle); 2],
    sliding_enabled: bool,

    state: AnimationState,
    tweens: Tweens,
    sliding: Option<Direction>,

    camera: CameraRig,
    button_opacity: f32,
    cursor: Cursor,
    screen_x: [f32; 3],

    // Per slot: image index on display, latest issued generation
    shown: [Option<usize>; 3],
    generation: [u64; 3],
    next_generation: u64,
    cache: HashMap<usize, S::Texture>,

    redraw: bool,
}

impl<S, L> Carousel<S, L>
where
    S: Stage,
    L: TextureSource<Texture = S::Texture>,
{
    /// Validate `spec`, look the mount up through `attach`, build the scene.
    ///
    /// `attach` returns `Ok(None)` when the container does not exist; that
    /// aborts with `MountNotFound` before any scene work happens. Failures
    /// are logged here, once, so callers may simply drop the error.
    pub fn mount<F>(spec: &ShowcaseSpec, attach: F) -> Result<Self, ShowcaseError>
    where
        F: FnOnce(&str, &MonitorLayout) -> Result<Option<(S, L)>, ShowcaseError>,
    {
        let result = Self::try_mount(spec, attach);
        if let Err(err) = &result {
            error!("showcase `{}`: {err}", spec.container);
        }
        result
    }

    fn try_mount<F>(spec: &ShowcaseSpec, attach: F) -> Result<Self, ShowcaseError>
    where
        F: FnOnce(&str, &MonitorLayout) -> Result<Option<(S, L)>, ShowcaseError>,
    {
        spec.validate()?;
        let layout = MonitorLayout::from_tuning(&spec.tuning);
        let (stage, loader) = attach(&spec.container, &layout)?
            .ok_or_else(|| ShowcaseError::MountNotFound(spec.container.clone()))?;
        Self::new(
            spec.container.clone(),
            stage,
            loader,
            spec.images.clone(),
            spec.sliding,
            spec.tuning.clone(),
        )
    }

    pub fn new(
        name: String,
        stage: S,
        loader: L,
        images: Vec<String>,
        sliding_enabled: bool,
        tuning: Tuning,
    ) -> Result<Self, ShowcaseError> {
        tuning.validate()?;
        let ring = ImageRing::new(&name, images)?;
        let layout = MonitorLayout::from_tuning(&tuning);

        let mut carousel = Self {
            hit_regions: layout.hit_regions(),
            tweens: Tweens::new(&tuning),
            camera: CameraRig::new(tuning.rest_eye, tuning.fov_y_deg),
            name,
            stage,
            loader,
            ring,
            tuning,
            layout,
            sliding_enabled,
            state: AnimationState::default(),
            sliding: None,
            button_opacity: 0.0,
            cursor: Cursor::Default,
            screen_x: [0.0; 3],
            shown: [None; 3],
            generation: [0; 3],
            next_generation: 0,
            cache: HashMap::new(),
            redraw: true,
        };

        for slot in Slot::ALL {
            let x = carousel.layout.slot_x(slot);
            carousel.set_screen_x(slot, x);
        }
        carousel.stage.set_button_opacity(0.0);
        carousel.refit();
        for slot in Slot::ALL {
            carousel.load(slot);
        }

        info!(
            "showcase `{}`: mounted with {} image(s), sliding {}",
            carousel.name,
            carousel.ring.len(),
            if sliding_enabled { "on" } else { "off" }
        );
        Ok(carousel)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.ring.current()
    }

    /// Image index a slot should display at the current position
    pub fn expected_index(&self, slot: Slot) -> usize {
        self.ring.index_for(slot)
    }

    /// Image index a slot actually displays (None while untextured)
    pub fn shown_index(&self, slot: Slot) -> Option<usize> {
        self.shown[slot.idx()]
    }

    pub fn screen_x(&self, slot: Slot) -> f32 {
        self.screen_x[slot.idx()]
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn button_opacity(&self) -> f32 {
        self.button_opacity
    }

    pub fn layout(&self) -> &MonitorLayout {
        &self.layout
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    // ========================================================================
    // Hover / zoom
    // ========================================================================

    pub fn pointer_enter(&mut self, now: f64) {
        let opacity = if self.sliding_enabled { self.tuning.button_opacity } else { 0.0 };
        let eye = self.tuning.zoom_eye;
        self.begin_camera(CameraState::Hovering, eye, opacity, Easing::QuadraticIn, now);
    }

    pub fn pointer_leave(&mut self, now: f64) {
        let eye = self.tuning.rest_eye;
        self.begin_camera(CameraState::Leaving, eye, 0.0, Easing::QuadraticOut, now);
        self.set_cursor(Cursor::Default);
    }

    // Replacing both tweens cancels whichever transition was in flight;
    // the new one starts from the last applied values.
    fn begin_camera(&mut self, state: CameraState, eye: glam::Vec3, opacity: f32, fade: Easing, now: f64) {
        let duration = self.tuning.duration_ms;

        self.tweens.eye = Tween::new(eye, duration, self.tuning.zoom_easing);
        self.tweens.eye.start(self.camera.eye, now);

        self.tweens.opacity = Tween::new(opacity, duration, fade);
        self.tweens.opacity.start(self.button_opacity, now);

        self.state.camera = state;
    }

    // ========================================================================
    // Picking
    // ========================================================================

    /// Which button, if any, lies under a client-space pointer
    pub fn hit_test(&self, client: Vec2, rect: CanvasRect) -> Option<Direction> {
        if !self.sliding_enabled {
            return None;
        }
        let ndc = rect.to_ndc(client)?;
        let ray = Ray::from_camera(&self.camera, ndc);
        pick_nearest(&self.hit_regions, &ray).map(|(dir, _)| dir)
    }

    /// Returns true when the click started a slide
    pub fn click(&mut self, client: Vec2, rect: CanvasRect, now: f64) -> bool {
        match self.hit_test(client, rect) {
            Some(dir) => self.slide(dir, now),
            None => false,
        }
    }

    pub fn pointer_move(&mut self, client: Vec2, rect: CanvasRect) {
        let cursor = match self.hit_test(client, rect) {
            Some(_) => Cursor::Pointer,
            None => Cursor::Default,
        };
        self.set_cursor(cursor);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.stage.set_cursor(cursor);
        }
    }

    // ========================================================================
    // Sliding
    // ========================================================================

    /// Start a slide. A no-op (returning false) while one is in flight.
    pub fn slide(&mut self, dir: Direction, now: f64) -> bool {
        if self.state.slide == SlideState::Sliding {
            return false;
        }
        self.state.slide = SlideState::Sliding;
        self.sliding = Some(dir);

        let spacing = self.layout.spacing;
        let (duration, easing) = (self.tuning.duration_ms, self.tuning.slide_easing);

        let (current_x, incoming_x) = (self.screen_x(Slot::Current), self.screen_x(dir.incoming()));

        self.tweens.outgoing = Tween::new(dir.exit_x(spacing), duration, easing);
        self.tweens.outgoing.start(current_x, now);

        self.tweens.incoming = Tween::new(0.0, duration, easing);
        self.tweens.incoming.start(incoming_x, now);

        debug!("showcase `{}`: slide {dir:?} from {}", self.name, self.ring.current());
        true
    }

    /// Settle on `new_index`: recentre the screens and retexture all three
    /// slots with independent load tickets.
    fn finalize_slide(&mut self, new_index: usize) {
        self.tweens.outgoing.stop();
        self.tweens.incoming.stop();

        self.ring.set_current(new_index);
        for slot in Slot::ALL {
            let x = self.layout.slot_x(slot);
            self.set_screen_x(slot, x);
        }
        for slot in Slot::ALL {
            self.load(slot);
        }

        self.sliding = None;
        self.state.slide = SlideState::Idle;
        self.redraw = true;
    }

    fn set_screen_x(&mut self, slot: Slot, x: f32) {
        self.screen_x[slot.idx()] = x;
        self.stage.place_screen(slot, x);
    }

    // ========================================================================
    // Textures
    // ========================================================================

    fn load(&mut self, slot: Slot) {
        let index = self.ring.index_for(slot);
        self.next_generation += 1;
        let generation = self.next_generation;
        self.generation[slot.idx()] = generation;

        if let Some(texture) = self.cache.get(&index) {
            self.stage.show_texture(slot, texture);
            self.shown[slot.idx()] = Some(index);
            return;
        }

        if self.shown[slot.idx()].take().is_some() {
            self.stage.clear_texture(slot);
        }
        let ticket = LoadTicket { slot, index, generation };
        self.loader.request(self.ring.url(index), ticket);
    }

    /// Deliver a completed load. Stale tickets are cached but not shown.
    pub fn texture_loaded(&mut self, ticket: LoadTicket, result: Result<S::Texture, ShowcaseError>) {
        let texture = match result {
            Ok(texture) => texture,
            Err(err) => {
                warn!("showcase `{}`: {err}", self.name);
                return;
            }
        };

        let slot = ticket.slot;
        if self.generation[slot.idx()] == ticket.generation {
            self.stage.show_texture(slot, &texture);
            self.shown[slot.idx()] = Some(ticket.index);
            self.redraw = true;
        } else {
            debug!(
                "showcase `{}`: dropping stale texture {} for {slot:?}",
                self.name, ticket.index
            );
        }
        self.cache.insert(ticket.index, texture);
    }

    // ========================================================================
    // Frame / resize
    // ========================================================================

    /// Poll animations and render. Returns false when the frame was skipped
    /// because nothing is animating and no redraw is pending.
    pub fn frame(&mut self, now: f64) -> bool {
        if self.state.is_idle() && !self.redraw {
            return false;
        }

        self.step_camera(now);
        self.step_slide(now);

        self.stage.set_camera(&self.camera);
        self.stage.render();
        self.redraw = false;
        true
    }

    fn step_camera(&mut self, now: f64) {
        if let Some(step) = self.tweens.eye.update(now) {
            self.camera.eye = step.value;
        }
        if let Some(step) = self.tweens.opacity.update(now) {
            self.button_opacity = step.value;
            self.stage.set_button_opacity(step.value);
        }
        if self.state.camera != CameraState::Idle && !self.tweens.hover_active() {
            self.state.camera = CameraState::Idle;
        }
    }

    fn step_slide(&mut self, now: f64) {
        let Some(dir) = self.sliding else { return };

        if let Some(step) = self.tweens.outgoing.update(now) {
            self.set_screen_x(Slot::Current, step.value);
        }
        if let Some(step) = self.tweens.incoming.update(now) {
            self.set_screen_x(dir.incoming(), step.value);
            if step.finished {
                let new_index = self.ring.stepped(dir);
                self.finalize_slide(new_index);
            }
        }
    }

    /// Re-read the mount's box and resize to it
    pub fn refit(&mut self) {
        let (width, height) = self.stage.mount_size();
        self.resize(width, height);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.camera.set_viewport(width, height) {
            debug!("showcase `{}`: ignoring {width}x{height} resize", self.name);
            return;
        }
        self.stage.set_size(width, height);
        self.stage.set_camera(&self.camera);
        self.redraw = true;
    }
}
