// web/ - Browser entry points (wasm32)
//
// Each mounted showcase is an independent `Rc<RefCell<Instance>>` captured by
// its own listeners and animation loop. Errors stop at this boundary: they
// are logged and never thrown back into the page.

mod host;
mod three;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent, Window};

use crate::carousel::Carousel;
use crate::config::{ShowcaseSpec, parse_manifest};
use crate::error::ShowcaseError;
use crate::pick::CanvasRect;
use host::{Inbox, ThreeStage, ThreeTextures};

type Showcase = Carousel<ThreeStage, ThreeTextures>;

struct Instance {
    carousel: Showcase,
    inbox: Inbox,
}

impl Instance {
    fn tick(&mut self, now: f64) {
        let arrived: Vec<_> = self.inbox.borrow_mut().drain(..).collect();
        for (ticket, result) in arrived {
            self.carousel.texture_loaded(ticket, result);
        }
        self.carousel.frame(now);
    }

    fn canvas_rect(&self) -> CanvasRect {
        let rect = self.carousel.stage().canvas().get_bounding_client_rect();
        CanvasRect::new(rect.left() as f32, rect.top() as f32, rect.width() as f32, rect.height() as f32)
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = wasm_logger::init(wasm_logger::Config::default());
}

/// Mount one showcase. Returns false (after logging) when it could not be mounted.
#[wasm_bindgen(js_name = mountShowcase)]
pub fn mount_showcase(container_id: &str, images: Vec<String>, allow_sliding: bool) -> bool {
    mount(&ShowcaseSpec::new(container_id, images, allow_sliding)).is_ok()
}

/// Mount every entry of a JSON manifest. Entries fail independently;
/// returns how many mounted.
#[wasm_bindgen(js_name = mountShowcases)]
pub fn mount_showcases(manifest: &str) -> u32 {
    let specs = match parse_manifest(manifest) {
        Ok(specs) => specs,
        Err(err) => {
            log::error!("{err}");
            return 0;
        }
    };
    let mounted = specs.iter().filter(|spec| mount(spec).is_ok()).count() as u32;
    info!("mounted {mounted}/{} showcase(s)", specs.len());
    mounted
}

fn mount(spec: &ShowcaseSpec) -> Result<(), ShowcaseError> {
    let window = web_sys::window().ok_or_else(|| ShowcaseError::Js("no window".into()))?;
    let inbox = Inbox::default();

    let mut container = None;
    let carousel = Carousel::mount(spec, |id, layout| {
        let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
            return Ok(None);
        };
        let element: HtmlElement = element.dyn_into().map_err(|_| ShowcaseError::MountNotFound(id.to_owned()))?;
        let stage = ThreeStage::build(element.clone(), layout, spec.tuning.fov_y_deg)?;
        let textures = ThreeTextures::new(&stage, Rc::clone(&inbox));
        container = Some(element);
        Ok(Some((stage, textures)))
    })?;
    let Some(container) = container else {
        return Err(ShowcaseError::MountNotFound(spec.container.clone()));
    };

    let instance = Rc::new(RefCell::new(Instance { carousel, inbox }));
    wire(&window, &container, instance)
        .inspect_err(|err| log::error!("showcase `{}`: {err}", spec.container))
}

fn wire(window: &Window, container: &HtmlElement, instance: Rc<RefCell<Instance>>) -> Result<(), ShowcaseError> {
    wire_pointer(window, container, &instance)?;
    wire_resize(window, &instance)?;
    run_frames(window, instance)
}

fn clock(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), ShowcaseError>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn wire_pointer(window: &Window, container: &HtmlElement, instance: &Rc<RefCell<Instance>>) -> Result<(), ShowcaseError> {
    let (w, inst) = (window.clone(), Rc::clone(instance));
    listen(container, "mouseenter", move |_| {
        inst.borrow_mut().carousel.pointer_enter(clock(&w));
    })?;

    let (w, inst) = (window.clone(), Rc::clone(instance));
    listen(container, "mouseleave", move |_| {
        inst.borrow_mut().carousel.pointer_leave(clock(&w));
    })?;

    let inst = Rc::clone(instance);
    listen(container, "mousemove", move |event| {
        let mut inst = inst.borrow_mut();
        let rect = inst.canvas_rect();
        inst.carousel.pointer_move(client_point(&event), rect);
    })?;

    let (w, inst) = (window.clone(), Rc::clone(instance));
    listen(container, "click", move |event| {
        let mut inst = inst.borrow_mut();
        let rect = inst.canvas_rect();
        inst.carousel.click(client_point(&event), rect, clock(&w));
    })
}

fn client_point(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

fn wire_resize(window: &Window, instance: &Rc<RefCell<Instance>>) -> Result<(), ShowcaseError> {
    let inst = Rc::clone(instance);
    let closure = Closure::<dyn FnMut()>::new(move || {
        inst.borrow_mut().carousel.refit();
    });
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn run_frames(window: &Window, instance: Rc<RefCell<Instance>>) -> Result<(), ShowcaseError> {
    type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    let slot: FrameLoop = Rc::new(RefCell::new(None));
    let next = Rc::clone(&slot);
    let w = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
        instance.borrow_mut().tick(now);
        if let Some(callback) = next.borrow().as_ref() {
            let _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
