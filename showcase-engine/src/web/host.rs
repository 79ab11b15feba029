// host.rs - Three.js-backed stage and texture source
//
// Builds the monitor (three clipped screens, arrow buttons, frame, stand,
// base, lights) inside a container element and applies whatever the
// controller asks for. Texture completions land in a shared inbox that the
// frame loop drains.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlElement;

use super::three::{self, Material, Mesh, MeshBasicMaterial, Texture};
use crate::camera::CameraRig;
use crate::carousel::{
    CLIP_X, Cursor, Direction, LoadTicket, Loaded, MonitorLayout, SCREEN_SIZE, SCREEN_Z, Slot,
    Stage, TextureSource,
};
use crate::error::ShowcaseError;

const WHITE: u32 = 0xffffff;

pub type Inbox = Rc<RefCell<VecDeque<Loaded<Texture>>>>;

pub struct ThreeStage {
    container: HtmlElement,
    body: Option<HtmlElement>,
    canvas: web_sys::HtmlCanvasElement,
    renderer: three::WebGLRenderer,
    composer: three::EffectComposer,
    camera: three::PerspectiveCamera,
    screens: [(Mesh, MeshBasicMaterial); 3],
    button_material: MeshBasicMaterial,
}

impl ThreeStage {
    pub fn build(container: HtmlElement, layout: &MonitorLayout, fov_y_deg: f32) -> Result<Self, ShowcaseError> {
        let window = web_sys::window().ok_or_else(|| ShowcaseError::Js("no window".into()))?;
        let body = window.document().and_then(|d| d.body());

        let scene = three::Scene::new();
        let (w, h) = box_size(&container);
        let aspect = if h > 0 { w as f64 / h as f64 } else { 1.0 };
        let camera = three::PerspectiveCamera::new(fov_y_deg as f64, aspect, 0.1, 1000.0);

        let renderer = three::WebGLRenderer::new(&three::params(&[("alpha", JsValue::TRUE)])?)?;
        renderer.set_pixel_ratio(window.device_pixel_ratio());
        renderer.shadow_map().set_enabled(true);
        renderer.set_tone_mapping(three::NO_TONE_MAPPING);
        renderer.set_local_clipping_enabled(true);
        let canvas = renderer.dom_element();
        container.append_child(&canvas)?;

        // Only the centred screen is visible
        let clip = three::plane_array(&[
            three::Plane::new(&three::Vector3::new(1.0, 0.0, 0.0), CLIP_X as f64),
            three::Plane::new(&three::Vector3::new(-1.0, 0.0, 0.0), CLIP_X as f64),
        ]);
        let screen_geometry = three::BoxGeometry::new(SCREEN_SIZE.x as f64, SCREEN_SIZE.y as f64, 0.01);
        let screens = Slot::ALL.map(|slot| {
            three::params(&[("map", JsValue::NULL), ("clippingPlanes", clip.clone().into())])
                .map(|p| {
                    let material = MeshBasicMaterial::new(&p);
                    let mesh = Mesh::new(&screen_geometry, &material);
                    mesh.position().set(layout.slot_x(slot) as f64, 0.0, SCREEN_Z as f64);
                    scene.add(&mesh);
                    (mesh, material)
                })
        });
        let [a, b, c] = screens;
        let screens = [a?, b?, c?];

        let button_material = MeshBasicMaterial::new(&three::params(&[
            ("color", JsValue::from(WHITE)),
            ("transparent", JsValue::TRUE),
            ("opacity", JsValue::from(0.0)),
        ])?);
        for dir in [Direction::Retreat, Direction::Advance] {
            let mesh = Mesh::new(&arrow_geometry(dir), &button_material);
            let pos = layout.button_position(dir);
            mesh.scale().set(layout.button_scale.x as f64, layout.button_scale.y as f64, 0.1);
            mesh.position().set(pos.x as f64, pos.y as f64, pos.z as f64);
            scene.add(&mesh);
        }

        add_monitor_body(&scene)?;
        add_lights(&scene);

        let composer = three::EffectComposer::new(&renderer);
        composer.add_pass(&three::RenderPass::new(&scene, &camera).into());

        Ok(Self {
            container,
            body,
            canvas,
            renderer,
            composer,
            camera,
            screens,
            button_material,
        })
    }

    pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
        &self.canvas
    }

    fn material(&self, slot: Slot) -> &MeshBasicMaterial {
        &self.screens[slot.idx()].1
    }
}

fn box_size(element: &HtmlElement) -> (u32, u32) {
    (element.client_width().max(0) as u32, element.client_height().max(0) as u32)
}

fn arrow_geometry(dir: Direction) -> three::ShapeGeometry {
    let [top, tip, bottom] = MonitorLayout::button_outline(dir);
    let shape = three::Shape::new();
    shape.move_to(top.x as f64, top.y as f64);
    shape.line_to(tip.x as f64, tip.y as f64);
    shape.line_to(bottom.x as f64, bottom.y as f64);
    shape.line_to(top.x as f64, top.y as f64);
    three::ShapeGeometry::new(&shape)
}

fn add_monitor_body(scene: &three::Scene) -> Result<(), JsValue> {
    // (size, position, colour, roughness, metalness, receives shadow)
    let parts = [
        ([4.1, 2.4, 0.2], [0.0, 0.0, 0.0], 0x333333, 0.8, 0.3, false),
        ([0.3, 0.4, 0.1], [0.0, -1.3, -0.1], 0x333333, 0.7, 0.2, false),
        ([1.0, 0.1, 0.7], [0.0, -1.4, 0.0], 0x262626, 0.7, 0.2, true),
    ];
    for ([w, h, d], [x, y, z], color, roughness, metalness, receive) in parts {
        let geometry = three::BoxGeometry::new(w, h, d);
        geometry.compute_vertex_normals();
        let material = three::MeshStandardMaterial::new(&three::params(&[
            ("color", JsValue::from(color as u32)),
            ("roughness", JsValue::from(roughness)),
            ("metalness", JsValue::from(metalness)),
        ])?);
        let mesh = Mesh::new(&geometry, &material);
        mesh.position().set(x, y, z);
        mesh.set_cast_shadow(true);
        mesh.set_receive_shadow(receive);
        scene.add(&mesh);
    }
    Ok(())
}

fn add_lights(scene: &three::Scene) {
    scene.add(&three::AmbientLight::new(WHITE, 0.5));

    let key = three::DirectionalLight::new(WHITE, 6.0);
    key.position().set(5.0, 10.0, 3.0).normalize();
    key.set_cast_shadow(true);
    scene.add(&key);

    let back = three::DirectionalLight::new(WHITE, 0.8);
    back.position().set(0.0, 2.0, -5.0).normalize();
    back.set_cast_shadow(true);
    scene.add(&back);
}

impl Stage for ThreeStage {
    type Texture = Texture;

    fn mount_size(&self) -> (u32, u32) {
        box_size(&self.container)
    }

    fn place_screen(&mut self, slot: Slot, x: f32) {
        self.screens[slot.idx()].0.position().set_x(x as f64);
    }

    fn show_texture(&mut self, slot: Slot, texture: &Texture) {
        let material = self.material(slot);
        material.set_map(Some(texture));
        material.set_needs_update(true);
    }

    fn clear_texture(&mut self, slot: Slot) {
        let material = self.material(slot);
        material.set_map(None);
        material.set_needs_update(true);
    }

    fn set_button_opacity(&mut self, opacity: f32) {
        let material: &Material = &self.button_material;
        material.set_opacity(opacity as f64);
        material.set_needs_update(true);
    }

    fn set_camera(&mut self, camera: &CameraRig) {
        let (eye, target) = (camera.eye, camera.target);
        self.camera.position().set(eye.x as f64, eye.y as f64, eye.z as f64);
        self.camera.look_at(target.x as f64, target.y as f64, target.z as f64);
        self.camera.set_aspect(camera.aspect as f64);
        self.camera.update_projection_matrix();
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        let value = match cursor {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        };
        if let Some(body) = &self.body {
            let _ = body.style().set_property("cursor", value);
        }
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.renderer.set_size(width as f64, height as f64);
        self.composer.set_size(width as f64, height as f64);
    }

    fn render(&mut self) {
        self.composer.render();
    }
}

pub struct ThreeTextures {
    loader: three::TextureLoader,
    anisotropy: f64,
    inbox: Inbox,
}

impl ThreeTextures {
    pub fn new(stage: &ThreeStage, inbox: Inbox) -> Self {
        Self {
            loader: three::TextureLoader::new(),
            anisotropy: stage.renderer.capabilities().max_anisotropy(),
            inbox,
        }
    }
}

impl TextureSource for ThreeTextures {
    type Texture = Texture;

    fn request(&mut self, url: &str, ticket: LoadTicket) {
        let promise = self.loader.load_async(url);
        let inbox = Rc::clone(&self.inbox);
        let anisotropy = self.anisotropy;
        let url = url.to_owned();

        spawn_local(async move {
            let result = match JsFuture::from(promise).await {
                Ok(value) => {
                    let texture: Texture = value.unchecked_into();
                    texture.set_color_space(three::SRGB_COLOR_SPACE);
                    texture.set_anisotropy(anisotropy);
                    Ok(texture)
                }
                Err(err) => Err(ShowcaseError::TextureLoadFailed {
                    url,
                    reason: format!("{err:?}"),
                }),
            };
            inbox.borrow_mut().push_back((ticket, result));
        });
    }
}
