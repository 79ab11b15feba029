// three.rs - Minimal Three.js bindings
//
// Only what the monitor scene touches. Numbers cross as f64, colours as
// 0xRRGGBB.

use js_sys::{Array, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "three")]
extern "C" {
    // -- math ---------------------------------------------------------------

    pub type Vector3;

    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> Vector3;

    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f64, y: f64, z: f64) -> Vector3;

    #[wasm_bindgen(method, setter = x)]
    pub fn set_x(this: &Vector3, x: f64);

    #[wasm_bindgen(method)]
    pub fn normalize(this: &Vector3) -> Vector3;

    pub type Plane;

    #[wasm_bindgen(constructor)]
    pub fn new(normal: &Vector3, constant: f64) -> Plane;

    // -- scene graph --------------------------------------------------------

    pub type Object3D;

    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method, js_name = lookAt)]
    pub fn look_at(this: &Object3D, x: f64, y: f64, z: f64);

    #[wasm_bindgen(method)]
    pub fn add(this: &Object3D, child: &Object3D);

    #[wasm_bindgen(method, setter = castShadow)]
    pub fn set_cast_shadow(this: &Object3D, value: bool);

    #[wasm_bindgen(method, setter = receiveShadow)]
    pub fn set_receive_shadow(this: &Object3D, value: bool);

    #[wasm_bindgen(extends = Object3D)]
    pub type Scene;

    #[wasm_bindgen(constructor)]
    pub fn new() -> Scene;

    #[wasm_bindgen(extends = Object3D)]
    pub type PerspectiveCamera;

    #[wasm_bindgen(constructor)]
    pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> PerspectiveCamera;

    #[wasm_bindgen(method, setter)]
    pub fn set_aspect(this: &PerspectiveCamera, aspect: f64);

    #[wasm_bindgen(method, js_name = updateProjectionMatrix)]
    pub fn update_projection_matrix(this: &PerspectiveCamera);

    #[wasm_bindgen(extends = Object3D)]
    pub type Mesh;

    #[wasm_bindgen(constructor)]
    pub fn new(geometry: &BufferGeometry, material: &Material) -> Mesh;

    #[wasm_bindgen(extends = Object3D)]
    pub type AmbientLight;

    #[wasm_bindgen(constructor)]
    pub fn new(color: u32, intensity: f64) -> AmbientLight;

    #[wasm_bindgen(extends = Object3D)]
    pub type DirectionalLight;

    #[wasm_bindgen(constructor)]
    pub fn new(color: u32, intensity: f64) -> DirectionalLight;

    // -- geometry -----------------------------------------------------------

    pub type BufferGeometry;

    #[wasm_bindgen(method, js_name = computeVertexNormals)]
    pub fn compute_vertex_normals(this: &BufferGeometry);

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type BoxGeometry;

    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, depth: f64) -> BoxGeometry;

    pub type Shape;

    #[wasm_bindgen(constructor)]
    pub fn new() -> Shape;

    #[wasm_bindgen(method, js_name = moveTo)]
    pub fn move_to(this: &Shape, x: f64, y: f64) -> Shape;

    #[wasm_bindgen(method, js_name = lineTo)]
    pub fn line_to(this: &Shape, x: f64, y: f64) -> Shape;

    #[wasm_bindgen(extends = BufferGeometry)]
    pub type ShapeGeometry;

    #[wasm_bindgen(constructor)]
    pub fn new(shape: &Shape) -> ShapeGeometry;

    // -- materials / textures -----------------------------------------------

    pub type Material;

    #[wasm_bindgen(method, setter)]
    pub fn set_opacity(this: &Material, opacity: f64);

    #[wasm_bindgen(method, setter = needsUpdate)]
    pub fn set_needs_update(this: &Material, value: bool);

    #[wasm_bindgen(extends = Material)]
    pub type MeshBasicMaterial;

    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> MeshBasicMaterial;

    #[wasm_bindgen(method, setter)]
    pub fn set_map(this: &MeshBasicMaterial, map: Option<&Texture>);

    #[wasm_bindgen(extends = Material)]
    pub type MeshStandardMaterial;

    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> MeshStandardMaterial;

    #[derive(Clone)]
    pub type Texture;

    #[wasm_bindgen(method, setter = colorSpace)]
    pub fn set_color_space(this: &Texture, space: &str);

    #[wasm_bindgen(method, setter)]
    pub fn set_anisotropy(this: &Texture, value: f64);

    pub type TextureLoader;

    #[wasm_bindgen(constructor)]
    pub fn new() -> TextureLoader;

    #[wasm_bindgen(method, js_name = loadAsync)]
    pub fn load_async(this: &TextureLoader, url: &str) -> Promise;

    // -- renderer -----------------------------------------------------------

    pub type WebGLRenderer;

    // Throws when no WebGL context can be created
    #[wasm_bindgen(catch, constructor)]
    pub fn new(params: &JsValue) -> Result<WebGLRenderer, JsValue>;

    #[wasm_bindgen(method, js_name = setSize)]
    pub fn set_size(this: &WebGLRenderer, width: f64, height: f64);

    #[wasm_bindgen(method, js_name = setPixelRatio)]
    pub fn set_pixel_ratio(this: &WebGLRenderer, ratio: f64);

    #[wasm_bindgen(method, getter = domElement)]
    pub fn dom_element(this: &WebGLRenderer) -> web_sys::HtmlCanvasElement;

    #[wasm_bindgen(method, setter = localClippingEnabled)]
    pub fn set_local_clipping_enabled(this: &WebGLRenderer, value: bool);

    #[wasm_bindgen(method, setter = toneMapping)]
    pub fn set_tone_mapping(this: &WebGLRenderer, mapping: u32);

    #[wasm_bindgen(method, getter = shadowMap)]
    pub fn shadow_map(this: &WebGLRenderer) -> ShadowMap;

    #[wasm_bindgen(method, getter)]
    pub fn capabilities(this: &WebGLRenderer) -> Capabilities;

    pub type ShadowMap;

    #[wasm_bindgen(method, setter)]
    pub fn set_enabled(this: &ShadowMap, value: bool);

    pub type Capabilities;

    #[wasm_bindgen(method, js_name = getMaxAnisotropy)]
    pub fn max_anisotropy(this: &Capabilities) -> f64;
}

#[wasm_bindgen(module = "three/addons/postprocessing/EffectComposer.js")]
extern "C" {
    pub type EffectComposer;

    #[wasm_bindgen(constructor)]
    pub fn new(renderer: &WebGLRenderer) -> EffectComposer;

    #[wasm_bindgen(method, js_name = addPass)]
    pub fn add_pass(this: &EffectComposer, pass: &JsValue);

    #[wasm_bindgen(method, js_name = setSize)]
    pub fn set_size(this: &EffectComposer, width: f64, height: f64);

    #[wasm_bindgen(method)]
    pub fn render(this: &EffectComposer);
}

#[wasm_bindgen(module = "three/addons/postprocessing/RenderPass.js")]
extern "C" {
    pub type RenderPass;

    #[wasm_bindgen(constructor)]
    pub fn new(scene: &Scene, camera: &PerspectiveCamera) -> RenderPass;
}

// Three.js enum values
pub const NO_TONE_MAPPING: u32 = 0;
pub const SRGB_COLOR_SPACE: &str = "srgb";

/// `{ key: value, ... }` for constructor parameter bags
pub fn params(entries: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj.into())
}

pub fn plane_array(planes: &[Plane]) -> Array {
    planes.iter().collect()
}
