// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::info;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::scene::{Scene, SceneObject};
use crate::core::texture::Texture;
use crate::emitters::{AreaLight, Light, PointLight};
use crate::integrators::path::{PathIntegrator, DEFAULT_MAX_DEPTH};
use crate::materials::{
    DielectricBSDF, DiffuseSpecularBSDF, EmissiveBSDF, LambertianDiffuseBSDF, Material,
    MicrofacetSpecularBSDF, MirrorBSDF,
};
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::{black, white, RGBSpectrum};
use crate::renderers::renderer::RenderSettings;
use crate::sensors::PinholeCamera;
use crate::shapes::{Primitive, Quad, Sphere};
use crate::textures::checker::CheckerTexture;
use crate::textures::uniform::UniformColorTexture;

pub const DEFAULT_SAMPLE_COUNT: u32 = 16;

#[derive(Debug)]
pub enum SceneLoadError {
    Io(std::io::Error),
    Parse(String),
    MissingField(&'static str),
}

impl fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneLoadError::Io(err) => write!(f, "cannot read scene: {}", err),
            SceneLoadError::Parse(msg) => write!(f, "invalid scene: {}", msg),
            SceneLoadError::MissingField(field) => write!(f, "missing scene field: {}", field),
        }
    }
}

impl std::error::Error for SceneLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneLoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SceneLoadError {
    fn from(err: std::io::Error) -> Self {
        SceneLoadError::Io(err)
    }
}

pub struct SceneLoadResult {
    pub scene: Scene,
    pub integrator: PathIntegrator,
    pub sample_count: u32,
    pub settings: RenderSettings,
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneLoadError> {
    let result = load_scene_with_settings(path)?;
    Ok(result.scene)
}

pub fn load_scene_with_settings<P: AsRef<Path>>(path: P) -> Result<SceneLoadResult, SceneLoadError> {
    let path = path.as_ref();
    info!("Loading scene from {}.", path.display());
    let xml = fs::read_to_string(path)?;
    let result = parse_scene(&xml)?;
    info!("Scene loaded: {} objects, {} emitters, {}x{} at {} spp.",
          result.scene.len(), result.scene.emitters().len(),
          result.settings.width, result.settings.height, result.sample_count);
    Ok(result)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BlockKind {
    Integrator,
    Sensor,
    Background,
    Texture,
    Bsdf,
    Shape,
    Emitter,
}

impl BlockKind {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"integrator" => Some(BlockKind::Integrator),
            b"sensor" => Some(BlockKind::Sensor),
            b"background" => Some(BlockKind::Background),
            b"texture" => Some(BlockKind::Texture),
            b"bsdf" => Some(BlockKind::Bsdf),
            b"shape" => Some(BlockKind::Shape),
            b"emitter" => Some(BlockKind::Emitter),
            _ => None,
        }
    }
}

/// One top-level element and the named values nested inside it.
struct Block {
    kind: BlockKind,
    type_name: String,
    id: Option<String>,
    params: HashMap<String, String>,
    // name -> referenced id; an unnamed <ref> is stored under "bsdf"
    refs: HashMap<String, String>,
}

impl Block {
    fn raw(&self, name: &str, field: &'static str) -> Result<&str, SceneLoadError> {
        self.params.get(name).map(|s| s.as_str()).ok_or(SceneLoadError::MissingField(field))
    }

    fn float(&self, name: &str, field: &'static str) -> Result<Float, SceneLoadError> {
        parse_float(self.raw(name, field)?)
    }

    fn float_or(&self, name: &str, default: Float) -> Result<Float, SceneLoadError> {
        self.params.get(name).map_or(Ok(default), |v| parse_float(v))
    }

    fn vec3(&self, name: &str, field: &'static str) -> Result<Vector3f, SceneLoadError> {
        parse_vec3(self.raw(name, field)?)
    }

    fn vec3_opt(&self, name: &str) -> Result<Option<Vector3f>, SceneLoadError> {
        self.params.get(name).map(|v| parse_vec3(v)).transpose()
    }

    fn rgb_or(&self, name: &str, default: RGBSpectrum) -> Result<RGBSpectrum, SceneLoadError> {
        self.params.get(name).map_or(Ok(default), |v| parse_vec3(v))
    }
}

#[derive(Default)]
struct SceneBuilder {
    defaults: HashMap<String, String>,
    current: Option<Block>,

    max_depth: Option<u32>,
    sample_count: Option<u32>,
    nee: Option<bool>,
    width: Option<usize>,
    height: Option<usize>,
    camera: Option<PinholeCamera>,
    background: Option<RGBSpectrum>,

    textures: HashMap<String, Arc<dyn Texture>>,
    materials: HashMap<String, Arc<Material>>,
    objects: Vec<SceneObject>,
    emitters: Vec<Light>,
}

impl SceneBuilder {
    fn attribute(&self, e: &BytesStart, key: &[u8]) -> Option<String> {
        e.attributes()
            .flatten()
            .find(|attr| attr.key.as_ref() == key)
            .map(|attr| resolve_value(&attr.unescape_value().unwrap_or_default(), &self.defaults))
    }

    fn start(&mut self, e: &BytesStart) -> Result<(), SceneLoadError> {
        let tag = e.name();
        let tag = tag.as_ref();

        if tag == b"default" {
            if let (Some(k), Some(v)) = (self.attribute(e, b"name"), self.attribute(e, b"value")) {
                self.defaults.insert(k, v);
            }
            return Ok(());
        }

        if let Some(kind) = BlockKind::from_tag(tag) {
            if let Some(open) = &self.current {
                return Err(SceneLoadError::Parse(format!("<{}> nested inside {:?}",
                                                         String::from_utf8_lossy(tag), open.kind)));
            }
            self.current = Some(Block {
                kind,
                type_name: self.attribute(e, b"type").unwrap_or_default(),
                id: self.attribute(e, b"id"),
                params: HashMap::new(),
                refs: HashMap::new(),
            });
            return Ok(());
        }

        match tag {
            b"float" | b"integer" | b"boolean" | b"rgb" | b"point" | b"vector" | b"string" => {
                let name = self.attribute(e, b"name");
                let value = self.attribute(e, b"value");
                if let (Some(block), Some(name), Some(value)) = (self.current.as_mut(), name, value) {
                    block.params.insert(name, value);
                }
            }
            b"ref" => {
                let name = self.attribute(e, b"name").unwrap_or_else(|| String::from("bsdf"));
                let id = self.attribute(e, b"id").ok_or(SceneLoadError::MissingField("ref.id"))?;
                if let Some(block) = self.current.as_mut() {
                    block.refs.insert(name, id);
                }
            }
            // <film> and <scene> only group their children
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self, tag: &[u8]) -> Result<(), SceneLoadError> {
        if BlockKind::from_tag(tag).is_none() {
            return Ok(());
        }
        let block = match self.current.take() {
            Some(block) => block,
            None => return Ok(()),
        };

        match block.kind {
            BlockKind::Integrator => self.finish_integrator(&block),
            BlockKind::Sensor => self.finish_sensor(&block),
            BlockKind::Background => {
                self.background = Some(block.rgb_or("color", black())?);
                Ok(())
            }
            BlockKind::Texture => self.finish_texture(&block),
            BlockKind::Bsdf => self.finish_bsdf(&block),
            BlockKind::Shape => self.finish_shape(&block),
            BlockKind::Emitter => self.finish_emitter(&block),
        }
    }

    fn finish_integrator(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        if block.type_name != "path" {
            return Err(SceneLoadError::Parse(format!("unsupported integrator: {}", block.type_name)));
        }
        if let Some(v) = block.params.get("max_depth") {
            self.max_depth = Some(parse_u32(v)?);
        }
        if let Some(v) = block.params.get("sample_count") {
            self.sample_count = Some(parse_u32(v)?);
        }
        if let Some(v) = block.params.get("nee") {
            self.nee = Some(parse_bool(v)?);
        }
        Ok(())
    }

    fn finish_sensor(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        if block.type_name != "pinhole" {
            return Err(SceneLoadError::Parse(format!("unsupported sensor: {}", block.type_name)));
        }
        let position = block.vec3("position", "sensor.position")?;
        let forward = block.vec3("forward", "sensor.forward")?;
        let up = block.vec3_opt("up")?;
        let focal_length = block.float("focal_length", "sensor.focal_length")?;
        let sensor_size = block.params.get("sensor_size").map(|v| parse_float(v)).transpose()?;

        self.width = Some(parse_usize(block.raw("width", "film.width")?)?);
        self.height = Some(parse_usize(block.raw("height", "film.height")?)?);
        self.camera = Some(PinholeCamera::new(position, forward, up, focal_length, sensor_size));
        Ok(())
    }

    fn finish_texture(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        let id = block.id.clone().ok_or(SceneLoadError::MissingField("texture.id"))?;
        let texture: Arc<dyn Texture> = match block.type_name.as_str() {
            "uniform" | "constant" => Arc::new(UniformColorTexture::new(block.rgb_or("color", white())?)),
            "checker" => Arc::new(CheckerTexture::new(
                block.rgb_or("color1", white())?,
                block.rgb_or("color2", black())?,
                block.float_or("scale", 1.0)?,
            )),
            other => return Err(SceneLoadError::Parse(format!("unsupported texture: {}", other))),
        };
        self.textures.insert(id, texture);
        Ok(())
    }

    // A color parameter may be an inline rgb or a <ref name=...> to a texture.
    fn texture_param(&self, block: &Block, name: &str,
                     default: RGBSpectrum) -> Result<Arc<dyn Texture>, SceneLoadError> {
        if let Some(id) = block.refs.get(name) {
            return self.textures
                .get(id)
                .cloned()
                .ok_or_else(|| SceneLoadError::Parse(format!("missing texture ref: {}", id)));
        }
        Ok(Arc::new(UniformColorTexture::new(block.rgb_or(name, default)?)))
    }

    fn finish_bsdf(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        let id = block.id.clone().ok_or(SceneLoadError::MissingField("bsdf.id"))?;
        let grey = RGBSpectrum::new(0.5, 0.5, 0.5);
        let material: Material = match block.type_name.as_str() {
            "diffuse" => LambertianDiffuseBSDF::new(self.texture_param(block, "reflectance", grey)?).into(),
            "mirror" => MirrorBSDF::new(self.texture_param(block, "reflectance", white())?).into(),
            "microfacet" => MicrofacetSpecularBSDF::new(
                self.texture_param(block, "f0", white())?,
                block.float("roughness", "bsdf.roughness")?,
            ).into(),
            "diffuse_specular" => DiffuseSpecularBSDF::new(
                self.texture_param(block, "base_color", grey)?,
                block.float("roughness", "bsdf.roughness")?,
            ).into(),
            "dielectric" => DielectricBSDF::new(
                block.float("int_ior", "bsdf.int_ior")?,
                block.float_or("ext_ior", 1.0)?,
                self.texture_param(block, "reflectance", white())?,
                self.texture_param(block, "transmittance", white())?,
            ).into(),
            "emitter" => EmissiveBSDF::new(
                block.rgb_or("color", white())?,
                block.float("emittance", "bsdf.emittance")?,
            ).into(),
            other => return Err(SceneLoadError::Parse(format!("unsupported bsdf: {}", other))),
        };
        self.materials.insert(id, Arc::new(material));
        Ok(())
    }

    fn finish_shape(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        let shape: Primitive = match block.type_name.as_str() {
            "sphere" => Sphere::new(
                block.vec3("center", "sphere.center")?,
                block.float("radius", "sphere.radius")?,
            ).into(),
            "quad" => Quad::new(
                block.vec3("origin", "quad.origin")?,
                block.vec3("u", "quad.u")?,
                block.vec3("v", "quad.v")?,
            ).into(),
            other => return Err(SceneLoadError::Parse(format!("unsupported shape: {}", other))),
        };

        let bsdf_id = block.refs.get("bsdf").ok_or(SceneLoadError::MissingField("shape.bsdf_ref"))?;
        let material = self.materials
            .get(bsdf_id)
            .ok_or_else(|| SceneLoadError::Parse(format!("missing bsdf ref: {}", bsdf_id)))?
            .clone();

        let mut object = SceneObject::new(shape, material);
        if let Some(id) = block.id.clone() {
            object = object.with_name(id);
        }
        self.objects.push(object);
        Ok(())
    }

    fn finish_emitter(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        let light: Light = match block.type_name.as_str() {
            "point" => PointLight::new(
                block.vec3("center", "emitter.center")?,
                block.float("radius", "emitter.radius")?,
                block.float("power", "emitter.power")?,
                block.rgb_or("color", white())?,
            ).into(),
            "area" => AreaLight::new(
                block.vec3("origin", "emitter.origin")?,
                block.vec3("u", "emitter.u")?,
                block.vec3("v", "emitter.v")?,
                block.float("radiance", "emitter.radiance")?,
                block.rgb_or("color", white())?,
            ).into(),
            other => return Err(SceneLoadError::Parse(format!("unsupported emitter: {}", other))),
        };
        self.emitters.push(light);
        Ok(())
    }

    fn build(self) -> Result<SceneLoadResult, SceneLoadError> {
        let camera = self.camera.ok_or(SceneLoadError::MissingField("sensor"))?;
        let width = self.width.ok_or(SceneLoadError::MissingField("film.width"))?;
        let height = self.height.ok_or(SceneLoadError::MissingField("film.height"))?;
        if width == 0 || height == 0 {
            return Err(SceneLoadError::Parse(format!("empty film: {}x{}", width, height)));
        }

        let mut scene = Scene::new(Box::new(camera), self.background.unwrap_or_else(black));
        for object in self.objects {
            scene.add_object(object);
        }
        for emitter in self.emitters {
            scene.add_emitter(emitter);
        }

        Ok(SceneLoadResult {
            scene,
            integrator: PathIntegrator::new(self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH), self.nee.unwrap_or(true)),
            sample_count: self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT),
            settings: RenderSettings { width, height, ..RenderSettings::default() },
        })
    }
}

pub fn parse_scene(xml: &str) -> Result<SceneLoadResult, SceneLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut builder = SceneBuilder::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => builder.start(&e)?,
            Ok(Event::Empty(e)) => {
                builder.start(&e)?;
                builder.end(e.name().as_ref())?;
            }
            Ok(Event::End(e)) => builder.end(e.name().as_ref())?,
            Err(e) => {
                return Err(SceneLoadError::Parse(e.to_string()));
            }
            _ => {}
        }

        buf.clear();
    }

    builder.build()
}

/// Replaces each whole `$identifier` token that names a default. Unknown
/// names are left untouched.
fn resolve_value(raw: &str, defaults: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('$') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let len = tail.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_')).unwrap_or(tail.len());
        match defaults.get(&tail[..len]) {
            Some(value) if len > 0 => out.push_str(value),
            _ => out.push_str(&rest[start..start + 1 + len]),
        }
        rest = &tail[len..];
    }
    out.push_str(rest);
    out
}

fn parse_float(value: &str) -> Result<Float, SceneLoadError> {
    value.trim().parse::<Float>().map_err(|_| SceneLoadError::Parse(format!("invalid float: {}", value)))
}

fn parse_u32(value: &str) -> Result<u32, SceneLoadError> {
    value.trim().parse::<u32>().map_err(|_| SceneLoadError::Parse(format!("invalid integer: {}", value)))
}

fn parse_usize(value: &str) -> Result<usize, SceneLoadError> {
    value.trim().parse::<usize>().map_err(|_| SceneLoadError::Parse(format!("invalid integer: {}", value)))
}

fn parse_bool(value: &str) -> Result<bool, SceneLoadError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SceneLoadError::Parse(format!("invalid boolean: {}", value))),
    }
}

fn parse_vec3(value: &str) -> Result<Vector3f, SceneLoadError> {
    let mut parts = value.split(',').map(|s| s.trim()).filter(|s| !s.is_empty());
    let x = parts.next().ok_or_else(|| SceneLoadError::Parse(format!("invalid vec3: {}", value)))?;
    let y = parts.next().ok_or_else(|| SceneLoadError::Parse(format!("invalid vec3: {}", value)))?;
    let z = parts.next().ok_or_else(|| SceneLoadError::Parse(format!("invalid vec3: {}", value)))?;
    Ok(Vector3f::new(parse_float(x)?, parse_float(y)?, parse_float(z)?))
}
