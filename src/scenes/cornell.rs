use crate::cameras::PerspectiveCamera;
use crate::core::camera::Camera;
use crate::core::light::LightSampler;
use crate::core::material::Material;
use crate::core::options::RenderOptions;
use crate::core::pbrt::*;
use crate::core::scene::Scene;
use crate::core::shape::*;
use crate::lights::LightShape;
use crate::materials::*;
use crate::shapes::boxes::AxisBox;
use crate::shapes::ellipse::Ellipse;
use crate::shapes::ellipse_solid_angle::SolidAngleEllipse;
use crate::shapes::flip_face::FlipFace;
use crate::shapes::rect::{AaRect, RectPlane};
use crate::shapes::rect_solid_angle::SolidAngleRect;
use crate::shapes::sphere::Sphere;
use crate::shapes::transform::{RotateY, Translate};

use log::*;
use std::sync::Arc;

const BOX_SIZE: Float = 555.0;
const LIGHT_HEIGHT: Float = 554.0;

struct Palette {
    red: Arc<dyn Material>,
    white: Arc<dyn Material>,
    green: Arc<dyn Material>,
    light: Arc<dyn Material>,
    glass: Arc<dyn Material>,
}

impl Palette {
    fn new() -> Self {
        Palette {
            red: Arc::new(Lambertian::new(&Spectrum::new(0.65, 0.05, 0.05))),
            white: Arc::new(Lambertian::new(&Spectrum::new(0.73, 0.73, 0.73))),
            green: Arc::new(Lambertian::new(&Spectrum::new(0.12, 0.45, 0.15))),
            light: Arc::new(DiffuseLight::new(&Spectrum::new(15.0, 15.0, 15.0))),
            glass: Arc::new(Dielectric::new(1.5)),
        }
    }
}

fn flipped(s: AaRect) -> Arc<dyn Shape> {
    let s: Arc<dyn Shape> = Arc::new(s);
    return Arc::new(FlipFace::new(&s));
}

/// The five walls, optionally without the ceiling.
fn walls(m: &Palette, ceiling: bool) -> Vec<Arc<dyn Shape>> {
    let mut list: Vec<Arc<dyn Shape>> = vec![
        flipped(AaRect::yz(0.0, BOX_SIZE, 0.0, BOX_SIZE, BOX_SIZE, &m.green)),
        Arc::new(AaRect::yz(0.0, BOX_SIZE, 0.0, BOX_SIZE, 0.0, &m.red)),
        Arc::new(AaRect::xz(0.0, BOX_SIZE, 0.0, BOX_SIZE, 0.0, &m.white)),
        flipped(AaRect::xy(0.0, BOX_SIZE, 0.0, BOX_SIZE, BOX_SIZE, &m.white)),
    ];
    if ceiling {
        list.push(flipped(AaRect::xz(
            0.0, BOX_SIZE, 0.0, BOX_SIZE, BOX_SIZE, &m.white,
        )));
    }
    return list;
}

fn glass_sphere_center() -> Point3f {
    Point3f::new(190.0, 90.0, 190.0)
}

/// Glass sphere and rotated tall block of the classic layout.
fn contents(m: &Palette) -> Vec<Arc<dyn Shape>> {
    let block: Arc<dyn Shape> = Arc::new(AxisBox::new(
        &Point3f::zero(),
        &Point3f::new(165.0, 330.0, 165.0),
        &m.white,
    ));
    let block: Arc<dyn Shape> = Arc::new(RotateY::new(&block, 15.0));
    let block: Arc<dyn Shape> = Arc::new(Translate::new(&block, &Vector3f::new(265.0, 0.0, 295.0)));
    let sphere: Arc<dyn Shape> = Arc::new(Sphere::new(
        &glass_sphere_center(),
        90.0,
        Some(m.glass.clone()),
    ));
    return vec![sphere, block];
}

/// Light sampled together with the glass sphere, so that caustic paths
/// through it are found by next-event estimation.
fn light_with_glass(light: LightShape, center: &Point3f, radius: Float) -> LightShape {
    let glass = Sphere::new(center, radius, None);
    return LightShape::List(vec![light, LightShape::from(glass)]);
}

fn camera(opts: &RenderOptions) -> Arc<dyn Camera> {
    let aspect = opts.width as Float / opts.height as Float;
    return Arc::new(PerspectiveCamera::new(
        &Point3f::new(278.0, 278.0, -800.0),
        &Point3f::new(278.0, 278.0, 0.0),
        &Vector3f::new(0.0, 1.0, 0.0),
        40.0,
        aspect,
        0.0,
        10.0,
        0.0,
        1.0,
    ));
}

fn assemble(
    name: &str,
    shapes: Vec<Arc<dyn Shape>>,
    light_shape: LightShape,
    opts: &RenderOptions,
) -> Scene {
    debug!(
        "Scene \"{}\": {} shapes, light sampled as {}",
        name,
        shapes.len(),
        light_shape.name()
    );
    let world: Arc<dyn Shape> = Arc::new(ShapeList::new(&shapes));
    let light_shape: Arc<dyn LightSampler> = Arc::new(light_shape);
    return Scene::new(&world, &light_shape, &camera(opts));
}

fn small_rect(material: Option<Arc<dyn Material>>) -> AaRect {
    return AaRect::new(
        RectPlane::XZ,
        213.0,
        343.0,
        227.0,
        332.0,
        LIGHT_HEIGHT,
        material,
    )
    .flip_normal();
}

/// Rectangular light sampled uniformly by area.
pub fn cornell_box(opts: &RenderOptions) -> Scene {
    let m = Palette::new();
    let mut shapes = walls(&m, true);
    shapes.push(Arc::new(small_rect(Some(m.light.clone()))));
    shapes.extend(contents(&m));
    let light = LightShape::from(small_rect(None));
    let light = light_with_glass(light, &glass_sphere_center(), 90.0);
    return assemble("cornell", shapes, light, opts);
}

/// Rectangular light sampled uniformly by solid angle.
pub fn cornell_box_sa(opts: &RenderOptions) -> Scene {
    let m = Palette::new();
    let mut shapes = walls(&m, true);
    shapes.push(Arc::new(SolidAngleRect::new(small_rect(Some(m.light.clone())))));
    shapes.extend(contents(&m));
    let light = LightShape::from(SolidAngleRect::new(small_rect(None)));
    let light = light_with_glass(light, &glass_sphere_center(), 90.0);
    return assemble("cornell-rect-sa", shapes, light, opts);
}

/// Large rectangular light covering most of the top of an open box.
pub fn cornell_box_large(opts: &RenderOptions) -> Scene {
    let m = Palette::new();
    let large = |material: Option<Arc<dyn Material>>| {
        AaRect::new(
            RectPlane::XZ,
            100.0,
            455.0,
            100.0,
            455.0,
            LIGHT_HEIGHT,
            material,
        )
        .flip_normal()
    };
    let mut shapes = walls(&m, false);
    shapes.push(Arc::new(large(Some(m.light.clone()))));
    shapes.extend(contents(&m));
    let light = light_with_glass(LightShape::from(large(None)), &glass_sphere_center(), 90.0);
    return assemble("cornell-large", shapes, light, opts);
}

/// One sphere per material type next to the rectangular light.
pub fn cornell_box_materials(opts: &RenderOptions) -> Scene {
    let m = Palette::new();
    let metal: Arc<dyn Material> = Arc::new(Metal::new(&Spectrum::new(0.8, 0.8, 0.8), 0.7));
    let glass_center = Point3f::new(445.0, 70.0, 190.0);
    let mut shapes = walls(&m, true);
    shapes.push(Arc::new(small_rect(Some(m.light.clone()))));
    shapes.push(Arc::new(Sphere::new(&glass_center, 70.0, Some(m.glass.clone()))));
    shapes.push(Arc::new(Sphere::new(&Point3f::new(165.0, 70.0, 165.0), 70.0, Some(metal))));
    shapes.push(Arc::new(Sphere::new(
        &Point3f::new(305.0, 70.0, 165.0),
        70.0,
        Some(m.green.clone()),
    )));
    let light = light_with_glass(LightShape::from(small_rect(None)), &glass_center, 70.0);
    return assemble("cornell-materials", shapes, light, opts);
}

fn ellipse_center() -> Point3f {
    Point3f::new(278.0, LIGHT_HEIGHT, 280.0)
}

fn ellipse_axes() -> (Vector3f, Vector3f) {
    (Vector3f::new(70.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 70.0))
}

/// Elliptical light sampled uniformly by area.
pub fn cornell_box_ellipse(opts: &RenderOptions) -> Scene {
    let m = Palette::new();
    let (a1, a2) = ellipse_axes();
    let mut shapes = walls(&m, true);
    shapes.push(Arc::new(Ellipse::new(&ellipse_center(), &a1, &a2, Some(m.light.clone()))));
    shapes.extend(contents(&m));
    let light = LightShape::from(Ellipse::new(&ellipse_center(), &a1, &a2, None));
    let light = light_with_glass(light, &glass_sphere_center(), 90.0);
    return assemble("cornell-ellipse", shapes, light, opts);
}

/// Elliptical light sampled uniformly by solid angle.
pub fn cornell_box_ellipse_sa(opts: &RenderOptions) -> Result<Scene, RenderError> {
    let m = Palette::new();
    let (a1, a2) = ellipse_axes();
    let numeric = &opts.numeric;
    let mut shapes = walls(&m, true);
    shapes.push(Arc::new(SolidAngleEllipse::new(
        &ellipse_center(),
        &a1,
        &a2,
        numeric,
        Some(m.light.clone()),
    )?));
    shapes.extend(contents(&m));
    let light = LightShape::from(SolidAngleEllipse::new(&ellipse_center(), &a1, &a2, numeric, None)?);
    let light = light_with_glass(light, &glass_sphere_center(), 90.0);
    return Ok(assemble("cornell-ellipse-sa", shapes, light, opts));
}
