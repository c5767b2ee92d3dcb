//! Command-line renderer for a built-in demo scene.
//!
//! Usage: solace [--settings <file.json>] [--output <file.png>] [--print-settings]

use anyhow::{bail, Context, Result};
use solace_math::Vec3;
use solace_shading::{
    render, Brdf, Color, Light, PinholeCamera, RenderSettings, Scene, Shader, Sphere, Triangle,
    World,
};
use std::env;
use std::path::PathBuf;

struct Args {
    settings: Option<PathBuf>,
    output: PathBuf,
    print_settings: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        settings: None,
        output: PathBuf::from("solace.png"),
        print_settings: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" | "-s" => {
                let path = iter.next().context("--settings expects a path")?;
                args.settings = Some(PathBuf::from(path));
            }
            "--output" | "-o" => {
                let path = iter.next().context("--output expects a path")?;
                args.output = PathBuf::from(path);
            }
            "--print-settings" => args.print_settings = true,
            other => bail!("unknown argument '{other}'"),
        }
    }
    Ok(args)
}

/// Floor, three spheres (diffuse, mirror, glass) and one of each light kind.
fn build_demo_world() -> Result<World> {
    let mut world = World::new();

    let floor = world.add_material(Brdf::diffuse(Color::new(0.6, 0.6, 0.55)))?;
    let clay = world.add_material(Brdf::diffuse(Color::new(0.7, 0.25, 0.2)))?;
    let chrome = world.add_material(
        Brdf::mirror(Color::splat(0.85)).with_diffuse(Color::splat(0.05)),
    )?;
    let glass = world.add_material(Brdf::glass(Color::splat(0.1), Color::splat(0.9), 1.5))?;

    let (a, b, c, d) = (
        Vec3::new(-6.0, 0.0, 2.0),
        Vec3::new(6.0, 0.0, 2.0),
        Vec3::new(6.0, 0.0, -10.0),
        Vec3::new(-6.0, 0.0, -10.0),
    );
    world.add_triangle(Triangle::new(a, b, c), floor)?;
    world.add_triangle(Triangle::new(a, c, d), floor)?;

    world.add_sphere(Sphere::new(Vec3::new(-1.6, 0.8, -4.0), 0.8), clay)?;
    world.add_sphere(Sphere::new(Vec3::new(0.0, 0.8, -5.0), 0.8), chrome)?;
    world.add_sphere(Sphere::new(Vec3::new(1.6, 0.8, -4.0), 0.8), glass)?;

    world.add_light(Light::ambient(Color::splat(0.05)));
    world.add_light(Light::point(Vec3::new(3.0, 5.0, -1.0), Color::splat(0.6)));
    let panel = Triangle::new(
        Vec3::new(-1.0, 4.0, -3.0),
        Vec3::new(1.0, 4.0, -3.0),
        Vec3::new(0.0, 4.0, -5.0),
    );
    world.add_light(Light::area(Color::splat(0.5), panel)?);

    log::info!(
        "Built demo scene: {} primitives, {} materials, {} lights",
        world.primitive_count(),
        world.material_count(),
        world.lights().len()
    );
    Ok(world)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args()?;

    let settings = match &args.settings {
        Some(path) => RenderSettings::from_path(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };

    if args.print_settings {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    log::info!("Starting Solace renderer");

    let world = build_demo_world().context("failed to build demo scene")?;
    let shader = Shader::new(&world, settings.shader);
    let camera = PinholeCamera::new()
        .with_resolution(settings.width, settings.height)
        .with_position(Vec3::new(0.0, 1.6, 1.5), Vec3::new(0.0, 0.8, -4.5), Vec3::Y)
        .with_fov(45.0);

    let image = render(&shader, &camera, &settings);

    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .context("image buffer does not match its dimensions")?;
    rgba.save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!("Saved {}", args.output.display());
    Ok(())
}
