use clap::Parser;
use log::{error, info};
use minifb::{Key, Window, WindowOptions};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use roomtracer::config::load_scene;
use roomtracer::output::{pack_rgb, save_png};
use roomtracer::{Color, RenderOptions, Scene, render_frame};

fn init_scene(args: &Args) -> roomtracer::Result<Scene> {
    let mut scene = match &args.scene {
        Some(path) => {
            info!("Loading scene from {}", path.display());
            load_scene(path, args.width, args.height)?
        }
        None => Scene::showcase(args.width, args.height)?,
    };
    if let Some(eye_distance) = args.eye_distance {
        scene = scene.with_eye_distance(eye_distance)?;
    }
    if let Some(bounces) = args.bounces {
        scene = scene.with_max_bounces(bounces);
    }
    info!(
        "Scene: {} spheres, {} lights, {} bounces",
        scene.spheres.len(),
        scene.lights.len(),
        scene.max_bounces
    );
    Ok(scene)
}

fn show(buffer: &[Color], width: usize, height: usize) -> Result<(), minifb::Error> {
    let pixels: Vec<u32> = buffer.iter().map(|&c| pack_rgb(c)).collect();
    let mut window = Window::new(
        "Roomtracer",
        width,
        height,
        WindowOptions {
            resize: false,
            scale: minifb::Scale::FitScreen,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(60);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&pixels, width, height)?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let scene = init_scene(args)?;
    let (width, height) = (args.width, args.height);
    let options = RenderOptions {
        stride: args.stride,
    };

    let mut buffer = vec![Color::ZERO; width as usize * height as usize];
    render_frame(&scene, width, height, &options, &mut buffer)?;

    match &args.output {
        Some(path) => save_png(path, width, height, &buffer)?,
        None => show(&buffer, width as usize, height as usize)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
