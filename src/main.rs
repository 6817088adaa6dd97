// Copyright 2020 TwoCookingMice

use pathlight::core::scene_loader::load_scene_with_settings;
use pathlight::io::{exr_utils, png_utils};
use pathlight::math::bitmap::Bitmap;
use pathlight::renderers::simple::{RenderSettings, Renderer, SimpleRenderer};

use log::{error, info};
use std::env;
use std::process;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <scene.xml> <output.{{exr,png}}> [--spp N] [--max-depth N] [--seed N] [--progressive N] [--no-nee]",
              program);
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage(&args[0]);
    }

    let input_path = &args[1];
    let output_path = &args[2];
    let mut spp_override: Option<u32> = None;
    let mut max_depth_override: Option<u32> = None;
    let mut seed: u64 = 0;
    let mut progressive_step: Option<u32> = None;
    let mut disable_nee = false;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--spp" => {
                i += 1;
                spp_override = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--max-depth" => {
                i += 1;
                max_depth_override = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--progressive" => {
                i += 1;
                progressive_step = args.get(i).and_then(|v| v.parse::<u32>().ok()).filter(|n| *n > 0);
            }
            "--no-nee" => disable_nee = true,
            other => {
                eprintln!("Unknown option: {}", other);
                usage(&args[0]);
            }
        }
        i += 1;
    }

    let load_result = match load_scene_with_settings(input_path) {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let scene = load_result.scene;
    let spp = spp_override.unwrap_or(load_result.sample_count);
    let mut integrator = load_result.integrator;
    if let Some(depth) = max_depth_override {
        integrator.max_depth = depth;
    }
    if disable_nee {
        integrator.nee = false;
    }

    let settings = RenderSettings {
        seed,
        show_progress: progressive_step.is_none(),
        ..load_result.settings
    };
    let renderer = SimpleRenderer::new(settings);

    let image = match progressive_step {
        None => renderer.render_full(&scene, &integrator, spp),
        Some(step) => {
            let mut accumulated = Bitmap::new(settings.width, settings.height);
            let mut done = 0;
            while done < spp {
                let batch = step.min(spp - done);
                renderer.render_progressive_step(&mut accumulated, &scene, &integrator, batch, done);
                done += batch;
                info!("{}/{} samples per pixel", done, spp);
            }
            accumulated
        }
    };

    let written = if output_path.to_lowercase().ends_with(".png") {
        png_utils::write_png_to_file(&image, output_path).map_err(|e| e.to_string())
    } else {
        exr_utils::write_exr_to_file(&image, output_path).map_err(|e| e.to_string())
    };
    if let Err(e) = written {
        error!("failed to write {}: {}", output_path, e);
        process::exit(1);
    }
}
