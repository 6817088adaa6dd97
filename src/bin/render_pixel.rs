use pathlight::core::integrator::Integrator;
use pathlight::core::rng::LcgRng;
use pathlight::core::scene_loader::load_scene_with_settings;
use pathlight::math::constants::Float;
use pathlight::math::spectrum::black;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <scene.xml> <x> <y> [--spp N] [--max-depth N] [--seed N] [--no-nee]", args[0]);
        std::process::exit(1);
    }

    let scene_path = &args[1];
    let x: usize = args[2].parse().unwrap_or(0);
    let y: usize = args[3].parse().unwrap_or(0);

    let mut spp: Option<u32> = None;
    let mut max_depth: Option<u32> = None;
    let mut seed: u64 = 0;
    let mut disable_nee = false;

    let mut i = 4;
    while i < args.len() {
        match args[i].as_str() {
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--max-depth" => {
                i += 1;
                max_depth = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(seed);
            }
            "--no-nee" => disable_nee = true,
            _ => {}
        }
        i += 1;
    }

    let load_result = load_scene_with_settings(scene_path)
        .unwrap_or_else(|e| panic!("failed to load scene: {}", e));
    let scene = load_result.scene;
    let (width, height) = (load_result.settings.width, load_result.settings.height);
    if x >= width || y >= height {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}", x, y, width, height);
        std::process::exit(2);
    }

    let mut integrator = load_result.integrator;
    if let Some(depth) = max_depth {
        integrator.max_depth = depth;
    }
    if disable_nee {
        integrator.nee = false;
    }
    let spp = spp.unwrap_or(load_result.sample_count).max(1);

    // same stream the full renderer uses for this pixel's first batch
    let mut rng = LcgRng::for_pixel(seed, 0, x, y);
    let camera = scene.camera();
    let mut accum = black();
    for _ in 0..spp {
        let ray = camera.generate_ray(x, y, width, height, &mut rng);
        accum += integrator.li(&scene, &ray, &mut rng);
    }

    let avg = accum / (spp as Float);
    println!(
        "pixel ({}, {}) spp={} depth={} nee={} -> R {:.6}, G {:.6}, B {:.6}",
        x, y, spp, integrator.max_depth, integrator.nee, avg.x, avg.y, avg.z
    );
}
