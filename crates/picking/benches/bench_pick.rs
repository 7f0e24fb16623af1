use std::hint::black_box;
use std::time::Instant;

use octaroom_picking::{PickRay, resolve};
use octaroom_render::FirstPersonCamera;
use octaroom_scene::{SceneConfig, build_scene};

fn bench_resolve_grid(cols: u32, rows: u32, iterations: usize) {
    let registry = build_scene(&SceneConfig::default());
    let camera = FirstPersonCamera::default();
    let (width, height) = (1280.0_f32, 720.0_f32);

    let start = Instant::now();
    let mut hits = 0usize;
    for _ in 0..iterations {
        for cy in 0..rows {
            for cx in 0..cols {
                let px = (cx as f32 + 0.5) * width / cols as f32;
                let py = (cy as f32 + 0.5) * height / rows as f32;
                let ray = PickRay::from_screen(px, py, width, height, black_box(&camera));
                if resolve(black_box(&registry), ray).is_some() {
                    hits += 1;
                }
            }
        }
    }
    let elapsed = start.elapsed();
    let rays = (cols * rows) as usize * iterations;
    println!(
        "  resolve ({cols}x{rows} grid, {iterations} iters): {:?}/ray, total {elapsed:?}, {hits}/{rays} hits",
        elapsed / rays as u32
    );
}

fn main() {
    println!("=== Pick Resolution Benchmarks ===\n");

    println!("Screen-grid resolution over the full registry:");
    bench_resolve_grid(16, 9, 100);
    bench_resolve_grid(64, 36, 10);
    bench_resolve_grid(128, 72, 2);

    println!("\n=== Done ===");
}
