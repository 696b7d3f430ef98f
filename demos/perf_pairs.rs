use glam::Vec2;
use tumble::*;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn frand(seed: &mut u32) -> f32 {
    lcg(seed) as f32 / u32::MAX as f32
}

fn build_world(n: usize, seed0: u32) -> SimWorld {
    let mut world = SimWorld::new(WorldConfig {
        bounds: Bounds { width: 2000.0, height: 2000.0 },
        gravity: 0.9,
        enable_timing: true,
    });
    let mut seed = seed0;
    for _ in 0..n {
        let x = frand(&mut seed) * 2000.0;
        let y = frand(&mut seed) * 2000.0;
        let radius = frand(&mut seed) * 8.0 + 2.0;
        world
            .spawn_body(Vec2::new(x, y), radius, radius * 0.1, 0.8, Color::BLACK)
            .expect("generated params are valid");
    }
    world
}

fn main() {
    let n_vals = [50usize, 100, 200, 400, 800, 1600];
    let ticks = 60;
    println!("n,pairs_per_tick,avg_step_ms,avg_integrate_ms,avg_scan_ms,contacts");
    for &n in &n_vals {
        let mut world = build_world(n, 1);
        let mut step_ms = 0.0;
        let mut integrate_ms = 0.0;
        let mut scan_ms = 0.0;
        let mut contacts = 0usize;
        let mut pairs = 0usize;
        for _ in 0..ticks {
            let stats = world.step();
            pairs = stats.pairs_checked;
            contacts += stats.body_contacts;
            let t = world.timing().unwrap_or_default();
            step_ms += t.step_ms;
            integrate_ms += t.integrate_ms;
            scan_ms += t.scan_ms;
        }
        let ticks_f = ticks as f64;
        println!(
            "{},{},{:.3},{:.3},{:.3},{}",
            n,
            pairs,
            step_ms / ticks_f,
            integrate_ms / ticks_f,
            scan_ms / ticks_f,
            contacts
        );
    }
}
