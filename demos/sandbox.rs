use glam::Vec2;
use tumble::*;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn frand(seed: &mut u32) -> f32 {
    lcg(seed) as f32 / u32::MAX as f32
}

fn main() {
    let mut world = SimWorld::new(WorldConfig {
        bounds: Bounds { width: 800.0, height: 600.0 },
        gravity: 0.9,
        enable_timing: true,
    });

    world
        .spawn_obstacle(Vec2::new(400.0, 450.0), 240.0, 30.0, 12.0, Color::rgb(60, 60, 60))
        .expect("obstacle params are valid");
    world
        .spawn_obstacle(Vec2::new(150.0, 250.0), 120.0, 24.0, -20.0, Color::rgb(60, 60, 60))
        .expect("obstacle params are valid");

    let mut seed = 7u32;
    for _ in 0..50 {
        let x = frand(&mut seed) * 800.0;
        let y = frand(&mut seed) * 600.0;
        let radius = frand(&mut seed) * 20.0 + 10.0;
        let mass = radius * 0.1;
        let bounce = frand(&mut seed) * 0.5 + 0.5;
        let color = Color::rgb(
            (frand(&mut seed) * 255.0) as u8,
            (frand(&mut seed) * 255.0) as u8,
            (frand(&mut seed) * 255.0) as u8,
        );
        let id = match world.spawn_body(Vec2::new(x, y), radius, mass, bounce, color) {
            Ok(id) => id,
            Err(err) => {
                eprintln!("spawn rejected: {}", err);
                continue;
            }
        };
        // Initial kick, same range as the reference scene.
        let kick = Vec2::new(frand(&mut seed) * 10.0 - 5.0, frand(&mut seed) * 10.0 - 5.0);
        if let Some(body) = world.body_mut(id) {
            body.apply_force(kick);
        }
    }

    for tick in 0..600u32 {
        let stats = world.step();
        if tick % 100 == 0 {
            println!(
                "tick {:3}: {} bodies, {} pairs, {} contacts, {} obstacle hits, {} wall bounces",
                tick,
                stats.bodies,
                stats.pairs_checked,
                stats.body_contacts,
                stats.obstacle_hits,
                stats.boundary_bounces,
            );
            if let Some(t) = world.timing() {
                println!(
                    "          step={:.3}ms (integrate={:.3}ms scan={:.3}ms)",
                    t.step_ms, t.integrate_ms, t.scan_ms
                );
            }
        }
    }

    // Pointer interaction, the way an input collaborator would drive it.
    let cursor = Vec2::new(400.0, 580.0);
    if let Some(id) = world.body_under_point(cursor) {
        println!("body {:?} is under the cursor; removing it", id);
        world.remove_body_at(cursor);
    }
    println!("{} entities remain", world.entities().len());
}
