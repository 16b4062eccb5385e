//! Per-frame cost measurements for the animation pipeline.

use crate::config::SceneConfig;
use crate::ik::{solve_knee, Side};
use crate::pose::generate_pose_for;
use crate::render::mesh::{tessellate, Viewport};
use crate::render::{draw_scene, DrawList};
use std::hint::black_box;

#[derive(Debug, serde::Serialize)]
pub struct BenchmarkResults {
    pub iterations: u32,
    pub solve_knee_ms: f64,
    pub generate_pose_ms: f64,
    pub draw_scene_ms: f64,
    pub tessellate_ms: f64,
    pub vertices_per_frame: usize,
}

/// Milliseconds from an arbitrary origin
fn now_ms() -> f64 {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or(0.0)
        } else {
            use std::sync::OnceLock;
            use std::time::Instant;
            static ORIGIN: OnceLock<Instant> = OnceLock::new();
            ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
        }
    }
}

fn time_ms(iterations: u32, mut f: impl FnMut(u32)) -> f64 {
    let start = now_ms();
    for i in 0..iterations {
        f(i);
    }
    now_ms() - start
}

/// Time each stage of a frame over `iterations` frames
pub fn measure(iterations: u32) -> BenchmarkResults {
    let scene = SceneConfig::default();
    let step = scene.timing().step();
    let viewport = Viewport::new(scene.width, scene.height);

    // Warm-up
    for i in 0..1_000 {
        black_box(generate_pose_for(i as f64 * step, &scene));
    }

    let hips: Vec<_> = (0..iterations)
        .map(|i| generate_pose_for(i as f64 * step, &scene).hip)
        .collect();
    let solve_knee_ms = time_ms(iterations, |i| {
        black_box(solve_knee(
            black_box(hips[i as usize]),
            scene.left_foot,
            scene.limb.upper,
            scene.limb.lower,
            Side::Left,
        ));
    });

    let generate_pose_ms = time_ms(iterations, |i| {
        black_box(generate_pose_for(black_box(i as f64 * step), &scene));
    });

    let mut list = DrawList::new();
    let draw_scene_ms = time_ms(iterations, |i| {
        let t = i as f64 * step;
        let pose = generate_pose_for(t, &scene);
        draw_scene(&mut list, &pose, &scene.lights, t, &scene.style);
        black_box(list.commands());
    });

    let commands = list.take();
    let mut vertices_per_frame = 0;
    let tessellate_ms = time_ms(iterations, |_| {
        let mesh = tessellate(black_box(&commands), &viewport);
        vertices_per_frame = mesh.vertices.len();
        black_box(mesh);
    });

    BenchmarkResults {
        iterations,
        solve_knee_ms,
        generate_pose_ms,
        draw_scene_ms,
        tessellate_ms,
        vertices_per_frame,
    }
}

/// Run the frame benchmarks and return the results as a JS object
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn run_benchmarks(iterations: u32) -> Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue> {
    let results = measure(iterations);
    log::info!("{:?}", results);
    serde_wasm_bindgen::to_value(&results).map_err(|e| e.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::Segment;
    use crate::render::mesh::CIRCLE_SEGMENTS;

    #[test]
    fn test_measure_reports_frame_geometry() {
        let results = measure(10);
        assert_eq!(results.iterations, 10);
        // Five light discs plus the head, seven lines
        let expected = 6 * CIRCLE_SEGMENTS * 3 + Segment::COUNT * 6;
        assert_eq!(results.vertices_per_frame, expected);
        assert!(results.generate_pose_ms >= 0.0);
        assert!(results.solve_knee_ms >= 0.0);
    }
}
