//! Triangle geometry for recorded draw commands
//!
//! Lines become quads, circles become triangle fans. Output vertices are in
//! clip space so the GPU pipeline needs no uniforms.

use super::DrawCommand;
use crate::geometry::{rotate_ccw_on_screen, Point2D, Rgb};
use glam::DVec2;
use static_assertions::const_assert_eq;

/// Number of fan triangles per disc
pub const CIRCLE_SEGMENTS: usize = 48;

/// Vertex format for flat-colored 2D geometry
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    /// Clip-space position
    pub position: [f32; 2],
    /// Linear RGBA
    pub color: [f32; 4],
}

// Matches the vertex buffer layout in gpu.rs
const_assert_eq!(std::mem::size_of::<ColorVertex>(), 24);

/// Canvas size in pixels, for the pixel → clip space mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f64,
            height: height.max(1) as f64,
        }
    }

    /// Pixel coordinates (y down) to clip space (y up)
    pub fn to_clip(&self, p: Point2D) -> [f32; 2] {
        [
            (p.x / self.width * 2.0 - 1.0) as f32,
            (1.0 - p.y / self.height * 2.0) as f32,
        ]
    }
}

/// Tessellated frame: the clear color plus triangle-list vertices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMesh {
    pub clear: Option<Rgb>,
    pub vertices: Vec<ColorVertex>,
}

struct MeshBuilder<'a> {
    viewport: &'a Viewport,
    vertices: Vec<ColorVertex>,
}

impl MeshBuilder<'_> {
    fn push(&mut self, p: Point2D, color: [f32; 4]) {
        self.vertices.push(ColorVertex {
            position: self.viewport.to_clip(p),
            color,
        });
    }

    fn add_line(&mut self, from: Point2D, to: Point2D, width: f64, color: Rgb) {
        let dir = (to - from).normalize_or_zero();
        if dir == DVec2::ZERO {
            return;
        }
        let half = dir.perp() * (width * 0.5);
        let color = color.to_rgba_f32();

        let (a, b, c, d) = (from + half, from - half, to + half, to - half);

        // Triangle 1
        self.push(a, color);
        self.push(b, color);
        self.push(c, color);

        // Triangle 2
        self.push(c, color);
        self.push(b, color);
        self.push(d, color);
    }

    fn add_disc(&mut self, center: Point2D, radius: f64, angle_deg: f64, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        let color = color.to_rgba_f32();
        let rim = |i: usize| {
            let a = (i as f64 / CIRCLE_SEGMENTS as f64) * std::f64::consts::TAU;
            let offset = DVec2::from_angle(a) * radius;
            center + rotate_ccw_on_screen(offset, angle_deg)
        };

        for i in 0..CIRCLE_SEGMENTS {
            self.push(center, color);
            self.push(rim(i), color);
            self.push(rim(i + 1), color);
        }
    }
}

/// Convert recorded commands into one triangle list
pub fn tessellate(commands: &[DrawCommand], viewport: &Viewport) -> FrameMesh {
    let mut clear = None;
    let mut builder = MeshBuilder {
        viewport,
        vertices: Vec::new(),
    };

    for command in commands {
        match *command {
            DrawCommand::Clear(color) => {
                // A clear wipes whatever came before it
                clear = Some(color);
                builder.vertices.clear();
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => builder.add_line(from, to, width, color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => builder.add_disc(center, radius, 0.0, color),
            DrawCommand::RotatedDisc {
                center,
                radius,
                angle_deg,
                color,
            } => builder.add_disc(center, radius, angle_deg, color),
        }
    }

    FrameMesh {
        clear,
        vertices: builder.vertices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800, 600)
    }

    #[test]
    fn test_clip_space_corners() {
        let vp = viewport();
        assert_eq!(vp.to_clip(DVec2::new(0.0, 0.0)), [-1.0, 1.0]);
        assert_eq!(vp.to_clip(DVec2::new(800.0, 600.0)), [1.0, -1.0]);
        assert_eq!(vp.to_clip(DVec2::new(400.0, 300.0)), [0.0, 0.0]);
    }

    #[test]
    fn test_line_is_one_quad() {
        let commands = [DrawCommand::Line {
            from: DVec2::new(100.0, 100.0),
            to: DVec2::new(200.0, 100.0),
            color: Rgb::WHITE,
            width: 10.0,
        }];
        let mesh = tessellate(&commands, &viewport());
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.clear, None);

        // Horizontal line of width 10 spans y = 95..105 in pixels
        let vp = viewport();
        let top = vp.to_clip(DVec2::new(0.0, 95.0))[1];
        let bottom = vp.to_clip(DVec2::new(0.0, 105.0))[1];
        for v in &mesh.vertices {
            let y = v.position[1];
            assert!(
                (y - top).abs() < 1e-6 || (y - bottom).abs() < 1e-6,
                "unexpected y {}",
                y
            );
            assert_eq!(v.color, [1.0, 1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn test_zero_length_line_is_skipped() {
        let p = DVec2::new(10.0, 10.0);
        let commands = [DrawCommand::Line {
            from: p,
            to: p,
            color: Rgb::WHITE,
            width: 5.0,
        }];
        assert!(tessellate(&commands, &viewport()).vertices.is_empty());
    }

    #[test]
    fn test_disc_is_a_fan() {
        let center = DVec2::new(400.0, 300.0);
        let commands = [DrawCommand::Circle {
            center,
            radius: 50.0,
            color: Rgb::new(255, 0, 0),
        }];
        let mesh = tessellate(&commands, &viewport());
        assert_eq!(mesh.vertices.len(), CIRCLE_SEGMENTS * 3);

        // Every rim vertex lies 50px from the center
        let rim_x = 50.0 / 800.0 * 2.0;
        let rim_y = 50.0 / 600.0 * 2.0;
        for tri in mesh.vertices.chunks(3) {
            assert_eq!(tri[0].position, [0.0, 0.0]);
            for v in &tri[1..] {
                let [x, y] = v.position;
                let r = ((x / rim_x).powi(2) + (y / rim_y).powi(2)).sqrt();
                assert!((r - 1.0).abs() < 1e-4, "rim radius {}", r);
            }
        }
    }

    #[test]
    fn test_rotated_disc_starts_at_tilt() {
        let center = DVec2::new(400.0, 300.0);
        let commands = [DrawCommand::RotatedDisc {
            center,
            radius: 30.0,
            angle_deg: 90.0,
            color: Rgb::WHITE,
        }];
        let mesh = tessellate(&commands, &viewport());
        // First rim point rotated a quarter turn counter-clockwise: straight up
        let expected = viewport().to_clip(DVec2::new(400.0, 270.0));
        let first_rim = mesh.vertices[1].position;
        assert!((first_rim[0] - expected[0]).abs() < 1e-6);
        assert!((first_rim[1] - expected[1]).abs() < 1e-6);
    }

    #[test]
    fn test_clear_resets_geometry() {
        let commands = [
            DrawCommand::Circle {
                center: DVec2::ZERO,
                radius: 5.0,
                color: Rgb::WHITE,
            },
            DrawCommand::Clear(Rgb::BLACK),
        ];
        let mesh = tessellate(&commands, &viewport());
        assert_eq!(mesh.clear, Some(Rgb::BLACK));
        assert!(mesh.vertices.is_empty());
    }
}
