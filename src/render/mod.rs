//! Drawing interface between the animation and the display.
//!
//! The animation only knows the [`Renderer`] trait. [`DrawList`] is the
//! headless implementation: it records calls, which the GPU backend then
//! tessellates (see [`mesh`]) and tests inspect directly.

pub mod mesh;

use crate::config::FigureStyle;
use crate::error::RenderError;
use crate::geometry::{Point2D, Rgb};
use crate::lights::LightSource;
use crate::pose::{Pose, Segment};

/// Drawing capability consumed by the frame driver
pub trait Renderer {
    /// Fill the whole frame with one color
    fn clear(&mut self, color: Rgb);

    fn draw_line(&mut self, from: Point2D, to: Point2D, color: Rgb, width: f64);

    fn draw_circle(&mut self, center: Point2D, radius: f64, color: Rgb);

    /// Filled disc rotated by `angle_deg` counter-clockwise on screen
    fn draw_rotated_disc(&mut self, center: Point2D, radius: f64, angle_deg: f64, color: Rgb);

    /// Show everything drawn since the last clear
    fn present(&mut self) -> Result<(), RenderError>;
}

/// One recorded renderer call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Line {
        from: Point2D,
        to: Point2D,
        color: Rgb,
        width: f64,
    },
    Circle {
        center: Point2D,
        radius: f64,
        color: Rgb,
    },
    RotatedDisc {
        center: Point2D,
        radius: f64,
        angle_deg: f64,
        color: Rgb,
    },
}

/// Renderer that records commands instead of drawing them
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    presented_frames: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand over the recorded commands and start a new list
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `present()` calls so far
    pub fn presented_frames(&self) -> usize {
        self.presented_frames
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Rgb) {
        // Anything before a clear would be overdrawn
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, color: Rgb, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_circle(&mut self, center: Point2D, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_rotated_disc(&mut self, center: Point2D, radius: f64, angle_deg: f64, color: Rgb) {
        self.commands.push(DrawCommand::RotatedDisc {
            center,
            radius,
            angle_deg,
            color,
        });
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.presented_frames += 1;
        Ok(())
    }
}

/// Draw one frame of the scene: background, lights, then the figure.
///
/// Does not present; the caller decides when the frame is complete.
pub fn draw_scene<R: Renderer + ?Sized>(
    renderer: &mut R,
    pose: &Pose,
    lights: &[LightSource],
    t: f64,
    style: &FigureStyle,
) {
    renderer.clear(style.background);

    for light in lights {
        renderer.draw_circle(light.position, style.light_radius, light.color_at(t));
    }

    renderer.draw_rotated_disc(
        pose.head,
        style.head_radius,
        pose.head_tilt_deg,
        style.figure_color,
    );

    for segment in Segment::ALL {
        let (from, to) = pose.segment(segment);
        renderer.draw_line(from, to, style.figure_color, style.line_width);
    }
}
