//! Path primitives for vector graphics.
//!
//! A path is the drawing-instruction sequence the chart layouts hand to a
//! surface. It can be replayed command by command or serialised to SVG path
//! data.

use std::fmt::Write;

use crate::QuadraticBezier;
use glam::Vec2;

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(Vec2),
    /// Draw a line to a position.
    LineTo(Vec2),
    /// Draw a quadratic Bezier curve.
    QuadTo {
        /// Control point
        control: Vec2,
        /// End point
        to: Vec2,
    },
    /// Draw an elliptical arc.
    ArcTo {
        /// Radii of the ellipse
        radii: Vec2,
        /// X-axis rotation in radians
        x_rotation: f32,
        /// Use large arc
        large_arc: bool,
        /// Sweep direction (clockwise if true)
        sweep: bool,
        /// End point
        to: Vec2,
    },
    /// Close the current sub-path by drawing a line to the start.
    Close,
}

impl PathCommand {
    /// The point the pen rests on after this command, if it moves the pen.
    pub fn end_point(&self) -> Option<Vec2> {
        match self {
            PathCommand::MoveTo(to)
            | PathCommand::LineTo(to)
            | PathCommand::QuadTo { to, .. }
            | PathCommand::ArcTo { to, .. } => Some(*to),
            PathCommand::Close => None,
        }
    }
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from a list of commands.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Get the commands in this path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether replaying this path would put any ink down.
    pub fn draws_anything(&self) -> bool {
        self.commands
            .iter()
            .any(|cmd| !matches!(cmd, PathCommand::MoveTo(_) | PathCommand::Close))
    }

    /// End points of every pen-moving command, in order.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(PathCommand::end_point)
    }

    /// Quadratic segments of the path, with their start points resolved.
    pub fn quadratic_curves(&self) -> impl Iterator<Item = QuadraticBezier> + '_ {
        let mut current = Vec2::ZERO;
        self.commands.iter().filter_map(move |cmd| match cmd {
            PathCommand::QuadTo { control, to } => {
                let curve = QuadraticBezier::new(current, *control, *to);
                current = *to;
                Some(curve)
            }
            other => {
                if let Some(to) = other.end_point() {
                    current = to;
                }
                None
            }
        })
    }

    /// A copy of the path shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(to) => PathCommand::MoveTo(to + offset),
                PathCommand::LineTo(to) => PathCommand::LineTo(to + offset),
                PathCommand::QuadTo { control, to } => PathCommand::QuadTo {
                    control: control + offset,
                    to: to + offset,
                },
                PathCommand::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                } => PathCommand::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to: to + offset,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }

    /// Get the bounding box of the path.
    ///
    /// Control points are included, so the box is conservative for curves.
    /// Returns (min, max) corners.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        if self.commands.is_empty() {
            return None;
        }

        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        let mut current = Vec2::ZERO;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    min = min.min(*to);
                    max = max.max(*to);
                    current = *to;
                }
                PathCommand::QuadTo { control, to } => {
                    min = min.min(*control).min(*to);
                    max = max.max(*control).max(*to);
                    current = *to;
                }
                PathCommand::ArcTo { to, radii, .. } => {
                    min = min.min(*to).min(current - *radii);
                    max = max.max(*to).max(current + *radii);
                    current = *to;
                }
                PathCommand::Close => {}
            }
        }

        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// Serialise to SVG path data (the `d` attribute).
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();

        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing to a String cannot fail.
            let _ = match cmd {
                PathCommand::MoveTo(to) => write!(out, "M{},{}", num(to.x), num(to.y)),
                PathCommand::LineTo(to) => write!(out, "L{},{}", num(to.x), num(to.y)),
                PathCommand::QuadTo { control, to } => write!(
                    out,
                    "Q{},{} {},{}",
                    num(control.x),
                    num(control.y),
                    num(to.x),
                    num(to.y)
                ),
                PathCommand::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    out,
                    "A{},{} {} {} {} {},{}",
                    num(radii.x),
                    num(radii.y),
                    num(x_rotation.to_degrees()),
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    num(to.x),
                    num(to.y)
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }

        out
    }
}

/// Format a coordinate without trailing zeros, rounded to 1/1000 px.
pub(crate) fn num(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0" in output.
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current_pos: Vec2,
    subpath_start: Vec2,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new position without drawing.
    pub fn move_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self.current_pos = to;
        self.subpath_start = to;
        self
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self.current_pos = to;
        self
    }

    /// Draw a quadratic Bezier curve.
    pub fn quad_to(&mut self, control: Vec2, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, to });
        self.current_pos = to;
        self
    }

    /// Draw an elliptical arc.
    pub fn arc_to(
        &mut self,
        radii: Vec2,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
        to: Vec2,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            radii,
            x_rotation,
            large_arc,
            sweep,
            to,
        });
        self.current_pos = to;
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self.current_pos = self.subpath_start;
        self
    }

    /// Start a polyline through `points`; does nothing for an empty slice.
    pub fn polyline(&mut self, points: &[Vec2]) -> &mut Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };

        self.move_to(*first);
        for point in rest {
            self.line_to(*point);
        }
        self
    }

    /// Add a closed polygon to the path.
    pub fn polygon(&mut self, points: &[Vec2]) -> &mut Self {
        if points.is_empty() {
            return self;
        }
        self.polyline(points).close()
    }

    /// Add a rectangle to the path.
    pub fn rect(&mut self, position: Vec2, size: Vec2) -> &mut Self {
        self.move_to(position);
        self.line_to(position + Vec2::new(size.x, 0.0));
        self.line_to(position + size);
        self.line_to(position + Vec2::new(0.0, size.y));
        self.close()
    }

    /// Add a circle to the path as two half-turn arcs.
    pub fn circle(&mut self, center: Vec2, radius: f32) -> &mut Self {
        let r = Vec2::splat(radius);
        self.move_to(center + Vec2::new(radius, 0.0));
        self.arc_to(r, 0.0, false, true, center - Vec2::new(radius, 0.0));
        self.arc_to(r, 0.0, false, true, center + Vec2::new(radius, 0.0));
        self.close()
    }

    /// Get the current position.
    pub fn current_pos(&self) -> Vec2 {
        self.current_pos
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder_line() {
        let mut builder = PathBuilder::new();
        builder
            .move_to(Vec2::new(0.0, 0.0))
            .line_to(Vec2::new(100.0, 0.0))
            .line_to(Vec2::new(100.0, 100.0))
            .close();
        let path = builder.build();

        assert_eq!(path.len(), 4);
        assert!(path.draws_anything());
    }

    #[test]
    fn test_move_only_draws_nothing() {
        let path = Path::from_commands(vec![PathCommand::MoveTo(Vec2::ZERO)]);
        assert!(!path.draws_anything());
    }

    #[test]
    fn test_path_bounds() {
        let mut builder = PathBuilder::new();
        builder
            .move_to(Vec2::new(10.0, 20.0))
            .line_to(Vec2::new(100.0, 50.0))
            .line_to(Vec2::new(50.0, 100.0));
        let path = builder.build();

        let (min, max) = path.bounds().unwrap();
        assert_eq!(min, Vec2::new(10.0, 20.0));
        assert_eq!(max, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_polyline_empty_is_noop() {
        let mut builder = PathBuilder::new();
        builder.polyline(&[]).polygon(&[]);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_svg_data() {
        let mut builder = PathBuilder::new();
        builder
            .move_to(Vec2::new(0.0, 10.5))
            .quad_to(Vec2::new(12.5, 10.5), Vec2::new(25.0, 20.0))
            .line_to(Vec2::new(25.0, 60.0))
            .close();
        assert_eq!(builder.build().to_svg_data(), "M0,10.5 Q12.5,10.5 25,20 L25,60 Z");
    }

    #[test]
    fn test_svg_arc_flags() {
        let mut builder = PathBuilder::new();
        builder
            .move_to(Vec2::new(0.0, -10.0))
            .arc_to(Vec2::splat(10.0), 0.0, true, true, Vec2::new(-10.0, 0.0));
        assert_eq!(builder.build().to_svg_data(), "M0,-10 A10,10 0 1 1 -10,0");
    }

    #[test]
    fn test_translated_keeps_arc_radii() {
        let mut builder = PathBuilder::new();
        builder.circle(Vec2::new(10.0, 10.0), 4.0);
        let moved = builder.build().translated(Vec2::new(0.0, 5.0));

        assert_eq!(moved.commands()[0], PathCommand::MoveTo(Vec2::new(14.0, 15.0)));
        match moved.commands()[1] {
            PathCommand::ArcTo { radii, to, .. } => {
                assert_eq!(radii, Vec2::splat(4.0));
                assert_eq!(to, Vec2::new(6.0, 15.0));
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_quadratic_curves_resolve_start() {
        let mut builder = PathBuilder::new();
        builder
            .move_to(Vec2::new(5.0, 5.0))
            .quad_to(Vec2::new(10.0, 5.0), Vec2::new(15.0, 10.0))
            .quad_to(Vec2::new(20.0, 15.0), Vec2::new(25.0, 15.0));
        let path = builder.build();
        let curves: Vec<_> = path.quadratic_curves().collect();

        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].from, Vec2::new(5.0, 5.0));
        assert_eq!(curves[1].from, Vec2::new(15.0, 10.0));
    }
}
