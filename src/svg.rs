//! SVG visualization of a wall arrangement.
//!
//! Draws the wall, each placed painting, its hanger points labeled with
//! their wall coordinates (plus the ring-to-ring distance for D-rings), and
//! dimension arrows for the margins, the gaps, and the clearance above and
//! below each painting: the numbers to measure off on the real wall.
//!
//! # Example
//!
//! ```
//! use hangcalc::{HangPlan, MountType, Painting, Wall, svg::render_wall_svg};
//!
//! let plan = HangPlan::new(Wall::new(300.0, 244.0))
//!     .painting(Painting::new("Mona Lisa", 20.0, 25.0, MountType::wire(10.0)));
//! let arrangement = plan.arrange().unwrap();
//!
//! let svg = render_wall_svg(&arrangement);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("Mona Lisa"));
//! ```

use crate::layout::{PaintingLayout, Point, Wall};
use crate::plan::Arrangement;

/// Maximum drawn width of the wall.
const MAX_WALL_W: f64 = 800.0;
/// Maximum drawn height of the wall.
const MAX_WALL_H: f64 = 500.0;
/// Space around the wall for arrows and labels.
const MARGIN: f64 = 50.0;
/// Height of the title line above the wall.
const TITLE_H: f64 = 24.0;
/// Radius of a hanger dot.
const HANGER_R: f64 = 3.5;
/// Arrows shorter than this (in drawn pixels) are not drawn.
const MIN_ARROW: f64 = 1.0;

/// Maps wall-local coordinates (y up) to SVG coordinates (y down).
struct Frame {
    scale: f64,
    left: f64,
    top: f64,
    wall: Wall,
}

impl Frame {
    fn new(wall: Wall) -> Self {
        let scale = if wall.width > 0.0 && wall.height > 0.0 {
            (MAX_WALL_W / wall.width).min(MAX_WALL_H / wall.height)
        } else {
            1.0
        };
        Self {
            scale,
            left: MARGIN,
            top: MARGIN + TITLE_H,
            wall,
        }
    }

    fn x(&self, x: f64) -> f64 {
        self.left + x * self.scale
    }

    fn y(&self, y: f64) -> f64 {
        self.top + (self.wall.height - y) * self.scale
    }

    fn len(&self, v: f64) -> f64 {
        v * self.scale
    }

    fn wall_w(&self) -> f64 {
        self.len(self.wall.width)
    }

    fn wall_h(&self) -> f64 {
        self.len(self.wall.height)
    }
}

/// Render an arrangement with labels formatted to one decimal place.
pub fn render_wall_svg(arrangement: &Arrangement<'_>) -> String {
    render_wall_svg_with(arrangement, |v| format!("{v:.1}"))
}

/// Render an arrangement, formatting every measurement label with `label`.
///
/// Pass a unit-aware formatter to label in the user's unit, for example
/// `|cm| hangcalc::units::format_cm_as(cm, MeasurementUnit::Inches)` with
/// the `units` feature.
pub fn render_wall_svg_with<F>(arrangement: &Arrangement<'_>, label: F) -> String
where
    F: Fn(f64) -> String,
{
    let wall = *arrangement.wall();
    let frame = Frame::new(wall);
    let total_w = frame.wall_w() + 2.0 * MARGIN;
    let total_h = frame.wall_h() + 2.0 * MARGIN + TITLE_H;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w.ceil() as u32,
        total_h.ceil() as u32,
        total_w,
        total_h
    ));
    svg.push('\n');

    svg.push_str(r##"<style>
  text { font-family: "Helvetica Neue", "DejaVu Sans", Arial, sans-serif; }
  .title { font-size: 13px; font-weight: bold; fill: #333; }
  .name { font-size: 11px; fill: #222; }
  .dim { font-size: 10px; fill: #555; }
  .wall { fill: #f4f1ea; stroke: #999; stroke-width: 1; }
  .painting { fill: #c9ddef; stroke: #2c6faa; stroke-width: 1.5; }
  .painting.overflow { fill: #f3c7c0; stroke: #c0392b; }
  .hanger { fill: #c0392b; }
  .hanger-label { font-size: 9px; fill: #8e2a1f; }
  .hanger-line { stroke: #c0392b; stroke-width: 1; stroke-dasharray: 3,2; }
  .arrow { stroke: #666; stroke-width: 1; fill: none; marker-start: url(#tail); marker-end: url(#head); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .title { fill: #e0e0e0; }
    .name { fill: #eee; }
    .dim { fill: #aaa; }
    .hanger-label { fill: #e8a097; }
    .wall { fill: #2d2d2d; stroke: #555; }
    .painting { fill: #3a72a4; stroke: #5a9fd4; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
"##);

    svg.push_str(r##"<defs>
  <marker id="head" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
  <marker id="tail" markerWidth="8" markerHeight="6" refX="0" refY="3" orient="auto">
    <polygon points="8 0, 0 3, 8 6" class="arrowhead"/>
  </marker>
</defs>
"##);

    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="title">{}</text>"#,
        MARGIN,
        MARGIN + 10.0,
        escape_xml(&format!(
            "Wall {} × {}  spacing {}",
            label(wall.width),
            label(wall.height),
            label(arrangement.spacing())
        ))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="wall"/>"#,
        frame.x(0.0),
        frame.y(wall.height),
        frame.wall_w(),
        frame.wall_h()
    ));
    svg.push('\n');

    let layouts = arrangement.layouts();
    for layout in layouts {
        push_painting(&mut svg, &frame, layout, &label);
    }

    // Horizontal dimensions at each painting's vertical center.
    if let (Some(first), Some(last)) = (layouts.first(), layouts.last()) {
        let y = first.center().y;
        push_arrow(
            &mut svg,
            &frame,
            Point::new(0.0, y),
            Point::new(first.origin.x, y),
            &label,
        );
        for pair in layouts.windows(2) {
            let y = pair[0].center().y;
            push_arrow(
                &mut svg,
                &frame,
                Point::new(pair[0].right(), y),
                Point::new(pair[1].origin.x, y),
                &label,
            );
        }
        let y = last.center().y;
        push_arrow(
            &mut svg,
            &frame,
            Point::new(last.right(), y),
            Point::new(wall.width, y),
            &label,
        );
    }

    // Vertical clearances through each painting's horizontal center.
    for layout in layouts {
        let x = layout.center().x;
        push_arrow(
            &mut svg,
            &frame,
            Point::new(x, layout.top()),
            Point::new(x, wall.height),
            &label,
        );
        push_arrow(
            &mut svg,
            &frame,
            Point::new(x, 0.0),
            Point::new(x, layout.origin.y),
            &label,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_painting<F>(svg: &mut String, frame: &Frame, layout: &PaintingLayout<'_>, label: &F)
where
    F: Fn(f64) -> String,
{
    let painting = layout.painting;
    let class = if layout.fits_within(&frame.wall) {
        "painting"
    } else {
        "painting overflow"
    };
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
        frame.x(layout.origin.x),
        frame.y(layout.top()),
        frame.len(painting.width),
        frame.len(painting.height),
        class
    ));
    svg.push('\n');

    let center = layout.center();
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="name" text-anchor="middle">{}</text>"#,
        frame.x(center.x),
        frame.y(center.y),
        escape_xml(&painting.name)
    ));
    svg.push('\n');

    if let Some((left, right)) = layout.mounting_points.as_pair() {
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" class="hanger-line"/>"#,
            frame.x(left.x),
            frame.y(left.y),
            frame.x(right.x),
            frame.y(right.y)
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="hanger-label" text-anchor="middle">{}</text>"#,
            (frame.x(left.x) + frame.x(right.x)) / 2.0,
            frame.y(left.y) - 6.0,
            escape_xml(&format!("Δ={}", label(left.distance_to(right))))
        ));
        svg.push('\n');
    }
    for point in &layout.mounting_points {
        svg.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{}" class="hanger"/>"#,
            frame.x(point.x),
            frame.y(point.y),
            HANGER_R
        ));
        svg.push('\n');
        // Wall coordinates of the hanger, below the dot.
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="hanger-label" text-anchor="middle">{}</text>"#,
            frame.x(point.x),
            frame.y(point.y) + HANGER_R + 10.0,
            escape_xml(&format!("({}, {})", label(point.x), label(point.y)))
        ));
        svg.push('\n');
    }
}

/// Double-headed dimension arrow from `a` to `b`, labeled with the signed
/// measurement `b - a` along its axis.
///
/// Arrows are axis-aligned. A negative label marks an overlap, such as a
/// right margin past the wall edge.
fn push_arrow<F>(svg: &mut String, frame: &Frame, a: Point, b: Point, label: &F)
where
    F: Fn(f64) -> String,
{
    let value = if a.y == b.y { b.x - a.x } else { b.y - a.y };
    let (x1, y1, x2, y2) = (frame.x(a.x), frame.y(a.y), frame.x(b.x), frame.y(b.y));
    if (x2 - x1).abs() < MIN_ARROW && (y2 - y1).abs() < MIN_ARROW {
        return;
    }
    svg.push_str(&format!(
        r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" class="arrow"/>"#
    ));
    svg.push('\n');

    let horizontal = (y2 - y1).abs() < MIN_ARROW;
    let (tx, ty, anchor) = if horizontal {
        ((x1 + x2) / 2.0, y1 - 4.0, "middle")
    } else {
        (x1 + 4.0, (y1 + y2) / 2.0 + 3.0, "start")
    };
    svg.push_str(&format!(
        r#"<text x="{tx:.1}" y="{ty:.1}" class="dim" text-anchor="{anchor}">{}</text>"#,
        escape_xml(&label(value))
    ));
    svg.push('\n');
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
