//! SVG rendering of an analyzed curve
//!
//! A thin consumer of the analysis: axes, the parabola path, root and vertex
//! markers with labels, and the function caption. Non-finite values (a == 0)
//! are suppressed rather than emitted into the markup.

use crate::analyzer::ViewportTransform;
use crate::Analysis;
use std::fmt::Write;

const CURVE_COLOR: &str = "rgba(139, 92, 246, 0.8)";
const VERTEX_COLOR: &str = "rgba(220, 38, 38, 0.8)";
const AXIS_COLOR: &str = "#ccc";

/// Renders an [`Analysis`] into a standalone SVG document
pub struct SvgReporter {
    width: f64,
    height: f64,
}

impl SvgReporter {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn render(&self, analysis: &Analysis) -> String {
        let finite_roots: Vec<f64> = analysis
            .roots
            .iter()
            .copied()
            .filter(|r| r.is_finite())
            .collect();
        let t = ViewportTransform::fit(
            &analysis.curve_points,
            &finite_roots,
            self.width,
            self.height,
        );

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        // Axes
        let y0 = t.transform_y(0.0);
        let x0 = t.transform_x(0.0);
        let _ = writeln!(
            out,
            r#"  <line x1="0" y1="{y:.2}" x2="{w}" y2="{y:.2}" stroke="{c}" stroke-width="1"/>"#,
            y = y0,
            w = self.width,
            c = AXIS_COLOR
        );
        let _ = writeln!(
            out,
            r#"  <line x1="{x:.2}" y1="0" x2="{x:.2}" y2="{h}" stroke="{c}" stroke-width="1"/>"#,
            x = x0,
            h = self.height,
            c = AXIS_COLOR
        );

        // Parabola path
        if let Some(path) = self.path_data(analysis, &t) {
            let _ = writeln!(
                out,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
                path, CURVE_COLOR
            );
        }

        // Root markers sit on the x-axis
        for root in &finite_roots {
            let px = t.transform_x(*root);
            let _ = writeln!(
                out,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="5" fill="{}" stroke="white" stroke-width="1"/>"#,
                px, y0, CURVE_COLOR
            );
            let _ = writeln!(
                out,
                r##"  <text x="{:.2}" y="{:.2}" font-size="12" fill="#333" text-anchor="middle">x={:.2}</text>"##,
                px,
                y0 + 20.0,
                root
            );
        }

        // Vertex marker and label
        if analysis.vertex.is_finite() {
            let vx = t.transform_x(analysis.vertex.x);
            let vy = t.transform_y(analysis.vertex.y);
            let _ = writeln!(
                out,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="5" fill="{}" stroke="white" stroke-width="1"/>"#,
                vx, vy, VERTEX_COLOR
            );
            let _ = writeln!(
                out,
                r##"  <text x="{:.2}" y="{:.2}" font-size="12" fill="#333">Vertex ({:.2}, {:.2})</text>"##,
                vx + 10.0,
                vy - 10.0,
                analysis.vertex.x,
                analysis.vertex.y
            );
        }

        // Function caption
        let _ = writeln!(
            out,
            r##"  <text x="10" y="20" font-size="14" font-weight="bold" fill="#333">{}</text>"##,
            analysis.coefficients
        );

        out.push_str("</svg>\n");
        out
    }

    /// "M x y L x y …" over the sampled points; None when there is no curve
    fn path_data(&self, analysis: &Analysis, t: &ViewportTransform) -> Option<String> {
        let mut points = analysis.curve_points.iter().filter(|p| p.is_finite());
        let first = points.next()?;
        let mut d = format!(
            "M {:.2} {:.2}",
            t.transform_x(first.x),
            t.transform_y(first.y)
        );
        for p in points {
            let _ = write!(d, " L {:.2} {:.2}", t.transform_x(p.x), t.transform_y(p.y));
        }
        Some(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    #[test]
    fn renders_curve_roots_and_vertex() {
        let svg = SvgReporter::new(600.0, 400.0).render(&analyze(1.0, 0.0, -4.0));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("<path d=\"M "));
        // Two root markers plus one vertex marker
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("Vertex (0.00, -4.00)"));
        assert!(svg.contains("x=2.00"));
        assert!(svg.contains("x=-2.00"));
        assert!(svg.contains(r##"fill="#333""##));
    }

    #[test]
    fn no_real_roots_means_no_root_markers() {
        let svg = SvgReporter::new(600.0, 400.0).render(&analyze(1.0, 0.0, 4.0));
        // Only the vertex marker remains
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn degenerate_input_yields_valid_svg_without_markers() {
        let svg = SvgReporter::new(600.0, 400.0).render(&analyze(0.0, 2.0, 3.0));
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<path"));
        assert_eq!(svg.matches("<circle").count(), 0);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}
