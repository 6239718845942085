// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! SVG surface: retains the drawing and serializes it as a standalone
//! SVG document.
//!
//! Output is deterministic: coordinates are canonicalized and elements are
//! written in key order, so equal drawings produce equal bytes (and equal
//! fingerprints).

use std::fmt::Write as _;

use story_scene_port::{
    canonicalize_f32, canonicalize_point, ApplyError, Chrome, ColorRgba8, DrawBatch, ElementDef,
    FadePhase, Fill, LabelDef, Paint, Point, Shape, SurfacePort, TextAnchor, Tooltip,
};

use crate::retained::Retained;

/// SVG-backed drawing surface.
#[derive(Debug)]
pub struct SvgSurface {
    retained: Retained,
    width: u32,
    height: u32,
    chrome: Option<Chrome>,
    error: Option<String>,
    tooltip: Option<Tooltip>,
    opacity: f32,
}

impl SvgSurface {
    /// Create an empty surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            retained: Retained::default(),
            width,
            height,
            chrome: None,
            error: None,
            tooltip: None,
            opacity: 1.0,
        }
    }

    /// Chrome of the last render cycle.
    pub fn chrome(&self) -> Option<&Chrome> {
        self.chrome.as_ref()
    }

    /// Tooltip currently shown.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Inline error currently shown.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of drawn elements.
    pub fn element_count(&self) -> usize {
        self.retained.elements.len()
    }

    /// Last applied epoch.
    pub fn last_epoch(&self) -> Option<u64> {
        self.retained.last_epoch()
    }

    /// Serialize the surface as an SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(4096 + self.retained.elements.len() * 96);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" opacity="{o}">"#,
            w = self.width,
            h = self.height,
            o = num(self.opacity),
        );

        let gradients: Vec<_> = self
            .retained
            .elements
            .values()
            .filter_map(|el| match el.paint.fill {
                Some(Fill::Gradient { from, to }) => Some((el.key.0, from, to)),
                _ => None,
            })
            .collect();
        if !gradients.is_empty() {
            out.push_str("<defs>\n");
            for (key, from, to) in gradients {
                let _ = writeln!(
                    out,
                    r#"<linearGradient id="grad-{key}"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient>"#,
                    hex(from),
                    hex(to),
                );
            }
            out.push_str("</defs>\n");
        }

        out.push_str("<g class=\"scene\">\n");
        for el in self.retained.elements.values() {
            write_element(&mut out, el);
        }
        for label in self.retained.labels.values() {
            write_label(&mut out, label);
        }
        out.push_str("</g>\n");

        if let Some(chrome) = &self.chrome {
            write_chrome(&mut out, chrome, self.width);
        }
        if let Some(msg) = &self.error {
            let _ = writeln!(
                out,
                r##"<g class="error"><text x="{}" y="{}" text-anchor="middle" font-size="16" fill="#b00020">{}</text></g>"##,
                num(self.width as f32 / 2.0),
                num(self.height as f32 / 2.0),
                escape(msg),
            );
        }
        if let Some(tip) = &self.tooltip {
            write_tooltip(&mut out, tip);
        }
        out.push_str("</svg>\n");
        out
    }

    /// Content hash of [`Self::to_svg`].
    pub fn fingerprint(&self) -> blake3::Hash {
        blake3::hash(self.to_svg().as_bytes())
    }
}

impl SurfacePort for SvgSurface {
    fn apply_batch(&mut self, batch: &DrawBatch) -> Result<(), ApplyError> {
        self.retained.apply(batch).map(|_| ())
    }

    fn set_chrome(&mut self, chrome: &Chrome) {
        self.chrome = Some(chrome.clone());
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_owned);
    }

    fn show_tooltip(&mut self, tooltip: Option<&Tooltip>) {
        self.tooltip = tooltip.cloned();
    }

    fn transition(&mut self, phase: FadePhase) {
        // A static document has no timeline; keep the end state of each fade.
        self.opacity = match phase {
            FadePhase::Out { .. } => 0.0,
            FadePhase::In { .. } => 1.0,
        };
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn dispose(&mut self) {
        self.retained.reset();
        self.chrome = None;
        self.error = None;
        self.tooltip = None;
    }
}

fn num(x: f32) -> String {
    format!("{}", canonicalize_f32(x))
}

fn pt(p: Point) -> String {
    let [x, y] = canonicalize_point(p);
    format!("{x},{y}")
}

fn hex(c: ColorRgba8) -> String {
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn paint_attrs(paint: &Paint, gradient_key: u32) -> String {
    let mut attrs = String::new();
    match paint.fill {
        Some(Fill::Solid(c)) => {
            let _ = write!(attrs, r#" fill="{}""#, hex(c));
            if c[3] != 255 {
                let _ = write!(attrs, r#" fill-opacity="{}""#, num(f32::from(c[3]) / 255.0));
            }
        }
        Some(Fill::Gradient { .. }) => {
            let _ = write!(attrs, r#" fill="url(#grad-{gradient_key})""#);
        }
        None => attrs.push_str(r#" fill="none""#),
    }
    if let Some(c) = paint.stroke {
        let _ = write!(
            attrs,
            r#" stroke="{}" stroke-width="{}""#,
            hex(c),
            num(paint.stroke_width)
        );
    }
    if paint.opacity < 1.0 {
        let _ = write!(attrs, r#" opacity="{}""#, num(paint.opacity));
    }
    attrs
}

fn write_element(out: &mut String, el: &ElementDef) {
    let mut attrs = paint_attrs(&el.paint, el.key.0);
    if let Some(entity) = &el.entity {
        let _ = write!(attrs, r#" data-entity="{}""#, escape(entity));
    }
    if el.selected {
        attrs.push_str(r#" class="selected""#);
    }
    match &el.shape {
        Shape::Polygon { rings } => {
            let mut d = String::new();
            for ring in rings.iter().filter(|r| !r.is_empty()) {
                for (i, p) in ring.iter().enumerate() {
                    d.push(if i == 0 { 'M' } else { 'L' });
                    d.push_str(&pt(*p));
                }
                d.push('Z');
            }
            let _ = writeln!(out, r#"<path d="{d}" fill-rule="evenodd"{attrs}/>"#);
        }
        Shape::Polyline { points } => {
            let pts: Vec<String> = points.iter().map(|p| pt(*p)).collect();
            let _ = writeln!(out, r#"<polyline points="{}"{attrs}/>"#, pts.join(" "));
        }
        Shape::Line { from, to } => {
            let [x1, y1] = canonicalize_point(*from);
            let [x2, y2] = canonicalize_point(*to);
            let _ = writeln!(out, r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"{attrs}/>"#);
        }
        Shape::Circle { center, radius } => {
            let [cx, cy] = canonicalize_point(*center);
            let _ = writeln!(out, r#"<circle cx="{cx}" cy="{cy}" r="{}"{attrs}/>"#, num(*radius));
        }
        Shape::Rect { origin, size } => {
            let [x, y] = canonicalize_point(*origin);
            let [w, h] = canonicalize_point(*size);
            let _ = writeln!(out, r#"<rect x="{x}" y="{y}" width="{w}" height="{h}"{attrs}/>"#);
        }
        Shape::Text {
            position,
            text,
            size,
            anchor,
        } => {
            let [x, y] = canonicalize_point(*position);
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = writeln!(
                out,
                r#"<text x="{x}" y="{y}" font-size="{}" text-anchor="{anchor}"{attrs}>{}</text>"#,
                num(*size),
                escape(text)
            );
        }
    }
}

fn write_label(out: &mut String, label: &LabelDef) {
    let note = [label.anchor[0] + label.offset[0], label.anchor[1] + label.offset[1]];
    let color = hex(label.color);
    out.push_str("<g class=\"annotation\">");
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}"/>"#,
        num(label.anchor[0]),
        num(label.anchor[1]),
        num(note[0]),
        num(note[1]),
    );
    let mut y = note[1];
    if let Some(title) = &label.title {
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-weight="bold" fill="{color}">{}</text>"#,
            num(note[0]),
            num(y),
            escape(title)
        );
        y += 14.0;
    }
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" fill="{color}">{}</text>"#,
        num(note[0]),
        num(y),
        escape(&label.text)
    );
    out.push_str("</g>\n");
}

fn write_chrome(out: &mut String, chrome: &Chrome, width: u32) {
    let right = width as f32 - 8.0;
    out.push_str("<g class=\"chrome\">\n");
    let _ = writeln!(
        out,
        r#"<text class="title" x="8" y="18" font-size="16" font-weight="bold">{}</text>"#,
        escape(&chrome.title)
    );
    let _ = writeln!(
        out,
        r#"<text class="step" x="{}" y="18" font-size="12" text-anchor="end">{}</text>"#,
        num(right),
        escape(&chrome.step_label)
    );
    for (class, label, enabled) in [
        ("prev", "Previous", chrome.prev_enabled),
        ("next", "Next", chrome.next_enabled),
    ] {
        let state = if enabled { "" } else { r#" disabled="true" fill-opacity="0.4""# };
        let _ = writeln!(out, r#"<text class="nav {class}" data-label="{label}"{state}>{label}</text>"#);
    }
    for marker in &chrome.markers {
        let active = if marker.active { " active" } else { "" };
        let _ = writeln!(
            out,
            r#"<circle class="marker{active}" data-scene="{}" r="4"/>"#,
            marker.ordinal
        );
    }
    if chrome.clear_selection_visible {
        out.push_str("<text class=\"clear-selection\">Clear selection</text>\n");
    }
    if let Some((start, end)) = &chrome.year_inputs {
        for (class, input) in [("start", start), ("end", end)] {
            let _ = writeln!(
                out,
                r#"<text class="year {class}" data-min="{}" data-max="{}">{}</text>"#,
                input.min, input.max, input.value
            );
        }
    }
    out.push_str("</g>\n");
}

fn write_tooltip(out: &mut String, tip: &Tooltip) {
    let [x, y] = canonicalize_point(tip.position);
    let _ = write!(out, r#"<g class="tooltip" transform="translate({x},{y})">"#);
    for (i, line) in tip.lines.iter().enumerate() {
        let _ = write!(
            out,
            r#"<text x="0" y="{}" font-size="12">{}</text>"#,
            14 * i,
            escape(line)
        );
    }
    out.push_str("</g>\n");
}
