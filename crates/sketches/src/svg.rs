//! SVG export of a curve collection.
//!
//! Every curve becomes one `<path>` of cubic segments inside a single group
//! carrying the shared stroke. Export file names encode the parameters
//! that produced the picture, so a folder of exports doubles as a log of
//! what was tried.

use std::path::{Path, PathBuf};

use pillar_core::color::{Srgb, StrokeStyle};
use pillar_core::curve::{Curve, CurveCollection};
use pillar_core::error::SketchError;
use pillar_core::geometry::Viewport;
use pillar_core::Sketch;
use serde_json::Value;

/// Prefix of exported file names.
pub const DEFAULT_PREFIX: &str = "pillar";
/// Longest file name (bytes) before falling back to a hashed name.
const MAX_FILE_NAME: usize = 240;

/// Formats a coordinate with at most three decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Path data (`d` attribute) for one curve; `None` for an empty curve.
pub fn path_data(curve: &Curve) -> Option<String> {
    let first = curve.point(0)?;
    let mut d = format!("M{},{}", num(first.x), num(first.y));
    if curve.len() == 1 {
        d.push_str(&format!("L{},{}", num(first.x), num(first.y)));
        return Some(d);
    }
    for c in curve.cubics() {
        d.push_str(&format!(
            "C{},{} {},{} {},{}",
            num(c.ctrl1.x),
            num(c.ctrl1.y),
            num(c.ctrl2.x),
            num(c.ctrl2.y),
            num(c.to.x),
            num(c.to.y)
        ));
    }
    Some(d)
}

/// Renders a standalone SVG document.
pub fn to_svg(
    curves: &CurveCollection,
    stroke: &StrokeStyle,
    viewport: Viewport,
    background: Option<Srgb>,
) -> String {
    let (w, h) = (num(viewport.width()), num(viewport.height()));
    let mut svg = String::with_capacity(64 + curves.point_count() * 48);
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    if let Some(bg) = background {
        svg.push_str(&format!(
            "<rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n",
            bg.to_hex()
        ));
    }
    svg.push_str(&format!(
        "<g fill=\"none\" stroke=\"{}\" stroke-width=\"{}\">\n",
        stroke.color.to_hex(),
        num(stroke.width)
    ));
    for d in curves.iter().filter_map(path_data) {
        svg.push_str(&format!("<path d=\"{d}\"/>\n"));
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Writes the SVG document to `path`.
pub fn write_svg(
    path: &Path,
    curves: &CurveCollection,
    stroke: &StrokeStyle,
    viewport: Viewport,
    background: Option<Srgb>,
) -> Result<(), SketchError> {
    std::fs::write(path, to_svg(curves, stroke, viewport, background))?;
    log::info!("exported {} curves to {}", curves.len(), path.display());
    Ok(())
}

/// Short form of a parameter key: first letter plus the letter after every
/// case change or underscore (`riverSmooth` → `rs`, `n_lines` → `nl`).
fn abbreviate(key: &str) -> String {
    let mut out = String::new();
    let mut boundary = true;
    for c in key.chars() {
        if c == '_' {
            boundary = true;
            continue;
        }
        if boundary || c.is_ascii_uppercase() {
            out.push(c.to_ascii_lowercase());
        }
        boundary = false;
    }
    out
}

/// Numbers use serde_json's shortest round-trip form; nothing is rounded.
fn encode_value(v: &Value) -> String {
    match v {
        Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '=') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// 64-bit FNV-1a, used for names too long to spell out.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |h, &b| {
        (h ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// File name recording the parameters, e.g.
/// `pillar-ax=1.0_ay=1.0_b=20.0_..._w=0.3.svg`.
///
/// Keys are abbreviated (full keys are kept where abbreviations collide)
/// and listed in sorted order. If the result would exceed the usual file
/// name limit, it degrades to `prefix-<hash>.svg` over the full JSON.
pub fn provenance_filename(prefix: &str, params: &Value) -> String {
    let encoded = match params.as_object() {
        Some(map) => {
            let shorts: Vec<String> = map.keys().map(|k| abbreviate(k)).collect();
            map.iter()
                .zip(&shorts)
                .map(|((key, value), short)| {
                    let unique = shorts.iter().filter(|s| *s == short).count() == 1;
                    let key = if unique { short.as_str() } else { key.as_str() };
                    format!("{key}={}", encode_value(value))
                })
                .collect::<Vec<_>>()
                .join("_")
        }
        None => encode_value(params),
    };
    let name = sanitize(&format!("{prefix}-{encoded}.svg"));
    if name.len() <= MAX_FILE_NAME {
        name
    } else {
        sanitize(&format!(
            "{prefix}-{:016x}.svg",
            fnv1a(params.to_string().as_bytes())
        ))
    }
}

/// Exports the sketch's current curves into `dir` under its provenance
/// file name, returning the written path.
pub fn export_sketch(
    sketch: &dyn Sketch,
    dir: &Path,
    prefix: &str,
    background: Option<Srgb>,
) -> Result<PathBuf, SketchError> {
    let path = dir.join(provenance_filename(prefix, &sketch.params()));
    write_svg(
        &path,
        sketch.curves(),
        &sketch.stroke(),
        sketch.viewport(),
        background,
    )?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillar_core::geometry::Vertex;
    use serde_json::json;

    fn viewport() -> Viewport {
        Viewport::new(100.0, 50.0).unwrap()
    }

    fn two_rows() -> CurveCollection {
        let mut col = CurveCollection::new();
        let mut a = Curve::from_points([
            Vertex::new(0.0, 10.0),
            Vertex::new(50.0, 12.5),
            Vertex::new(100.0, 10.0),
        ]);
        a.smooth();
        col.push_row(a);
        col.push_row(Curve::from_points([
            Vertex::new(0.0, 40.0),
            Vertex::new(100.0, 40.0),
        ]));
        col
    }

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(0.1234), "0.123");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(-2.25), "-2.25");
    }

    #[test]
    fn path_data_starts_with_move_and_has_one_cubic_per_gap() {
        let col = two_rows();
        let d = path_data(&col.rows()[0]).unwrap();
        assert!(d.starts_with("M0,10"));
        assert_eq!(d.matches('C').count(), 2);
        assert!(d.ends_with("100,10"));
    }

    #[test]
    fn path_data_single_point_is_zero_length_line() {
        let c = Curve::from_points([Vertex::new(3.0, 4.0)]);
        assert_eq!(path_data(&c).unwrap(), "M3,4L3,4");
    }

    #[test]
    fn path_data_empty_curve_is_none() {
        assert!(path_data(&Curve::new()).is_none());
    }

    #[test]
    fn svg_document_structure() {
        let svg = to_svg(&two_rows(), &StrokeStyle::default(), viewport(), None);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"100\" height=\"50\" viewBox=\"0 0 100 50\""));
        assert!(svg.contains("stroke=\"#000000\" stroke-width=\"1\""));
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(!svg.contains("<rect"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn svg_background_rect_when_requested() {
        let svg = to_svg(
            &two_rows(),
            &StrokeStyle::default(),
            viewport(),
            Some(Srgb::WHITE),
        );
        assert!(svg.contains("<rect width=\"100\" height=\"50\" fill=\"#ffffff\"/>"));
    }

    #[test]
    fn write_svg_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        write_svg(&path, &two_rows(), &StrokeStyle::default(), viewport(), None).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("<path ").count(), 2);
    }

    #[test]
    fn write_svg_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");
        let err = write_svg(&path, &two_rows(), &StrokeStyle::default(), viewport(), None);
        assert!(matches!(err, Err(SketchError::Io(_))));
    }

    #[test]
    fn abbreviate_control_panel_keys() {
        assert_eq!(abbreviate("riverSmooth"), "rs");
        assert_eq!(abbreviate("n_lines"), "nl");
        assert_eq!(abbreviate("enableExpCenterAmp"), "eeca");
        assert_eq!(abbreviate("seed"), "s");
    }

    #[test]
    fn provenance_filename_encodes_params() {
        let name = provenance_filename(
            "pillar",
            &json!({"ampX": 1.5, "rounded": true, "n_lines": 450}),
        );
        assert_eq!(name, "pillar-ax=1.5_nl=450_r=1.svg");
    }

    #[test]
    fn provenance_filename_keeps_full_precision() {
        let a = provenance_filename("pillar", &json!({"seed": 1234.56789, "exponent": 0.8123}));
        let b = provenance_filename("pillar", &json!({"seed": 1234.5681, "exponent": 0.8124}));
        assert_ne!(a, b);
        assert_eq!(a, "pillar-e=0.8123_s=1234.56789.svg");
    }

    #[test]
    fn provenance_filename_keeps_full_keys_on_collision() {
        let name = provenance_filename("p", &json!({"seed": 1, "smooth": 2}));
        assert_eq!(name, "p-seed=1_smooth=2.svg");
    }

    #[test]
    fn provenance_filename_sanitizes_separators() {
        let name = provenance_filename("pillar", &json!({"noise": "a/b c"}));
        assert!(!name.contains('/') && !name.contains(' '), "{name}");
    }

    #[test]
    fn provenance_filename_hashes_very_long_params() {
        let long: serde_json::Map<String, Value> = (0..100)
            .map(|i| (format!("parameterNumber{i}"), json!(i)))
            .collect();
        let params = Value::Object(long);
        let name = provenance_filename("pillar", &params);
        assert!(name.len() <= MAX_FILE_NAME);
        assert!(name.starts_with("pillar-") && name.ends_with(".svg"));
        assert_eq!(name, provenance_filename("pillar", &params));
    }

    #[test]
    fn export_sketch_writes_under_provenance_name() {
        let sketch = pillar_curves::Pillar::from_json(
            Viewport::new(120.0, 120.0).unwrap(),
            Box::new(pillar_core::SimplexNoise::new(3)),
            &json!({"n_lines": 5, "n_vertices": 3}),
        );
        let dir = tempfile::tempdir().unwrap();
        let path = export_sketch(&sketch, dir.path(), DEFAULT_PREFIX, None).unwrap();
        let expected = provenance_filename(DEFAULT_PREFIX, &sketch.params());
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), expected);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("<path ").count(), 5);
    }
}
