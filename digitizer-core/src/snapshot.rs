//! Preset snapshots and share strings.
//!
//! A snapshot is the `Document` as flat JSON: axes, series, background
//! transforms and anchors, and guides. Image bytes never appear in it; layers
//! carry only the host's opaque image key.
//!
//! Loading is lenient about values and strict about shape. Numbers may arrive
//! as JSON numbers or numeric strings, and missing or non-finite values fall
//! back to the engine defaults. A wrong container type (say, `series` that is
//! not an array) rejects the whole snapshot so the caller keeps its current
//! document.
//!
//! Share strings are `v1:` followed by the deflated JSON in URL-safe base64.

use std::io::{Read, Write};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression};
use serde_json::{Map, Value};

use crate::anchor::{Anchor, LayerTransform};
use crate::axis::{AxisConfig, AxisMode, Axes};
use crate::config::{palette_color, DEFAULT_X_AXIS, DEFAULT_Y_AXIS, MAX_SHARE_JSON_BYTES};
use crate::document::{
    next_free_id, BackgroundLayer, Document, GuideAxis, GuideLine, Guides, ImageHandle, Point,
    Series, SeriesId,
};
use crate::error::PresetError;
use crate::geometry::Size;
use crate::guides::parse_guide_value;

const SHARE_PREFIX: &str = "v1:";

/// Serialize to compact JSON. Reloading the output reproduces it byte for byte.
pub fn to_json(doc: &Document) -> Result<String, PresetError> {
    Ok(serde_json::to_string(doc)?)
}

/// Parse a preset, coercing values and rejecting malformed structure.
pub fn from_json(json: &str) -> Result<Document, PresetError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

pub fn from_value(value: &Value) -> Result<Document, PresetError> {
    let root = value
        .as_object()
        .ok_or_else(|| structure("preset must be a JSON object"))?;

    let doc = Document {
        axes: parse_axes(root.get("axes"))?,
        series: parse_series(root.get("series"))?,
        backgrounds: parse_backgrounds(root.get("backgrounds"))?,
        guides: parse_guides(root.get("guides"))?,
    };
    log::info!(
        "loaded preset: {} series, {} guides",
        doc.series.len(),
        doc.guides.x.len() + doc.guides.y.len()
    );
    Ok(doc)
}

/// Encode a document as a `v1:` share string.
pub fn encode_share(doc: &Document) -> Result<String, PresetError> {
    let json = to_json(doc)?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(json.as_bytes())?;
    let compressed = encoder.finish()?;

    Ok(format!("{SHARE_PREFIX}{}", URL_SAFE_NO_PAD.encode(compressed)))
}

/// Decode a share string (a leading `#` from a URL fragment is ignored).
pub fn decode_share(encoded: &str) -> Result<Document, PresetError> {
    let encoded = encoded.trim();
    let encoded = encoded.strip_prefix('#').unwrap_or(encoded);
    let data = encoded.strip_prefix(SHARE_PREFIX).ok_or_else(|| {
        let version = encoded.split(':').next().unwrap_or_default();
        PresetError::UnsupportedVersion(version.to_string())
    })?;

    let compressed = URL_SAFE_NO_PAD.decode(data)?;
    let mut json = String::new();
    DeflateDecoder::new(&compressed[..])
        .take(MAX_SHARE_JSON_BYTES as u64 + 1)
        .read_to_string(&mut json)?;
    if json.len() > MAX_SHARE_JSON_BYTES {
        return Err(PresetError::TooLarge(MAX_SHARE_JSON_BYTES));
    }

    from_json(&json)
}

// =============================================================================
// Coercion helpers
// =============================================================================

fn structure(message: impl Into<String>) -> PresetError {
    PresetError::Structure(message.into())
}

/// Finite number from a JSON number or numeric string.
fn number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn number_or(value: Option<&Value>, default: f64) -> f64 {
    number(value).unwrap_or(default)
}

fn boolean_or(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(default),
        Some(Value::String(s)) => match s.trim() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => default,
        },
        _ => default,
    }
}

fn string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Optional object field; `null` counts as missing.
fn object<'a>(
    value: Option<&'a Value>,
    what: &str,
) -> Result<Option<&'a Map<String, Value>>, PresetError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(structure(format!("{what} must be an object"))),
    }
}

/// Optional array field; `null` counts as missing.
fn array<'a>(value: Option<&'a Value>, what: &str) -> Result<&'a [Value], PresetError> {
    match value {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(structure(format!("{what} must be an array"))),
    }
}

fn mode(value: Option<&Value>, default: AxisMode) -> AxisMode {
    match value {
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "log10" | "log" => AxisMode::Log10,
            "linear" | "lin" => AxisMode::Linear,
            _ => default,
        },
        Some(Value::Bool(true)) => AxisMode::Log10,
        Some(Value::Bool(false)) => AxisMode::Linear,
        _ => default,
    }
}

// =============================================================================
// Sections
// =============================================================================

fn parse_axes(value: Option<&Value>) -> Result<Axes, PresetError> {
    let Some(axes) = object(value, "axes")? else {
        return Ok(Axes::default());
    };

    let axis = |key: &str, flat: [&str; 3], default: AxisConfig| -> Result<AxisConfig, PresetError> {
        match object(axes.get(key), key)? {
            Some(a) => Ok(AxisConfig {
                min: number_or(a.get("min"), default.min),
                max: number_or(a.get("max"), default.max),
                mode: mode(a.get("mode"), default.mode),
            }),
            // Flat form: {"xMin": .., "xMax": .., "xLog": ..}
            None => Ok(AxisConfig {
                min: number_or(axes.get(flat[0]), default.min),
                max: number_or(axes.get(flat[1]), default.max),
                mode: mode(axes.get(flat[2]), default.mode),
            }),
        }
    };

    Ok(Axes {
        x: axis("x", ["xMin", "xMax", "xLog"], DEFAULT_X_AXIS)?,
        y: axis("y", ["yMin", "yMax", "yLog"], DEFAULT_Y_AXIS)?,
    })
}

fn parse_point(value: &Value) -> Option<Point> {
    let (x, y) = match value {
        Value::Object(p) => (number(p.get("x")), number(p.get("y"))),
        Value::Array(pair) if pair.len() == 2 => (number(pair.first()), number(pair.get(1))),
        _ => (None, None),
    };
    Some(Point::new(x?, y?))
}

fn parse_series(value: Option<&Value>) -> Result<Vec<Series>, PresetError> {
    let mut out: Vec<Series> = Vec::new();
    for (index, item) in array(value, "series")?.iter().enumerate() {
        let s = item
            .as_object()
            .ok_or_else(|| structure(format!("series[{index}] must be an object")))?;

        let id = number(s.get("id"))
            .filter(|id| id.fract() == 0.0 && *id >= 1.0 && *id <= u32::MAX as f64)
            .map(|id| SeriesId(id as u32))
            .filter(|id| out.iter().all(|existing| existing.id != *id))
            .unwrap_or_else(|| next_free_id(out.iter().map(|existing| existing.id)));

        let raw_points = array(s.get("points"), "series points")?;
        let points: Vec<Point> = raw_points.iter().filter_map(parse_point).collect();
        if points.len() != raw_points.len() {
            log::warn!(
                "series {id}: dropped {} unreadable points",
                raw_points.len() - points.len()
            );
        }

        out.push(Series {
            id,
            name: string(s.get("name")).unwrap_or_else(|| format!("Series {}", id.0)),
            color: string(s.get("color")).unwrap_or_else(|| palette_color(index).to_string()),
            points,
        });
    }
    Ok(out)
}

fn parse_anchor(value: Option<&Value>) -> Anchor {
    let Some(Value::Object(a)) = value else {
        return Anchor::Center;
    };
    if a.get("kind").and_then(Value::as_str) != Some("Custom") {
        return Anchor::Center;
    }
    match (
        number(a.get("ax")),
        number(a.get("ay")),
        number(a.get("frac_x")),
        number(a.get("frac_y")),
    ) {
        (Some(ax), Some(ay), Some(frac_x), Some(frac_y)) => Anchor::Custom {
            ax,
            ay,
            frac_x,
            frac_y,
        }
        .clamped(),
        _ => Anchor::Center,
    }
}

fn parse_layer(value: &Value, index: usize) -> Result<Option<BackgroundLayer>, PresetError> {
    let layer = match value {
        Value::Null => return Ok(None),
        Value::Object(layer) => layer,
        _ => return Err(structure(format!("backgrounds[{index}] must be an object or null"))),
    };
    let Some(image) = string(layer.get("image")) else {
        log::warn!("backgrounds[{index}] has no image key, slot left empty");
        return Ok(None);
    };

    let size = object(layer.get("natural_size"), "natural_size")?;
    let natural_size = Size::new(
        number_or(size.and_then(|s| s.get("w")), 0.0),
        number_or(size.and_then(|s| s.get("h")), 0.0),
    );

    let defaults = LayerTransform::default();
    let t = object(layer.get("transform"), "transform")?;
    let field = |key: &str, default: f64| number_or(t.and_then(|t| t.get(key)), default);
    let transform = LayerTransform {
        scale_x: field("scale_x", defaults.scale_x),
        scale_y: field("scale_y", defaults.scale_y),
        offset_x: field("offset_x", defaults.offset_x),
        offset_y: field("offset_y", defaults.offset_y),
    }
    .clamped();

    Ok(Some(BackgroundLayer {
        image: ImageHandle(image),
        natural_size,
        transform,
        anchor: parse_anchor(layer.get("anchor")),
        opacity: number_or(layer.get("opacity"), 1.0).clamp(0.0, 1.0),
        visible: boolean_or(layer.get("visible"), true),
    }))
}

fn parse_backgrounds(value: Option<&Value>) -> Result<[Option<BackgroundLayer>; 2], PresetError> {
    let items = array(value, "backgrounds")?;
    if items.len() > 2 {
        return Err(structure("at most two background slots"));
    }
    let mut slots: [Option<BackgroundLayer>; 2] = [None, None];
    for (index, item) in items.iter().enumerate() {
        slots[index] = parse_layer(item, index)?;
    }
    Ok(slots)
}

fn parse_guide_list(
    value: Option<&Value>,
    axis: GuideAxis,
    into: &mut Vec<GuideLine>,
) -> Result<(), PresetError> {
    for item in array(value, "guides")? {
        let (value, label) = match item {
            Value::Object(g) => {
                let label = string(g.get("source_label"));
                let value = number(g.get("value"))
                    .or_else(|| label.as_deref().and_then(parse_guide_value));
                (value, label)
            }
            Value::Number(_) => (number(Some(item)), None),
            Value::String(s) => (parse_guide_value(s), Some(s.clone())),
            _ => return Err(structure("guide entries must be objects, numbers or strings")),
        };
        let Some(value) = value else {
            log::warn!("skipping guide without a usable value");
            continue;
        };
        if into.iter().any(|g| g.value == value) {
            continue;
        }
        into.push(GuideLine {
            axis,
            value,
            source_label: label.unwrap_or_else(|| value.to_string()),
        });
    }
    Ok(())
}

fn parse_guides(value: Option<&Value>) -> Result<Guides, PresetError> {
    let mut guides = Guides::default();
    if let Some(g) = object(value, "guides")? {
        parse_guide_list(g.get("x"), GuideAxis::X, &mut guides.x)?;
        parse_guide_list(g.get("y"), GuideAxis::Y, &mut guides.y)?;
    }
    Ok(guides)
}
