//! Guide-line parsing and the intersection table shown next to the plot.

use serde::{Deserialize, Serialize};

use crate::document::{Document, GuideAxis, GuideLine, SeriesId};
use crate::error::EditError;
use crate::interpolate::{value_at_x, value_at_y};

/// Parse a user-typed guide value.
///
/// Accepts plain and exponent notation, `,`/`_`/space digit grouping
/// ("1,000", "10 000") and one SI suffix (`p n u µ m k M G`). Commas are
/// always grouping separators, never decimal marks.
pub fn parse_guide_value(label: &str) -> Option<f64> {
    let cleaned: String = label
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
        .collect();
    let (number, multiplier) = match cleaned.chars().last()? {
        'p' => (&cleaned[..cleaned.len() - 1], 1e-12),
        'n' => (&cleaned[..cleaned.len() - 1], 1e-9),
        'u' => (&cleaned[..cleaned.len() - 1], 1e-6),
        'µ' => (&cleaned[..cleaned.len() - 'µ'.len_utf8()], 1e-6),
        'm' => (&cleaned[..cleaned.len() - 1], 1e-3),
        'k' => (&cleaned[..cleaned.len() - 1], 1e3),
        'M' => (&cleaned[..cleaned.len() - 1], 1e6),
        'G' => (&cleaned[..cleaned.len() - 1], 1e9),
        _ => (cleaned.as_str(), 1.0),
    };
    let value = number.parse::<f64>().ok()? * multiplier;
    value.is_finite().then_some(value)
}

/// Guide line for `label`, keeping the label text verbatim.
pub fn guide_from_label(axis: GuideAxis, label: &str) -> Result<GuideLine, EditError> {
    let value =
        parse_guide_value(label).ok_or_else(|| EditError::InvalidGuideLabel(label.to_string()))?;
    Ok(GuideLine {
        axis,
        value,
        source_label: label.to_string(),
    })
}

/// Where one series crosses a guide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideHit {
    pub series: SeriesId,
    pub name: String,
    /// The other coordinate at the crossing, `None` outside the series' range.
    pub value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideRow {
    pub axis: GuideAxis,
    pub value: f64,
    pub source_label: String,
    pub hits: Vec<GuideHit>,
}

/// One row per guide (x guides first), one hit per series.
///
/// Series are looked up in x order, using the document's axis modes.
pub fn guide_table(doc: &Document) -> Vec<GuideRow> {
    let (x_mode, y_mode) = (doc.axes.x.mode, doc.axes.y.mode);
    let sorted: Vec<_> = doc
        .series
        .iter()
        .map(|s| (s.id, s.name.clone(), s.sorted_by_x()))
        .collect();

    doc.guides
        .x
        .iter()
        .chain(doc.guides.y.iter())
        .map(|guide| GuideRow {
            axis: guide.axis,
            value: guide.value,
            source_label: guide.source_label.clone(),
            hits: sorted
                .iter()
                .map(|(id, name, points)| GuideHit {
                    series: *id,
                    name: name.clone(),
                    value: match guide.axis {
                        GuideAxis::X => value_at_x(points, guide.value, x_mode, y_mode),
                        GuideAxis::Y => value_at_y(points, guide.value, x_mode, y_mode),
                    },
                })
                .collect(),
        })
        .collect()
}
