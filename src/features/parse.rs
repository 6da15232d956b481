//! CSV → rows.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use super::FeatureRow;
use crate::error::DashboardError;
use crate::molecule::MoleculeId;
use crate::options::DatasetOptions;

pub(super) struct Table {
    pub(super) columns: Vec<String>,
    pub(super) group_columns: Vec<String>,
    pub(super) rows: Vec<FeatureRow>,
}

/// Header positions of the structural columns.
struct Layout {
    id: usize,
    paper_id: usize,
    groups: Vec<usize>,
    /// (header position, name) of every numeric feature column.
    features: Vec<(usize, String)>,
}

impl Layout {
    fn from_headers(
        headers: &StringRecord,
        options: &DatasetOptions,
    ) -> Result<Self, DashboardError> {
        let find = |name: &str| {
            headers.iter().position(|h| h.trim() == name).ok_or_else(|| {
                DashboardError::DataLoad(format!("missing column {name}"))
            })
        };

        let id = find(options.id_column.as_str())?;
        let paper_id = find(options.paper_id_column.as_str())?;
        let groups = options
            .group_columns
            .iter()
            .map(|g| find(g.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        let features = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !options.is_key_column(h.trim()))
            .map(|(i, h)| (i, h.trim().to_owned()))
            .collect();

        Ok(Self {
            id,
            paper_id,
            groups,
            features,
        })
    }
}

pub(super) fn read_table<R: Read>(
    reader: R,
    options: &DatasetOptions,
) -> Result<Table, DashboardError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let layout = Layout::from_headers(&headers, options)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        rows.push(parse_row(&record, &layout, options, line)?);
    }

    Ok(Table {
        columns: layout.features.into_iter().map(|(_, name)| name).collect(),
        group_columns: options.group_columns.clone(),
        rows,
    })
}

fn parse_row(
    record: &StringRecord,
    layout: &Layout,
    options: &DatasetOptions,
    line: u64,
) -> Result<FeatureRow, DashboardError> {
    let cell = |idx: usize| record.get(idx).unwrap_or("").trim();
    let bad = |column: &str, value: &str, expected: &str| {
        DashboardError::DataLoad(format!(
            "line {line}: column {column} has {expected} value {value:?}"
        ))
    };

    let raw_id = cell(layout.id);
    let id = parse_integer(raw_id)
        .and_then(|v| u32::try_from(v).ok())
        .map(MoleculeId)
        .ok_or_else(|| bad(&options.id_column, raw_id, "non-integer"))?;

    let raw_paper = cell(layout.paper_id);
    let paper_id = parse_integer(raw_paper)
        .ok_or_else(|| bad(&options.paper_id_column, raw_paper, "non-integer"))?;

    let mut groups = Vec::with_capacity(layout.groups.len());
    for (&idx, name) in layout.groups.iter().zip(&options.group_columns) {
        let raw = cell(idx);
        let label = parse_integer(raw)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| bad(name, raw, "non-integer"))?;
        groups.push(label);
    }

    let mut values = Vec::with_capacity(layout.features.len());
    for (idx, name) in &layout.features {
        let raw = cell(*idx);
        let value = if raw.is_empty() {
            f64::NAN
        } else {
            raw.parse::<f64>()
                .map_err(|_| bad(name, raw, "non-numeric"))?
        };
        values.push(value);
    }

    Ok(FeatureRow {
        id,
        paper_id,
        groups,
        values,
    })
}

/// Integers, tolerating the `12.0` spelling some exporters write.
fn parse_integer(raw: &str) -> Option<i64> {
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}
