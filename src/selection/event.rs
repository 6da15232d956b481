use serde::Deserialize;

/// One picked point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedPoint {
    /// Series (`curveNumber`).
    pub curve: usize,
    /// Position within the series (`pointIndex`, else `pointNumber`).
    pub index: usize,
}

impl PickedPoint {
    /// Point `index` of series `curve`.
    #[must_use]
    pub fn new(curve: usize, index: usize) -> Self {
        Self { curve, index }
    }
}

/// What the chart handed us, classified structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventShape {
    /// No interaction yet.
    Absent,
    /// Something arrived but it is not a point list.
    Malformed(String),
    /// Zero or more points, in the order the chart supplied them.
    Points(Vec<PickedPoint>),
}

#[derive(Deserialize)]
struct RawEvent {
    points: Vec<RawPoint>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPoint {
    curve_number: usize,
    point_index: Option<usize>,
    point_number: Option<usize>,
}

impl EventShape {
    /// Classify a Plotly `clickData`/`hoverData`/`selectedData` value.
    #[must_use]
    pub fn from_json(value: Option<&serde_json::Value>) -> Self {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return Self::Absent;
        };
        let raw = match RawEvent::deserialize(value) {
            Ok(raw) => raw,
            Err(e) => return Self::Malformed(e.to_string()),
        };

        let mut points = Vec::with_capacity(raw.points.len());
        for (i, p) in raw.points.into_iter().enumerate() {
            let Some(index) = p.point_index.or(p.point_number) else {
                return Self::Malformed(format!(
                    "point {i} has neither pointIndex nor pointNumber"
                ));
            };
            points.push(PickedPoint::new(p.curve_number, index));
        }
        Self::Points(points)
    }

    /// Whether there is nothing to resolve (absent or zero points).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Malformed(_) => false,
            Self::Points(points) => points.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_and_missing_are_absent() {
        assert_eq!(EventShape::from_json(None), EventShape::Absent);
        assert_eq!(
            EventShape::from_json(Some(&serde_json::Value::Null)),
            EventShape::Absent
        );
    }

    #[test]
    fn empty_point_list_is_points() {
        let shape = EventShape::from_json(Some(&json!({ "points": [] })));
        assert_eq!(shape, EventShape::Points(vec![]));
        assert!(shape.is_empty());
    }

    #[test]
    fn keeps_supplied_order_and_extra_fields() {
        let value = json!({
            "points": [
                { "curveNumber": 2, "pointIndex": 7, "x": 0.1, "text": "153" },
                { "curveNumber": 0, "pointNumber": 4 },
            ],
            "range": { "x": [0, 1] },
        });
        assert_eq!(
            EventShape::from_json(Some(&value)),
            EventShape::Points(vec![
                PickedPoint::new(2, 7),
                PickedPoint::new(0, 4),
            ])
        );
    }

    #[test]
    fn point_index_wins_over_point_number() {
        let value = json!({
            "points": [{ "curveNumber": 0, "pointIndex": 1, "pointNumber": 9 }]
        });
        assert_eq!(
            EventShape::from_json(Some(&value)),
            EventShape::Points(vec![PickedPoint::new(0, 1)])
        );
    }

    #[test]
    fn unexpected_shapes_are_malformed() {
        for value in [
            json!("click"),
            json!({ "points": "none" }),
            json!({ "lassoPoints": {} }),
            json!({ "points": [{ "pointIndex": 1 }] }),
            json!({ "points": [{ "curveNumber": -1, "pointIndex": 1 }] }),
            json!({ "points": [{ "curveNumber": 0 }] }),
        ] {
            assert!(
                matches!(
                    EventShape::from_json(Some(&value)),
                    EventShape::Malformed(_)
                ),
                "{value}"
            );
        }
    }
}
