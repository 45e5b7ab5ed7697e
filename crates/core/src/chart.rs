//! Demo data for the purchase metrics line chart.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub points: Vec<ChartPoint>,
}

const PURCHASE_METRICS: [(&str, u32); 5] = [
    ("Jan", 400),
    ("Feb", 300),
    ("Mar", 600),
    ("Apr", 800),
    ("May", 500),
];

/// Static series for the customer-care dashboard widget.
#[must_use]
pub fn purchase_metrics_demo() -> ChartSeries {
    ChartSeries {
        title: "Real-Time Purchase Metrics",
        points: PURCHASE_METRICS
            .iter()
            .map(|&(name, value)| ChartPoint { name, value })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_series() {
        let series = purchase_metrics_demo();
        assert_eq!(series.points.len(), 5);
        assert_eq!(series.points.first().map(|p| p.name), Some("Jan"));
        assert_eq!(series.points.iter().map(|p| p.value).max(), Some(800));
    }
}
