//! Dashboard aggregates computed from a producer listing.
//!
//! [`summarize`] walks the records once and accumulates every figure the
//! dashboard shows: the farm count, total hectares, farms and hectares per
//! state, crop frequency, and the farmable/vegetation split.

use std::collections::BTreeMap;

use crate::dto::Producer;

/// One labelled share of a [`PieChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Category label, such as a state code or crop name.
    pub label: String,
    /// Absolute value of the category.
    pub value: f64,
}

/// A titled set of slices, largest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    /// Chart heading.
    pub title: String,
    /// Slices in descending value order; ties are ordered by label.
    pub slices: Vec<Slice>,
}

impl PieChart {
    fn from_values(title: &str, values: impl IntoIterator<Item = (String, f64)>) -> Self {
        let mut slices: Vec<Slice> = values
            .into_iter()
            .map(|(label, value)| Slice { label, value })
            .collect();
        slices.sort_by(|left, right| {
            right
                .value
                .total_cmp(&left.value)
                .then_with(|| left.label.cmp(&right.label))
        });
        Self {
            title: title.to_owned(),
            slices,
        }
    }

    /// Sum of every slice value.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    /// Fraction of the chart a slice occupies, in `0.0..=1.0`.
    ///
    /// Returns `0.0` for an empty chart.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "shares are ratios of hectares")]
    pub fn fraction(&self, slice: &Slice) -> f64 {
        let total = self.total();
        if total > 0.0 { slice.value / total } else { 0.0 }
    }

    /// Whether the chart has nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Aggregates shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Number of producers.
    pub farm_count: u32,
    /// Sum of total areas in hectares.
    pub total_area: f64,
    /// Producers per state.
    pub farms_by_state: PieChart,
    /// Hectares per state.
    pub area_by_state: PieChart,
    /// Producers planting each crop.
    pub crops: PieChart,
    /// Farmable versus vegetation hectares.
    pub land_use: PieChart,
}

#[derive(Default)]
struct StateTotals {
    farms: u32,
    hectares: f64,
}

/// Computes every dashboard aggregate in a single pass over `producers`.
///
/// # Examples
///
/// ```
/// use registry_client::dashboard::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.farm_count, 0);
/// assert!(summary.crops.is_empty());
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "aggregates sum hectares")]
pub fn summarize(producers: &[Producer]) -> DashboardSummary {
    let mut farm_count = 0_u32;
    let mut total_area = 0.0;
    let mut farmable = 0.0;
    let mut vegetation = 0.0;
    let mut by_state: BTreeMap<&str, StateTotals> = BTreeMap::new();
    let mut by_crop: BTreeMap<&str, u32> = BTreeMap::new();

    for producer in producers {
        let fields = &producer.fields;
        farm_count = farm_count.saturating_add(1);
        total_area += fields.total_area;
        farmable += fields.farmable_area;
        vegetation += fields.vegetation_area;

        let state = by_state.entry(fields.state.as_str()).or_default();
        state.farms = state.farms.saturating_add(1);
        state.hectares += fields.total_area;

        for crop in &fields.crops {
            let count = by_crop.entry(crop.as_str()).or_default();
            *count = count.saturating_add(1);
        }
    }

    let farms_by_state = PieChart::from_values(
        "Farms by state",
        by_state
            .iter()
            .map(|(state, totals)| ((*state).to_owned(), f64::from(totals.farms))),
    );
    let area_by_state = PieChart::from_values(
        "Hectares by state",
        by_state
            .iter()
            .map(|(state, totals)| ((*state).to_owned(), totals.hectares)),
    );
    let crops = PieChart::from_values(
        "Crops planted",
        by_crop
            .into_iter()
            .map(|(crop, count)| (crop.to_owned(), f64::from(count))),
    );
    let land_use = if producers.is_empty() {
        PieChart::from_values("Land use", Vec::new())
    } else {
        PieChart::from_values(
            "Land use",
            [
                ("Farmable".to_owned(), farmable),
                ("Vegetation".to_owned(), vegetation),
            ],
        )
    };

    DashboardSummary {
        farm_count,
        total_area,
        farms_by_state,
        area_by_state,
        crops,
        land_use,
    }
}
