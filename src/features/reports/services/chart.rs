//! Chart series derived from report counts.

use crate::features::reports::dtos::ChartPoint;
use crate::features::reports::models::Tally;
use crate::shared::constants::CHART_PALETTE;
use crate::shared::formatting::title_case_slug;

/// Decorate counts for the chart widgets: palette color by index, a
/// humanized label, and the share of the total to one decimal place.
pub fn chart_series<K>(tally: &Tally<K>, slug: impl Fn(K) -> &'static str) -> Vec<ChartPoint>
where
    K: Copy + PartialEq,
{
    let total = tally.total();
    tally
        .entries()
        .iter()
        .enumerate()
        .map(|(index, &(key, value))| {
            let name = slug(key);
            ChartPoint {
                name: name.to_string(),
                value,
                color: CHART_PALETTE[index % CHART_PALETTE.len()].to_string(),
                label: title_case_slug(name),
                percent: percent_of(value, total),
            }
        })
        .collect()
}

fn percent_of(value: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (value as f64 / total as f64 * 1000.0).round() / 10.0
}
