use crate::models::{Sale, Summary};
use std::collections::BTreeMap;

/// Compute per-county summaries, dropping counties with fewer than
/// `min_sales` records.
///
/// Each surviving county yields a [`Summary`] paired with its full,
/// still-unsorted sales vector; the pair is what the report renders
/// from. Mean and total are rounded to 2 decimals here and never
/// recomputed later.
pub fn summarize(
    counties: BTreeMap<String, Vec<Sale>>,
    min_sales: usize,
) -> Vec<(Summary, Vec<Sale>)> {
    let mut out = Vec::new();
    for (county, sales) in counties {
        if sales.len() < min_sales {
            continue;
        }
        let sum: f64 = sales.iter().map(|s| s.price).sum();
        // Divisor floor of 1 guards the empty-group case when called
        // standalone with min_sales == 0.
        let mean = round2(sum / sales.len().max(1) as f64);
        let total = round2(sum);
        out.push((Summary { county, mean, total }, sales));
    }
    out
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_two_decimals() {
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(1500.0), 1500.0);
    }
}
