// Group-by-date then min/avg/max per bucket.

use std::collections::HashMap;

use crate::models::{AggregatedSeries, NormalizedPoint};

/// Groups points by `date` (buckets in first-seen order, sample order kept
/// within a bucket) and reduces each bucket to min, mean and max.
///
/// NaN samples are skipped by min/max (a bucket of only NaN yields NaN) and
/// propagate through the mean.
pub fn aggregate_by_date(points: &[NormalizedPoint]) -> AggregatedSeries {
    let buckets = group_by_date(points);

    let mut out = AggregatedSeries {
        min: Vec::with_capacity(buckets.len()),
        avg: Vec::with_capacity(buckets.len()),
        max: Vec::with_capacity(buckets.len()),
    };
    for (date, values) in &buckets {
        out.min.push(NormalizedPoint::new(*date, min_f64(values)));
        out.avg.push(NormalizedPoint::new(*date, mean_f64(values)));
        out.max.push(NormalizedPoint::new(*date, max_f64(values)));
    }
    out
}

fn group_by_date(points: &[NormalizedPoint]) -> Vec<(i64, Vec<f64>)> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut buckets: Vec<(i64, Vec<f64>)> = Vec::new();
    for p in points {
        let slot = *index.entry(p.date).or_insert_with(|| {
            buckets.push((p.date, Vec::new()));
            buckets.len() - 1
        });
        buckets[slot].1.push(p.value);
    }
    buckets
}

fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return f64::NAN;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}

fn min_f64(v: &[f64]) -> f64 {
    v.iter()
        .copied()
        .filter(|x| !x.is_nan())
        .reduce(f64::min)
        .unwrap_or(f64::NAN)
}

fn max_f64(v: &[f64]) -> f64 {
    v.iter()
        .copied()
        .filter(|x| !x.is_nan())
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(date: i64, value: f64) -> NormalizedPoint {
        NormalizedPoint::new(date, value)
    }

    #[test]
    fn buckets_keep_first_seen_order() {
        let out = aggregate_by_date(&[p(30, 1.0), p(10, 2.0), p(30, 3.0), p(20, 4.0)]);
        let dates: Vec<i64> = out.avg.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![30, 10, 20]);
        assert_eq!(out.avg[0].value, 2.0);
    }

    #[test]
    fn nan_is_skipped_by_min_max_but_poisons_mean() {
        let out = aggregate_by_date(&[p(1, f64::NAN), p(1, 5.0), p(1, 3.0)]);
        assert_eq!(out.min[0].value, 3.0);
        assert_eq!(out.max[0].value, 5.0);
        assert!(out.avg[0].value.is_nan());
    }

    #[test]
    fn all_nan_bucket_is_nan() {
        let out = aggregate_by_date(&[p(1, f64::NAN)]);
        assert!(out.min[0].value.is_nan());
        assert!(out.max[0].value.is_nan());
    }
}
