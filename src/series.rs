//! Live Series Buffer
//!
//! Fixed-capacity FIFO of chart samples. Each tick appends one sample
//! labeled from a per-instance clock and evicts the oldest. The clock
//! belongs to the buffer, so two mounted charts never share a counter.

use std::collections::VecDeque;

use crate::models::SeriesSample;

/// Reference seed: six samples labeled 0s..5s
const SEED: [u32; 6] = [12, 19, 3, 5, 2, 3];

#[derive(Debug, Clone, PartialEq)]
pub struct LiveSeries {
    samples: VecDeque<SeriesSample>,
    capacity: usize,
    clock: u64,
}

impl LiveSeries {
    /// Reference buffer sized to `capacity`: the seed values, padded with
    /// zeros or truncated from the front, labeled `0s..`
    pub fn seeded(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let values: Vec<u32> = if capacity <= SEED.len() {
            SEED[SEED.len() - capacity..].to_vec()
        } else {
            std::iter::repeat(0).take(capacity - SEED.len()).chain(SEED).collect()
        };
        let samples = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| SeriesSample { label: label(i as u64), value })
            .collect();
        Self { samples, capacity, clock: capacity as u64 - 1 }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clock value of the newest sample
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Oldest first
    pub fn samples(&self) -> impl ExactSizeIterator<Item = &SeriesSample> + '_ {
        self.samples.iter()
    }

    pub fn to_vec(&self) -> Vec<SeriesSample> {
        self.samples.iter().cloned().collect()
    }

    pub fn newest(&self) -> Option<&SeriesSample> {
        self.samples.back()
    }

    /// Append a sample for the next clock step, evicting the oldest
    pub fn tick(&mut self, value: u32) -> &SeriesSample {
        self.clock += 1;
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(SeriesSample { label: label(self.clock), value });
        &self.samples[self.samples.len() - 1]
    }
}

fn label(clock: u64) -> String {
    format!("{clock}s")
}

/// Map a uniform draw in `[0, 1)` onto an integer in `[0, ceiling)`
pub fn sample_value(unit: f64, ceiling: u32) -> u32 {
    if ceiling == 0 || !unit.is_finite() {
        return 0;
    }
    let v = (unit.clamp(0.0, 1.0) * ceiling as f64).floor() as u32;
    v.min(ceiling - 1)
}

// ========================
// Chart Geometry
// ========================

/// Plot area inside the SVG viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: u32,
}

/// Screen positions for `samples` on a fixed `[0, ceiling]` y-domain
pub fn chart_points<'a>(
    samples: impl ExactSizeIterator<Item = &'a SeriesSample>,
    area: PlotArea,
    ceiling: u32,
) -> Vec<ChartPoint> {
    let n = samples.len();
    let step = if n > 1 { area.width / (n - 1) as f64 } else { 0.0 };
    let ceiling = ceiling.max(1) as f64;
    samples
        .enumerate()
        .map(|(i, s)| ChartPoint {
            x: if n > 1 { area.left + step * i as f64 } else { area.left + area.width / 2.0 },
            y: area.bottom() - (s.value as f64 / ceiling).min(1.0) * area.height,
            label: s.label.clone(),
            value: s.value,
        })
        .collect()
}

/// SVG `points` attribute for a polyline through `points`
pub fn polyline(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Y-axis ticks every `step` from 0 through `ceiling`
pub fn y_ticks(ceiling: u32, step: u32) -> Vec<u32> {
    let step = step.max(1);
    (0..=ceiling).step_by(step as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_of(sample: &SeriesSample) -> u64 {
        sample.label.trim_end_matches('s').parse().unwrap()
    }

    #[test]
    fn test_seeded_buffer_matches_reference() {
        let series = LiveSeries::seeded(6);
        let labels: Vec<_> = series.samples().map(|s| s.label.as_str()).collect();
        let values: Vec<_> = series.samples().map(|s| s.value).collect();
        assert_eq!(labels, ["0s", "1s", "2s", "3s", "4s", "5s"]);
        assert_eq!(values, [12, 19, 3, 5, 2, 3]);
        assert_eq!(series.clock(), 5);
    }

    #[test]
    fn test_ticks_keep_length_and_advance_labels() {
        let mut series = LiveSeries::seeded(6);
        for n in 0..40u32 {
            let before = clock_of(series.newest().unwrap());
            let added = series.tick(n % 30).clone();
            assert_eq!(series.len(), 6);
            assert_eq!(clock_of(&added), before + 1);
            assert_eq!(series.newest(), Some(&added));
        }
        assert_eq!(series.samples().next().unwrap().label, "40s");
        assert_eq!(series.newest().unwrap().label, "45s");
    }

    #[test]
    fn test_fifo_order_oldest_first() {
        let mut series = LiveSeries::seeded(6);
        series.tick(7);
        series.tick(8);
        let values: Vec<_> = series.samples().map(|s| s.value).collect();
        assert_eq!(values, [3, 5, 2, 3, 7, 8]);
    }

    #[test]
    fn test_instances_do_not_share_clock() {
        let mut a = LiveSeries::seeded(6);
        let mut b = LiveSeries::seeded(6);
        a.tick(1);
        a.tick(2);
        assert_eq!(b.tick(3).label, "6s");
        assert_eq!(a.newest().unwrap().label, "7s");
    }

    #[test]
    fn test_other_capacities() {
        let small = LiveSeries::seeded(3);
        assert_eq!(small.to_vec().iter().map(|s| s.value).collect::<Vec<_>>(), [5, 2, 3]);
        let large = LiveSeries::seeded(8);
        assert_eq!(large.len(), 8);
        assert_eq!(large.newest().unwrap().label, "7s");
        assert_eq!(LiveSeries::seeded(0).capacity(), 1);
    }

    #[test]
    fn test_sample_value_range() {
        assert_eq!(sample_value(0.0, 30), 0);
        assert_eq!(sample_value(0.999_999, 30), 29);
        assert_eq!(sample_value(1.0, 30), 29);
        assert_eq!(sample_value(0.5, 30), 15);
        assert_eq!(sample_value(f64::NAN, 30), 0);
        assert_eq!(sample_value(0.5, 0), 0);
    }

    #[test]
    fn test_chart_points_follow_buffer_order() {
        let series = LiveSeries::seeded(6);
        let area = PlotArea { left: 30.0, top: 10.0, width: 250.0, height: 150.0 };
        let points = chart_points(series.samples(), area, 30);
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].x, 30.0);
        assert_eq!(points[5].x, 280.0);
        assert_eq!(points[0].label, "0s");
        // 12 of 30 is 40% up from the bottom
        assert!((points[0].y - (160.0 - 60.0)).abs() < 1e-9);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
        assert!(polyline(&points).starts_with("30.0,100.0 "));
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(30, 10), [0, 10, 20, 30]);
        assert_eq!(y_ticks(5, 0), [0, 1, 2, 3, 4, 5]);
    }
}
