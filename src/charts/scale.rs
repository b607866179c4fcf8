//! Linear Scale
//! Maps a data domain onto a pixel range and picks readable tick values.

/// Continuous linear mapping `domain -> range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range. A zero-width domain maps everything
    /// to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Roughly `target` evenly spaced values inside the domain, on a 1/2/5 step.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if lo == hi {
            return vec![lo];
        }

        let step = nice_step(hi - lo, target.max(1));
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }

    /// Tick step chosen by [`ticks`](Self::ticks) for the same target.
    pub fn tick_step(&self, target: usize) -> f64 {
        nice_step((self.domain.1 - self.domain.0).abs(), target.max(1))
    }
}

fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Decimal places needed to print ticks spaced `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_endpoints_and_midpoint() {
        let x = LinearScale::new((1960.0, 2020.0), (0.0, 600.0));
        assert_eq!(x.map(1960.0), 0.0);
        assert_eq!(x.map(2020.0), 600.0);
        assert_eq!(x.map(1990.0), 300.0);
    }

    #[test]
    fn test_inverted_range() {
        let y = LinearScale::new((0.0, 10.0), (430.0, 0.0));
        assert_eq!(y.map(0.0), 430.0);
        assert_eq!(y.map(10.0), 0.0);
        assert_eq!(y.map(5.0), 215.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_middle() {
        let x = LinearScale::new((2000.0, 2000.0), (0.0, 700.0));
        assert_eq!(x.map(2000.0), 350.0);
        assert_eq!(x.ticks(10), vec![2000.0]);
    }

    #[test]
    fn test_year_ticks() {
        let x = LinearScale::new((1960.0, 2023.0), (0.0, 700.0));
        let ticks = x.ticks(10);
        assert_eq!(ticks.first(), Some(&1960.0));
        assert_eq!(ticks.last(), Some(&2020.0));
        assert!(ticks.windows(2).all(|w| (w[1] - w[0] - 10.0).abs() < 1e-9));
    }

    #[test]
    fn test_ticks_stay_inside_domain() {
        let y = LinearScale::new((12.9, 15.8), (430.0, 0.0));
        let ticks = y.ticks(10);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|&t| (12.9..=15.8).contains(&t)));
        assert_eq!(precision_for_step(y.tick_step(10)), 1);
    }

    #[test]
    fn test_precision_for_step() {
        assert_eq!(precision_for_step(10.0), 0);
        assert_eq!(precision_for_step(1.0), 0);
        assert_eq!(precision_for_step(0.5), 1);
        assert_eq!(precision_for_step(0.2), 1);
        assert_eq!(precision_for_step(0.05), 2);
    }
}
