//! Figures shown in the stats ribbon: star fills, sparkline geometry,
//! compact counts and the count-up easing.

/// Per-star fill fractions in `[0, 1]` for `rating` out of `stars`.
pub fn star_fill(rating: f64, stars: u8) -> Vec<f64> {
    let rating = rating.clamp(0.0, f64::from(stars));
    let full = rating.floor();
    let frac = rating - full;
    (0..stars)
        .map(|i| {
            let i = f64::from(i);
            if i < full {
                1.0
            } else if i == full {
                frac
            } else {
                0.0
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    points: Vec<(f64, f64)>,
}

impl Sparkline {
    /// Scales `data` into a `width` x `height` box, keeping a 1 unit margin
    /// above and below. Returns `None` for an empty series.
    pub fn new(data: &[f64], width: f64, height: f64) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = (max - min).max(1.0);
        let span = (data.len() - 1).max(1) as f64;
        let points = data
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = i as f64 * width / span;
                let y = height - ((v - min) / range) * (height - 2.0) - 1.0;
                (x, y)
            })
            .collect();
        Some(Self { points })
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// SVG path data, `M x y L x y ...`.
    pub fn path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                let cmd = if i == 0 { "M" } else { "L" };
                format!("{cmd} {x:.2} {y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn last(&self) -> (f64, f64) {
        // never empty, see `new`
        self.points[self.points.len() - 1]
    }
}

/// `999`, `1.2k` below ten thousand, `12,345` above.
pub fn compact_number(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    if n < 10_000 {
        return format!("{:.1}k", n as f64 / 1_000.0);
    }
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Value of a count-up from 0 to `target` after `elapsed_ms`, easing out
/// (cubic) over `duration_ms`.
pub fn count_up(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    (f64::from(target) * eased).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_star_fill_fractional() {
        let fill = star_fill(4.5, 5);
        assert_eq!(fill.len(), 5);
        assert_eq!(&fill[..4], &[1.0, 1.0, 1.0, 1.0]);
        assert!(close(fill[4], 0.5));
    }

    #[test]
    fn test_star_fill_whole_and_bounds() {
        assert_eq!(star_fill(5.0, 5), vec![1.0; 5]);
        assert_eq!(star_fill(4.0, 5), vec![1.0, 1.0, 1.0, 1.0, 0.0]);
        assert_eq!(star_fill(9.0, 3), vec![1.0; 3]);
        assert_eq!(star_fill(-1.0, 2), vec![0.0, 0.0]);
    }

    #[test]
    fn test_sparkline_empty() {
        assert!(Sparkline::new(&[], 60.0, 20.0).is_none());
    }

    #[test]
    fn test_sparkline_scales_into_box() {
        let data = [10.0, 14.0, 13.0, 15.0, 18.0, 22.0, 20.0, 25.0];
        let line = Sparkline::new(&data, 60.0, 20.0).unwrap();
        assert_eq!(line.points().len(), data.len());
        assert!(line.path().starts_with("M 0.00 19.00 L "));
        let (x, y) = line.last();
        assert!(close(x, 60.0));
        assert!(close(y, 1.0));
        for (_, y) in line.points() {
            assert!((1.0..=19.0).contains(y));
        }
    }

    #[test]
    fn test_sparkline_flat_and_single() {
        let flat = Sparkline::new(&[3.0, 3.0, 3.0], 10.0, 10.0).unwrap();
        assert!(flat.points().iter().all(|(_, y)| close(*y, 9.0)));

        let single = Sparkline::new(&[7.0], 10.0, 10.0).unwrap();
        assert_eq!(single.path(), "M 0.00 9.00");
    }

    #[test]
    fn test_compact_number() {
        assert_eq!(compact_number(0), "0");
        assert_eq!(compact_number(999), "999");
        assert_eq!(compact_number(1_234), "1.2k");
        assert_eq!(compact_number(12_345), "12,345");
        assert_eq!(compact_number(1_234_567), "1,234,567");
        assert_eq!(compact_number(100_000), "100,000");
    }

    #[test]
    fn test_count_up() {
        assert_eq!(count_up(247, 0.0, 800.0), 0);
        assert_eq!(count_up(247, 800.0, 800.0), 247);
        assert_eq!(count_up(247, 5_000.0, 800.0), 247);
        assert_eq!(count_up(247, 10.0, 0.0), 247);

        let mut prev = 0;
        for ms in (0..=800).step_by(16) {
            let v = count_up(247, ms as f64, 800.0);
            assert!(v >= prev);
            assert!(v <= 247);
            prev = v;
        }
        // ease-out runs ahead of linear
        assert!(count_up(100, 400.0, 800.0) > 50);
    }
}
