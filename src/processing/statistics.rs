use std::collections::HashMap;
use std::fmt;

/// Most frequent value(s) of a data set.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Exactly one value has the highest frequency.
    Single(f64),
    /// Several values tie for the highest frequency, in first-seen order.
    Multiple(Vec<f64>),
    /// Every value occurs once (and there are at least two values).
    NoUniqueMode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single(v) => write!(f, "{v:?}"),
            Mode::Multiple(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v:?}")?;
                }
                write!(f, "]")
            }
            Mode::NoUniqueMode => write!(f, "No unique mode"),
        }
    }
}

/// Descriptive statistics for a sequence of numbers
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub variance: f64,
    pub std_dev: f64,
}

impl Statistics {
    /// Compute every statistic over `data`.
    /// Empty input yields zero for everything instead of failing.
    pub fn compute(data: &[f64]) -> Self {
        let mean = mean(data);
        let variance = population_variance(data, mean);

        let stats = Statistics {
            count: data.len(),
            mean,
            median: median(data),
            mode: mode(data),
            variance,
            std_dev: std_dev(variance),
        };
        tracing::debug!("Computed statistics: {:?}", stats);
        stats
    }
}

/// Arithmetic mean by plain linear summation.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Middle value of the sorted data, or the mean of the two middle values.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut vals = data.to_vec();
    vals.sort_by(|a, b| a.total_cmp(b));

    let count = vals.len();
    if count % 2 == 0 {
        (vals[count / 2 - 1] + vals[count / 2]) / 2.0
    } else {
        vals[count / 2]
    }
}

/// Most frequent value(s), see [`Mode`].
pub fn mode(data: &[f64]) -> Mode {
    if data.is_empty() {
        return Mode::Single(0.0);
    }

    // (value, frequency) in first-seen order, indexed by bit pattern.
    let mut freqs: Vec<(f64, usize)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();
    for &v in data {
        // -0.0 and 0.0 compare equal, so they share a bucket.
        let v = if v == 0.0 { 0.0 } else { v };
        match index.get(&v.to_bits()) {
            Some(&i) => freqs[i].1 += 1,
            None => {
                index.insert(v.to_bits(), freqs.len());
                freqs.push((v, 1));
            }
        }
    }

    let max_count = freqs.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let modes: Vec<f64> = freqs
        .iter()
        .filter(|&&(_, c)| c == max_count)
        .map(|&(v, _)| v)
        .collect();

    if modes.len() == data.len() && data.len() > 1 {
        Mode::NoUniqueMode
    } else if modes.len() == 1 {
        Mode::Single(modes[0])
    } else {
        Mode::Multiple(modes)
    }
}

/// Population variance: mean squared deviation from `mean` (divisor n).
pub fn population_variance(data: &[f64], mean: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / data.len() as f64
}

pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e9_f64..1e9, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn variance_non_negative(data in finite_vec(1, 100)) {
            let stats = Statistics::compute(&data);
            prop_assert!(stats.variance >= 0.0, "variance must be >= 0, got {}", stats.variance);
        }

        #[test]
        fn std_dev_is_sqrt_of_variance(data in finite_vec(1, 100)) {
            let stats = Statistics::compute(&data);
            prop_assert_eq!(stats.std_dev, stats.variance.sqrt());
        }

        #[test]
        fn median_matches_sorted_middle(data in finite_vec(1, 100)) {
            let mut sorted = data.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let n = sorted.len();
            let expected = if n % 2 == 1 {
                sorted[n / 2]
            } else {
                (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
            };
            prop_assert_eq!(median(&data), expected);
        }

        #[test]
        fn mean_within_bounds(data in finite_vec(1, 100)) {
            let m = mean(&data);
            let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let tol = 1e-9 * lo.abs().max(hi.abs()).max(1.0);
            prop_assert!(m >= lo - tol && m <= hi + tol);
        }
    }
}
