use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Exact non-negative fraction `num / den` with `den > 0`, compared by cross-multiplication.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    pub num: u32,
    pub den: u32,
}

impl Ratio {
    pub fn new(num: u32, den: u32) -> Self {
        assert!(den > 0, "ratio with zero denominator");
        Self { num, den }
    }

    /// The same fraction in lowest terms
    pub fn reduced(self) -> Self {
        let g = gcd(self.num, self.den);
        Self {
            num: self.num / g,
            den: self.den / g,
        }
    }

    pub fn value(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Returns `true` if `self * factor` exceeds `bound`.
    pub fn scaled_exceeds(&self, factor: u32, bound: u32) -> bool {
        self.num as u64 * factor as u64 > bound as u64 * self.den as u64
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as u64 * other.den as u64;
        let rhs = other.num as u64 * self.den as u64;
        lhs.cmp(&rhs)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} (~{:.3})", self.num, self.den, self.value())
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// All ratios `b / a` with `b` in `[lb, ub]` and `a` in `[1, n_aisles]`, in lowest terms,
/// deduplicated and sorted ascending.
///
/// Picked units and visited aisles of any wave are integers in these ranges,
/// so the optimal ratio is always a member of this set.
pub fn candidate_ratios(lb: u32, ub: u32, n_aisles: u32) -> Vec<Ratio> {
    if lb > ub || n_aisles == 0 {
        return vec![];
    }
    let mut ratios = (1..=n_aisles)
        .cartesian_product(lb..=ub)
        .map(|(a, b)| Ratio::new(b, a).reduced())
        .map(|r| (r.num, r.den))
        .collect_vec();
    ratios.sort_unstable_by(|&(n1, d1), &(n2, d2)| Ratio::new(n1, d1).cmp(&Ratio::new(n2, d2)));
    ratios.dedup();
    ratios.into_iter().map(|(num, den)| Ratio { num, den }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_exact() {
        assert_eq!(Ratio::new(2, 4), Ratio::new(1, 2));
        assert!(Ratio::new(1, 3) < Ratio::new(1, 2));
        assert!(Ratio::new(5, 1) > Ratio::new(9, 2));
        assert!(Ratio::new(5, 2).scaled_exceeds(3, 7));
        assert!(!Ratio::new(5, 2).scaled_exceeds(2, 5));
    }

    #[test]
    fn candidate_set_is_sorted_and_unique() {
        let ratios = candidate_ratios(2, 5, 2);
        // 1/1 .. 5/1 and 2/2 .. 5/2, with 2/2 == 1/1 and 4/2 == 2/1 removed
        let expected = [(1, 1), (3, 2), (2, 1), (5, 2), (3, 1), (4, 1), (5, 1)]
            .map(|(n, d)| Ratio::new(n, d));
        assert_eq!(ratios, expected.to_vec());
        assert!(ratios.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn candidate_set_with_zero_lower_bound() {
        let ratios = candidate_ratios(0, 1, 3);
        assert_eq!(ratios.first(), Some(&Ratio::new(0, 1)));
        assert_eq!(ratios.len(), 4);
    }

    #[test]
    fn empty_candidate_set() {
        assert!(candidate_ratios(3, 2, 4).is_empty());
        assert!(candidate_ratios(1, 2, 0).is_empty());
    }
}
