/// Upper bound on the number of expanded features a configuration may produce
pub const MAX_FEATURES_DIM: usize = 1 << 24;

/// Number of monomials of degree at most `d` in `n` variables, C(n + d, d).
/// Returns None if that exceeds `MAX_FEATURES_DIM`.
pub(crate) fn num_monomials(n: usize, d: usize) -> Option<usize> {
    if n == 0 {
        return Some(1);
    }
    let mut count: usize = 1;
    for k in 1..=d {
        // count stays C(n + k, k) after every step
        count = count.checked_mul(n.checked_add(k)?)? / k;
        if count > MAX_FEATURES_DIM {
            return None;
        }
    }
    Some(count)
}

/// A monomial extending an earlier (lower degree) one by a single coordinate
#[derive(Debug, Clone, Copy)]
pub(crate) struct Monomial {
    /// Index of the monomial this one extends, the constant has none
    parent: Option<usize>,
    /// The coordinate multiplied onto the parent
    coord: usize,
    /// Exponent of `coord` in this monomial
    pub(crate) run: usize,
    /// Total degree
    pub(crate) degree: usize,
}

/// All monomials of degree at most `d` over the input coordinates.
///
/// Ordered by ascending degree and, within a degree, lexicographically by
/// their non-decreasing coordinate index tuples, so the constant comes first
/// followed by the linear terms.
#[derive(Debug, Clone)]
pub(crate) struct MonomialBasis {
    input_dim: usize,
    monomials: Vec<Monomial>,
}

impl MonomialBasis {
    /// Enumerate the basis. The caller has checked the size with `num_monomials`.
    pub(crate) fn new(input_dim: usize, d: usize) -> Self {
        let mut monomials = vec![Monomial {
            parent: None,
            coord: 0,
            run: 0,
            degree: 0,
        }];

        let mut prev_level = 0..1;
        for degree in 1..=d {
            let start = monomials.len();
            for p in prev_level {
                let parent = monomials[p];
                let first = if parent.degree == 0 { 0 } else { parent.coord };
                for coord in first..input_dim {
                    let run = if parent.degree > 0 && coord == parent.coord {
                        parent.run + 1
                    } else {
                        1
                    };
                    monomials.push(Monomial {
                        parent: Some(p),
                        coord,
                        run,
                        degree,
                    });
                }
            }
            if monomials.len() == start {
                // no coordinates to extend with
                break;
            }
            prev_level = start..monomials.len();
        }

        Self {
            input_dim,
            monomials,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.monomials.len()
    }

    /// Highest degree actually present in the basis
    pub(crate) fn max_degree(&self) -> usize {
        self.monomials.last().map(|m| m.degree).unwrap_or(0)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Monomial> {
        self.monomials.iter()
    }

    /// Evaluate every monomial at `x`. Each monomial's weight is its parent's
    /// weight times `steps[i]`, and the constant is weighted by `scale * steps[0]`.
    /// Weights are never formed on their own, only as part of a value.
    pub(crate) fn evaluate(&self, x: &[f64], steps: &[f64], scale: f64) -> Vec<f64> {
        debug_assert_eq!(x.len(), self.input_dim);
        debug_assert_eq!(steps.len(), self.len());

        // parents always precede their children
        let mut values: Vec<f64> = Vec::with_capacity(self.len());
        for (m, step) in self.monomials.iter().zip(steps.iter()) {
            let v = match m.parent {
                None => scale * step,
                Some(p) => values[p] * x[m.coord] * step,
            };
            values.push(v);
        }

        values
    }
}
