use crate::BigUnsigned;
use rayon::prelude::*;

impl BigUnsigned {
    /// Schoolbook product of `lhs` and `rhs`, written into `out`
    ///
    /// Partial products are computed on the rayon pool and summed pairwise,
    /// each carrying the decimal offset of its lowest digit.
    pub(crate) fn long_multiply(lhs: &[u8], rhs: &[u8], out: &mut Vec<u8>) {
        let (offset, digits) = rhs
            .par_iter()
            .enumerate()
            .map(|(shift, &digit)| (shift, Self::scalar_product(lhs, digit)))
            .reduce(|| (0, Vec::new()), Self::merge_partials);

        out.clear();
        out.resize(offset, 0);
        out.extend_from_slice(&digits);

        Self::normalize(out);
    }

    fn merge_partials(a: (usize, Vec<u8>), b: (usize, Vec<u8>)) -> (usize, Vec<u8>) {
        if a.1.is_empty() {
            return b;
        }
        if b.1.is_empty() {
            return a;
        }

        let (low, high) = if a.0 <= b.0 { (a, b) } else { (b, a) };
        let (offset, mut digits) = low;
        Self::add_shifted(&mut digits, &high.1, high.0 - offset);

        (offset, digits)
    }
}

#[cfg(test)]
mod merge {
    use crate::BigUnsigned;

    #[test]
    fn keeps_lower_offset() {
        // 3 * 10^2 + 45 * 10^1 = 750
        let merged = BigUnsigned::merge_partials((2, vec![3]), (1, vec![5, 4]));

        assert_eq!(merged, (1, vec![5, 7]))
    }

    #[test]
    fn identity_is_ignored() {
        let merged = BigUnsigned::merge_partials((0, Vec::new()), (4, vec![1]));

        assert_eq!(merged, (4, vec![1]))
    }
}
