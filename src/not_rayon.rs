use crate::BigUnsigned;

impl BigUnsigned {
    /// Schoolbook product of `lhs` and `rhs`, written into `out`
    ///
    /// Every digit of `rhs` yields one partial product which is added into
    /// the running total at its decimal offset.
    pub(crate) fn long_multiply(lhs: &[u8], rhs: &[u8], out: &mut Vec<u8>) {
        out.clear();

        for (shift, &digit) in rhs.iter().enumerate() {
            let partial = Self::scalar_product(lhs, digit);
            Self::add_shifted(out, &partial, shift);
        }

        Self::normalize(out);
    }
}
