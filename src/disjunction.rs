use crate::deduction::Deduction;

/// Proof that `A` or `B` holds.
///
/// Each variant carries the witness for its own side only, so a disjunction whose
/// tag disagrees with its witness cannot be built and the inactive side cannot be
/// read:
///
/// ```compile_fail
/// use curry_howard::{or_i_left, Disjunction};
///
/// let d: Disjunction<u8, char> = or_i_left(1);
/// let _: char = d.1;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disjunction<A, B> {
    Left(A),
    Right(B),
}

/// Construct or from left value
pub fn or_i_left<A, B>(a: A) -> Disjunction<A, B> {
    Disjunction::Left(a)
}

/// Construct or from right value
pub fn or_i_right<A, B>(b: B) -> Disjunction<A, B> {
    Disjunction::Right(b)
}

impl<A, B> Disjunction<A, B> {
    /// Elimination by case analysis: if `C` follows from either side, it follows
    /// from the or.
    ///
    /// Only the deduction matching the active side is applied. Both deductions
    /// must conclude the same proposition:
    ///
    /// ```compile_fail
    /// use curry_howard::{or_i_left, Deduction, Disjunction};
    ///
    /// let d: Disjunction<u8, char> = or_i_left(1);
    /// let f = Deduction::new(|n: u8| n as u32);
    /// let g = Deduction::new(|c: char| c.to_string());
    /// d.or_e(&f, &g);
    /// ```
    pub fn or_e<C>(self, left: &Deduction<'_, A, C>, right: &Deduction<'_, B, C>) -> C {
        match self {
            Disjunction::Left(a) => left.apply(a),
            Disjunction::Right(b) => right.apply(b),
        }
    }
}
