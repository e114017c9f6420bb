use std::fmt;

use crate::deduction::Deduction;

/// Proof that `A` implies `B`.
///
/// Wraps the deduction discharged by [`imply_i`]; the hypothesis `A` is no longer
/// free once wrapped.
pub struct Implication<'a, A, B> {
    deduction: Deduction<'a, A, B>,
}

/// If we can prove `B` under the hypothesis `A`, then we can lift this proof to the
/// logic level.
pub fn imply_i<A, B>(deduction: Deduction<'_, A, B>) -> Implication<'_, A, B> {
    Implication { deduction }
}

impl<'a, A, B> Implication<'a, A, B> {
    /// We can apply our implication like a function. Also known as modus ponens.
    pub fn imply_e(&self, a: A) -> B {
        self.deduction.apply(a)
    }

    pub fn deduction(&self) -> &Deduction<'a, A, B> {
        &self.deduction
    }
}

impl<'a, A: 'a, B: 'a> Implication<'a, A, B> {
    /// Hypothetical syllogism: from `A → B` and `B → C` derive `A → C`.
    pub fn chain<C: 'a>(&self, next: &Implication<'a, B, C>) -> Implication<'a, A, C> {
        imply_i(self.deduction.then(&next.deduction))
    }
}

impl<A, B> Clone for Implication<'_, A, B> {
    fn clone(&self) -> Self {
        Implication {
            deduction: self.deduction.clone(),
        }
    }
}

impl<A, B> fmt::Debug for Implication<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implication")
            .field("deduction", &self.deduction)
            .finish()
    }
}
