use std::{fmt, rc::Rc};

/// Proof of `B` under the hypothesis `A`.
///
/// Built from a closure that may capture witnesses already established by the
/// enclosing proof. The closure must be total and pure: the existence of the
/// deduction is the proof obligation, so a closure that cannot produce `B` for
/// some `A` is a defect in the proof, not something this type recovers from.
/// Any panic raised by the closure propagates unchanged.
///
/// Deductions are immutable, so clones share the same closure. `'a` bounds the
/// witnesses the closure borrows from the enclosing proof.
pub struct Deduction<'a, A, B>(Rc<dyn Fn(A) -> B + 'a>);

impl<'a, A, B> Deduction<'a, A, B> {
    pub fn new(step: impl Fn(A) -> B + 'a) -> Self {
        Deduction(Rc::new(step))
    }

    /// Derive `B` from a witness of the hypothesis.
    pub fn apply(&self, hypothesis: A) -> B {
        (self.0)(hypothesis)
    }
}

impl<'a, A: 'a, B: 'a> Deduction<'a, A, B> {
    /// From `A ⊢ B` and `B ⊢ C` derive `A ⊢ C`.
    pub fn then<C: 'a>(&self, next: &Deduction<'a, B, C>) -> Deduction<'a, A, C> {
        let first = self.clone();
        let next = next.clone();
        Deduction::new(move |a| next.apply(first.apply(a)))
    }
}

impl<'a, A: 'a> Deduction<'a, A, A> {
    /// `A ⊢ A`
    pub fn identity() -> Self {
        Deduction::new(|a| a)
    }
}

impl<A, B> Clone for Deduction<'_, A, B> {
    fn clone(&self) -> Self {
        Deduction(Rc::clone(&self.0))
    }
}

impl<A, B> fmt::Debug for Deduction<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deduction(..)")
    }
}
