use crate::{
    deduction::Deduction,
    implication::{imply_i, Implication},
};

/// Truth is always provably true.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Truth;

/// Falsehood has no proof.
///
/// ```compile_fail
/// let _ = curry_howard::Falsity;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Falsity {}

/// `¬A`, i.e. `A → ⊥`
pub type Negation<'a, A> = Implication<'a, A, Falsity>;

/// Introduce truth without premises
pub fn truth_i() -> Truth {
    Truth
}

impl Falsity {
    /// If we have proven falsehood, we are in contradiction and everything is true.
    pub fn absurd<P>(self) -> P {
        match self {}
    }
}

/// If we can prove falsehood from `A`, then negation of `A` has to hold.
pub fn not_i<A>(deduction: Deduction<'_, A, Falsity>) -> Negation<'_, A> {
    imply_i(deduction)
}

/// `A` and `¬A` together are a contradiction.
pub fn not_e<A>(a: A, not_a: &Negation<'_, A>) -> Falsity {
    not_a.imply_e(a)
}

#[cfg(test)]
mod tests {
    use super::{not_e, not_i, truth_i, Falsity, Negation, Truth};
    use crate::{
        deduction::Deduction,
        disjunction::{or_i_right, Disjunction},
    };

    #[test]
    fn truth_needs_no_premises() {
        assert_eq!(truth_i(), Truth);
    }

    #[test]
    fn falsity_side_of_disjunction_is_eliminated_by_absurd() {
        // ⊥ ∨ Q ⊢ Q
        let d: Disjunction<Falsity, &str> = or_i_right("q");
        let q = d.or_e(&Deduction::new(Falsity::absurd), &Deduction::identity());
        assert_eq!(q, "q");
    }

    #[test]
    fn negation_of_a_side_selects_the_other() {
        // A ∨ B, ¬A ⊢ B
        fn disjunctive_syllogism(d: Disjunction<u8, char>, not_a: Negation<'_, u8>) -> char {
            d.or_e(
                &Deduction::new(move |a: u8| not_e(a, &not_a).absurd()),
                &Deduction::identity(),
            )
        }

        let refute = not_i(Deduction::new(|_: u8| -> Falsity { panic!("u8 refuted") }));
        assert_eq!(disjunctive_syllogism(or_i_right('b'), refute), 'b');
    }
}
