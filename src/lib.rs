//! Natural deduction for propositional logic, encoded as types.
//!
//! Each connective is a generic type and each inference rule is a function or
//! method on it. By the Curry-Howard correspondence, a value of a type is a proof
//! of the proposition that type stands for, so a proof is a function whose
//! generic parameters are the atomic propositions:
//!
//! ```
//! use curry_howard::{and_i, Conjunction};
//!
//! // p ∧ q ⊢ q ∧ p
//! fn commute<P, Q>(premise: Conjunction<P, Q>) -> Conjunction<Q, P> {
//!     let (p, q) = premise.and_e();
//!     and_i(q, p)
//! }
//!
//! assert_eq!(commute(and_i(1, 'q')).and_e(), ('q', 1));
//! ```
//!
//! Ill-formed proofs are type errors and are rejected at compile time.
//!
//! Deductions are expected to be pure. Nothing stops a closure from having
//! side effects, but such a deduction only preserves the type-level guarantee,
//! not the meaning of a constructive proof.

pub mod absurdity;
pub mod conjunction;
pub mod deduction;
pub mod disjunction;
pub mod implication;

pub use absurdity::{not_e, not_i, truth_i, Falsity, Negation, Truth};
pub use conjunction::{and_i, Conjunction};
pub use deduction::Deduction;
pub use disjunction::{or_i_left, or_i_right, Disjunction};
pub use implication::{imply_i, Implication};
