/// Proof that both `A` and `B` hold.
///
/// The witnesses are private: the only way in is [`and_i`] and the only ways out
/// are the projections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Conjunction<A, B>(A, B);

/// Construct and from its parts
pub fn and_i<A, B>(a: A, b: B) -> Conjunction<A, B> {
    Conjunction(a, b)
}

impl<A, B> Conjunction<A, B> {
    /// Extract the left component of and
    pub fn and_e1(self) -> A {
        self.0
    }

    /// Extract the right component of and
    pub fn and_e2(self) -> B {
        self.1
    }

    /// Extract both components of and
    pub fn and_e(self) -> (A, B) {
        (self.0, self.1)
    }
}
