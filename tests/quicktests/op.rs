use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Delete the K from the data structure
    Delete(K),
    /// Compare the in-order walk against the model
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are weighted up so trees
    /// actually grow between deletes.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).copied() {
            Some(0) => Op::Insert(K::arbitrary(g)),
            Some(1) => Op::Delete(K::arbitrary(g)),
            _ => Op::Iter,
        }
    }
}
