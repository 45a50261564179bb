mod bitvec;

pub use crate::bit::Word;
pub use bitvec::BitVec;
