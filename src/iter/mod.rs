#![allow(unreachable_pub)] // pub exports below erroneously complain without this

mod ref_iter;
pub use ref_iter::Iter;

mod owned;
pub use owned::OwnedIter;
