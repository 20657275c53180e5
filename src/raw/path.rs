use smallvec::SmallVec;

use super::handle::Handle;
use super::node::Dir;

/// One step of a descent: the node we stood on and the branch we took from it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Step {
    pub(crate) node: Handle,
    pub(crate) dir: Dir,
}

/// The steps from the root down to the point where a search stopped.
///
/// The last step names the owner of the link being worked on: the node it points
/// at (for a match) or the empty link a new leaf goes into (for a miss). An empty
/// path means that owner is the root.
///
/// Weight balance bounds the height to a small multiple of `log2(n)`, so the
/// inline capacity covers any realistic set without spilling.
pub(crate) type Path = SmallVec<[Step; 64]>;
