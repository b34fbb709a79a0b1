//! Dense index types for interned identifiers.
//!
//! Nodes and edges arrive from JSON named by arbitrary strings.  The
//! network resolves each string exactly once at build time; afterwards the
//! shortest-path matrices, the adjacency keys, and every per-step lookup
//! refer to entities by their position in insertion order.  Wrapping the
//! raw `u32` keeps node and edge subscripts from being mixed up at compile
//! time, at zero runtime cost.
//!
//! `u32::MAX` is reserved as the [`INVALID`](NodeIdx::INVALID) marker; the
//! Floyd–Warshall next-hop table stores it for unreachable pairs.

/// Define a dense `u32` index newtype.
macro_rules! dense_idx {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub u32);

        impl $name {
            /// Marker for "refers to nothing".  Never a live index: the
            /// networks this engine targets are orders of magnitude
            /// smaller than `u32::MAX`.
            pub const INVALID: $name = $name(u32::MAX);

            /// The index for the entry at container position `i`.
            #[inline]
            pub fn new(i: usize) -> $name {
                $name(i as u32)
            }

            /// The container position this index refers to.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

dense_idx! {
    /// Position of a node in the network's insertion order.
    pub struct NodeIdx;
}

dense_idx! {
    /// Position of a directed edge in the network's insertion order.
    pub struct EdgeIdx;
}
