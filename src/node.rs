/*!
# Node Representation

We choose `Node = u32` as almost all instances we care about have far fewer than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) allows directly manipulating node values without abstracting over them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
