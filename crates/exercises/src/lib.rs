// Textbook data-structure and algorithm routines
// Each module is self-contained; none of them share state

pub mod arrays;
pub mod blockchain;
pub mod bst;
pub mod graph;
pub mod list;
pub mod search;
pub mod strings;

pub use arrays::{min_subarray_len, two_sum};
pub use blockchain::{Block, Blockchain, Transaction};
pub use bst::Bst;
pub use graph::Graph;
pub use list::LinkedList;
pub use search::binary_search;
pub use strings::{is_palindrome, is_subsequence};
