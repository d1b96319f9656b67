mod arena;
mod handle;
mod node;
mod raw_kbtree;

pub(crate) use handle::Handle;
pub(crate) use raw_kbtree::RawKBTree;
