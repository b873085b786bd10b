use fnv::FnvBuildHasher;
use indexmap::IndexMap;

/// Column names mapped to zero-based field indices, in header order.
///
/// A mapping is usually built once from a header row and shared by every
/// record read after it.
pub type Mapping = IndexMap<String, usize, FnvBuildHasher>;
