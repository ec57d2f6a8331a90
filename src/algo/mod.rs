/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the derived views in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use trigraph::algo::*;
```
and gain access to traversal, connectivity and component statistics.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod stats;
mod traversal;

use crate::{prelude::*, *};

pub use connectivity::*;
pub use stats::*;
pub use traversal::*;
