/*!
# Graph Algorithms

This module provides the **shortest-path** and **minimum-spanning-tree** algorithms of this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```

Every algorithm is a configurable struct (e.g. [`Dijkstra`], [`Prim`]) that borrows the graph
immutably and returns an independent result object ([`ShortestPaths`], [`BellmanFordResult`],
[`SpanningTree`]). The most common calls are also available directly on every graph via the
[`ShortestPath`] and [`MinimumSpanningTree`] traits:

```rust
use wgraphs::{prelude::*, algo::*};

let g = Graph::from_undirected_edges(4, [(0, 1, 3), (1, 2, 1), (2, 3, 4), (0, 3, 2)]).unwrap();

assert_eq!(g.dijkstra(0, DijkstraVariant::ArrayScan).unwrap().distance(2), Distance::Finite(4));
assert_eq!(g.prim(0, PrimVariant::BinaryHeap).unwrap().total_weight(), Some(6));
assert_eq!(g.kruskal().total_weight(), Some(6));
```
*/

mod bellman_ford;
mod bfs;
mod dijkstra;
mod distances;
mod kruskal;
mod prim;
mod spanning_tree;

use crate::{error::Result, prelude::*, utils::*};
use log::{debug, trace, warn};

pub use bellman_ford::*;
pub use bfs::*;
pub use dijkstra::*;
pub use distances::*;
pub use kruskal::*;
pub use prim::*;
pub use spanning_tree::*;
