/*!
`wgraphs` is a library of classical algorithms on **w**eighted directed graphs:
single-source shortest paths, minimum spanning trees and the priority-queue and
disjoint-set machinery they rely on.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `WeightedEdge(from, to, weight)` where the weight
is any primitive integer type (see [`EdgeWeight`](crate::weight::EdgeWeight)).
Signed weights are required for negative edges (Bellman-Ford).

Edges are always **directed**. An undirected edge is stored as two opposing directed edges
of the same weight, see [`add_undirected_edge`](crate::ops::GraphEdgeEditing::add_undirected_edge).
Nodes may carry an optional label.

Path lengths are [`Distance`](crate::weight::Distance)s, which are either finite or `Infinite`.

### Available Representations

See the [`repr`] module:

- [`WeightedAdjArray`](crate::repr::WeightedAdjArray): growable, supports appending nodes and edges
- [`WeightedCsrGraph`](crate::repr::WeightedCsrGraph): immutable, compact

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
Alternatively, the common functionalities are implemented via traits on the graph itself, making them usable without configuring the algorithm beforehand.

Algorithms only borrow the graph immutably; all per-run state (distances, predecessors,
keys) lives in the returned result objects.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, errors, basic graph operations, and all graph representations,
- [`algo`] includes BFS distances, Dijkstra, Bellman-Ford, Kruskal and Prim, also available as trait methods such as `graph.dijkstra(source, variant)`,
- [`gens`] includes random weighted graph generators,
- [`utils`] includes the indexed binary heap (plus heap sort) and union-find.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let mut g = Graph::new(3);
g.add_edge(0, 1, 4).unwrap();
g.add_edge(1, 2, -2).unwrap();
g.add_edge(0, 2, 3).unwrap();

let result = g.bellman_ford(0).unwrap();
assert!(result.is_success());
assert_eq!(result.paths().distance(2), Distance::Finite(2));
```

# Logging

Algorithms report run summaries via the [`log`] facade (`debug`) and warn about
disconnected graphs and negative cycles (`warn`). No logger is installed by this crate.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod weight;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, the error type, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*, weight::*};
}
