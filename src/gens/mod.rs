/*!
# Random Weighted Graph Generators

Builder-configured generators for random weighted graphs, mainly used to test that the
different algorithms agree with each other.

The typical usage workflow is:

1. Create a generator instance (e.g., `WeightedGnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).weights(1..=10)`).
3. Generate edges via `generate()` or `stream()` from a caller-provided [`Rng`].

The [`RandomWeightedGraph`] trait wraps these into constructors for every graph
representation that can be built from scratch.

```
use wgraphs::{prelude::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
let graph = Graph::random_connected(rng, 10, 0.2, 1..=5);

assert_eq!(graph.number_of_nodes(), 10);
assert!(graph.number_of_edges() >= 18);
```
*/

use std::ops::RangeInclusive;

use rand::{Rng, distr::uniform::SampleUniform};
use rand_distr::Uniform;

use crate::prelude::*;

mod gnp;
mod spanning_tree;

pub use gnp::*;
pub use spanning_tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that draw edge weights uniformly from an inclusive range.
pub trait WeightsGen<W>: Sized {
    /// Sets the range edge weights are drawn from.
    fn set_weights(&mut self, weights: RangeInclusive<W>);

    /// Sets the range edge weights are drawn from.
    fn weights(mut self, weights: RangeInclusive<W>) -> Self {
        self.set_weights(weights);
        self
    }
}

/// General trait for a configurable random weighted edge generator.
pub trait WeightedGraphGenerator<W> {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<W>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng;
}

/// Builds a uniform weight distribution.
/// ** Panics if the range is empty **
fn weight_distribution<W>(weights: &RangeInclusive<W>) -> Uniform<W>
where
    W: EdgeWeight + SampleUniform,
{
    Uniform::new_inclusive(*weights.start(), *weights.end()).expect("Weight range must not be empty!")
}

/// Trait for building random weighted graph instances.
///
/// Implemented for every graph that supports [`GraphFromScratch`] and whose weight type can
/// be sampled uniformly.
pub trait RandomWeightedGraph: GraphFromScratch {
    /// Creates a directed `G(n,p)` graph without self-loops: each ordered pair of distinct
    /// nodes becomes an edge with probability `p`.
    fn random_gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Self::Weight>) -> Self
    where
        R: Rng;

    /// Creates an undirected `G(n,p)` graph without self-loops; both directions of an edge
    /// share the same weight.
    fn random_gnp_undirected<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: RangeInclusive<Self::Weight>,
    ) -> Self
    where
        R: Rng;

    /// Creates a random undirected spanning tree on `n` nodes
    fn random_spanning_tree<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Self::Weight>) -> Self
    where
        R: Rng;

    /// Creates a connected undirected graph: a random spanning tree plus the edges of an
    /// undirected `G(n,p)` graph
    fn random_connected<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: RangeInclusive<Self::Weight>,
    ) -> Self
    where
        R: Rng;
}

impl<G> RandomWeightedGraph for G
where
    G: GraphFromScratch,
    G::Weight: SampleUniform,
{
    fn random_gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Self::Weight>) -> Self
    where
        R: Rng,
    {
        let gnp = WeightedGnp::new().nodes(n).prob(p).weights(weights);
        Self::from_edges(n, gnp.stream(rng)).expect("Generated edges are within range")
    }

    fn random_gnp_undirected<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: RangeInclusive<Self::Weight>,
    ) -> Self
    where
        R: Rng,
    {
        let gnp = WeightedGnp::new()
            .nodes(n)
            .prob(p)
            .weights(weights)
            .undirected();
        Self::from_edges(n, gnp.stream(rng)).expect("Generated edges are within range")
    }

    fn random_spanning_tree<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Self::Weight>) -> Self
    where
        R: Rng,
    {
        let tree = RandomSpanningTree::new().nodes(n).weights(weights);
        Self::from_undirected_edges(n, tree.stream(rng)).expect("Generated edges are within range")
    }

    fn random_connected<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: RangeInclusive<Self::Weight>,
    ) -> Self
    where
        R: Rng,
    {
        let mut edges = RandomSpanningTree::new()
            .nodes(n)
            .weights(weights.clone())
            .generate(rng);
        edges.extend(
            WeightedGnp::new()
                .nodes(n)
                .prob(p)
                .weights(weights)
                .stream(rng)
                .filter(|e| e.is_normalized()),
        );
        Self::from_undirected_edges(n, edges).expect("Generated edges are within range")
    }
}
