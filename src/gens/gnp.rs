use std::ops::RangeInclusive;

use rand::distr::{Bernoulli, Distribution};

use crate::{gens::*, utils::*};

/// Weighted `G(n,p)` generator: every ordered pair `(u, v)` of distinct nodes becomes an edge
/// with probability `p`, independently of all other pairs. Weights are drawn uniformly from
/// the configured inclusive range.
///
/// In undirected mode only pairs `u < v` are drawn and each is emitted in both directions
/// with a single shared weight.
///
/// ```
/// use wgraphs::gens::*;
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(3);
/// let edges = WeightedGnp::new().nodes(10).prob(1.0).weights(-2..=2).generate(rng);
///
/// assert_eq!(edges.len(), 90);
/// assert!(edges.iter().all(|e| !e.is_loop() && (-2..=2).contains(&e.weight())));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGnp<W> {
    n: NumNodes,
    p: Option<f64>,
    weights: Option<RangeInclusive<W>>,
    undirected: bool,
}

impl<W> Default for WeightedGnp<W> {
    fn default() -> Self {
        Self {
            n: 0,
            p: None,
            weights: None,
            undirected: false,
        }
    }
}

impl<W> WeightedGnp<W> {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = Some(prob);
        self
    }

    /// Draws every unordered pair once and emits it in both directions
    pub fn undirected(mut self) -> Self {
        self.undirected = true;
        self
    }
}

impl<W> NumNodesGen for WeightedGnp<W> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<W> WeightsGen<W> for WeightedGnp<W> {
    fn set_weights(&mut self, weights: RangeInclusive<W>) {
        self.weights = Some(weights);
    }
}

impl<W> WeightedGraphGenerator<W> for WeightedGnp<W>
where
    W: EdgeWeight + SampleUniform,
{
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng,
    {
        let p = self.p.expect("Probability of WeightedGnp was not set!");
        let coin = Bernoulli::new(p).expect("Probability was validated");
        let weights = weight_distribution(
            self.weights
                .as_ref()
                .expect("Weights of WeightedGnp were not set!"),
        );

        let n = self.n;
        let undirected = self.undirected;

        (0..n)
            .flat_map(move |u| {
                let first = if undirected { u + 1 } else { 0 };
                (first..n).map(move |v| (u, v))
            })
            .filter(|&(u, v)| u != v)
            .filter_map(move |(u, v)| {
                if !coin.sample(rng) {
                    return None;
                }
                let edge = WeightedEdge(u, v, weights.sample(rng));
                Some(std::iter::once(edge).chain(undirected.then(|| edge.reverse())))
            })
            .flatten()
    }
}
