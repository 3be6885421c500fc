#[cfg(test)]
use itertools::Itertools;

#[cfg(test)]
use crate::prelude::*;

/// Every graph should implement `GraphNodeOrder`, `GraphEdgeOrder` and `WeightedAdjacencyList`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges (parallel edges and loops included) for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge<i64>> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    WeightedEdge(u, v, rng.random_range(-10..=10))
                }).collect_vec()
            }

            /// Edges as expected from `edges()`: grouped by tail, insertion order within a group
            fn grouped(edges: &[WeightedEdge<i64>]) -> Vec<WeightedEdge<i64>> {
                let mut edges = edges.to_vec();
                edges.sort_by_key(|e| e.tail());
                edges
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph<i64>>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: WeightedAdjacencyList) => {
        #[test]
        fn test_weighted_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [0, n * 2, n * 5] {
                    let edges = random_edges(rng, n, m as NumEdges);
                    let graph = <$graph<i64>>::from_edges(n, edges.clone()).unwrap();

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), m);
                    assert_eq!(graph.edges().collect_vec(), grouped(&edges));
                    assert_eq!(
                        graph.has_negative_weights(),
                        edges.iter().any(|e| e.weight() < 0)
                    );

                    for u in 0..n {
                        let expected = edges.iter().filter(|e| e.tail() == u).copied().collect_vec();
                        assert_eq!(graph.edges_of(u), expected.as_slice());
                        assert_eq!(graph.try_edges_of(u).unwrap(), expected.as_slice());
                        assert_eq!(graph.degree_of(u), expected.len() as NumNodes);
                        assert_eq!(
                            graph.neighbors_of(u).collect_vec(),
                            expected.iter().map(|e| e.head()).collect_vec()
                        );
                    }

                    assert_eq!(
                        graph.try_edges_of(n).unwrap_err(),
                        GraphError::InvalidVertex { node: n, number_of_nodes: n }
                    );

                    let undirected = <$graph<i64>>::from_undirected_edges(n, edges.clone()).unwrap();
                    let loops = edges.iter().filter(|e| e.is_loop()).count() as NumEdges;
                    assert_eq!(undirected.number_of_edges(), 2 * m - loops);
                    for e in &edges {
                        assert!(undirected.edges_of(e.head()).contains(&e.reverse()));
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                let edges = random_edges(rng, n, 3 * n);
                let mut graph = <$graph<i64>>::new(n);

                for (i, &WeightedEdge(u, v, w)) in edges.iter().enumerate() {
                    graph.add_edge(u, v, w).unwrap();
                    assert_eq!(graph.number_of_edges(), i as NumEdges + 1);
                    assert_eq!(graph.edges_of(u).last(), Some(&WeightedEdge(u, v, w)));
                }

                let m = graph.number_of_edges();
                assert!(graph.add_edge(n, 0, 1).is_err());
                assert!(graph.add_edge(0, n, 1).is_err());
                assert!(graph.add_undirected_edge(0, n + 3, 1).is_err());
                assert!(graph.add_edges([(0, 0, 1), (0, n, 1)]).is_err());
                assert_eq!(graph.number_of_edges(), m);

                graph.add_undirected_edge(0, n - 1, 9).unwrap();
                assert_eq!(graph.edges_of(0).last(), Some(&WeightedEdge(0, n - 1, 9)));
                if n > 1 {
                    assert_eq!(graph.number_of_edges(), m + 2);
                    assert_eq!(graph.edges_of(n - 1).last(), Some(&WeightedEdge(n - 1, 0, 9)));
                } else {
                    assert_eq!(graph.number_of_edges(), m + 1);
                }
            }
        }
    };
    ($graph:ident: GraphVertexEditing) => {
        #[test]
        fn test_graph_vertex_editing() {
            let mut graph = <$graph<i64>>::new(2);
            assert_eq!(graph.add_vertex(), 2);
            assert_eq!(graph.add_labelled_vertex("x"), 3);
            assert_eq!(graph.add_labelled_vertices(["y", "x"]), 4);

            assert_eq!(graph.number_of_nodes(), 6);
            assert_eq!(graph.label_of(0), None);
            assert_eq!(graph.label_of(3), Some("x"));
            assert_eq!(graph.label_of(5), Some("x"));
            assert_eq!(graph.node_by_label("x"), Some(3));
            assert_eq!(graph.node_by_label("y"), Some(4));
            assert_eq!(graph.node_by_label("z"), None);

            graph.add_edge(5, 0, -2).unwrap();
            assert_eq!(graph.edges_of(5), &[WeightedEdge(5, 0, -2)]);
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
/// Minimum weight over all spanning trees of a small undirected graph by enumerating every
/// subset of `n - 1` normalized edges. Returns `None` if the graph is disconnected.
pub(crate) fn brute_force_mst_weight<G>(graph: &G) -> Option<i64>
where
    G: WeightedAdjacencyList,
    G::Weight: Into<i64>,
{
    let n = graph.number_of_nodes();
    assert!(n <= 6, "brute force is only feasible for tiny graphs");
    if n <= 1 {
        return Some(0);
    }

    let edges = graph
        .edges()
        .filter(|e| !e.is_loop())
        .map(|e| e.normalized())
        .collect_vec();

    edges
        .iter()
        .combinations(n as usize - 1)
        .filter(|tree| {
            let mut comp = (0..n).collect_vec();
            for e in tree {
                let (cu, cv) = (comp[e.0 as usize], comp[e.1 as usize]);
                if cu == cv {
                    return false;
                }
                comp.iter_mut().filter(|c| **c == cv).for_each(|c| *c = cu);
            }
            true
        })
        .map(|tree| tree.iter().map(|e| Into::<i64>::into(e.weight())).sum::<i64>())
        .min()
}

#[cfg(test)]
/// All-pairs shortest distances via Floyd-Warshall; `None` encodes "unreachable".
/// Only meaningful for graphs without negative cycles.
pub(crate) fn floyd_warshall<G>(graph: &G) -> Vec<Vec<Option<i64>>>
where
    G: WeightedAdjacencyList,
    G::Weight: Into<i64>,
{
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];
    for u in 0..n {
        dist[u][u] = Some(0);
    }
    for e in graph.edges() {
        let (u, v) = (e.tail() as usize, e.head() as usize);
        let w: i64 = e.weight().into();
        if dist[u][v].is_none_or(|d| w < d) {
            dist[u][v] = Some(w);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(dik) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                if let Some(dkj) = dist[k][j] {
                    if dist[i][j].is_none_or(|d| dik + dkj < d) {
                        dist[i][j] = Some(dik + dkj);
                    }
                }
            }
        }
    }

    dist
}
