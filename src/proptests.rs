//! Property-based tests for the transforms and the contact graph.
//!
//! - Run-length encoding round-trips every digit-free string
//! - Spectral compression never changes the character count
//! - Breadth-first paths are real, minimal-length walks

use proptest::prelude::*;

use crate::graph::ContactGraph;
use crate::person::PersonId;
use crate::transform::{RunLength, SpectralCompressor};

// ==================== Run-length Property Tests ====================

proptest! {
    /// Any string without decimal digits survives encode/decode.
    #[test]
    fn rle_roundtrip_without_digits(content in "[^0-9]{0,200}") {
        let encoded = RunLength::encode(&content);
        prop_assert_eq!(RunLength::decode(&encoded).unwrap(), content);
    }

    /// Long runs collapse to a single count.
    #[test]
    fn rle_single_run(c in "[a-zA-Z]", n in 1usize..500) {
        let content = c.repeat(n);
        prop_assert_eq!(RunLength::encode(&content), format!("{}{}", n, c));
    }
}

// ==================== Spectral Property Tests ====================

proptest! {
    /// Output length matches input length for every valid ratio.
    #[test]
    fn spectral_preserves_length(content in ".{0,128}", ratio in 0.001f64..=1.0) {
        let compressor = SpectralCompressor::new(ratio).unwrap();
        let compressed = compressor.compress(&content);
        prop_assert_eq!(compressed.chars().count(), content.chars().count());
        prop_assert!(compressed.chars().all(|c| (c as u32) <= 255));
    }

    /// Keeping every bin leaves Latin-1 text untouched.
    #[test]
    fn spectral_full_ratio_identity(content in "[\\x20-\\x7e]{0,128}") {
        let compressor = SpectralCompressor::new(1.0).unwrap();
        prop_assert_eq!(compressor.compress(&content), content);
    }

    /// Ratios outside (0, 1] are always refused.
    #[test]
    fn spectral_rejects_out_of_range(ratio in prop_oneof![-10.0f64..=0.0, 1.0001f64..10.0]) {
        prop_assert!(SpectralCompressor::new(ratio).is_err());
    }
}

// ==================== Graph Property Tests ====================

proptest! {
    /// Every returned path starts and ends correctly, follows edges, and
    /// is never longer than a path found by brute force would be.
    #[test]
    fn bfs_paths_are_valid(
        edges in prop::collection::vec((0usize..8, 0usize..8), 0..20),
        from in 0usize..8,
        to in 0usize..8,
    ) {
        let ids: Vec<PersonId> = (0..8).map(|i| PersonId::new(format!("p{}", i))).collect();
        let mut graph = ContactGraph::new();
        for id in &ids {
            graph.add_node(id.clone());
        }
        for (a, b) in &edges {
            graph.add_edge(&ids[*a], &ids[*b]);
        }

        let path = graph.shortest_path(&ids[from], &ids[to]);
        let expected = hop_distance(&ids, &edges, from, to);

        match expected {
            None => prop_assert!(path.is_empty()),
            Some(hops) => {
                prop_assert_eq!(path.len(), hops + 1);
                prop_assert_eq!(path.first(), Some(&ids[from]));
                prop_assert_eq!(path.last(), Some(&ids[to]));
                for pair in path.windows(2) {
                    prop_assert!(graph.neighbors(&pair[0]).any(|n| n == &pair[1]));
                }
            }
        }
        prop_assert_eq!(graph.are_connected(&ids[from], &ids[to]), expected.is_some());
    }
}

/// Floyd-Warshall reference distance
fn hop_distance(
    ids: &[PersonId],
    edges: &[(usize, usize)],
    from: usize,
    to: usize,
) -> Option<usize> {
    let n = ids.len();
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0usize);
    }
    for &(a, b) in edges {
        if a != b {
            dist[a][b] = Some(1);
            dist[b][a] = Some(1);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |ij| ik + kj < ij) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist[from][to]
}
