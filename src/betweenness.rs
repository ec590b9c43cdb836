//! A module for computing the betweenness centrality of the active network.

use std::collections::VecDeque;

/// This is an implementation of Ulrik Brandes's
/// A Faster Algorithm for Betweenness Centrality
/// http://snap.stanford.edu/class/cs224w-readings/brandes01centrality.pdf
/// page 10, "Algorithm 1: Betweenness centrality in unweighted graphs"
///
/// Accumulates the dependencies of `source` on every other node into `betweenness_count`.
fn betweenness_for_node(source: usize, neighbours: &[Vec<usize>], betweenness_count: &mut [f64]) {
    let num_nodes = neighbours.len();

    let mut sigma: Vec<f64> = vec![0.0; num_nodes];
    let mut distance: Vec<Option<usize>> = vec![None; num_nodes];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];
    let mut delta: Vec<f64> = vec![0.0; num_nodes];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut stack: Vec<usize> = Vec::new();

    sigma[source] = 1.0;
    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        let next = distance[v].map(|d| d + 1);

        for &w in &neighbours[v] {
            if distance[w].is_none() {
                distance[w] = next;
                queue.push_back(w);
            }
            if distance[w] == next {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    // Nodes are popped in order of non-increasing distance from the source.
    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != source {
            betweenness_count[w] += delta[w];
        }
    }
}

/// Computes the normalized betweenness of every node from its neighbour lists.
///
/// Every unordered pair is visited from both of its ends, so the counts are divided by the
/// `(n - 1)(n - 2)` ordered pairs not involving the node. Networks of fewer than three nodes have
/// no intermediaries, all their values are 0.
pub fn compute_betweenness(neighbours: &[Vec<usize>]) -> Vec<f64> {
    let num_nodes = neighbours.len();
    let mut betweenness_count: Vec<f64> = vec![0.0; num_nodes];

    if num_nodes < 3 {
        return betweenness_count;
    }

    for source in 0..num_nodes {
        betweenness_for_node(source, neighbours, &mut betweenness_count);
    }

    let divisor = ((num_nodes - 1) * (num_nodes - 2)) as f64;
    for count in &mut betweenness_count {
        *count /= divisor;
    }

    betweenness_count
}
