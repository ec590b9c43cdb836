//! Academe is a small toolkit for analysing academic collaboration networks: people connected by
//! undirected collaborations.
//!
//! # Basic usage
//!
//! The library is centered around the [`GraphStore`](graph::GraphStore) structure which holds the
//! people, their collaborations and the set of people temporarily removed from the network. Once
//! populated, it suggests collaborations, measures centrality and simulates the loss of a person.
//!
//! ```rust
//! use academe::graph::GraphStore;
//! use academe::person::parse_interests;
//!
//! // Construct the network.
//! let mut store = GraphStore::new();
//!
//! store.upsert_person("María", "Ing.", parse_interests("IA, Programación, Algoritmos")).unwrap();
//! store.upsert_person("Ana", "Ing.", parse_interests("Sistemas, IA, Bases de datos")).unwrap();
//! store.upsert_person("Pedro", "Mat.", parse_interests("Álgebra, Algoritmos, Lógica")).unwrap();
//! store.upsert_person("Sofía", "Int.", parse_interests("Datos, IA, Estadística")).unwrap();
//!
//! // Collaborations are undirected, the order of the names doesn't matter.
//! store.add_collaboration("Ana", "María").unwrap();
//! store.add_collaboration("María", "Pedro").unwrap();
//!
//! // Rank the collaborations worth creating.
//! let recommendations = store.top_interdisciplinary(3);
//! let suggestions = store.top_gap_filling(3);
//! assert!(recommendations.len() <= 3);
//! assert!(suggestions.iter().all(|s| !s.reason.is_empty()));
//!
//! // Simulate the loss of a person, then restore the network.
//! let report = store.simulate_removal("María").unwrap();
//! assert_eq!(report.edge_delta, 2);
//! store.reset_all();
//! ```

/// Builds a network from paths of names, every person in the "eng" discipline without interests.
#[cfg(test)]
macro_rules! network {
    ($($path:expr),*) => {{
        #[allow(unused_mut)]
        let mut store = $crate::graph::GraphStore::new();

        $(
            let path: &[&str] = &$path;
            for name in path {
                store.upsert_person(name, "eng", Vec::<String>::new()).unwrap();
            }
            for pair in path.windows(2) {
                // Paths may share collaborations.
                let _ = store.add_collaboration(pair[0], pair[1]);
            }
        )*

        store
    }};
}

mod betweenness;
pub mod centrality;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod person;
pub mod recommend;
pub mod resilience;
pub mod scoring;
