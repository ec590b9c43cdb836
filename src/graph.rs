//! A module for working with the collaboration network.

use std::collections::{HashSet, VecDeque};

use indexmap::{IndexMap, IndexSet};
use nalgebra::DMatrix;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    centrality::{self, CentralityMap},
    config::Config,
    edge::Collaboration,
    error::{NetworkError, NetworkResult},
    person::Person,
    recommend::{self, GapSuggestion, Leader, Recommendation},
    resilience::{self, ResilienceReport},
    scoring::{self, GapScore},
};

/// The network of people and their collaborations.
///
/// People can be excluded from the active network without losing their attributes or their
/// collaborations, see [`GraphStore::set_removed`]. Every analysis runs on the
/// [`ActiveSubgraph`] and never on the raw state.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
    /// People keyed by name, in order of first insertion.
    people: IndexMap<String, Person>,
    /// Canonical collaborations, in insertion order.
    collaborations: IndexSet<Collaboration>,
    /// Names currently excluded from the active network.
    removed: HashSet<String>,
    config: Config,
}

impl GraphStore {
    /// Creates an empty network with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::graph::GraphStore;
    ///
    /// let store = GraphStore::new();
    /// assert!(store.active_subgraph().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty network scored with the supplied configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Returns the scoring, centrality and resilience configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    //
    // Mutations
    //

    /// Creates a person or overwrites the attributes of an existing one. An existing person keeps
    /// its position in the insertion order and is restored if it was removed.
    ///
    /// Names and disciplines are trimmed before being validated and stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.upsert_person("Ana", "Ing.", ["IA"]).unwrap();
    ///
    /// assert!(store.upsert_person(" ", "Ing.", ["IA"]).is_err());
    /// assert!(store.upsert_person("Luis", "", ["Redes"]).is_err());
    /// ```
    pub fn upsert_person<I, S>(
        &mut self,
        name: &str,
        discipline: &str,
        interests: I,
    ) -> NetworkResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (name, discipline) = (name.trim(), discipline.trim());

        if name.is_empty() {
            return Err(NetworkError::EmptyName);
        }

        if discipline.is_empty() {
            return Err(NetworkError::EmptyDiscipline(name.to_owned()));
        }

        self.people
            .insert(name.to_owned(), Person::new(discipline, interests));
        self.removed.remove(name);

        debug!(name, discipline, "person upserted");

        Ok(())
    }

    /// Adds a collaboration between two existing, distinct people.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.upsert_person("a", "eng", ["x"]).unwrap();
    /// store.upsert_person("b", "med", ["y"]).unwrap();
    ///
    /// assert!(store.add_collaboration("a", "b").is_ok());
    /// // The pair is canonical, the reversed order is a duplicate.
    /// assert!(store.add_collaboration("b", "a").is_err());
    /// ```
    pub fn add_collaboration(&mut self, a: &str, b: &str) -> NetworkResult<()> {
        let (a, b) = (a.trim(), b.trim());

        if a == b {
            return Err(NetworkError::SelfCollaboration(a.to_owned()));
        }

        for name in [a, b] {
            if !self.people.contains_key(name) {
                return Err(NetworkError::UnknownPerson(name.to_owned()));
            }
        }

        let collaboration = Collaboration::new(a, b);

        if self.collaborations.contains(&collaboration) {
            return Err(NetworkError::DuplicateCollaboration(
                collaboration.source().to_owned(),
                collaboration.target().to_owned(),
            ));
        }

        debug!(%collaboration, "collaboration added");
        self.collaborations.insert(collaboration);

        Ok(())
    }

    /// Deletes the collaboration between two people, in either order.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.upsert_person("a", "eng", ["x"]).unwrap();
    /// store.upsert_person("b", "med", ["y"]).unwrap();
    /// store.add_collaboration("a", "b").unwrap();
    ///
    /// assert!(store.remove_collaboration("b", "a").is_ok());
    /// assert!(store.remove_collaboration("a", "b").is_err());
    /// ```
    pub fn remove_collaboration(&mut self, a: &str, b: &str) -> NetworkResult<()> {
        let collaboration = Collaboration::new(a.trim(), b.trim());

        // Shifting keeps the remaining collaborations in insertion order.
        if !self.collaborations.shift_remove(&collaboration) {
            return Err(NetworkError::CollaborationNotFound(
                collaboration.source().to_owned(),
                collaboration.target().to_owned(),
            ));
        }

        debug!(%collaboration, "collaboration removed");

        Ok(())
    }

    /// Marks a person as removed from (or restored to) the active network and returns whether the
    /// removal set changed.
    ///
    /// Unknown names are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.upsert_person("a", "eng", ["x"]).unwrap();
    ///
    /// assert_eq!(store.set_removed("a", true), true);
    /// assert_eq!(store.set_removed("a", true), false);
    /// assert_eq!(store.set_removed("unknown", true), false);
    /// ```
    pub fn set_removed(&mut self, name: &str, flag: bool) -> bool {
        let name = name.trim();
        if !self.people.contains_key(name) {
            return false;
        }

        let is_changed = if flag {
            self.removed.insert(name.to_owned())
        } else {
            self.removed.remove(name)
        };

        if is_changed {
            debug!(name, removed = flag, "removal toggled");
        }

        is_changed
    }

    /// Restores a single removed person and returns whether it was removed.
    pub fn restore(&mut self, name: &str) -> NetworkResult<bool> {
        let name = name.trim();
        if !self.people.contains_key(name) {
            return Err(NetworkError::PersonNotFound(name.to_owned()));
        }

        Ok(self.set_removed(name, false))
    }

    /// Clears the removal set, restoring the full network.
    pub fn reset_all(&mut self) {
        info!(restored = self.removed.len(), "removal set cleared");
        self.removed.clear();
    }

    //
    // Accessors
    //

    /// Returns the attributes of a person, removed or not.
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.people.get(name.trim())
    }

    /// Returns every stored person in insertion order, removed ones included.
    pub fn people(&self) -> impl Iterator<Item = (&str, &Person)> + '_ {
        self.people
            .iter()
            .map(|(name, person)| (name.as_str(), person))
    }

    /// Returns every stored collaboration in insertion order, including those touching removed
    /// people.
    pub fn collaborations(&self) -> impl Iterator<Item = &Collaboration> + '_ {
        self.collaborations.iter()
    }

    /// Checks if the two people collaborate, regardless of removals.
    pub fn contains_collaboration(&self, a: &str, b: &str) -> bool {
        self.collaborations
            .contains(&Collaboration::new(a.trim(), b.trim()))
    }

    /// Checks if the person is currently removed from the active network.
    pub fn is_removed(&self, name: &str) -> bool {
        self.removed.contains(name.trim())
    }

    /// Returns the removed names in insertion order.
    pub fn removed(&self) -> impl Iterator<Item = &str> + '_ {
        self.people
            .keys()
            .filter(|name| self.removed.contains(name.as_str()))
            .map(String::as_str)
    }

    /// Constructs the read-only view of the people that aren't removed and of the collaborations
    /// between them.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.upsert_person("a", "eng", ["x"]).unwrap();
    /// store.upsert_person("b", "med", ["y"]).unwrap();
    /// store.add_collaboration("a", "b").unwrap();
    /// store.set_removed("b", true);
    ///
    /// let active = store.active_subgraph();
    /// assert_eq!(active.node_count(), 1);
    /// assert_eq!(active.edge_count(), 0);
    /// ```
    pub fn active_subgraph(&self) -> ActiveSubgraph<'_> {
        let people = self
            .people
            .iter()
            .filter(|(name, _)| !self.removed.contains(name.as_str()))
            .map(|(name, person)| (name.as_str(), person))
            .collect();

        let collaborations = self
            .collaborations
            .iter()
            .filter(|collaboration| {
                !self.removed.contains(collaboration.source())
                    && !self.removed.contains(collaboration.target())
            })
            .collect();

        ActiveSubgraph {
            people,
            collaborations,
        }
    }

    //
    // Analysis
    //

    /// Scores a potential collaboration between two people, 0 if either is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.upsert_person("A", "eng", ["x", "y"]).unwrap();
    /// store.upsert_person("B", "med", ["y", "z"]).unwrap();
    ///
    /// let score = store.interdisciplinary_score("A", "B");
    /// assert!((score - (3.0 + 2.0 / 3.0)).abs() < 1e-9);
    /// assert_eq!(store.interdisciplinary_score("A", "C"), 0.0);
    /// ```
    pub fn interdisciplinary_score(&self, a: &str, b: &str) -> f64 {
        match (self.person(a), self.person(b)) {
            (Some(first), Some(second)) => {
                scoring::interdisciplinary_score(first, second, &self.config.scoring)
            }
            _ => 0.0,
        }
    }

    /// Scores a gap-filling collaboration between two people, `None` if either is unknown or
    /// they share no interest.
    pub fn gap_filling_score(
        &self,
        a: &str,
        b: &str,
        centrality: &CentralityMap,
    ) -> Option<GapScore> {
        let (a, b) = (a.trim(), b.trim());
        let first = self.person(a)?;
        let second = self.person(b)?;

        scoring::gap_filling_score(
            (a, first),
            (b, second),
            centrality,
            &self.config.scoring,
        )
    }

    /// Computes the centrality of every person of the active network.
    pub fn centrality(&self) -> CentralityMap {
        centrality::analyze(&self.active_subgraph(), &self.config.centrality)
    }

    /// Removes a person from the active network and reports the impact, see
    /// [`resilience::simulate_removal`].
    pub fn simulate_removal(&mut self, name: &str) -> NetworkResult<ResilienceReport> {
        resilience::simulate_removal(self, name)
    }

    /// Returns the `n` best interdisciplinary collaborations to create.
    pub fn top_interdisciplinary(&self, n: usize) -> Vec<Recommendation> {
        recommend::top_interdisciplinary(self, n)
    }

    /// Returns the `n` best gap-filling collaborations to create.
    pub fn top_gap_filling(&self, n: usize) -> Vec<GapSuggestion> {
        recommend::top_gap_filling(self, n)
    }

    /// Returns the `n` people with the highest degree centrality.
    pub fn top_leaders(&self, n: usize) -> Vec<Leader> {
        recommend::top_leaders(self, n)
    }
}

/// Aggregate measurements of a network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NetworkMetrics {
    pub node_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
}

/// A read-only view of the active network: the people that aren't removed and the
/// collaborations whose both ends aren't removed.
///
/// People are indexed by their position in insertion order; the matrices and the adjacency list
/// follow that index.
#[derive(Clone, Debug)]
pub struct ActiveSubgraph<'a> {
    people: IndexMap<&'a str, &'a Person>,
    collaborations: Vec<&'a Collaboration>,
}

impl<'a> ActiveSubgraph<'a> {
    /// Returns the vertex count of the active network.
    pub fn node_count(&self) -> usize {
        self.people.len()
    }

    /// Returns the edge count of the active network.
    pub fn edge_count(&self) -> usize {
        self.collaborations.len()
    }

    /// Checks if every person is removed, or none was added.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Checks if the person is active.
    pub fn contains(&self, name: &str) -> bool {
        self.people.contains_key(name.trim())
    }

    /// Returns the attributes of an active person.
    pub fn person(&self, name: &str) -> Option<&'a Person> {
        self.people.get(name.trim()).copied()
    }

    /// Returns the active people in insertion order.
    pub fn people(&self) -> impl Iterator<Item = (&'a str, &'a Person)> + Clone + '_ {
        self.people.iter().map(|(name, person)| (*name, *person))
    }

    /// Returns the active collaborations in insertion order.
    pub fn collaborations(&self) -> impl Iterator<Item = &'a Collaboration> + '_ {
        self.collaborations.iter().copied()
    }

    /// Returns the index of a person in the view.
    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.people.get_index_of(name)
    }

    /// Returns the name found at an index of the view.
    pub(crate) fn name_at(&self, index: usize) -> Option<&'a str> {
        self.people.get_index(index).map(|(name, _)| *name)
    }

    /// Constructs the neighbour lists of every person, by index.
    pub fn adjacency_list(&self) -> Vec<Vec<usize>> {
        let mut neighbours = vec![Vec::new(); self.node_count()];

        for (i, j) in self.edge_indices() {
            neighbours[i].push(j);
            neighbours[j].push(i);
        }

        neighbours
    }

    /// Constructs the adjacency matrix of the active network.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.upsert_person("a", "eng", ["x"]).unwrap();
    /// store.upsert_person("b", "eng", ["x"]).unwrap();
    /// store.add_collaboration("a", "b").unwrap();
    ///
    /// assert_eq!(
    ///     store.active_subgraph().adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              1.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        let n = self.node_count();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        // Collaborations are unique, both triangles are written for each one as the network is
        // undirected.
        for (i, j) in self.edge_indices() {
            matrix[(i, j)] = 1.0;
            matrix[(j, i)] = 1.0;
        }

        matrix
    }

    /// Constructs the degree matrix of the active network.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// for name in ["a", "b", "c"] {
    ///     store.upsert_person(name, "eng", ["x"]).unwrap();
    /// }
    /// store.add_collaboration("a", "b").unwrap();
    /// store.add_collaboration("a", "c").unwrap();
    ///
    /// assert_eq!(
    ///     store.active_subgraph().degree_matrix(),
    ///     dmatrix![2.0, 0.0, 0.0;
    ///              0.0, 1.0, 0.0;
    ///              0.0, 0.0, 1.0]
    /// );
    /// ```
    pub fn degree_matrix(&self) -> DMatrix<f64> {
        let adjacency_matrix = self.adjacency_matrix();
        let n = adjacency_matrix.nrows();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for (i, row) in adjacency_matrix.row_iter().enumerate() {
            // The diagonal holds the sum of the row, the rows are visited in index order.
            matrix[(i, i)] = row.sum()
        }

        matrix
    }

    /// Returns the connected components of the active network, each listing its members in
    /// insertion order. Components are ordered by their earliest member.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// for name in ["a", "b", "c"] {
    ///     store.upsert_person(name, "eng", ["x"]).unwrap();
    /// }
    /// store.add_collaboration("a", "c").unwrap();
    ///
    /// assert_eq!(
    ///     store.active_subgraph().connected_components(),
    ///     vec![vec!["a", "c"], vec!["b"]]
    /// );
    /// ```
    pub fn connected_components(&self) -> Vec<Vec<&'a str>> {
        let neighbours = self.adjacency_list();
        let mut visited = vec![false; neighbours.len()];
        let mut components = Vec::new();

        for start in 0..neighbours.len() {
            if visited[start] {
                continue;
            }

            visited[start] = true;
            let mut members = vec![start];
            let mut queue = VecDeque::from([start]);

            while let Some(current) = queue.pop_front() {
                for &next in &neighbours[current] {
                    if !visited[next] {
                        visited[next] = true;
                        members.push(next);
                        queue.push_back(next);
                    }
                }
            }

            members.sort_unstable();
            components.push(members.into_iter().filter_map(|i| self.name_at(i)).collect());
        }

        components
    }

    /// Counts the connected components, 0 for an empty network.
    pub fn component_count(&self) -> usize {
        self.connected_components().len()
    }

    /// Computes the aggregate metrics of the active network.
    pub fn metrics(&self) -> NetworkMetrics {
        NetworkMetrics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            component_count: self.component_count(),
        }
    }

    //
    // Private
    //

    /// Maps each active collaboration to the indices of its ends.
    fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        // Both ends of an active collaboration are active, the lookups only guard the invariant.
        self.collaborations.iter().filter_map(|collaboration| {
            let i = self.index_of(collaboration.source())?;
            let j = self.index_of(collaboration.target())?;
            Some((i, j))
        })
    }
}
