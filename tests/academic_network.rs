use std::fs;

use academe::{
    error::{ErrorKind, NetworkError},
    graph::{GraphStore, NetworkMetrics},
    person::parse_interests,
};
use serde::Deserialize;

const EPSILON: f64 = 1e-9;

#[derive(Deserialize)]
struct Fixture {
    people: Vec<PersonRecord>,
    collaborations: Vec<(String, String)>,
}

#[derive(Deserialize)]
struct PersonRecord {
    name: String,
    discipline: String,
    interests: String,
}

fn load() -> GraphStore {
    let json = fs::read_to_string("testdata/academic_network.json").unwrap();
    let fixture: Fixture = serde_json::from_str(&json).unwrap();

    let mut store = GraphStore::new();
    for person in fixture.people {
        store
            .upsert_person(
                &person.name,
                &person.discipline,
                parse_interests(&person.interests),
            )
            .unwrap();
    }
    for (a, b) in fixture.collaborations {
        store.add_collaboration(&a, &b).unwrap();
    }

    store
}

#[test]
fn loads() {
    let store = load();
    let active = store.active_subgraph();

    assert_eq!(active.node_count(), 9);
    assert_eq!(active.edge_count(), 4);
    assert!(store.contains_collaboration("María", "Ana"));
    assert_eq!(store.person("Sofía").unwrap().interests().len(), 3);
}

#[test]
fn interdisciplinary() {
    let store = load();
    let recommendations = store.top_interdisciplinary(3);

    let pairs: Vec<_> = recommendations
        .iter()
        .map(|r| (r.first.as_str(), r.second.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("Sofía", "Laura"), ("Jorge", "Laura"), ("María", "Sofía")]
    );

    assert_eq!(recommendations[0].score, 4.0);
    assert_eq!(recommendations[1].score, 3.5);
    assert!((recommendations[2].score - 3.4).abs() < EPSILON);
}

#[test]
fn centrality() {
    let store = load();
    let centrality = store.centrality();

    assert_eq!(centrality.len(), 9);
    assert_eq!(centrality["María"].degree, 0.375);
    assert!((centrality["María"].betweenness - 5.0 / 28.0).abs() < EPSILON);
    assert!((centrality["Ana"].betweenness - 3.0 / 28.0).abs() < EPSILON);
    assert_eq!(centrality["Luis"].combined, 0.0);
}

#[test]
fn gap_filling() {
    let store = load();
    let centrality = store.centrality();
    let suggestions = store.top_gap_filling(10);

    let found: Vec<_> = suggestions
        .iter()
        .map(|s| (s.first.as_str(), s.second.as_str(), s.reason.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("Sofía", "Laura", "Datos, Estadística"),
            ("María", "Sofía", "IA"),
            ("Jorge", "Laura", "Economía"),
        ]
    );

    let maria = 1.0 / 3.0 + centrality["María"].combined * 0.5;
    assert!((suggestions[1].score - maria).abs() < EPSILON);
    assert!((suggestions[2].score - 1.0 / 3.0).abs() < EPSILON);
}

#[test]
fn leaders() {
    let store = load();
    let leaders = store.top_leaders(3);

    assert_eq!(leaders[0].name, "María");
    assert_eq!(leaders[0].connections, 3);
    assert_eq!(leaders[1].name, "Ana");
    assert_eq!(leaders[1].connections, 2);
    // Carlos, Sofía and Pedro tie, Carlos was inserted first.
    assert_eq!(leaders[2].name, "Carlos");
}

#[test]
fn resilience() {
    let mut store = load();
    let report = store.simulate_removal("María").unwrap();

    assert_eq!(
        report.before,
        NetworkMetrics {
            node_count: 9,
            edge_count: 4,
            component_count: 5
        }
    );
    assert_eq!(
        report.after,
        NetworkMetrics {
            node_count: 8,
            edge_count: 1,
            component_count: 7
        }
    );
    assert!(report.is_fragmented());
    assert!(!report.is_critical());

    // The removal shapes every later query until restored.
    assert!(!store.centrality().contains_key("María"));
    assert!(store
        .top_interdisciplinary(50)
        .iter()
        .all(|r| r.first != "María" && r.second != "María"));

    let error = store.simulate_removal("María").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);

    store.reset_all();
    assert_eq!(store.active_subgraph().metrics(), report.before);
}

#[test]
fn unknown_removal() {
    let mut store = load();

    assert_eq!(
        store.simulate_removal("Nadie"),
        Err(NetworkError::PersonNotFound("Nadie".into()))
    );
    assert_eq!(store.removed().count(), 0);
}
