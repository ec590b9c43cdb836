use academe::{error::NetworkResult, graph::GraphStore, person::parse_interests};

fn seed(store: &mut GraphStore) -> NetworkResult<()> {
    let people = [
        ("María", "Ing.", "IA, Programación, Algoritmos"),
        ("Ana", "Ing.", "Sistemas, IA, Bases de datos"),
        ("Luis", "Int.", "Redes, Seguridad"),
        ("Carlos", "Ing.", "Programación, Web"),
        ("Sofía", "Int.", "Datos, IA, Estadística"),
        ("Elena", "Med.", "Biología, Genética"),
        ("Jorge", "Adm.", "Gestión, Economía"),
        ("Pedro", "Mat.", "Álgebra, Algoritmos, Lógica"),
        ("Laura", "Eco.", "Economía, Estadística, Datos"),
    ];

    for (name, discipline, interests) in people {
        store.upsert_person(name, discipline, parse_interests(interests))?;
    }

    for (a, b) in [
        ("Ana", "María"),
        ("Carlos", "María"),
        ("Sofía", "Ana"),
        ("Pedro", "María"),
    ] {
        store.add_collaboration(a, b)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut store = GraphStore::new();
    seed(&mut store)?;

    println!("\nInterdisciplinary recommendations:");
    for (i, recommendation) in store.top_interdisciplinary(5).iter().enumerate() {
        println!(
            "{}. {} <-> {} (score {:.2})",
            i + 1,
            recommendation.first,
            recommendation.second,
            recommendation.score
        );
    }

    println!("\nLeaders by degree centrality:");
    for (i, leader) in store.top_leaders(3).iter().enumerate() {
        println!(
            "{}. {} ({}), {} connections, degree {:.3}",
            i + 1,
            leader.name,
            leader.discipline,
            leader.connections,
            leader.centrality.degree
        );
    }

    println!("\nGap-filling suggestions:");
    for suggestion in store.top_gap_filling(5) {
        println!(
            "{} <-> {} (score {:.2}), interests: {}",
            suggestion.first, suggestion.second, suggestion.score, suggestion.reason
        );
    }

    println!("\nSimulating the removal of María...");
    let report = store.simulate_removal("María")?;
    println!("before: {:?}", report.before);
    println!("after: {:?}", report.after);
    println!(
        "new components: {}, lost collaborations: {}",
        report.component_delta, report.edge_delta
    );

    if report.is_fragmented() {
        println!("the network fragmented into {} more component(s)", report.component_delta);
    }
    if report.is_critical() {
        println!("critical person: {} collaborations lost", report.edge_delta);
    }

    for (i, component) in store.active_subgraph().connected_components().iter().enumerate() {
        println!("component {}: {}", i + 1, component.join(", "));
    }

    store.reset_all();
    println!("\nRestored, {:?}", store.active_subgraph().metrics());

    Ok(())
}
