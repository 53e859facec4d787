use colored::*;
use lazy_sssp::graph::{Graph, MutableGraph, WeightedGraph};
use lazy_sssp::{shortest_paths_from_each, DistanceReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Road segments between districts, travel time in minutes
    let roads = [
        ("Harbor", "Old Town", 4.0),
        ("Harbor", "Market", 2.0),
        ("Market", "Old Town", 1.0),
        ("Old Town", "University", 5.0),
        ("Market", "University", 8.0),
        ("Market", "Station", 10.0),
        ("University", "Station", 2.0),
        ("University", "Airport", 6.0),
        ("Station", "Airport", 3.0),
    ];

    let mut city: WeightedGraph<String, f64> = WeightedGraph::new();
    for (from, to, minutes) in roads {
        city.add_undirected_edge(from.to_string(), to.to_string(), minutes)?;
    }
    // One-way ferry and a district with no roads yet
    city.add_directed_edge("Harbor".to_string(), "Island".to_string(), 12.0)?;
    city.add_vertex("Outskirts".to_string());

    println!(
        "{}",
        format!(
            "City map: {} districts, {} directed road segments",
            city.vertex_count(),
            city.edge_count()
        )
        .bold()
    );

    let sources = vec!["Harbor".to_string(), "Island".to_string()];
    for result in shortest_paths_from_each(&city, &sources)? {
        let report = DistanceReport::new(&city, &result);

        println!("\n{}", format!("From {}", report.source).cyan().bold());
        for row in &report.rows {
            match (&row.distance, &row.path) {
                (Some(minutes), Some(path)) => println!(
                    "  {:<12} {:>6.1} min  {}",
                    row.vertex.green(),
                    minutes,
                    path.join(" -> ").dimmed()
                ),
                _ => println!("  {:<12} {}", row.vertex.red(), "unreachable".red()),
            }
        }
        println!(
            "  {}",
            format!(
                "{} pops, {} stale, {} relaxations",
                report.stats.pops, report.stats.stale_pops, report.stats.relaxations
            )
            .dimmed()
        );
    }

    Ok(())
}
