use commute_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Sample graph with the locations A to I
    let g = reference_graph();

    // Shortest route
    let route = compute_route(&g, "A", "I")?;
    println!("Shortest path: {}", route);
    println!("Duration: {}", route.duration());

    // Record the commute
    let mut store = InMemoryCommuteStore::new();
    let record = plan_commute(&g, &mut store, "demo", "A", "I", chrono::Utc::now())?;
    println!("{}", record.to_json()?);

    Ok(())
}
