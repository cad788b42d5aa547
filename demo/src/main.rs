use env_logger::Env;
use road_astar::prelude::*;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (graph, coordinates) = road_network();
    log::info!(
        "road network: {} locations, {} roads",
        graph.len(),
        graph.edge_count()
    );

    println!("Running A* Algorithm...");
    match find_path(&graph, &coordinates, COMSATS, I8) {
        Ok(result) => println!("{}", result),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }
}
