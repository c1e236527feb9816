use clap::{Parser, Subcommand};
use tracing::{debug, info};

mod demo_network;
mod route;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(
        short,
        long,
        env = "WAYPOINT_DEBUG",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest road between two cities
    #[command(visible_alias = "r")]
    Route {
        from: String,
        to: String,

        /// Log every expanded city
        #[arg(long)]
        trace: bool,
    },
    /// List the cities directly connected to a city
    Neighbors { city: String },
    /// List every city of the network
    Cities,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let graph = demo_network::build()?;
    debug!(
        cities = graph.vertex_count(),
        roads = graph.edge_count(),
        "Loaded demo network"
    );

    match cli.command {
        Commands::Route { from, to, trace } => {
            let report = route::run(&graph, &from, &to, trace)?;
            println!("{}", report);
        }
        Commands::Neighbors { city } => {
            for line in route::neighbors(&graph, &city)? {
                println!("{}", line);
            }
        }
        Commands::Cities => {
            let mut cities: Vec<&String> = graph.vertices().collect();
            cities.sort();
            info!("{} cities", cities.len());
            for city in cities {
                println!("{}", city);
            }
        }
    }

    Ok(())
}
