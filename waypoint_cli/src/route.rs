use anyhow::bail;
use tracing::{info, warn};
use waypoint::{AStar, SearchOptions, SearchOutcome, WeightedGraph};

/// Runs the search and renders the outcome for the terminal. With `trace` the
/// report ends with the cities in the order they were expanded.
pub fn run(
    graph: &WeightedGraph<String, u32>,
    from: &str,
    to: &str,
    trace: bool,
) -> anyhow::Result<String> {
    if from.trim().is_empty() || to.trim().is_empty() {
        bail!("City names cannot be empty");
    }

    let options = if trace {
        SearchOptions::default().with_debug_info()
    } else {
        SearchOptions::default()
    };

    let result =
        AStar::new().search_with_options(graph, &from.to_string(), &to.to_string(), options)?;

    info!(
        iterations = result.stats.iterations,
        expanded = result.stats.expanded,
        "Search finished"
    );

    let mut report = match result.outcome {
        SearchOutcome::Found(path) => format!("path: {}\ncost: {}", path, path.cost()),
        SearchOutcome::NotFound => {
            warn!("No path between {} and {}", from, to);
            format!("no path found from {} to {}", from, to)
        }
    };

    if let Some(search_debug) = &result.debug {
        report.push_str(&format!("\nexpanded: {}", search_debug.visited.join(", ")));
    }

    Ok(report)
}

pub fn neighbors(graph: &WeightedGraph<String, u32>, city: &str) -> anyhow::Result<Vec<String>> {
    let city = city.to_string();
    let mut lines: Vec<String> = graph
        .neighbors(&city)?
        .filter_map(|neighbor| {
            graph
                .edge_weight(&city, neighbor)
                .map(|distance| format!("{} ({} km)", neighbor, distance))
        })
        .collect();
    lines.sort();
    Ok(lines)
}
