use waypoint::{GraphError, WeightedGraph};

// Road distances between Romanian cities, in kilometers
const ROADS: [(&str, &str, u32); 23] = [
    ("Oradea", "Zerind", 71),
    ("Zerind", "Arad", 75),
    ("Arad", "Timisoara", 118),
    ("Arad", "Sibiu", 140),
    ("Timisoara", "Lugoj", 111),
    ("Lugoj", "Mehadia", 70),
    ("Mehadia", "Dobreta", 75),
    ("Dobreta", "Craiova", 120),
    ("Craiova", "Rimnicu Vilcea", 146),
    ("Rimnicu Vilcea", "Sibiu", 80),
    ("Sibiu", "Oradea", 151),
    ("Sibiu", "Fagaras", 99),
    ("Fagaras", "Bucharest", 211),
    ("Rimnicu Vilcea", "Pitesti", 97),
    ("Craiova", "Pitesti", 138),
    ("Pitesti", "Bucharest", 101),
    ("Bucharest", "Giurgiu", 90),
    ("Bucharest", "Urziceni", 85),
    ("Urziceni", "Hirsova", 98),
    ("Hirsova", "Eforie", 86),
    ("Urziceni", "Vaslui", 142),
    ("Vaslui", "Iasi", 92),
    ("Iasi", "Neamt", 87),
];

pub fn build() -> Result<WeightedGraph<String, u32>, GraphError<String>> {
    let mut graph = WeightedGraph::with_capacity(20);

    for (from, to, _) in ROADS {
        for city in [from, to] {
            if !graph.contains_vertex(&city.to_string()) {
                graph.add_vertex(city.to_string())?;
            }
        }
    }

    for (from, to, distance) in ROADS {
        graph.add_edge(from.to_string(), to.to_string(), distance)?;
    }

    Ok(graph)
}
