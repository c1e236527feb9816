#[cfg(test)]
pub mod test_graph {
    use crate::graph::WeightedGraph;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RomaniaCity {
        Arad = 1,
        Bucharest = 2,
        Craiova = 3,
        Dobreta = 4,
        Eforie = 5,
        Fagaras = 6,
        Giurgiu = 7,
        Hirsova = 8,
        Iasi = 9,
        Lugoj = 10,
        Mehadia = 11,
        Neamt = 12,
        Oradea = 13,
        Pitesti = 14,
        RimnicuVilcea = 15,
        Sibiu = 16,
        Timisoara = 17,
        Urziceni = 18,
        Vaslui = 19,
        Zerind = 20,
    }

    impl From<RomaniaCity> for usize {
        fn from(value: RomaniaCity) -> Self {
            value as usize
        }
    }

    // Road distances in kilometers
    fn get_romania_graph_edges() -> Vec<(RomaniaCity, RomaniaCity, u32)> {
        use RomaniaCity::*;

        vec![
            (Oradea, Zerind, 71),
            (Oradea, Sibiu, 151),
            (Zerind, Arad, 75),
            (Arad, Sibiu, 140),
            (Arad, Timisoara, 118),
            (Timisoara, Lugoj, 111),
            (Lugoj, Mehadia, 70),
            (Mehadia, Dobreta, 75),
            (Dobreta, Craiova, 120),
            (Craiova, RimnicuVilcea, 146),
            (Craiova, Pitesti, 138),
            (RimnicuVilcea, Pitesti, 97),
            (RimnicuVilcea, Sibiu, 80),
            (Sibiu, Fagaras, 99),
            (Fagaras, Bucharest, 211),
            (Pitesti, Bucharest, 101),
            (Bucharest, Giurgiu, 90),
            (Bucharest, Urziceni, 85),
            (Urziceni, Hirsova, 98),
            (Hirsova, Eforie, 86),
            (Urziceni, Vaslui, 142),
            (Vaslui, Iasi, 92),
            (Iasi, Neamt, 87),
        ]
    }

    pub fn create_romania_graph() -> WeightedGraph<usize, u32> {
        let mut graph = WeightedGraph::with_capacity(20);

        for city in 1..=20 {
            graph.add_vertex(city).unwrap();
        }

        for (start, end, distance) in get_romania_graph_edges() {
            graph.add_edge(start.into(), end.into(), distance).unwrap();
        }

        graph
    }

    /// Straight-line distance in kilometers, admissible for any search
    /// towards Bucharest.
    pub fn straight_line_distance_to_bucharest(city: usize) -> u32 {
        const DISTANCES: [u32; 21] = [
            0, 366, 0, 160, 242, 161, 176, 77, 151, 226, 244, 241, 234, 380, 100, 193, 253, 329,
            80, 199, 374,
        ];

        DISTANCES[city]
    }
}
