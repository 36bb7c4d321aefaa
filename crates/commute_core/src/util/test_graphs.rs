use crate::graph::Graph;

/// The nine location sample network commutes are planned on by default.
pub fn reference_graph() -> Graph {
    // A -2- B -4- D -3- G -5- I
    // |      \7   |1  /2       |
    // 5        `- E -'         6
    // |           |3           |
    // C -6- F -4- H -----------+
    Graph::from_roads(&[
        ("A", "B", 2.0),
        ("A", "C", 5.0),
        ("B", "D", 4.0),
        ("B", "E", 7.0),
        ("C", "F", 6.0),
        ("D", "E", 1.0),
        ("D", "G", 3.0),
        ("E", "G", 2.0),
        ("E", "H", 3.0),
        ("F", "H", 4.0),
        ("G", "I", 5.0),
        ("H", "I", 6.0),
    ])
    .expect("Reference graph is well formed")
}

/// Two components without a road between them.
pub fn disconnected_graph() -> Graph {
    // A -- B -- C
    // X -- Y
    Graph::from_roads(&[("A", "B", 1.0), ("B", "C", 2.0), ("X", "Y", 1.0)])
        .expect("Disconnected graph is well formed")
}
