//! LabelGraph 演示脚本
//!
//! 构建两张样例图，打印结构并计算最短路径

use labelgraph::{Graph, Weight};

fn run_sample(
    title: &str,
    vertices: &[&str],
    edges: &[(&str, &str, Weight)],
    queries: &[(&str, &str)],
) -> labelgraph::Result<()> {
    println!("========== {} ==========", title);
    println!("Creating graph...");

    let mut graph = Graph::new();
    for label in vertices {
        graph.add_vertex(label)?;
    }
    for &(a, b, w) in edges {
        graph.add_edge(a, b, w)?;
    }

    println!("Graph structure:");
    print!("{}", graph);
    println!();

    for &(start, end) in queries {
        match graph.shortest_path(start, end) {
            Ok(result) => {
                println!("Shortest path from {} to {}:", start, end);
                println!("Distance: {}", result.weight);
                println!("Path: {}\n", result);
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn main() -> labelgraph::Result<()> {
    run_sample(
        "Testing Graph 1",
        &["1", "2", "3", "4", "5", "6"],
        &[
            ("1", "2", 7),
            ("1", "3", 9),
            ("1", "6", 14),
            ("2", "3", 10),
            ("2", "4", 15),
            ("3", "4", 11),
            ("3", "6", 2),
            ("4", "5", 6),
            ("5", "6", 9),
        ],
        &[("1", "5")],
    )?;

    run_sample(
        "Testing Graph 2",
        &["BSN", "LIB", "ENB", "MSC", "CAS", "SUB", "SUN"],
        &[
            ("BSN", "LIB", 871),
            ("BSN", "CAS", 1672),
            ("BSN", "MSC", 2355),
            ("SUN", "SUB", 1265),
            ("LIB", "MSC", 1615),
            ("LIB", "SUN", 1847),
            ("ENB", "SUN", 2885),
            ("ENB", "CAS", 454),
            ("ENB", "LIB", 1078),
        ],
        &[("ENB", "SUN"), ("LIB", "CAS")],
    )?;

    Ok(())
}
