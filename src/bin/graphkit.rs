//! CLI entry point for the `graphkit` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphkit::cli::commands::{self, MstAlgorithm};
use graphkit::types::DEFAULT_MAX_PATH_LENGTH;
use graphkit::GraphError;

#[derive(Parser)]
#[command(
    name = "graphkit",
    about = "graphkit CLI: run graph algorithms over interchange JSON files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node/edge counts and density
    Info {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Show a node's neighbors and degrees
    Neighbors {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Node name
        node: String,
    },
    /// Breadth-first traversal from a node
    Bfs {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Starting node
        start: String,
        /// Do not expand nodes at this depth
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Depth-first traversal from a node
    Dfs {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Starting node
        start: String,
        /// Do not expand nodes at this depth
        #[arg(long)]
        max_depth: Option<usize>,
        /// Use the explicit-stack variant (no recursion)
        #[arg(long)]
        iterative: bool,
    },
    /// Shortest path between two nodes (Dijkstra)
    Path {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Source node
        from: String,
        /// Target node
        to: String,
    },
    /// Single-source shortest paths allowing negative weights
    BellmanFord {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Source node
        start: String,
    },
    /// Enumerate simple paths between two nodes
    AllPaths {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Source node
        from: String,
        /// Target node
        to: String,
        /// Maximum number of edges per path
        #[arg(long, default_value_t = DEFAULT_MAX_PATH_LENGTH)]
        max_length: usize,
    },
    /// Topological order (directed graphs)
    Topo {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Check for cycles
    Cycle {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Connected (undirected) or strongly connected (directed) components
    Components {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Check whether the graph is two-colourable
    Bipartite {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Articulation points (undirected graphs)
    Articulation {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Bridges (undirected graphs)
    Bridges {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Minimum spanning tree (undirected graphs)
    Mst {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Algorithm: kruskal or prim
        #[arg(long, default_value = "kruskal")]
        algorithm: String,
        /// Start node for prim
        #[arg(long)]
        start: Option<String>,
    },
    /// Print the adjacency matrix
    Matrix {
        /// Path to the graph JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Neighbors { file, node } => commands::cmd_neighbors(&file, &node, json),
        Commands::Bfs {
            file,
            start,
            max_depth,
        } => commands::cmd_bfs(&file, &start, max_depth, json),
        Commands::Dfs {
            file,
            start,
            max_depth,
            iterative,
        } => commands::cmd_dfs(&file, &start, max_depth, iterative, json),
        Commands::Path { file, from, to } => commands::cmd_path(&file, &from, &to, json),
        Commands::BellmanFord { file, start } => commands::cmd_bellman_ford(&file, &start, json),
        Commands::AllPaths {
            file,
            from,
            to,
            max_length,
        } => commands::cmd_all_paths(&file, &from, &to, max_length, json),
        Commands::Topo { file } => commands::cmd_topo(&file, json),
        Commands::Cycle { file } => commands::cmd_cycle(&file, json),
        Commands::Components { file } => commands::cmd_components(&file, json),
        Commands::Bipartite { file } => commands::cmd_bipartite(&file, json),
        Commands::Articulation { file } => commands::cmd_articulation(&file, json),
        Commands::Bridges { file } => commands::cmd_bridges(&file, json),
        Commands::Mst {
            file,
            algorithm,
            start,
        } => {
            let algo = match MstAlgorithm::from_name(&algorithm) {
                Some(algo) => algo,
                None => {
                    eprintln!("Invalid MST algorithm: {}", algorithm);
                    process::exit(3);
                }
            };
            commands::cmd_mst(&file, algo, start.as_deref(), json)
        }
        Commands::Matrix { file } => commands::cmd_matrix(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_)
            | GraphError::InvalidMatrix(_)
            | GraphError::NonFiniteWeight { .. } => 2,
            GraphError::NodeNotFound(_) => 3,
            GraphError::InvalidOperation { .. } => 4,
            GraphError::NegativeWeight { .. } => 5,
        };
        process::exit(code);
    }
}
