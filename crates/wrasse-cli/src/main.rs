use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;
use wrasse::{Mode, bellman_ford, bfs, dfs, dijkstra, kosaraju, topo_sort};

mod store;

use store::StoreError;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Store(StoreError),
    Engine(wrasse::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Store(err) => write!(f, "{err}"),
            CliError::Engine(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<wrasse::Error> for CliError {
    fn from(value: wrasse::Error) -> Self {
        Self::Engine(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug)]
enum Command {
    Init,
    Show,
    Mode { mode: Mode },
    AddNode { id: String },
    RemoveNode { id: String },
    AddEdge { source: String, target: String },
    RemoveEdge { source: String, target: String },
    SetWeight { edge_id: String, weight: f64 },
    Dfs { start: String },
    Bfs { start: String },
    Toposort,
    Dijkstra { start: String },
    BellmanFord { start: String },
    Scc,
}

#[derive(Debug)]
struct Args {
    command: Command,
    store: PathBuf,
    pretty: bool,
    label: Option<String>,
    weight: Option<f64>,
}

fn usage() -> &'static str {
    "wrasse-cli\n\
\n\
USAGE:\n\
  wrasse-cli init [--store <path>]\n\
  wrasse-cli show [--pretty] [--store <path>]\n\
  wrasse-cli mode <Directed|Undirected> [--store <path>]\n\
  wrasse-cli add-node <id> [--label <text>] [--store <path>]\n\
  wrasse-cli remove-node <id> [--store <path>]\n\
  wrasse-cli add-edge <source> <target> [--weight <n>] [--label <text>] [--store <path>]\n\
  wrasse-cli remove-edge <source> <target> [--store <path>]\n\
  wrasse-cli set-weight <edge-id> <n> [--store <path>]\n\
  wrasse-cli dfs|bfs <start> [--pretty] [--store <path>]\n\
  wrasse-cli toposort [--pretty] [--store <path>]\n\
  wrasse-cli dijkstra|bellman-ford <start> [--pretty] [--store <path>]\n\
  wrasse-cli scc [--pretty] [--store <path>]\n\
\n\
NOTES:\n\
  - The store is a JSON file keyed by 'graphElements' and 'graphState'; it\n\
    defaults to ./graph.json and is created on first mutation.\n\
  - Editing commands persist to the store; algorithm commands never do.\n\
  - Algorithm results print as JSON; unreachable distances serialize as null.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut store: PathBuf = PathBuf::from("graph.json");
    let mut pretty = false;
    let mut label: Option<String> = None;
    let mut weight: Option<f64> = None;
    let mut command: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => pretty = true,
            "--store" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                store = PathBuf::from(path);
            }
            "--label" => {
                let Some(text) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                label = Some(text.clone());
            }
            "--weight" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                weight = Some(n.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            word => {
                if command.is_none() {
                    command = Some(word.to_string());
                } else {
                    positional.push(word.to_string());
                }
            }
        }
    }

    let Some(command) = command else {
        return Err(CliError::Usage(usage()));
    };

    fn one(positional: &[String]) -> Result<String, CliError> {
        match positional {
            [a] => Ok(a.clone()),
            _ => Err(CliError::Usage(usage())),
        }
    }
    fn two(positional: &[String]) -> Result<(String, String), CliError> {
        match positional {
            [a, b] => Ok((a.clone(), b.clone())),
            _ => Err(CliError::Usage(usage())),
        }
    }
    fn none(positional: &[String]) -> Result<(), CliError> {
        if positional.is_empty() {
            Ok(())
        } else {
            Err(CliError::Usage(usage()))
        }
    }

    let command = match command.as_str() {
        "init" => {
            none(&positional)?;
            Command::Init
        }
        "show" => {
            none(&positional)?;
            Command::Show
        }
        "mode" => {
            let raw = one(&positional)?;
            let mode = Mode::from_str(&raw).map_err(|_| CliError::Usage(usage()))?;
            Command::Mode { mode }
        }
        "add-node" => Command::AddNode {
            id: one(&positional)?,
        },
        "remove-node" => Command::RemoveNode {
            id: one(&positional)?,
        },
        "add-edge" => {
            let (source, target) = two(&positional)?;
            Command::AddEdge { source, target }
        }
        "remove-edge" => {
            let (source, target) = two(&positional)?;
            Command::RemoveEdge { source, target }
        }
        "set-weight" => {
            let (edge_id, raw) = two(&positional)?;
            let weight = raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            Command::SetWeight { edge_id, weight }
        }
        "dfs" => Command::Dfs {
            start: one(&positional)?,
        },
        "bfs" => Command::Bfs {
            start: one(&positional)?,
        },
        "toposort" => {
            none(&positional)?;
            Command::Toposort
        }
        "dijkstra" => Command::Dijkstra {
            start: one(&positional)?,
        },
        "bellman-ford" => Command::BellmanFord {
            start: one(&positional)?,
        },
        "scc" => {
            none(&positional)?;
            Command::Scc
        }
        _ => return Err(CliError::Usage(usage())),
    };

    Ok(Args {
        command,
        store,
        pretty,
        label,
        weight,
    })
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let (mut graph, mode) = store::load(&args.store)?;

    match args.command {
        Command::Init => {
            store::save(&args.store, &graph, mode)?;
            Ok(())
        }
        Command::Show => {
            #[derive(Serialize)]
            struct ShowOut {
                #[serde(rename = "graphElements")]
                graph_elements: wrasse::Snapshot,
                #[serde(rename = "graphState")]
                graph_state: Mode,
            }
            write_json(
                &ShowOut {
                    graph_elements: graph.snapshot(),
                    graph_state: mode,
                },
                args.pretty,
            )
        }
        Command::Mode { mode } => {
            store::save(&args.store, &graph, mode)?;
            Ok(())
        }
        Command::AddNode { id } => {
            graph.add_node(&id, args.label.as_deref())?;
            store::save(&args.store, &graph, mode)?;
            Ok(())
        }
        Command::RemoveNode { id } => {
            graph.remove_node(&id)?;
            store::save(&args.store, &graph, mode)?;
            Ok(())
        }
        Command::AddEdge { source, target } => {
            let id = graph.add_edge(&source, &target, args.weight, args.label.as_deref())?;
            store::save(&args.store, &graph, mode)?;
            println!("{id}");
            Ok(())
        }
        Command::RemoveEdge { source, target } => {
            graph.remove_edge(&source, &target)?;
            store::save(&args.store, &graph, mode)?;
            Ok(())
        }
        Command::SetWeight { edge_id, weight } => {
            graph.set_edge_weight(&edge_id, weight)?;
            store::save(&args.store, &graph, mode)?;
            Ok(())
        }
        Command::Dfs { start } => write_json(&dfs(&graph, mode, &start)?, args.pretty),
        Command::Bfs { start } => write_json(&bfs(&graph, mode, &start)?, args.pretty),
        Command::Toposort => write_json(&topo_sort(&graph, mode)?, args.pretty),
        Command::Dijkstra { start } => write_json(&dijkstra(&graph, mode, &start)?, args.pretty),
        Command::BellmanFord { start } => {
            write_json(&bellman_ford(&graph, mode, &start)?, args.pretty)
        }
        Command::Scc => write_json(&kosaraju(&graph, mode), args.pretty),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
