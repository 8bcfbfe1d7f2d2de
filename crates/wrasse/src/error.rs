pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    DuplicateNode { id: String },

    NodeNotFound { id: String },

    EdgeNotFound { source: String, target: String },

    EdgeIdNotFound { edge_id: String },

    MissingEndpoint { missing: Vec<String> },

    InvalidStartNode { id: String },

    InvalidWeight {
        edge_id: String,
        source: String,
        target: String,
    },

    NegativeWeightUnsupported,

    NegativeCycleDetected,

    UnsupportedOnUndirected,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DuplicateNode { id } => write!(f, "node \"{id}\" already exists"),
            Error::NodeNotFound { id } => write!(f, "node \"{id}\" does not exist"),
            Error::EdgeNotFound { source, target } => {
                write!(f, "no edge from \"{source}\" to \"{target}\"")
            }
            Error::EdgeIdNotFound { edge_id } => write!(f, "unknown edge id \"{edge_id}\""),
            Error::MissingEndpoint { missing } => {
                write!(f, "edge references missing node(s): {}", missing.join(", "))
            }
            Error::InvalidStartNode { id } => {
                write!(f, "start node \"{id}\" does not exist in the graph")
            }
            Error::InvalidWeight {
                edge_id,
                source,
                target,
            } => write!(
                f,
                "edge \"{edge_id}\" from \"{source}\" to \"{target}\" has invalid weight"
            ),
            Error::NegativeWeightUnsupported => write!(
                f,
                "graph contains negative weight edges; Dijkstra's algorithm cannot be used"
            ),
            Error::NegativeCycleDetected => {
                write!(f, "graph contains a negative-weight cycle")
            }
            Error::UnsupportedOnUndirected => {
                write!(f, "topological sort is undefined for undirected graphs")
            }
        }
    }
}

impl std::error::Error for Error {}
