use thiserror::Error;

/// Convenient result alias for the waypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a waypoint name could not be found in the map.
    #[error("unknown waypoint name: {name}{}", format_suggestions(.suggestions))]
    UnknownWaypoint {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two waypoints.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a map declares the same waypoint name twice.
    #[error("duplicate waypoint name encountered: {name}")]
    DuplicateWaypoint { name: String },

    /// Raised when a link references a waypoint the map never declared.
    #[error("link references unknown waypoint: {name}")]
    UnknownLinkEndpoint { name: String },

    /// Raised when a link carries a negative traversal cost.
    #[error("link from {from} to {to} has negative cost {cost}")]
    NegativeLinkCost { from: String, to: String, cost: f64 },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for map file parse errors.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
