use thiserror::Error;

/// Everything that can go wrong between opening an input file and handing a
/// parsed instance to a solver.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended early, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid token {token:?}, expected {expected}")]
    InvalidToken {
        token: String,
        expected: &'static str,
    },

    #[error("node {node} is outside 1..={n}")]
    NodeOutOfRange { node: i64, n: usize },

    #[error("data set must be 1 or 2, got {0}")]
    InvalidDataSet(i64),

    #[error("portal period must be positive")]
    ZeroPeriod,

    #[error("portal periods are too large to track across {nodes} rooms")]
    PeriodsTooLarge { nodes: usize },

    #[error("dependency graph has a cycle: only {scheduled} of {n} tasks could be scheduled")]
    CyclicDependencies { scheduled: usize, n: usize },
}
