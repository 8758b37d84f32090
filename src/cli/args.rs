use clap::{ArgGroup, Args};

/// Arguments for `routegraph paths`; exactly one bound is required
#[derive(Args, Debug, Clone)]
#[command(group(
    ArgGroup::new("bound")
        .required(true)
        .args(["max_stops", "exact_stops", "max_distance"])
))]
pub struct PathsArgs {
    /// Start node
    pub from: String,

    /// Destination node
    pub to: String,

    /// Trips with at most this many stops
    #[arg(long)]
    pub max_stops: Option<usize>,

    /// Trips with exactly this many stops
    #[arg(long)]
    pub exact_stops: Option<usize>,

    /// Trips with a total distance strictly below this value
    #[arg(long)]
    pub max_distance: Option<u64>,
}
