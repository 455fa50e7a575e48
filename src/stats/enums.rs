/// Names of the individual counters.
pub mod stats_event;
