pub mod aggregate_updater;
