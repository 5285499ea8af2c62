pub mod balance;
pub mod batch;
pub mod closing;
pub mod geofence;
pub mod recorder;
pub mod scheduler;
pub mod store;
