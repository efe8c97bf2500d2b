//! Services for deferred file deletion: the marker store, the sweep engine
//! and its deletion executor, the repeat scheduler, and the wrapper-script
//! generator. Every service is generic over an infra value implementing the
//! seams it needs, so the whole layer is testable against mocks.

mod executor;
mod path_list;
mod schedule;
mod scripts;
mod store;
mod sweep;

pub use executor::DeletionExecutor;
pub use path_list::read_path_list;
pub use schedule::SweepScheduler;
pub use scripts::ScriptGenService;
pub use store::MarkerStoreService;
pub use sweep::SweepService;

#[cfg(test)]
pub mod test_fixtures;
