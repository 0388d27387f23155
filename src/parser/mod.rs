pub mod classify;
pub mod extension;
pub mod header;
pub mod main;
pub mod record;
pub mod sequencer;
pub mod summary;

pub use classify::*;
pub use extension::*;
pub use header::*;
pub use main::*;
pub use record::*;
pub use sequencer::*;
pub use summary::*;
