//! Stories app shell: session loop, effect runner, storage, logging, and a
//! minimal terminal view.
pub mod effects;
pub mod logging;
pub mod persistence;
pub mod session;
pub mod view;
