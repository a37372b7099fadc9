//! Investigation engine: probing, orchestration, background worker.

pub mod investigator;
pub mod prober;
pub mod worker;
