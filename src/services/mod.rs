// Service module exports

pub mod calendar_math;
pub mod id;
pub mod settings;
