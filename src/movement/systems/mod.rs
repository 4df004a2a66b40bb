//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;

pub(crate) use input::read_input;
