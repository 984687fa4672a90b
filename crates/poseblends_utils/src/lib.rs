//! Small numerical helpers with no dependency on the driver types.

pub mod numerical;
