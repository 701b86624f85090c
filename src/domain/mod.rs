// Domain layer: value objects, raw form fields and the storage port.

pub mod form;
pub mod model;
pub mod ports;
