// Domain layer: reference tables, value objects and the input seam.

pub mod model;
pub mod ports;
pub mod reference;
