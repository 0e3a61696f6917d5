// Domain layer: core models, ports (interfaces) and the services that turn
// delimited records into SQL insert statements.

pub mod model;
pub mod ports;
pub mod services;
