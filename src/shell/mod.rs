// Composition root.
//
// - `state` wires the storage adapters into the use case handlers.
// - `http` mounts the inbound handlers and maps use case errors onto responses.

pub mod http;
pub mod state;
