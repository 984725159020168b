/// Module that provides the compiled form of a state machine and the search over it.
pub(crate) mod compiled_machine;
pub(crate) use compiled_machine::CompiledMachine;

/// Module with conversion to graphviz dot format
#[cfg(feature = "dot_writer")]
pub(crate) mod dot;

/// Module for the ID types.
mod ids;
pub(crate) use ids::StateID;

/// Module with the topology diagnostics of compiled state machines.
mod topology;
