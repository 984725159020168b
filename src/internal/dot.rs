//! The `dot` module contains the conversion from a compiled state machine to the graphviz dot
//! format. It is used for debugging purposes.

use dot_writer::{Attributes, DotWriter, RankDirection};

use super::compiled_machine::CompiledMachine;
use crate::Matcher;

/// Render the state machine to a graphviz dot format.
///
/// Nodes are created in state id order, so the node for state `n` is named `node_n`.
pub(crate) fn machine_render<T, S, L>(
    machine: &CompiledMachine<T, S, L>,
    label: &str,
    output: &mut Vec<u8>,
) where
    S: std::fmt::Debug,
    L: std::fmt::Debug,
{
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);

    for (id, state) in machine.states.iter().enumerate() {
        let mut node = digraph.node_auto();
        let name = format!("{:?}", machine.names[id]);
        node.set_label(&name.escape_default().to_string());
        if id == machine.initial_state.as_usize() {
            node.set_shape(dot_writer::Shape::Circle)
                .set_color(dot_writer::Color::Blue)
                .set_pen_width(3.0);
        }
        if let Some(accept) = &state.accept {
            node.set_color(dot_writer::Color::Red)
                .set_pen_width(3.0)
                .set_label(&format!("{}\n{:?}", name, accept).escape_default().to_string());
        }
    }

    for (id, state) in machine.states.iter().enumerate() {
        let Some(transitions) = &state.transitions else {
            continue;
        };
        for transition in transitions {
            let description = transition.matcher.describe();
            let several = transition.targets.len() > 1;
            for (order, target) in transition.targets.iter().enumerate() {
                let edge_label = if several {
                    format!("{} #{}", description, order)
                } else {
                    description.clone()
                };
                digraph
                    .edge(
                        &format!("node_{}", id),
                        &format!("node_{}", target.as_usize()),
                    )
                    .attributes()
                    .set_label(&edge_label.escape_default().to_string());
            }
        }
    }
}
