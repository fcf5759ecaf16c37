use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Returns every node reachable from `root`, operands before their consumers.
///
/// Post-order depth-first traversal over operand edges with a visited set
/// keyed by node identity, so a node reachable through several paths (a
/// diamond) appears exactly once. `root` is always the last element.
///
/// The traversal uses an explicit stack, as does dropping a graph (see
/// [`ValueData`](crate::value_data::ValueData)), so long chains of operations
/// never overflow the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // `true` once the node's operands have been scheduled
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reverse so the first operand is explored first, like the recursive form.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
