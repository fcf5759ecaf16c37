use crate::autograd::backward_op::apply_local_backward;
use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds `self.grad` with `1.0`, orders the reachable graph so that every
    /// node comes after all of its consumers, then applies each node's local
    /// rule in that order. When a node's rule runs its gradient is therefore
    /// final.
    ///
    /// Gradients are accumulated, never reset: reset them (e.g. with
    /// [`Module::zero_grad`](crate::nn::Module::zero_grad)) before each pass
    /// whose result you intend to read. Calling `backward` on an intermediate
    /// node only touches the graph reachable from it.
    pub fn backward(&self) {
        self.set_grad(1.0);

        let sorted_nodes = topological_sort(self);
        log::trace!(
            "backward: {} nodes reachable from root (data={})",
            sorted_nodes.len(),
            self.data()
        );

        for node in sorted_nodes.iter().rev() {
            apply_local_backward(node);
        }
    }
}
