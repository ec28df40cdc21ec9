use crate::ops::traits::Scalar;
use crate::value::Value;
use std::fmt;

impl<T: Scalar> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.graph.borrow();
        let node = inner.node(self.id);
        let mut s = f.debug_struct("Value");
        s.field("id", &self.id)
            .field("data", &node.data)
            .field("grad", &node.grad)
            .field("op", &node.op.kind());
        if let Some(label) = &node.label {
            s.field("label", label);
        }
        s.finish()
    }
}

/// Prints `Value(data=..)`, prefixed by the label when there is one.
impl<T: Scalar> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.graph.borrow();
        let node = inner.node(self.id);
        match &node.label {
            Some(label) => write!(f, "{}: Value(data={})", label, node.data),
            None => write!(f, "Value(data={})", node.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn test_display() {
        let graph: Graph = Graph::new();
        assert_eq!(graph.value(2.5).to_string(), "Value(data=2.5)");
        assert_eq!(graph.labeled(-1.0, "b").to_string(), "b: Value(data=-1)");
    }

    #[test]
    fn test_debug_mentions_op() {
        let graph: Graph = Graph::new();
        let y = graph.value(1.0).tanh();
        let text = format!("{:?}", y);
        assert!(text.contains("Tanh"), "{}", text);
        assert!(text.contains("grad: 0.0"), "{}", text);
    }
}
