use super::{VertexId, Weight};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WeightedEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl WeightedEdge {
    /// Self loops are kept: the solver never relaxes into a visited vertex,
    /// so they are harmless.
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaillessEdge {
    head: VertexId,
    weight: Weight,
}

impl TaillessEdge {
    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge::new(tail, self.head, self.weight)
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DirectedEdge {
    tail: VertexId,
    head: VertexId,
}

impl DirectedEdge {
    pub fn new(tail: VertexId, head: VertexId) -> DirectedEdge {
        DirectedEdge { tail, head }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }
}
