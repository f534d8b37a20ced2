use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance rounded up to the next integer.
    #[inline(always)]
    pub fn cost(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y).ceil()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out vertex ids for one run: unique, increasing, starting at 1.
#[derive(Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> VertexId {
        let id = VertexId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects which coordinate system a cost is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostKind {
    Primary,
    Secondary,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    a: Point,
    b: Point,
}

impl Vertex {
    pub fn new(ids: &mut IdAllocator, a: Point, b: Point) -> Self {
        Self::with_id(ids.next_id(), a, b)
    }

    pub fn with_id(id: VertexId, a: Point, b: Point) -> Self {
        Self { id, a, b }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn coordinates_a(&self) -> Point {
        self.a
    }

    pub fn coordinates_b(&self) -> Point {
        self.b
    }

    /// Cost in the first coordinate system. This one feeds the objective.
    #[inline(always)]
    pub fn cost1(&self, other: &Vertex) -> f64 {
        self.a.cost(&other.a)
    }

    #[inline(always)]
    pub fn cost2(&self, other: &Vertex) -> f64 {
        self.b.cost(&other.b)
    }

    #[inline(always)]
    pub fn cost(&self, other: &Vertex, kind: CostKind) -> f64 {
        match kind {
            CostKind::Primary => self.cost1(other),
            CostKind::Secondary => self.cost2(other),
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v<{}>({},{},{},{})",
            self.id, self.a.x, self.a.y, self.b.x, self.b.y
        )
    }
}
