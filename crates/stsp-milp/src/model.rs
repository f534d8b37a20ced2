use good_lp::solvers::microlp::{microlp, MicroLpProblem};
use good_lp::{variable, Expression, ProblemVariables, SolverModel, Variable};
use stsp_core::{CostKind, Cut, Error, Instance, Relation, Result};

/// The binary variable created for every unordered pair of positions.
pub struct EdgeVariables {
    n: usize,
    vars: Vec<Variable>,
}

impl EdgeVariables {
    pub fn order(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn slot(&self, u: usize, v: usize) -> usize {
        debug_assert!(u != v && u < self.n && v < self.n);
        let (u, v) = if u < v { (u, v) } else { (v, u) };
        // Row u of the strict upper triangle starts after u rows of shrinking length
        u * self.n - u * (u + 1) / 2 + (v - u - 1)
    }

    /// Same variable for `(u, v)` and `(v, u)`.
    #[inline(always)]
    pub fn get(&self, u: usize, v: usize) -> Variable {
        self.vars[self.slot(u, v)]
    }

    pub fn cut_expression(&self, cut: &Cut) -> Expression {
        let mut expr = Expression::with_capacity(cut.edges.len());
        for &(u, v) in &cut.edges {
            expr.add_mul(1.0, self.get(u, v));
        }
        expr
    }
}

/// Degree-2 model over `cost1` with every cut collected so far.
pub fn build_model(instance: &Instance, cuts: &[Cut]) -> Result<(EdgeVariables, MicroLpProblem)> {
    let n = instance.order();
    if n < 3 {
        return Err(Error::invalid_input(format!(
            "a tour needs at least 3 vertices, got {n}"
        )));
    }

    let mut problem = ProblemVariables::new();
    let mut vars = Vec::with_capacity(instance.size());
    let mut objective = Expression::with_capacity(instance.size());

    for u in 0..n {
        for v in u + 1..n {
            let x_uv = problem.add(variable().binary().name(format!("x_{u}_{v}")));
            objective.add_mul(instance.cost(u, v, CostKind::Primary), x_uv);
            vars.push(x_uv);
        }
    }
    let edges = EdgeVariables { n, vars };

    let mut model = problem.minimise(objective).using(microlp);

    for u in 0..n {
        let mut degree = Expression::with_capacity(n - 1);
        for v in (0..n).filter(|&v| v != u) {
            degree.add_mul(1.0, edges.get(u, v));
        }
        model = model.with(degree.eq(2.0));
    }

    for cut in cuts {
        let expr = edges.cut_expression(cut);
        let bound = cut.bound as f64;
        model = model.with(match cut.relation {
            Relation::Equal => expr.eq(bound),
            Relation::LessEqual => expr.leq(bound),
        });
    }

    Ok((edges, model))
}
