//! visitor pattern helpers
mod visit_leaves;
pub use visit_leaves::VisitLeaves;

/// Visitor that receives its subjects by value
pub trait Visit<T> {
    fn visit(&mut self, value: T);
}

// blanket impl for FnMut
impl<T, F> Visit<T> for F
where
    F: FnMut(T),
{
    fn visit(&mut self, value: T) {
        self(value)
    }
}
