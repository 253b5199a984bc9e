//! Addressing positions inside nested values
//!
//! A [Path] is a list of [Step]s walked from the root. The empty path is the root itself.
use std::fmt::Formatter;

/// One level of descent into a container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Map key
    Key(String),
    /// List index
    Index(usize),
}

impl Step {
    pub fn is_index(&self) -> bool {
        matches!(self, Step::Index(_))
    }

    /// The list index this step addresses
    ///
    /// Keys made of ascii digits only (`"1"`, as json object keys spell indices) count too.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Step::Index(index) => Some(*index),
            Step::Key(key) if key.bytes().all(|b| b.is_ascii_digit()) => key.parse().ok(),
            Step::Key(_) => None,
        }
    }
}

impl From<&str> for Step {
    fn from(value: &str) -> Self {
        Step::Key(value.to_string())
    }
}

impl From<String> for Step {
    fn from(value: String) -> Self {
        Step::Key(value)
    }
}

impl From<usize> for Step {
    fn from(value: usize) -> Self {
        Step::Index(value)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Key(key) => f.write_str(key),
            Step::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Location of a value within a nested structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The first `len` steps of this path
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            steps: self.steps[..len.min(self.steps.len())].to_vec(),
        }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn pop(&mut self) {
        self.steps.pop();
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

/// Renders as `a.b[0].c`, or `<root>` for the empty path
impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }

        for (position, step) in self.steps.iter().enumerate() {
            if position > 0 && !step.is_index() {
                f.write_str(".")?;
            }
            write!(f, "{step}")?;
        }

        Ok(())
    }
}

/// Build a [Path] from keys and indices
///
/// ```
/// # use tfbox::path;
/// let path = path!["tags", 0, "name"];
/// assert_eq!(path.to_string(), "tags[0].name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::Path::root()
    };
    ($($step:expr),+ $(,)?) => {
        $crate::path::Path::from(vec![$($crate::path::Step::from($step)),+])
    };
}
