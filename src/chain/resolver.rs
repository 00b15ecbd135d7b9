//! The generic step builder behind [`country_code`](super::country_code).

/// An in-progress optional chain.
///
/// `Chain<T>` holds the value reached so far (if any) and remembers which
/// step first came up empty. Each [`step`](Chain::step) consumes the chain and
/// produces the next one, so the type of the current link changes as the
/// walk descends (`Chain<HumanPerson>` then `Chain<Address>` and so on).
///
/// Once a link is absent every further accessor is skipped without being
/// called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<T> {
    value: Option<T>,
    depth: usize,
    absent_at: Option<usize>,
}

impl<T> Chain<T> {
    /// Starts a chain at `root`. An absent root is reported as step `0`.
    pub fn new(root: Option<T>) -> Self {
        let absent_at = root.is_none().then_some(0);
        Self {
            value: root,
            depth: 0,
            absent_at,
        }
    }

    /// Applies `accessor` to the current link if there is one.
    pub fn step<U, F>(self, accessor: F) -> Chain<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        let depth = self.depth + 1;
        match self.value {
            Some(current) => {
                let next = accessor(current);
                let absent_at = next.is_none().then_some(depth);
                Chain {
                    value: next,
                    depth,
                    absent_at,
                }
            }
            None => Chain {
                value: None,
                depth,
                absent_at: self.absent_at,
            },
        }
    }

    /// Index of the link that was missing: `0` for the root, `n` for the n-th
    /// accessor. `None` while every link is present.
    pub fn absent_at(&self) -> Option<usize> {
        self.absent_at
    }

    /// Number of accessors appended so far, evaluated or skipped.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Finishes the walk.
    pub fn resolve(self) -> Option<T> {
        self.value
    }
}

impl<T> From<Option<T>> for Chain<T> {
    fn from(root: Option<T>) -> Self {
        Self::new(root)
    }
}
