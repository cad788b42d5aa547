use crate::Cost;
use std::sync::Arc;

/// A Path from a start to a goal, along with its total Cost.
///
/// Iterating a Path always goes from the start to the goal, regardless of the order the steps
/// were collected in.
#[derive(Debug, Clone)]
pub struct Path<P> {
    steps: Arc<[P]>,
    cost: Cost,
    is_reversed: bool,
}

impl<P> Path<P> {
    /// Creates a Path from steps ordered start to goal
    pub fn new(steps: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            steps: steps.into(),
            cost,
            is_reversed: false,
        }
    }

    /// Creates a Path from steps ordered goal to start, like they come out of following the
    /// parents of a search
    pub fn from_goal(steps: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            steps: steps.into(),
            cost,
            is_reversed: true,
        }
    }

    /// The total Cost of walking this Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of steps, including start and goal
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if there are no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first step
    pub fn start(&self) -> Option<&P> {
        self.iter().next()
    }

    /// The last step
    pub fn goal(&self) -> Option<&P> {
        self.iter().next_back()
    }

    /// Returns an Iterator over the Path, from start to goal.
    ///
    /// Use `.rev()` to go from goal to start.
    pub fn iter(&self) -> Iter<P> {
        Iter {
            iter: self.steps.iter(),
            reversed: self.is_reversed,
        }
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        let index = if self.is_reversed {
            self.steps.len() - index - 1
        } else {
            index
        };
        &self.steps[index]
    }
}

/// An Iterator over the steps of a [`Path`]
#[derive(Debug)]
pub struct Iter<'a, P> {
    iter: std::slice::Iter<'a, P>,
    reversed: bool,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;
    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next_back()
        } else {
            self.iter.next()
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<P> DoubleEndedIterator for Iter<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next()
        } else {
            self.iter.next_back()
        }
    }
}
impl<P> ExactSizeIterator for Iter<'_, P> {}
impl<P> std::iter::FusedIterator for Iter<'_, P> {}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;
    fn into_iter(self) -> Iter<'a, P> {
        self.iter()
    }
}

impl<P: PartialEq> PartialEq for Path<P> {
    fn eq(&self, rhs: &Path<P>) -> bool {
        // storage order may differ
        self.cost == rhs.cost && self.len() == rhs.len() && self.iter().eq(rhs.iter())
    }
}
impl<P: Eq> Eq for Path<P> {}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        let mut steps = self.iter();
        match steps.next() {
            None => write!(fmt, "<empty>"),
            Some(first) => {
                write!(fmt, "{}", first)?;
                for p in steps {
                    write!(fmt, " -> {}", p)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 42);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
    }

    #[test]
    fn from_goal() {
        let path = Path::from_goal(vec![5, 3, 0], 44);

        assert_eq!(path[0], 0);
        assert_eq!(path[2], 5);
        assert_eq!(path.start(), Some(&0));
        assert_eq!(path.goal(), Some(&5));
        assert_eq!(path, vec![0, 3, 5]);
        assert_eq!(path.iter().rev().copied().collect::<Vec<_>>(), vec![5, 3, 0]);
        assert_eq!(path, Path::new(vec![0, 3, 5], 44));
    }

    #[test]
    fn display() {
        let path = Path::from_goal(vec![4, 2, 0], 42);

        assert_eq!(&format!("{}", path), "Path[Cost = 42]: 0 -> 2 -> 4");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }
}
