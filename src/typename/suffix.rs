//! Array, pointer and by-ref markers written after a type's declaration.

use std::fmt;

/// One element of the suffix run following a declare name or generic argument list.
///
/// `System.Int32[,]*&` carries `[Array(2), Pointer, ByRef]`, in the order written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSuffix {
    /// An array group with the given rank, `[]` or `[,,]`
    Array(usize),
    /// A `*` pointer marker
    Pointer,
    /// A `&` by-reference marker
    ByRef,
}

impl TypeSuffix {
    /// The rank if this is an array group
    #[must_use]
    pub fn array_rank(&self) -> Option<usize> {
        match self {
            TypeSuffix::Array(rank) => Some(*rank),
            TypeSuffix::Pointer | TypeSuffix::ByRef => None,
        }
    }
}

impl fmt::Display for TypeSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSuffix::Array(rank) => {
                f.write_str("[")?;
                for _ in 1..*rank {
                    f.write_str(",")?;
                }
                f.write_str("]")
            }
            TypeSuffix::Pointer => f.write_str("*"),
            TypeSuffix::ByRef => f.write_str("&"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_runtime_syntax() {
        assert_eq!(TypeSuffix::Array(1).to_string(), "[]");
        assert_eq!(TypeSuffix::Array(3).to_string(), "[,,]");
        assert_eq!(TypeSuffix::Pointer.to_string(), "*");
        assert_eq!(TypeSuffix::ByRef.to_string(), "&");
    }

    #[test]
    fn only_arrays_have_a_rank() {
        assert_eq!(TypeSuffix::Array(2).array_rank(), Some(2));
        assert_eq!(TypeSuffix::Pointer.array_rank(), None);
        assert_eq!(TypeSuffix::ByRef.array_rank(), None);
    }
}
