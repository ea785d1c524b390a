//! Parsing, formatting and caching of .NET type names.
//!
//! This module handles the textual type-name grammar used by `Type.ToString()` and
//! `Type.AssemblyQualifiedName`: namespaces, `+`-nested types, backtick generic arity
//! markers, bracketed generic argument lists (optionally carrying their own assembly
//! names), jagged and multi-dimensional array suffixes, `*` pointer and `&` by-ref
//! markers, and a trailing assembly qualifier.
//!
//! # Key Components
//!
//! - [`TypeName`] - Immutable, structured representation of one name
//! - [`TypeNameCache`] - Flyweight cache handing out one shared instance per input string
//! - [`TypeSuffix`] - Array, pointer and by-ref markers after a declaration
//! - [`TypeNameFormat`] / [`AssemblyNameStyle`] - Options for rendering a name back to text
//!
//! No type is ever loaded or resolved. A resolver consuming these names uses
//! [`TypeName::declare_name`] with [`TypeName::assembly_name`] to find a definition and
//! [`TypeName::generic_arguments`] / [`TypeName::array_ranks`] to close and wrap it.
//!
//! # Examples
//!
//! ```rust
//! use clrtypename::{TypeNameCache, TypeNameFormat};
//!
//! let cache = TypeNameCache::new();
//! let name = cache.get("NS.Outer`1[[NS.Inner, AsmA]][], AsmB")?;
//!
//! assert_eq!(name.assembly_name(), Some("AsmB"));
//! assert_eq!(name.generic_argument(0)?.assembly_name(), Some("AsmA"));
//! assert_eq!(name.array_rank(0)?, 1);
//! assert_eq!(name.format(TypeNameFormat::full_name()), "NS.Outer`1[NS.Inner][]");
//! # Ok::<(), clrtypename::Error>(())
//! ```

mod cache;
mod format;
mod name;
mod parser;
mod suffix;

pub use cache::TypeNameCache;
pub use format::{AssemblyNameStyle, TypeNameFormat};
pub use name::TypeName;
pub use parser::MAX_NESTING_DEPTH;
pub use suffix::TypeSuffix;
