// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # clrtypename
//!
//! Parser, formatter and flyweight cache for .NET type names.
//!
//! `clrtypename` reads the textual type names produced by `Type.ToString()` and
//! `Type.AssemblyQualifiedName` into a structured, immutable tree: namespace, simple
//! name, nested generic arguments, array ranks and the optional assembly qualifier.
//! Names can be rendered back into text in several formats, and a rendering with the
//! full assembly name reproduces the runtime's own string exactly.
//!
//! Parsing is purely textual. Nothing is loaded or resolved, which makes the crate
//! suitable as the front end of a type resolver, a serializer that stores type names,
//! or tooling inspecting .NET metadata outside of the runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use clrtypename::prelude::*;
//!
//! let cache = TypeNameCache::new();
//! let name = cache.get(
//!     "System.Collections.Generic.Dictionary`2[[System.String, mscorlib],[System.Int32, mscorlib]], mscorlib",
//! )?;
//!
//! assert_eq!(name.declare_name(), "System.Collections.Generic.Dictionary`2");
//! assert_eq!(name.namespace(), Some("System.Collections.Generic"));
//! assert_eq!(name.generic_argument(0)?.name(), "String");
//! assert_eq!(
//!     name.format(TypeNameFormat::full_name()),
//!     "System.Collections.Generic.Dictionary`2[System.String,System.Int32]"
//! );
//! # Ok::<(), clrtypename::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`typename`] - Parsing, formatting and caching of type names
//! - [`identity`] - Parsing of the assembly display names embedded in type names
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use clrtypename::{Error, TypeName};
//!
//! match TypeName::parse("") {
//!     Ok(_) => unreachable!(),
//!     Err(Error::InvalidTypeNameFormat { message, .. }) => println!("Rejected: {}", message),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Cache hits, misses and rejected names are reported through the [`log`] facade at
//! `trace` and `debug` level. Install any `log` compatible logger to see them.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use clrtypename::prelude::*;
///
/// let name = TypeName::parse("NS.Foo[][,]")?;
/// assert_eq!(name.array_ranks(), &[1, 2]);
/// # Ok::<(), clrtypename::Error>(())
/// ```
pub mod prelude;

pub mod identity;
pub mod typename;

/// `clrtypename` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `clrtypename` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

/// Parsed type names, their cache and formatting options.
///
/// See [`typename`] for the grammar and [`TypeNameCache`] for sharing instances.
pub use typename::{
    AssemblyNameStyle, TypeName, TypeNameCache, TypeNameFormat, TypeSuffix, MAX_NESTING_DEPTH,
};
