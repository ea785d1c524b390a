//! Assembly display names carried by assembly-qualified type names.
//!
//! The text after the first root-level comma of a type name is an assembly display
//! name such as `mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089`.
//! [`crate::TypeName`] keeps it verbatim; this module parses it on request.
//!
//! # Key Components
//!
//! - [`AssemblyIdentity`] - Name, version, culture, public key token and architecture
//! - [`AssemblyVersion`] - Four-part version numbering with parsing and comparison
//! - [`ProcessorArchitecture`] - Processor architecture specification
//!
//! # Usage Examples
//!
//! ```rust
//! use clrtypename::identity::{AssemblyIdentity, AssemblyVersion};
//!
//! let mscorlib = AssemblyIdentity::parse(
//!     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089"
//! )?;
//! assert_eq!(mscorlib.version, AssemblyVersion::new(4, 0, 0, 0));
//! assert!(mscorlib.is_culture_neutral());
//! # Ok::<(), clrtypename::Error>(())
//! ```

pub use assembly::{AssemblyIdentity, AssemblyVersion, ProcessorArchitecture};

mod assembly;
