//! # clrtypename Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the clrtypename library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all clrtypename operations
pub use crate::Error;

/// The result type used throughout clrtypename
pub use crate::Result;

// ================================================================================================
// Type Names
// ================================================================================================

/// Parsed type names, their cache and formatting options
pub use crate::typename::{
    AssemblyNameStyle, TypeName, TypeNameCache, TypeNameFormat, TypeSuffix,
};

// ================================================================================================
// Assembly Identity
// ================================================================================================

/// Assembly display name components
pub use crate::identity::{AssemblyIdentity, AssemblyVersion, ProcessorArchitecture};
