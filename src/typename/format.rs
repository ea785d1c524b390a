//! Output options for rendering a [`crate::TypeName`] back into a string.

use strum::EnumIter;

/// How much of the assembly qualifier to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AssemblyNameStyle {
    /// Only the simple assembly name, e.g. `mscorlib`
    Simple,
    /// The stored assembly text as parsed, e.g. `mscorlib, Version=4.0.0.0, Culture=neutral, ...`
    Full,
}

/// Options controlling [`crate::TypeName::format`].
///
/// The presets cover the renderings .NET itself produces. Emitting the full
/// assembly name with namespaces reproduces an `AssemblyQualifiedName` exactly,
/// which is why it is the default.
///
/// # Examples
///
/// ```rust
/// use clrtypename::{AssemblyNameStyle, TypeName, TypeNameFormat};
///
/// let name = TypeName::parse("System.String, mscorlib, Version=4.0.0.0")?;
/// assert_eq!(name.format(TypeNameFormat::simple_assembly()), "System.String, mscorlib");
/// assert_eq!(name.format(TypeNameFormat::name_only()), "String");
///
/// let custom = TypeNameFormat::new(false, Some(AssemblyNameStyle::Simple));
/// assert_eq!(name.format(custom), "String, mscorlib");
/// # Ok::<(), clrtypename::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeNameFormat {
    /// Emit the declare name (namespace and nesting) instead of the bare simple name
    pub with_namespace: bool,
    /// Assembly qualifier to append, `None` to omit it
    pub assembly_name: Option<AssemblyNameStyle>,
}

impl Default for TypeNameFormat {
    fn default() -> Self {
        Self::full()
    }
}

impl TypeNameFormat {
    /// Create a format from its two options
    #[must_use]
    pub const fn new(with_namespace: bool, assembly_name: Option<AssemblyNameStyle>) -> Self {
        Self {
            with_namespace,
            assembly_name,
        }
    }

    /// Namespaces and the full assembly name; round-trips an `AssemblyQualifiedName`
    #[must_use]
    pub const fn full() -> Self {
        Self::new(true, Some(AssemblyNameStyle::Full))
    }

    /// Namespaces and only the simple assembly name
    #[must_use]
    pub const fn simple_assembly() -> Self {
        Self::new(true, Some(AssemblyNameStyle::Simple))
    }

    /// Namespaces without any assembly qualifier
    #[must_use]
    pub const fn full_name() -> Self {
        Self::new(true, None)
    }

    /// Bare simple names without any assembly qualifier
    #[must_use]
    pub const fn name_only() -> Self {
        Self::new(false, None)
    }

    /// Whether an argument carrying `assembly_name` must be wrapped in brackets
    pub(crate) fn emits_assembly(&self, assembly_name: Option<&str>) -> bool {
        self.assembly_name.is_some() && assembly_name.is_some()
    }
}
