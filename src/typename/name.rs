//! The immutable, structured representation of a parsed type name.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, Weak},
};

use crate::{
    identity::AssemblyIdentity,
    typename::{
        format::{AssemblyNameStyle, TypeNameFormat},
        parser::{self, ParsedTypeName},
        suffix::TypeSuffix,
    },
    Error, Result,
};

/// A parsed .NET type name.
///
/// Built from strings such as those returned by `Type.ToString()` or
/// `Type.AssemblyQualifiedName`. Every field is derived from the text alone and is
/// fixed at construction, so instances are shared freely behind an [`Arc`].
///
/// Generic arguments are owned by their parent; each argument keeps a [`Weak`]
/// reference back to it, available through [`TypeName::generic_parent`].
///
/// Two instances are equal when their [`TypeName::assembly_qualified_name`] strings
/// are equal. This is a textual comparison, not type identity:
/// `System.String` and `System.String, mscorlib` are different names.
///
/// # Examples
///
/// ```rust
/// use clrtypename::TypeName;
///
/// let name = TypeName::parse(
///     "System.Collections.Generic.Dictionary`2[System.String,System.Int32]",
/// )?;
/// assert_eq!(name.declare_name(), "System.Collections.Generic.Dictionary`2");
/// assert_eq!(name.generic_argument_count(), 2);
/// assert_eq!(name.generic_argument(1)?.name(), "Int32");
/// # Ok::<(), clrtypename::Error>(())
/// ```
#[derive(Debug)]
pub struct TypeName {
    assembly_qualified_name: String,
    full_name: String,
    declare_name: String,
    namespace: Option<String>,
    name: String,
    assembly_name: Option<String>,
    generic_arguments: Vec<Arc<TypeName>>,
    generic_parent: Weak<TypeName>,
    suffixes: Vec<TypeSuffix>,
    array_ranks: Vec<usize>,
}

impl TypeName {
    /// Parse a type name without consulting any cache.
    ///
    /// Use [`crate::TypeNameCache::get`] to share instances between callers.
    ///
    /// ## Arguments
    /// * 'name' - A fully or partially qualified type name
    ///
    /// # Errors
    /// Returns [`Error::InvalidTypeNameFormat`] if `name` is empty or malformed, and
    /// [`Error::RecursionLimit`] if its generic arguments nest too deeply.
    pub fn parse(name: &str) -> Result<Arc<TypeName>> {
        let parsed = parser::parse(name)?;
        Ok(Self::from_parsed(parsed, Weak::new()))
    }

    fn from_parsed(parsed: ParsedTypeName, parent: Weak<TypeName>) -> Arc<TypeName> {
        let ParsedTypeName {
            assembly_qualified_name,
            full_name,
            declare_name,
            namespace,
            name,
            assembly_name,
            generic_arguments,
            suffixes,
        } = parsed;

        let array_ranks = suffixes.iter().filter_map(TypeSuffix::array_rank).collect();

        Arc::new_cyclic(|this| TypeName {
            assembly_qualified_name,
            full_name,
            declare_name,
            namespace,
            name,
            assembly_name,
            generic_arguments: generic_arguments
                .into_iter()
                .map(|argument| Self::from_parsed(argument, this.clone()))
                .collect(),
            generic_parent: parent,
            suffixes,
            array_ranks,
        })
    }

    /// The trimmed input, with one enclosing bracket pair removed
    #[must_use]
    pub fn assembly_qualified_name(&self) -> &str {
        &self.assembly_qualified_name
    }

    /// The name including namespace, nesting, generic arguments and array suffixes,
    /// without the trailing assembly name
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The full name without generic arguments, array suffixes and pointer or
    /// by-ref markers, e.g. ``System.Collections.Generic.List`1``
    ///
    /// This is the string under which the open generic or non-generic type
    /// definition can be looked up in a single assembly.
    #[must_use]
    pub fn declare_name(&self) -> &str {
        &self.declare_name
    }

    /// Everything before the last `.` of the declare name
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The simple name; the last nesting segment for nested types
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assembly qualifier, as written after the first root-level comma
    #[must_use]
    pub fn assembly_name(&self) -> Option<&str> {
        self.assembly_name.as_deref()
    }

    /// The assembly name up to its first comma, e.g. `mscorlib`
    #[must_use]
    pub fn simple_assembly_name(&self) -> Option<&str> {
        self.assembly_name.as_deref().map(simple_assembly)
    }

    /// Parse [`TypeName::assembly_name`] into an [`AssemblyIdentity`].
    ///
    /// Returns `Ok(None)` when the name carries no assembly qualifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the assembly qualifier is not a valid display name.
    pub fn assembly_identity(&self) -> Result<Option<AssemblyIdentity>> {
        self.assembly_name
            .as_deref()
            .map(AssemblyIdentity::parse)
            .transpose()
    }

    /// The generic arguments, in declaration order
    #[must_use]
    pub fn generic_arguments(&self) -> &[Arc<TypeName>] {
        &self.generic_arguments
    }

    /// Number of generic arguments
    #[must_use]
    pub fn generic_argument_count(&self) -> usize {
        self.generic_arguments.len()
    }

    /// Get a generic argument by position.
    ///
    /// ## Arguments
    /// * 'index' - Zero-based position in the argument list
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index` is not below [`TypeName::generic_argument_count`].
    pub fn generic_argument(&self, index: usize) -> Result<&Arc<TypeName>> {
        self.generic_arguments
            .get(index)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.generic_arguments.len(),
            })
    }

    /// The generic type this name is an argument of, `None` for a root name
    #[must_use]
    pub fn generic_parent(&self) -> Option<Arc<TypeName>> {
        self.generic_parent.upgrade()
    }

    /// Whether the name has a generic argument list
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.generic_arguments.is_empty()
    }

    /// Array groups and pointer or by-ref markers following the declaration, in
    /// the order they are written
    #[must_use]
    pub fn suffixes(&self) -> &[TypeSuffix] {
        &self.suffixes
    }

    /// Whether the outermost suffix is a `*` pointer marker
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        self.suffixes.last() == Some(&TypeSuffix::Pointer)
    }

    /// Whether the outermost suffix is a `&` by-ref marker
    #[must_use]
    pub fn is_by_ref(&self) -> bool {
        self.suffixes.last() == Some(&TypeSuffix::ByRef)
    }

    /// The rank of every array declaration, in the order they are written.
    ///
    /// Pointer and by-ref markers between the groups are skipped; see
    /// [`TypeName::suffixes`] for the complete run.
    #[must_use]
    pub fn array_ranks(&self) -> &[usize] {
        &self.array_ranks
    }

    /// Number of array declarations, e.g. 2 for `Foo[][,]`
    #[must_use]
    pub fn array_declare_count(&self) -> usize {
        self.array_ranks.len()
    }

    /// Get the rank of an array declaration.
    ///
    /// ## Arguments
    /// * 'index' - Zero-based position of the declaration, leftmost first
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index` is not below [`TypeName::array_declare_count`].
    pub fn array_rank(&self, index: usize) -> Result<usize> {
        self.array_ranks
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.array_ranks.len(),
            })
    }

    /// Whether the name has at least one array suffix, even if a pointer or
    /// by-ref marker follows it
    #[must_use]
    pub fn is_array(&self) -> bool {
        !self.array_ranks.is_empty()
    }

    /// Whether the declare name contains a `+` nesting separator
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.declare_name.contains('+')
    }

    /// Declare name of the enclosing type of a nested type
    #[must_use]
    pub fn declaring_type_name(&self) -> Option<&str> {
        self.declare_name
            .rsplit_once('+')
            .map(|(declaring, _)| declaring)
    }

    /// The arity from the backtick marker of this name's own segment, e.g. 2 for ``Dictionary`2``
    #[must_use]
    pub fn generic_arity(&self) -> Option<usize> {
        self.name
            .rsplit_once('`')
            .and_then(|(_, arity)| arity.parse().ok())
    }

    /// Simple names of every assembly this name refers to, including those of its
    /// generic arguments, without duplicates and in order of first appearance
    #[must_use]
    pub fn referenced_assemblies(&self) -> Vec<&str> {
        let mut assemblies = Vec::new();
        self.collect_assemblies(&mut assemblies);
        assemblies
    }

    fn collect_assemblies<'a>(&'a self, assemblies: &mut Vec<&'a str>) {
        if let Some(assembly) = self.simple_assembly_name() {
            if !assemblies.contains(&assembly) {
                assemblies.push(assembly);
            }
        }

        for argument in &self.generic_arguments {
            argument.collect_assemblies(assemblies);
        }
    }

    /// Render the name with the given options.
    ///
    /// With [`TypeNameFormat::full`] a name parsed from a runtime
    /// `AssemblyQualifiedName` is reproduced exactly. Arguments that emit an
    /// assembly name are wrapped in their own brackets so the output parses back
    /// unambiguously.
    ///
    /// ## Arguments
    /// * 'options' - Which parts of the name to emit
    #[must_use]
    pub fn format(&self, options: TypeNameFormat) -> String {
        let mut result = String::with_capacity(self.assembly_qualified_name.len());
        // Writing into a String never fails
        let _ = self.write_formatted(&mut result, options);
        result
    }

    fn write_formatted<W: fmt::Write>(&self, out: &mut W, options: TypeNameFormat) -> fmt::Result {
        if options.with_namespace {
            out.write_str(&self.declare_name)?;
        } else {
            out.write_str(&self.name)?;
        }

        if self.is_generic() {
            out.write_char('[')?;
            for (index, argument) in self.generic_arguments.iter().enumerate() {
                if index > 0 {
                    out.write_char(',')?;
                }

                let wrap = options.emits_assembly(argument.assembly_name());
                if wrap {
                    out.write_char('[')?;
                }
                argument.write_formatted(out, options)?;
                if wrap {
                    out.write_char(']')?;
                }
            }
            out.write_char(']')?;
        }

        for suffix in &self.suffixes {
            write!(out, "{suffix}")?;
        }

        if let (Some(style), Some(assembly)) = (options.assembly_name, self.assembly_name()) {
            out.write_str(", ")?;
            match style {
                AssemblyNameStyle::Simple => out.write_str(simple_assembly(assembly))?,
                AssemblyNameStyle::Full => out.write_str(assembly)?,
            }
        }

        Ok(())
    }
}

fn simple_assembly(assembly_name: &str) -> &str {
    assembly_name
        .split_once(',')
        .map_or(assembly_name, |(simple, _)| simple)
        .trim()
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.assembly_qualified_name == other.assembly_qualified_name
    }
}

impl Eq for TypeName {}

impl Hash for TypeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.assembly_qualified_name.hash(state);
    }
}

impl fmt::Display for TypeName {
    /// Format using [`TypeNameFormat::full`]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_formatted(f, TypeNameFormat::full())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{DICTIONARY_STRING_INT32, LIST_INT32_ARRAY, MSCORLIB, STRING};

    #[test]
    fn parse_assembly_qualified_string() {
        let name = TypeName::parse(STRING).unwrap();
        assert_eq!(name.full_name(), "System.String");
        assert_eq!(name.declare_name(), "System.String");
        assert_eq!(name.namespace(), Some("System"));
        assert_eq!(name.name(), "String");
        assert_eq!(name.assembly_name(), Some(MSCORLIB));
        assert_eq!(name.simple_assembly_name(), Some("mscorlib"));
        assert!(!name.is_generic());
        assert!(!name.is_array());
        assert!(name.generic_parent().is_none());
        assert_eq!(
            name.format(TypeNameFormat::simple_assembly()),
            "System.String, mscorlib"
        );
    }

    #[test]
    fn generic_arguments_point_back_to_parent() {
        let name = TypeName::parse(DICTIONARY_STRING_INT32).unwrap();
        assert_eq!(name.generic_argument_count(), 2);
        assert_eq!(name.generic_arity(), Some(2));

        for argument in name.generic_arguments() {
            let parent = argument.generic_parent().unwrap();
            assert!(Arc::ptr_eq(&parent, &name));
            assert_eq!(argument.assembly_name(), Some(MSCORLIB));
        }
    }

    #[test]
    fn parent_is_dropped_with_root() {
        let name = TypeName::parse("G`1[A]").unwrap();
        let argument = name.generic_argument(0).unwrap().clone();
        drop(name);
        assert!(argument.generic_parent().is_none());
        assert_eq!(argument.name(), "A");
    }

    #[test]
    fn accessors_report_out_of_range() {
        let name = TypeName::parse("NS.Foo[]").unwrap();
        assert_eq!(name.array_rank(0).unwrap(), 1);
        assert!(matches!(
            name.array_rank(1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            name.generic_argument(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn generic_array_keeps_assembly_on_root() {
        let name = TypeName::parse(LIST_INT32_ARRAY).unwrap();
        assert_eq!(name.declare_name(), "System.Collections.Generic.List`1");
        assert_eq!(name.array_ranks(), &[1]);
        assert_eq!(name.simple_assembly_name(), Some("mscorlib"));
        assert_eq!(name.generic_argument(0).unwrap().name(), "Int32");
        assert_eq!(name.to_string(), LIST_INT32_ARRAY);
    }

    #[test]
    fn nested_names() {
        let name = TypeName::parse("NS.Outer`1+Inner[[System.Int32, mscorlib]]").unwrap();
        assert!(name.is_nested());
        assert_eq!(name.declaring_type_name(), Some("NS.Outer`1"));
        assert_eq!(name.name(), "Inner");
        assert_eq!(name.namespace(), Some("NS"));
        assert_eq!(name.generic_arity(), None);
        assert_eq!(name.generic_argument_count(), 1);
    }

    #[test]
    fn format_variants() {
        let name = TypeName::parse(DICTIONARY_STRING_INT32).unwrap();
        assert_eq!(
            name.format(TypeNameFormat::simple_assembly()),
            "System.Collections.Generic.Dictionary`2[[System.String, mscorlib],[System.Int32, mscorlib]], mscorlib"
        );
        assert_eq!(
            name.format(TypeNameFormat::full_name()),
            "System.Collections.Generic.Dictionary`2[System.String,System.Int32]"
        );
        assert_eq!(
            name.format(TypeNameFormat::name_only()),
            "Dictionary`2[String,Int32]"
        );
        assert_eq!(name.format(TypeNameFormat::full()), DICTIONARY_STRING_INT32);
    }

    #[test]
    fn multi_dimensional_format() {
        let name = TypeName::parse("NS.Foo[,,][]").unwrap();
        assert_eq!(name.array_ranks(), &[3, 1]);
        assert_eq!(name.format(TypeNameFormat::full_name()), "NS.Foo[,,][]");
    }

    #[test]
    fn pointer_and_by_ref_after_bracket_groups() {
        let name = TypeName::parse("System.Int32[]&").unwrap();
        assert_eq!(name.declare_name(), "System.Int32");
        assert_eq!(name.suffixes(), &[TypeSuffix::Array(1), TypeSuffix::ByRef]);
        assert_eq!(name.array_ranks(), &[1]);
        assert!(name.is_array());
        assert!(name.is_by_ref());
        assert!(!name.is_pointer());
        assert_eq!(name.format(TypeNameFormat::full_name()), "System.Int32[]&");

        let name = TypeName::parse("System.Int32*[,]").unwrap();
        assert_eq!(name.declare_name(), "System.Int32");
        assert_eq!(name.array_ranks(), &[2]);
        assert!(!name.is_pointer());
        assert_eq!(name.format(TypeNameFormat::name_only()), "Int32*[,]");

        let name = TypeName::parse("G`1[[A, AsmA]]*, AsmB").unwrap();
        assert!(name.is_pointer());
        assert!(!name.is_array());
        assert_eq!(name.format(TypeNameFormat::name_only()), "G`1[A]*");
        assert_eq!(name.format(TypeNameFormat::full()), "G`1[[A, AsmA]]*, AsmB");
    }

    #[test]
    fn simple_names_are_trimmed() {
        let name = TypeName::parse("NS. X*`A").unwrap();
        assert_eq!(name.namespace(), Some("NS"));
        assert_eq!(name.name(), "X*`A");

        let reparsed = TypeName::parse(&name.format(TypeNameFormat::name_only())).unwrap();
        assert_eq!(reparsed.name(), name.name());
    }

    #[test]
    fn referenced_assemblies_are_deduplicated() {
        let name =
            TypeName::parse("NS.Pair`2[[A.X, AsmA],[B.Y`1[[C.Z, AsmC]], AsmA]], AsmB").unwrap();
        assert_eq!(name.referenced_assemblies(), vec!["AsmB", "AsmA", "AsmC"]);
    }

    #[test]
    fn assembly_identity_from_qualifier() {
        let name = TypeName::parse(STRING).unwrap();
        let identity = name.assembly_identity().unwrap().unwrap();
        assert_eq!(identity.simple_name(), "mscorlib");
        assert!(identity.is_strong_named());

        let bare = TypeName::parse("System.String").unwrap();
        assert!(bare.assembly_identity().unwrap().is_none());
    }

    #[test]
    fn equality_is_textual() {
        let a = TypeName::parse("  System.String ").unwrap();
        let b = TypeName::parse("[System.String]").unwrap();
        let c = TypeName::parse(STRING).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
