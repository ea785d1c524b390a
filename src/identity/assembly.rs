//! Parsing and rendering of .NET assembly display names.
//!
//! # Format
//!
//! ```text
//! Name[, Version=Major.Minor.Build.Revision][, Culture=culture][, PublicKeyToken=token]
//!     [, ProcessorArchitecture=arch]
//! ```
//!
//! Keys are matched case-insensitively, unknown keys (e.g. `Retargetable`) are
//! ignored, and `Culture=neutral` / `PublicKeyToken=null` mean "absent".

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Identity of a .NET assembly, as written in an assembly display name.
///
/// # Equality Semantics
///
/// Two identities are equal when name, version, culture and processor architecture
/// are equal. The public key token is **excluded** from equality and hashing, so a
/// reference written with `PublicKeyToken=null` matches the strong-named assembly it
/// points to.
#[derive(Debug, Clone)]
pub struct AssemblyIdentity {
    /// Simple assembly name (e.g. "mscorlib", "System.Core")
    pub name: String,

    /// Four-part version number, [`AssemblyVersion::UNKNOWN`] when not given
    pub version: AssemblyVersion,

    /// Culture for satellite assemblies; `None` is culture-neutral
    pub culture: Option<String>,

    /// The eight-byte public key token, in the byte order it is written in
    pub public_key_token: Option<[u8; 8]>,

    /// Target processor architecture, if specified
    pub processor_architecture: Option<ProcessorArchitecture>,
}

impl PartialEq for AssemblyIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.version == other.version
            && self.culture == other.culture
            && self.processor_architecture == other.processor_architecture
    }
}

impl Eq for AssemblyIdentity {}

impl std::hash::Hash for AssemblyIdentity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.version.hash(state);
        self.culture.hash(state);
        self.processor_architecture.hash(state);
    }
}

/// Four-part version numbering for .NET assemblies.
///
/// Versions are compared component-wise in order: major, minor, build, revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    /// Major version component
    pub major: u16,
    /// Minor version component
    pub minor: u16,
    /// Build version component
    pub build: u16,
    /// Revision version component
    pub revision: u16,
}

/// Processor architecture specification for .NET assemblies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorArchitecture {
    /// Microsoft Intermediate Language - architecture neutral
    MSIL,
    /// 32-bit Intel x86
    X86,
    /// Intel Itanium 64-bit
    IA64,
    /// 64-bit x86-64; `x64` parses to this variant
    AMD64,
    /// 32-bit ARM
    ARM,
    /// 64-bit ARM
    ARM64,
}

impl AssemblyIdentity {
    /// Create a new assembly identity with the specified components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clrtypename::identity::{AssemblyIdentity, AssemblyVersion};
    ///
    /// let identity = AssemblyIdentity::new(
    ///     "MyLibrary",
    ///     AssemblyVersion::new(1, 0, 0, 0),
    ///     None,
    ///     None,
    ///     None,
    /// );
    /// assert_eq!(identity.simple_name(), "MyLibrary");
    /// ```
    pub fn new(
        name: impl Into<String>,
        version: AssemblyVersion,
        culture: Option<String>,
        public_key_token: Option<[u8; 8]>,
        processor_architecture: Option<ProcessorArchitecture>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            culture,
            public_key_token,
            processor_architecture,
        }
    }

    /// Parse assembly identity from display name string.
    ///
    /// ## Arguments
    /// * 'display_name' - Assembly display name, e.g. the assembly part of a type name
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the name is empty or a known key has an invalid value.
    pub fn parse(display_name: &str) -> Result<Self> {
        let mut parts = display_name.split(',').map(str::trim);

        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(malformed_error!("Assembly name cannot be empty"));
        }

        let mut identity = Self::new(name, AssemblyVersion::UNKNOWN, None, None, None);

        for part in parts {
            let Some((key, value)) = part.split_once('=') else {
                return Err(malformed_error!(
                    "Expected 'Key=Value' in assembly name, got '{}'",
                    part
                ));
            };
            let value = value.trim();

            match key.trim().to_ascii_lowercase().as_str() {
                "version" => identity.version = AssemblyVersion::parse(value)?,
                "culture" => {
                    if !value.eq_ignore_ascii_case("neutral") && !value.is_empty() {
                        identity.culture = Some(value.to_string());
                    }
                }
                "publickeytoken" => {
                    if !value.eq_ignore_ascii_case("null") && !value.is_empty() {
                        identity.public_key_token = Some(parse_token(value)?);
                    }
                }
                "processorarchitecture" => {
                    identity.processor_architecture = Some(ProcessorArchitecture::parse(value)?);
                }
                _ => {}
            }
        }

        Ok(identity)
    }

    /// Generate the display name for this identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clrtypename::identity::{AssemblyIdentity, AssemblyVersion};
    ///
    /// let identity = AssemblyIdentity::new(
    ///     "MyLibrary",
    ///     AssemblyVersion::new(1, 2, 3, 4),
    ///     Some("en-US".to_string()),
    ///     None,
    ///     None,
    /// );
    /// assert_eq!(
    ///     identity.display_name(),
    ///     "MyLibrary, Version=1.2.3.4, Culture=en-US, PublicKeyToken=null"
    /// );
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        let culture = self.culture.as_deref().unwrap_or("neutral");
        let token = self
            .public_key_token
            .map_or_else(|| "null".to_string(), hex::encode);

        let mut result = format!(
            "{}, Version={}, Culture={}, PublicKeyToken={}",
            self.name, self.version, culture, token
        );

        if let Some(arch) = &self.processor_architecture {
            result.push_str(", ProcessorArchitecture=");
            result.push_str(&arch.to_string());
        }

        result
    }

    /// The simple assembly name without version or culture information
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Whether a public key token is present
    #[must_use]
    pub fn is_strong_named(&self) -> bool {
        self.public_key_token.is_some()
    }

    /// Whether no culture is specified
    #[must_use]
    pub fn is_culture_neutral(&self) -> bool {
        self.culture.is_none()
    }

    /// Check if this assembly can satisfy a reference to `required`.
    ///
    /// Names match case-insensitively, cultures exactly, and the version must be
    /// compatible per [`AssemblyVersion::is_compatible_with`].
    #[must_use]
    pub fn satisfies(&self, required: &AssemblyIdentity) -> bool {
        self.name.eq_ignore_ascii_case(&required.name)
            && self.culture == required.culture
            && self.version.is_compatible_with(&required.version)
    }
}

fn parse_token(value: &str) -> Result<[u8; 8]> {
    let bytes = hex::decode(value)
        .map_err(|e| malformed_error!("Invalid hex in PublicKeyToken '{}': {}", value, e))?;

    <[u8; 8]>::try_from(bytes.as_slice()).map_err(|_| {
        malformed_error!(
            "PublicKeyToken must be exactly 8 bytes (16 hex characters), got {} bytes from '{}'",
            bytes.len(),
            value
        )
    })
}

impl AssemblyVersion {
    /// Version 0.0.0.0, used when a display name carries no version
    pub const UNKNOWN: Self = Self::new(0, 0, 0, 0);

    /// Create a new assembly version with the specified components
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Whether this is [`AssemblyVersion::UNKNOWN`]
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.build == 0 && self.revision == 0
    }

    /// Check if this version is compatible with a required version.
    ///
    /// An unknown requirement accepts any version. Otherwise the major versions must
    /// match and this version must not be lower.
    #[must_use]
    pub fn is_compatible_with(&self, required: &AssemblyVersion) -> bool {
        if required.is_unknown() {
            return true;
        }

        self.major == required.major && *self >= *required
    }

    /// Parse a version string of one to four dot-separated components.
    ///
    /// Missing trailing components default to 0.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if there are more than four components or one is not a `u16`.
    pub fn parse(version_str: &str) -> Result<Self> {
        let parts: Vec<&str> = version_str.split('.').collect();

        if parts.len() > 4 {
            return Err(malformed_error!("Invalid version format: {}", version_str));
        }

        let mut components = [0u16; 4];
        for (component, part) in components.iter_mut().zip(&parts) {
            *component = part
                .trim()
                .parse::<u16>()
                .map_err(|_| malformed_error!("Invalid version component: {}", part))?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl ProcessorArchitecture {
    /// Parse a processor architecture name, case-insensitively.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the architecture is not recognized.
    pub fn parse(arch_str: &str) -> Result<Self> {
        match arch_str.trim().to_ascii_lowercase().as_str() {
            "msil" => Ok(Self::MSIL),
            "x86" => Ok(Self::X86),
            "ia64" => Ok(Self::IA64),
            "amd64" | "x64" => Ok(Self::AMD64),
            "arm" => Ok(Self::ARM),
            "arm64" => Ok(Self::ARM64),
            _ => Err(malformed_error!(
                "Unknown processor architecture: '{}'",
                arch_str.trim()
            )),
        }
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl fmt::Display for ProcessorArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arch_str = match self {
            Self::MSIL => "MSIL",
            Self::X86 => "x86",
            Self::IA64 => "IA64",
            Self::AMD64 => "AMD64",
            Self::ARM => "ARM",
            Self::ARM64 => "ARM64",
        };
        f.write_str(arch_str)
    }
}

impl fmt::Display for AssemblyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for AssemblyIdentity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for ProcessorArchitecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MSCORLIB;

    #[test]
    fn test_assembly_version_parse_partial() {
        assert_eq!(
            AssemblyVersion::parse("1.2.3").unwrap(),
            AssemblyVersion::new(1, 2, 3, 0)
        );
        assert_eq!(
            AssemblyVersion::parse("1").unwrap(),
            AssemblyVersion::new(1, 0, 0, 0)
        );
    }

    #[test]
    fn test_assembly_version_parse_invalid() {
        assert!(AssemblyVersion::parse("").is_err());
        assert!(AssemblyVersion::parse("1.2.3.4.5").is_err());
        assert!(AssemblyVersion::parse("1.2.abc.4").is_err());
        assert!(AssemblyVersion::parse("1.2.99999.4").is_err());
    }

    #[test]
    fn test_assembly_version_compatibility() {
        let v4_0 = AssemblyVersion::new(4, 0, 0, 0);
        let v4_5 = AssemblyVersion::new(4, 5, 0, 0);
        let v5_0 = AssemblyVersion::new(5, 0, 0, 0);

        assert!(v4_5.is_compatible_with(&v4_0));
        assert!(!v4_0.is_compatible_with(&v4_5));
        assert!(!v5_0.is_compatible_with(&v4_0));
        assert!(v4_0.is_compatible_with(&AssemblyVersion::UNKNOWN));
    }

    #[test]
    fn test_processor_architecture_parse() {
        assert_eq!(
            ProcessorArchitecture::parse("x64").unwrap(),
            ProcessorArchitecture::AMD64
        );
        assert_eq!(
            " MSIL ".parse::<ProcessorArchitecture>().unwrap(),
            ProcessorArchitecture::MSIL
        );
        assert!(ProcessorArchitecture::parse("sparc").is_err());
    }

    #[test]
    fn test_assembly_identity_parse_full_mscorlib() {
        let identity = AssemblyIdentity::parse(MSCORLIB).unwrap();
        assert_eq!(identity.name, "mscorlib");
        assert_eq!(identity.version, AssemblyVersion::new(4, 0, 0, 0));
        assert!(identity.is_culture_neutral());
        assert_eq!(
            identity.public_key_token,
            Some([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89])
        );
        assert_eq!(identity.display_name(), MSCORLIB);
    }

    #[test]
    fn test_assembly_identity_parse_simple_name() {
        let identity = AssemblyIdentity::parse("MyLib").unwrap();
        assert_eq!(identity.version, AssemblyVersion::UNKNOWN);
        assert!(!identity.is_strong_named());
        assert_eq!(
            identity.display_name(),
            "MyLib, Version=0.0.0.0, Culture=neutral, PublicKeyToken=null"
        );
    }

    #[test]
    fn test_assembly_identity_parse_keys_case_insensitive() {
        let identity = AssemblyIdentity::parse(
            "Lib, version=2.1, culture=de-DE, publickeytoken=NULL, Retargetable=Yes, processorArchitecture=Arm64",
        )
        .unwrap();
        assert_eq!(identity.version, AssemblyVersion::new(2, 1, 0, 0));
        assert_eq!(identity.culture.as_deref(), Some("de-DE"));
        assert!(!identity.is_strong_named());
        assert_eq!(
            identity.processor_architecture,
            Some(ProcessorArchitecture::ARM64)
        );
    }

    #[test]
    fn test_assembly_identity_parse_errors() {
        let err = AssemblyIdentity::parse("  ").unwrap_err().to_string();
        assert!(err.contains("cannot be empty"), "{}", err);

        assert!(AssemblyIdentity::parse("Lib, PublicKeyToken=xyz_not_hex_123").is_err());
        assert!(AssemblyIdentity::parse("Lib, PublicKeyToken=b77a5c56").is_err());
        assert!(AssemblyIdentity::parse("Lib, Garbage").is_err());
        assert!(AssemblyIdentity::parse("Lib, ProcessorArchitecture=sparc").is_err());
    }

    #[test]
    fn test_assembly_identity_equality_ignores_token() {
        let signed = AssemblyIdentity::parse(MSCORLIB).unwrap();
        let unsigned =
            AssemblyIdentity::parse("mscorlib, Version=4.0.0.0, PublicKeyToken=null").unwrap();
        assert_eq!(signed, unsigned);
        assert!(signed.satisfies(&unsigned));

        let newer = AssemblyIdentity::parse("MSCORLIB, Version=4.5").unwrap();
        assert!(newer.satisfies(&signed));
        assert!(!signed.satisfies(&newer));
    }
}
