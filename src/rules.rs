//! Build rules and the fixed toolchain lookup tables.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Per-module build configuration, read-only to the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildRules {
    /// Base name of the private precompiled header (without `.h`), if any.
    pub precompiled_header: Option<String>,
    /// C++ language standard passed to the compiler.
    pub language_standard: LanguageStandard,
    /// Extra preprocessor definitions, in declaration order.
    pub additional_defines: IndexSet<String>,
    /// Extra linker libraries, in declaration order.
    pub additional_libraries: IndexSet<String>,
    /// Overrides the export symbol; defaults to the module name.
    pub export_symbol: Option<String>,
}

impl BuildRules {
    /// The upper-cased symbol used for `{SYMBOL}_API` and `{SYMBOL}_BUILD`.
    #[must_use]
    pub fn symbol_for(&self, module_name: &str) -> String {
        self.export_symbol.as_deref().unwrap_or(module_name).to_uppercase()
    }

    /// The precompiled header name, treating an empty string as unset.
    #[must_use]
    pub fn precompiled_header(&self) -> Option<&str> {
        self.precompiled_header.as_deref().filter(|name| !name.is_empty())
    }
}

/// C++ language standard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageStandard {
    /// C++14.
    Cpp14,
    /// C++17.
    Cpp17,
    /// C++20, which the v14x toolsets expose as "latest".
    Cpp20,
    /// Not set or not recognized; the toolset default applies.
    #[default]
    Unspecified,
}

impl From<String> for LanguageStandard {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "cpp14" | "c++14" => Self::Cpp14,
            "cpp17" | "c++17" => Self::Cpp17,
            "cpp20" | "c++20" => Self::Cpp20,
            _ => Self::Unspecified,
        }
    }
}

impl From<LanguageStandard> for String {
    fn from(value: LanguageStandard) -> Self {
        match value {
            LanguageStandard::Cpp14 => "cpp14",
            LanguageStandard::Cpp17 => "cpp17",
            LanguageStandard::Cpp20 => "cpp20",
            LanguageStandard::Unspecified => "unspecified",
        }
        .to_string()
    }
}

impl LanguageStandard {
    /// Value of the `LanguageStandard` compiler element.
    #[must_use]
    pub fn schema_value(self) -> &'static str {
        match self {
            Self::Cpp14 => "stdcpp14",
            Self::Cpp17 => "stdcpp17",
            Self::Cpp20 => "stdcpplatest",
            Self::Unspecified => "Default",
        }
    }
}

/// Visual C++ toolset generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolset {
    /// Visual Studio 2017.
    Vc2017,
    /// Visual Studio 2019.
    #[default]
    Vc2019,
    /// Visual Studio 2022.
    Vc2022,
}

impl Toolset {
    /// Value of `VCProjectVersion`.
    #[must_use]
    pub fn project_version(self) -> &'static str {
        match self {
            Self::Vc2017 => "15.0",
            Self::Vc2019 => "16.0",
            Self::Vc2022 => "17.0",
        }
    }

    /// Value of `PlatformToolset`.
    #[must_use]
    pub fn platform_toolset(self) -> &'static str {
        match self {
            Self::Vc2017 => "v141",
            Self::Vc2019 => "v142",
            Self::Vc2022 => "v143",
        }
    }
}

/// Build configuration. Only x64 is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    /// Unoptimized build with debug runtime.
    Debug,
    /// Optimized build.
    Release,
}

impl Configuration {
    /// Every configuration, in emission order.
    pub const ALL: [Configuration; 2] = [Configuration::Debug, Configuration::Release];

    /// Target platform shared by both configurations.
    pub const PLATFORM: &'static str = "x64";

    /// Configuration name as MSBuild spells it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }

    /// Returns `true` for optimized configurations.
    #[must_use]
    pub fn is_release(self) -> bool {
        matches!(self, Self::Release)
    }

    /// `Debug|x64` style label.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}|{}", self.name(), Self::PLATFORM)
    }

    /// MSBuild `Condition` attribute selecting this configuration.
    #[must_use]
    pub fn condition(self) -> String {
        format!("'$(Configuration)|$(Platform)'=='{}'", self.label())
    }
}
