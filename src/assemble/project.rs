//! The `.vcxproj` document.

use super::{braced, item_group, MSBUILD_NAMESPACE};
use crate::document::{Document, Element};
use crate::module::FileCatalog;
use crate::ports::IdGenerator;
use crate::rules::{Configuration, Toolset};
use crate::settings::{ConfigurationSettings, PchRole, ProjectSettings, SharedSettings};

const DEFAULT_PROPS: &str = "$(VCTargetsPath)\\Microsoft.Cpp.Default.props";
const CPP_PROPS: &str = "$(VCTargetsPath)\\Microsoft.Cpp.props";
const CPP_TARGETS: &str = "$(VCTargetsPath)\\Microsoft.Cpp.targets";
const USER_PROPS: &str = "$(UserRootDir)\\Microsoft.Cpp.$(Platform).user.props";

const OUT_DIR: &str = "$(SolutionDir)Build\\$(Platform)\\";
const INT_DIR: &str = "$(SolutionDir)Intermediate\\Build\\$(Platform)\\$(ProjectName)\\";
const TARGET_PLATFORM_VERSION: &str = "10.0";

/// A project document and the GUID it was stamped with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledProject {
    /// The `.vcxproj` tree.
    pub document: Document,
    /// Bare project GUID drawn from the id source.
    pub project_identifier: String,
}

/// Assembles the project document.
///
/// Section order is fixed: configurations, globals, property groups,
/// global compile/link settings, Debug then Release overrides, headers,
/// translation units, and last the dependency references, which are left
/// out entirely when there are none.
#[must_use]
pub fn assemble_project(
    settings: &ProjectSettings,
    catalog: &FileCatalog,
    toolset: Toolset,
    id_gen: &dyn IdGenerator,
) -> AssembledProject {
    let project_identifier = id_gen.generate_id();
    let shared = &settings.shared;

    let root = Element::builder("Project")
        .attr("DefaultTargets", "Build")
        .attr("xmlns", MSBUILD_NAMESPACE)
        .child(project_configurations())
        .child(globals(toolset, &project_identifier))
        .child(import(DEFAULT_PROPS))
        .child(general_properties(toolset))
        .children(Configuration::ALL.into_iter().map(configuration_properties))
        .child(import(CPP_PROPS))
        .child(
            Element::builder("ImportGroup")
                .attr("Label", "PropertySheets")
                .child(
                    Element::builder("Import")
                        .attr("Project", USER_PROPS)
                        .attr("Condition", format!("exists('{USER_PROPS}')"))
                        .attr("Label", "LocalAppDataPlatform")
                        .build(),
                )
                .build(),
        )
        .child(global_item_definitions(shared))
        .children(settings.configurations.iter().map(configuration_item_definitions))
        .child(headers(catalog))
        .child(sources(shared, catalog))
        .child(import(CPP_TARGETS))
        .maybe_child(project_references(shared))
        .build();

    AssembledProject { document: Document::new(root), project_identifier }
}

fn import(project: &str) -> Element {
    Element::builder("Import").attr("Project", project).build()
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn project_configurations() -> Element {
    item_group()
        .attr("Label", "ProjectConfigurations")
        .children(Configuration::ALL.into_iter().map(|c| {
            Element::builder("ProjectConfiguration")
                .attr("Include", c.label())
                .text_child("Configuration", c.name())
                .text_child("Platform", Configuration::PLATFORM)
                .build()
        }))
        .build()
}

fn globals(toolset: Toolset, project_identifier: &str) -> Element {
    Element::builder("PropertyGroup")
        .attr("Label", "Globals")
        .text_child("VCProjectVersion", toolset.project_version())
        .text_child("Keyword", "Win32Proj")
        .text_child("ProjectGuid", braced(project_identifier))
        .text_child("WindowsTargetPlatformVersion", TARGET_PLATFORM_VERSION)
        .build()
}

fn general_properties(toolset: Toolset) -> Element {
    Element::builder("PropertyGroup")
        .text_child("LinkIncremental", "false")
        .text_child("OutDir", OUT_DIR)
        .text_child("IntDir", INT_DIR)
        .text_child("ConfigurationType", "DynamicLibrary")
        .text_child("PlatformToolset", toolset.platform_toolset())
        .text_child("CharacterSet", "Unicode")
        .build()
}

fn configuration_properties(configuration: Configuration) -> Element {
    let group = Element::builder("PropertyGroup")
        .attr("Condition", configuration.condition())
        .text_child("UseDebugLibrary", bool_text(!configuration.is_release()));
    if configuration.is_release() {
        group.text_child("WholeProgramOptimization", "true").build()
    } else {
        group.build()
    }
}

fn global_item_definitions(shared: &SharedSettings) -> Element {
    let mut compile = Element::builder("ClCompile")
        .text_child("WarningLevel", "Level3")
        .text_child("SDKCheck", "true")
        .text_child("ConformanceMode", "true")
        .text_child("AdditionalIncludeDirectories", shared.include_directories.join(";"));
    if let Some(pch) = &shared.precompiled_header {
        compile = compile
            .text_child("PrecompiledHeader", PchRole::Use.schema_value())
            .text_child("PrecompiledHeaderFile", pch.header_file())
            .text_child("ForcedIncludeFiles", pch.header_file());
    }
    let compile = compile
        .text_child("MultiProcessorCompilation", "true")
        .text_child("LanguageStandard", shared.language_standard.schema_value());

    let link = Element::builder("Link")
        .text_child("SubSystem", "Windows")
        .text_child("GenerateDebugInformation", "true")
        .text_child("EnableUAC", "false")
        .maybe_child(
            (!shared.link_libraries.is_empty())
                .then(|| Element::text("AdditionalDependencies", shared.link_libraries.join(";"))),
        );

    Element::builder("ItemDefinitionGroup").child(compile.build()).child(link.build()).build()
}

fn configuration_item_definitions(settings: &ConfigurationSettings) -> Element {
    let [function_level_linking, intrinsics] = settings.optimization.compiler_flags();
    let compile = Element::builder("ClCompile")
        .text_child(function_level_linking.0, bool_text(function_level_linking.1))
        .text_child(intrinsics.0, bool_text(intrinsics.1))
        .text_child("PreprocessorDefinitions", settings.preprocessor_definitions.join(";"))
        .build();
    let link = Element::builder("Link")
        .children(
            settings
                .optimization
                .linker_flags()
                .into_iter()
                .map(|(name, on)| Element::text(name, bool_text(on))),
        )
        .build();

    Element::builder("ItemDefinitionGroup")
        .attr("Condition", settings.configuration.condition())
        .child(compile)
        .child(link)
        .build()
}

fn headers(catalog: &FileCatalog) -> Element {
    item_group()
        .children(catalog.non_compilable().iter().map(|file| {
            Element::builder("ClInclude").attr("Include", file.display().to_string()).build()
        }))
        .build()
}

fn sources(shared: &SharedSettings, catalog: &FileCatalog) -> Element {
    item_group()
        .children(catalog.compilable().iter().map(|file| {
            let role = shared.precompiled_header.as_ref().map(|pch| pch.role_of(file));
            Element::builder("ClCompile")
                .attr("Include", file.display().to_string())
                .maybe_child(
                    (role == Some(PchRole::Create))
                        .then(|| Element::text("PrecompiledHeader", PchRole::Create.schema_value())),
                )
                .build()
        }))
        .build()
}

fn project_references(shared: &SharedSettings) -> Option<Element> {
    if shared.project_references.is_empty() {
        return None;
    }
    Some(
        item_group()
            .children(shared.project_references.iter().map(|reference| {
                Element::builder("ProjectReference")
                    .attr("Include", reference.file_path.display().to_string())
                    .text_child("Project", braced(&reference.project_identifier))
                    .build()
            }))
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::adapters::sequential::SequentialIdGenerator;
    use crate::dependency::DependencyModule;
    use crate::module::Module;
    use crate::rules::BuildRules;
    use crate::settings::resolve_all;

    fn core() -> Module {
        Module::new("Core", "/e", "/e/Source/Core", "/out")
    }

    fn catalog() -> FileCatalog {
        FileCatalog::partition(vec![
            PathBuf::from("/e/Source/Core/Private/Foo.cpp"),
            PathBuf::from("/e/Source/Core/Private/Pch.cpp"),
            PathBuf::from("/e/Source/Core/Public/Foo.h"),
        ])
    }

    fn names(element: &Element) -> Vec<&str> {
        element.children().iter().map(Element::name).collect()
    }

    #[test]
    fn sections_come_in_schema_order() {
        let settings = resolve_all(&core(), &BuildRules::default(), &catalog(), &[]);
        let project =
            assemble_project(&settings, &catalog(), Toolset::Vc2019, &SequentialIdGenerator::new());

        assert_eq!(
            names(project.document.root()),
            vec![
                "ItemGroup",
                "PropertyGroup",
                "Import",
                "PropertyGroup",
                "PropertyGroup",
                "PropertyGroup",
                "Import",
                "ImportGroup",
                "ItemDefinitionGroup",
                "ItemDefinitionGroup",
                "ItemDefinitionGroup",
                "ItemGroup",
                "ItemGroup",
                "Import",
            ]
        );
    }

    #[test]
    fn globals_carry_generated_guid_and_toolset() {
        let settings = resolve_all(&core(), &BuildRules::default(), &catalog(), &[]);
        let project =
            assemble_project(&settings, &catalog(), Toolset::Vc2022, &SequentialIdGenerator::new());

        assert_eq!(project.project_identifier, "00000000-0000-0000-0000-000000000001");
        let root = project.document.root();
        let globals = root.children_named("PropertyGroup").next().unwrap();
        assert_eq!(globals.attribute("Label"), Some("Globals"));
        assert_eq!(
            globals.child("ProjectGuid").and_then(Element::text_value),
            Some("{00000000-0000-0000-0000-000000000001}")
        );
        assert_eq!(globals.child("VCProjectVersion").and_then(Element::text_value), Some("17.0"));
    }

    #[test]
    fn configuration_overrides_debug_before_release() {
        let settings = resolve_all(&core(), &BuildRules::default(), &catalog(), &[]);
        let project =
            assemble_project(&settings, &catalog(), Toolset::Vc2019, &SequentialIdGenerator::new());
        let groups: Vec<_> = project.document.root().children_named("ItemDefinitionGroup").collect();

        assert_eq!(groups[0].attribute("Condition"), None);
        assert_eq!(groups[1].attribute("Condition"), Some(Configuration::Debug.condition().as_str()));
        assert_eq!(groups[2].attribute("Condition"), Some(Configuration::Release.condition().as_str()));

        let debug_link = groups[1].child("Link").unwrap();
        assert_eq!(debug_link.child("OptimizeReferences").and_then(Element::text_value), Some("false"));
        let release_compile = groups[2].child("ClCompile").unwrap();
        assert_eq!(
            release_compile.child("FunctionLevelLinking").and_then(Element::text_value),
            Some("true")
        );
    }

    #[test]
    fn precompiled_header_creator_is_annotated() {
        let rules = BuildRules { precompiled_header: Some("Pch".into()), ..BuildRules::default() };
        let settings = resolve_all(&core(), &rules, &catalog(), &[]);
        let project =
            assemble_project(&settings, &catalog(), Toolset::Vc2019, &SequentialIdGenerator::new());
        let root = project.document.root();

        let global = root.children_named("ItemDefinitionGroup").next().unwrap();
        let compile = global.child("ClCompile").unwrap();
        assert_eq!(compile.child("PrecompiledHeader").and_then(Element::text_value), Some("Use"));
        assert_eq!(compile.child("ForcedIncludeFiles").and_then(Element::text_value), Some("Pch.h"));

        let sources = root.children_named("ItemGroup").nth(2).unwrap();
        let foo = &sources.children()[0];
        let pch = &sources.children()[1];
        assert!(foo.child("PrecompiledHeader").is_none());
        assert_eq!(pch.child("PrecompiledHeader").and_then(Element::text_value), Some("Create"));
    }

    #[test]
    fn unmatched_precompiled_header_has_no_creator() {
        let rules = BuildRules { precompiled_header: Some("Missing".into()), ..BuildRules::default() };
        let settings = resolve_all(&core(), &rules, &catalog(), &[]);
        let project =
            assemble_project(&settings, &catalog(), Toolset::Vc2019, &SequentialIdGenerator::new());
        let root = project.document.root();

        let global = root.children_named("ItemDefinitionGroup").next().unwrap();
        let compile = global.child("ClCompile").unwrap();
        assert_eq!(compile.child("PrecompiledHeader").and_then(Element::text_value), Some("Use"));
        assert_eq!(compile.child("ForcedIncludeFiles").and_then(Element::text_value), Some("Missing.h"));

        let sources = root.children_named("ItemGroup").nth(2).unwrap();
        assert_eq!(sources.children().len(), 2);
        assert!(sources.children().iter().all(|file| file.child("PrecompiledHeader").is_none()));
    }

    #[test]
    fn dependency_references_close_the_document() {
        let dependency = DependencyModule {
            symbol: "CORE".into(),
            public_include_root: PathBuf::from("/e/Source/Core/Public"),
            project_descriptor_path: PathBuf::from("/out/Core/Core.vcxproj"),
            project_identifier: "abc".into(),
        };
        let game = Module::new("Game", "/e", "/e/Source/Game", "/out");
        let settings = resolve_all(&game, &BuildRules::default(), &FileCatalog::default(), &[dependency]);
        let project = assemble_project(
            &settings,
            &FileCatalog::default(),
            Toolset::Vc2019,
            &SequentialIdGenerator::new(),
        );

        let last = project.document.root().children().last().unwrap();
        let reference = &last.children()[0];
        assert_eq!(reference.name(), "ProjectReference");
        assert_eq!(reference.attribute("Include"), Some("/out/Core/Core.vcxproj"));
        assert_eq!(reference.child("Project").and_then(Element::text_value), Some("{abc}"));
    }
}
