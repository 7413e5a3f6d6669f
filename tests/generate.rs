//! End-to-end generation against a real directory tree.

use std::fs;
use std::path::Path;

use projgen::adapters::live::filesystem::LiveFileSystem;
use projgen::adapters::sequential::SequentialIdGenerator;
use projgen::{BuildRules, GenerateError, Module, ProjectGenerator, Toolset};

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn module(root: &Path, name: &str) -> Module {
    Module::new(
        name,
        root,
        root.join("Source").join("Runtime").join(name),
        root.join("Intermediate/ProjectFiles"),
    )
}

fn core_tree(root: &Path) {
    touch(&root.join("Source/Runtime/Core/Public/Foo.h"));
    touch(&root.join("Source/Runtime/Core/Private/Foo.cpp"));
}

#[test]
fn module_without_dependencies() {
    let dir = tempfile::tempdir().unwrap();
    core_tree(dir.path());
    let disk = LiveFileSystem;
    let ids = SequentialIdGenerator::new();

    let generator = ProjectGenerator::new(&disk, module(dir.path(), "Core")).unwrap();
    let generated =
        generator.generate(&ids, &BuildRules::default(), Toolset::default(), &[]).unwrap();

    let project = fs::read_to_string(&generated.reference.file_path).unwrap();
    assert_eq!(project.matches("<ClCompile Include=").count(), 1);
    assert_eq!(project.matches("<ClInclude Include=").count(), 1);
    assert!(!project.contains("ProjectReference"));
    assert!(project.contains("CORE_API=__declspec(dllexport)"));
    assert!(project.contains("<PlatformToolset>v142</PlatformToolset>"));
    assert_eq!(generated.dependency.symbol, "CORE");

    let filters = fs::read_to_string(&generated.filters_path).unwrap();
    assert!(filters.contains("<Filter Include=\"Public\">"));
    assert!(filters.contains("<Filter Include=\"Private\">"));
}

#[test]
fn dependant_sees_dependency_headers_and_reference() {
    let dir = tempfile::tempdir().unwrap();
    core_tree(dir.path());
    touch(&dir.path().join("Source/Runtime/Game/Private/Game.cpp"));
    let disk = LiveFileSystem;
    let ids = SequentialIdGenerator::new();
    let rules = BuildRules::default();

    let core = ProjectGenerator::new(&disk, module(dir.path(), "Core"))
        .unwrap()
        .generate(&ids, &rules, Toolset::default(), &[])
        .unwrap();
    let game = ProjectGenerator::new(&disk, module(dir.path(), "Game"))
        .unwrap()
        .generate(&ids, &rules, Toolset::default(), &[core.dependency.clone()])
        .unwrap();

    let project = fs::read_to_string(&game.reference.file_path).unwrap();
    let core_public = dir.path().join("Source/Runtime/Core/Public");
    assert!(project.contains(&core_public.display().to_string()));
    assert!(project.contains("CORE_API=__declspec(dllimport)"));
    assert!(project.contains("GAME_API=__declspec(dllexport)"));
    assert_eq!(project.matches("<ProjectReference Include=").count(), 1);
    assert!(project.contains(&format!("<Project>{{{}}}</Project>", core.reference.project_identifier)));
}

#[test]
fn precompiled_header_is_created_once_and_used_elsewhere() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("Source/Runtime/Core/Private/Pch.cpp"));
    touch(&dir.path().join("Source/Runtime/Core/Private/Other.cpp"));
    let disk = LiveFileSystem;
    let rules = BuildRules { precompiled_header: Some("Pch".into()), ..BuildRules::default() };

    let generated = ProjectGenerator::new(&disk, module(dir.path(), "Core"))
        .unwrap()
        .generate(&SequentialIdGenerator::new(), &rules, Toolset::default(), &[])
        .unwrap();

    let project = fs::read_to_string(&generated.reference.file_path).unwrap();
    assert_eq!(project.matches("<PrecompiledHeader>Create</PrecompiledHeader>").count(), 1);
    assert!(project.contains("<PrecompiledHeader>Use</PrecompiledHeader>"));
    assert!(project.contains("<PrecompiledHeaderFile>Pch.h</PrecompiledHeaderFile>"));
    assert!(project.contains("<ForcedIncludeFiles>Pch.h</ForcedIncludeFiles>"));
}

#[test]
fn unmatched_precompiled_header_still_generates() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("Source/Runtime/Core/Private/Other.cpp"));
    touch(&dir.path().join("Source/Runtime/Core/Private/Engine.cpp"));
    let disk = LiveFileSystem;
    let rules = BuildRules { precompiled_header: Some("Pch".into()), ..BuildRules::default() };

    let generated = ProjectGenerator::new(&disk, module(dir.path(), "Core"))
        .unwrap()
        .generate(&SequentialIdGenerator::new(), &rules, Toolset::default(), &[])
        .unwrap();

    let project = fs::read_to_string(&generated.reference.file_path).unwrap();
    assert!(!project.contains("<PrecompiledHeader>Create</PrecompiledHeader>"));
    assert_eq!(project.matches("<PrecompiledHeader>Use</PrecompiledHeader>").count(), 1);
    assert!(project.contains("<ForcedIncludeFiles>Pch.h</ForcedIncludeFiles>"));
    assert_eq!(project.matches("<ClCompile Include=").count(), 2);
}

#[test]
fn reruns_are_byte_identical_and_directories_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    core_tree(dir.path());
    touch(&dir.path().join("Source/Runtime/Core/Private/Detail/Inner.cpp"));
    let disk = LiveFileSystem;

    let run = || {
        let generated = ProjectGenerator::new(&disk, module(dir.path(), "Core"))
            .unwrap()
            .generate(&SequentialIdGenerator::new(), &BuildRules::default(), Toolset::default(), &[])
            .unwrap();
        (
            fs::read(&generated.reference.file_path).unwrap(),
            fs::read(&generated.filters_path).unwrap(),
        )
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
    let filters = String::from_utf8(second.1).unwrap();
    assert!(filters.contains("<Filter Include=\"Private\\Detail\">"));
}

#[test]
fn listing_itself_as_dependency_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    core_tree(dir.path());
    let disk = LiveFileSystem;
    let ids = SequentialIdGenerator::new();
    let generator = ProjectGenerator::new(&disk, module(dir.path(), "Core")).unwrap();
    let core = generator.generate(&ids, &BuildRules::default(), Toolset::default(), &[]).unwrap();

    let err = generator
        .generate(&ids, &BuildRules::default(), Toolset::default(), &[core.dependency])
        .unwrap_err();
    assert!(matches!(err, GenerateError::SelfDependency(name) if name == "Core"));
}

#[test]
fn missing_source_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProjectGenerator::new(&LiveFileSystem, module(dir.path(), "Ghost"))
        .err()
        .unwrap();
    assert!(matches!(err, GenerateError::Io { .. }));
}
