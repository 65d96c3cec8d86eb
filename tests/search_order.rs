//! Search-order scenarios for the definition file resolver, run against
//! real directories.

use lexdef::resolver::{SearchSource, resolve};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FILE_NAME: &str = "TestDomain.txt";

struct Dirs {
    _root: TempDir,
    input: PathBuf,
    current: PathBuf,
    env: PathBuf,
    exe: PathBuf,
}

/// Four empty candidate directories under one temp root.
fn dirs() -> Dirs {
    let root = TempDir::new().unwrap();
    let mk = |name: &str| {
        let dir = root.path().join(name);
        fs::create_dir(&dir).unwrap();
        dir
    };
    Dirs {
        input: mk("input"),
        current: mk("current"),
        env: mk("env"),
        exe: mk("exec"),
        _root: root,
    }
}

fn place(dir: &Path) {
    fs::write(dir.join(FILE_NAME), "'PREFIX' = :97;\n").unwrap();
}

#[test]
fn input_directory_wins_over_everything() {
    let d = dirs();
    for dir in [&d.input, &d.current, &d.env, &d.exe] {
        place(dir);
    }

    let hit = resolve(
        FILE_NAME,
        &d.input.join("test.lexemes"),
        &d.current,
        Some(&d.env),
        Some(&d.exe),
    )
    .expect("file present everywhere");

    assert_eq!(hit.source, SearchSource::InputDir);
    assert_eq!(hit.directory, d.input);
    assert_eq!(hit.path, d.input.join(FILE_NAME));
}

#[test]
fn falls_back_to_current_directory() {
    let d = dirs();
    place(&d.current);
    place(&d.env);
    place(&d.exe);

    let hit = resolve(
        FILE_NAME,
        &d.input.join("test.lexemes"),
        &d.current,
        Some(&d.env),
        Some(&d.exe),
    )
    .unwrap();

    assert_eq!(hit.source, SearchSource::CurrentDir);
    assert_eq!(hit.directory, d.current);
}

#[test]
fn falls_back_to_env_directory() {
    let d = dirs();
    place(&d.env);
    place(&d.exe);

    let hit = resolve(
        FILE_NAME,
        &d.input.join("test.lexemes"),
        &d.current,
        Some(&d.env),
        Some(&d.exe),
    )
    .unwrap();

    assert_eq!(hit.source, SearchSource::EnvDir);
    assert_eq!(hit.directory, d.env);
}

#[test]
fn falls_back_to_executable_directory() {
    let d = dirs();
    place(&d.exe);

    let hit = resolve(
        FILE_NAME,
        &d.input.join("test.lexemes"),
        &d.current,
        Some(&d.env),
        Some(&d.exe),
    )
    .unwrap();

    assert_eq!(hit.source, SearchSource::ExeDir);
    assert_eq!(hit.directory, d.exe);
}

#[test]
fn miss_everywhere_is_none() {
    let d = dirs();

    let hit = resolve(
        FILE_NAME,
        &d.input.join("test.lexemes"),
        &d.current,
        Some(&d.env),
        Some(&d.exe),
    );

    assert_eq!(hit, None);
}

#[test]
fn nonexistent_env_directory_is_skipped() {
    let d = dirs();
    // the env path does not exist on disk, so even a hit there can't count
    let ghost = d.env.join("missing");
    place(&d.exe);

    let hit = resolve(
        FILE_NAME,
        &d.input.join("test.lexemes"),
        &d.current,
        Some(&ghost),
        Some(&d.exe),
    )
    .unwrap();

    assert_eq!(hit.source, SearchSource::ExeDir);
}

#[test]
fn bare_input_path_contributes_no_directory() {
    let d = dirs();
    place(&d.current);

    // input path with no directory component: search starts at the cwd
    let hit = resolve(
        FILE_NAME,
        Path::new("test.lexemes"),
        &d.current,
        None,
        None,
    )
    .unwrap();

    assert_eq!(hit.source, SearchSource::CurrentDir);
}

#[test]
fn matched_file_is_loadable() {
    let d = dirs();
    place(&d.input);

    let hit = resolve(
        FILE_NAME,
        &d.input.join("test.lexemes"),
        &d.current,
        None,
        None,
    )
    .unwrap();

    let table = lexdef::table::DefinitionTable::load(&hit.path).unwrap();
    assert_eq!(table.name_of(151), Some("PREFIX"));
}
