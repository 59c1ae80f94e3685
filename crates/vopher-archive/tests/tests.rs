use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use std::path::Path;

use vopher_archive::{
    ArchiveFormat, Compressed, Compression, Error, FormatRegistry, TarArchive, VimballArchive,
    ZipArchive,
};

enum Item<'a> {
    File(&'a str, &'a [u8]),
    Dir(&'a str),
    Symlink(&'a str, &'a str),
}

fn build_tar(items: &[Item<'_>]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for item in items {
        let mut header = tar::Header::new_gnu();
        match item {
            Item::File(name, data) => {
                header.set_size(data.len() as u64);
                header.set_mode(0o644);
                header.set_entry_type(tar::EntryType::Regular);
                builder.append_data(&mut header, name, *data).unwrap();
            }
            Item::Dir(name) => {
                header.set_size(0);
                header.set_mode(0o755);
                header.set_entry_type(tar::EntryType::Directory);
                builder.append_data(&mut header, name, &[][..]).unwrap();
            }
            Item::Symlink(name, target) => {
                header.set_size(0);
                header.set_mode(0o777);
                header.set_entry_type(tar::EntryType::Symlink);
                header.set_link_name(target).unwrap();
                builder.append_data(&mut header, name, &[][..]).unwrap();
            }
        }
    }
    builder.into_inner().unwrap()
}

/// `tar::Builder` refuses absolute names, so the header is written by hand.
fn build_tar_with_absolute_entry() -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());

    let mut ok = tar::Header::new_gnu();
    ok.set_size(2);
    ok.set_mode(0o644);
    ok.set_entry_type(tar::EntryType::Regular);
    builder.append_data(&mut ok, "top/ok.txt", &b"ok"[..]).unwrap();

    let name = b"/etc/evil";
    let mut evil = tar::Header::new_old();
    evil.as_old_mut().name[..name.len()].copy_from_slice(name);
    evil.set_size(4);
    evil.set_mode(0o644);
    evil.set_entry_type(tar::EntryType::Regular);
    evil.set_cksum();
    builder.append(&evil, &b"evil"[..]).unwrap();

    builder.into_inner().unwrap()
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn bzip2(data: &[u8]) -> Vec<u8> {
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn build_zip(files: &[(&str, &[u8])], dirs: &[&str]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    for dir in dirs {
        writer.add_directory(*dir, options).unwrap();
    }
    for (name, data) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn plugin_items() -> Vec<Item<'static>> {
    vec![
        Item::Dir("vim-foo-master/"),
        Item::File("vim-foo-master/README", b"readme"),
        Item::Dir("vim-foo-master/plugin/"),
        Item::File("vim-foo-master/plugin/foo.vim", b"\" foo\n"),
        Item::File("vim-foo-master/doc/foo.txt", b"*foo*\n"),
        Item::Symlink("vim-foo-master/link.vim", "plugin/foo.vim"),
        Item::File("TOPLEVEL", b"dropped when stripping"),
    ]
}

fn relative_files(root: &Path) -> BTreeSet<String> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).unwrap();
                out.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    let mut out = BTreeSet::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn tar_lists_only_regular_files() {
    let data = build_tar(&plugin_items());
    let names = TarArchive.entries(&mut Cursor::new(data), 0).unwrap();
    assert_eq!(
        names,
        vec![
            "vim-foo-master/README",
            "vim-foo-master/plugin/foo.vim",
            "vim-foo-master/doc/foo.txt",
            "TOPLEVEL",
        ]
    );
}

#[test]
fn tar_strip_drops_entries_without_remainder() {
    let data = build_tar(&plugin_items());
    let names = TarArchive.entries(&mut Cursor::new(data.clone()), 1).unwrap();
    assert_eq!(names, vec!["README", "plugin/foo.vim", "doc/foo.txt"]);

    let names = TarArchive.entries(&mut Cursor::new(data), 2).unwrap();
    assert_eq!(names, vec!["foo.vim", "foo.txt"]);
}

#[test]
fn tar_extract_writes_stripped_files() {
    let dir = tempfile::tempdir().unwrap();
    let data = build_tar(&plugin_items());

    let written = TarArchive
        .extract(dir.path(), &mut Cursor::new(data), 1)
        .unwrap();

    assert_eq!(written.len(), 3);
    assert_eq!(
        std::fs::read(dir.path().join("plugin/foo.vim")).unwrap(),
        b"\" foo\n"
    );
    assert!(!dir.path().join("TOPLEVEL").exists());
    assert!(!dir.path().join("link.vim").exists());
}

#[test]
fn extract_then_walk_matches_listing() {
    let dir = tempfile::tempdir().unwrap();
    let data = build_tar(&plugin_items());

    let listed: BTreeSet<String> = TarArchive
        .entries(&mut Cursor::new(data.clone()), 1)
        .unwrap()
        .into_iter()
        .collect();
    TarArchive
        .extract(dir.path(), &mut Cursor::new(data), 1)
        .unwrap();

    assert_eq!(relative_files(dir.path()), listed);
}

#[test]
fn extract_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("plugin")).unwrap();
    std::fs::write(dir.path().join("plugin/foo.vim"), "stale").unwrap();

    let data = build_tar(&plugin_items());
    TarArchive
        .extract(dir.path(), &mut Cursor::new(data), 1)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("plugin/foo.vim")).unwrap(),
        "\" foo\n"
    );
}

#[test]
fn absolute_entry_fails_whole_archive() {
    let data = build_tar_with_absolute_entry();

    let listed = TarArchive.entries(&mut Cursor::new(data.clone()), 0);
    assert!(matches!(listed, Err(Error::AbsolutePath(ref name)) if name == "/etc/evil"));

    let dir = tempfile::tempdir().unwrap();
    let extracted = TarArchive.extract(dir.path(), &mut Cursor::new(data), 0);
    assert!(matches!(extracted, Err(Error::AbsolutePath(_))));
}

#[test]
fn truncated_tar_is_an_error() {
    let mut data = build_tar(&plugin_items());
    data.truncate(700);
    let dir = tempfile::tempdir().unwrap();
    assert!(TarArchive.extract(dir.path(), &mut Cursor::new(data), 0).is_err());
}

#[test]
fn gzip_decorated_tar() {
    let tar = build_tar(&plugin_items());
    let format = Compressed::new(Compression::Gzip, TarArchive);

    let direct = TarArchive.entries(&mut Cursor::new(tar.clone()), 1).unwrap();
    let decorated = format.entries(&mut Cursor::new(gzip(&tar)), 1).unwrap();
    assert_eq!(direct, decorated);
}

#[test]
fn bzip2_decorated_tar() {
    let tar = build_tar(&plugin_items());
    let dir = tempfile::tempdir().unwrap();
    let format = Compressed::new(Compression::Bzip2, TarArchive);

    let written = format
        .extract(dir.path(), &mut Cursor::new(bzip2(&tar)), 1)
        .unwrap();
    assert_eq!(written.len(), 3);
    assert!(dir.path().join("doc/foo.txt").is_file());
}

#[test]
fn corrupt_gzip_surfaces_as_read_error() {
    let format = Compressed::new(Compression::Gzip, TarArchive);
    let result = format.entries(&mut Cursor::new(b"not gzip at all".to_vec()), 0);
    assert!(result.is_err());
}

#[test]
fn zip_skips_directories_and_strips() {
    let data = build_zip(
        &[
            ("vim-bar-1.0/plugin/bar.vim", b"\" bar\n"),
            ("vim-bar-1.0/autoload/bar.vim", b"\" autoload\n"),
            ("NOTICE", b"top level"),
        ],
        &["vim-bar-1.0/"],
    );

    let names = ZipArchive.entries(&mut Cursor::new(data.clone()), 1).unwrap();
    assert_eq!(names, vec!["plugin/bar.vim", "autoload/bar.vim"]);

    let dir = tempfile::tempdir().unwrap();
    let written = ZipArchive
        .extract(dir.path(), &mut Cursor::new(data), 1)
        .unwrap();
    assert_eq!(written.len(), 2);
    assert_eq!(
        std::fs::read(dir.path().join("autoload/bar.vim")).unwrap(),
        b"\" autoload\n"
    );
}

#[test]
fn zip_absolute_entry_fails_before_writing() {
    let data = build_zip(&[("top/ok.txt", b"ok"), ("/etc/evil", b"evil")], &[]);

    let listed = ZipArchive.entries(&mut Cursor::new(data.clone()), 0);
    assert!(matches!(listed, Err(Error::AbsolutePath(ref name)) if name == "/etc/evil"));

    let dir = tempfile::tempdir().unwrap();
    let extracted = ZipArchive.extract(dir.path(), &mut Cursor::new(data), 0);
    assert!(matches!(extracted, Err(Error::AbsolutePath(_))));
    assert!(relative_files(dir.path()).is_empty());
}

#[test]
fn garbage_is_not_a_zip() {
    let result = ZipArchive.entries(&mut Cursor::new(b"nope".to_vec()), 0);
    assert!(matches!(result, Err(Error::Corrupted(_))));
}

const VIMBALL: &str = "\" Vimball Archiver by Charles E. Campbell\n\
UseVimball\n\
finish\n\
docs/foo.txt\t[[[1\n\
2\n\
first line\n\
second line\n";

#[test]
fn vimball_extracts_single_record() {
    let dir = tempfile::tempdir().unwrap();
    let written = VimballArchive
        .extract(dir.path(), &mut Cursor::new(VIMBALL.as_bytes().to_vec()), 0)
        .unwrap();

    assert_eq!(written, vec![dir.path().join("docs/foo.txt")]);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("docs/foo.txt")).unwrap(),
        "first line\nsecond line\n"
    );
    assert_eq!(relative_files(dir.path()).len(), 1);
}

#[test]
fn vimball_lists_literal_names() {
    let input = format!("{VIMBALL}./plugin//foo.vim\t[[[1\n1\nlet g:foo = 1\n");
    let names = VimballArchive
        .entries(&mut Cursor::new(input.into_bytes()), 1)
        .unwrap();
    assert_eq!(names, vec!["docs/foo.txt", "plugin/foo.vim"]);
}

#[test]
fn vimball_strip_applies_to_targets() {
    let dir = tempfile::tempdir().unwrap();
    let input = format!("{VIMBALL}README\t[[[1\n1\nhello\n");
    let written = VimballArchive
        .extract(dir.path(), &mut Cursor::new(input.into_bytes()), 1)
        .unwrap();

    assert_eq!(written, vec![dir.path().join("foo.txt")]);
    assert!(!dir.path().join("README").exists());
}

const VIMBALL_PLUGIN: &str = "UseVimball\n\
finish\n\
plugin/foo.vim\t[[[1\n\
1\n\
\" plugin\n\
autoload/foo.vim\t[[[1\n\
1\n\
\" autoload\n\
README\t[[[1\n\
1\n\
readme\n";

#[test]
fn vimball_extracts_layout_matching_listing() {
    let data = VIMBALL_PLUGIN.as_bytes().to_vec();
    let strip_dirs = VimballArchive.default_strip_dirs();
    assert_eq!(strip_dirs, 0);

    let listed: BTreeSet<String> = VimballArchive
        .entries(&mut Cursor::new(data.clone()), strip_dirs)
        .unwrap()
        .into_iter()
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let written = VimballArchive
        .extract(dir.path(), &mut Cursor::new(data), strip_dirs)
        .unwrap();

    assert_eq!(written.len(), 3);
    assert_eq!(relative_files(dir.path()), listed);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("plugin/foo.vim")).unwrap(),
        "\" plugin\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("autoload/foo.vim")).unwrap(),
        "\" autoload\n"
    );
}

#[test]
fn vimball_repeated_target_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let written = VimballArchive
        .extract(dir.path(), &mut Cursor::new(VIMBALL_PLUGIN.as_bytes().to_vec()), 1)
        .unwrap();

    assert_eq!(written, vec![dir.path().join("foo.vim")]);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("foo.vim")).unwrap(),
        "\" autoload\n"
    );
}

#[test]
fn default_strip_follows_format() {
    let registry = FormatRegistry::standard();
    let strip = |name: &str| registry.detect(name).unwrap().default_strip_dirs();

    assert_eq!(strip("vim-foo-master.tar.gz"), 1);
    assert_eq!(strip("master.zip"), 1);
    assert_eq!(strip("Align.vba"), 0);
    assert_eq!(strip("cecutil.vmb.gz"), 0);
}

#[test]
fn vimball_without_finish_is_strange() {
    let input = "UseVimball\ndocs/foo.txt\n1\nx\n";
    let result = VimballArchive.entries(&mut Cursor::new(input.as_bytes().to_vec()), 0);
    assert!(matches!(result, Err(Error::StrangePreamble)));
    assert_eq!(result.unwrap_err().to_string(), "vimball: strange preamble");
}

#[test]
fn vimball_negative_count() {
    let input = "UseVimball\nfinish\ndocs/foo.txt\t[[[1\n-1\n";
    let result = VimballArchive.entries(&mut Cursor::new(input.as_bytes().to_vec()), 0);
    assert!(matches!(
        result,
        Err(Error::NegativeLineCount { ref name, count: -1 }) if name == "docs/foo.txt"
    ));
}

#[test]
fn vimball_unparseable_count() {
    let input = "UseVimball\nfinish\ndocs/foo.txt\t[[[1\nmany\nx\n";
    let result = VimballArchive.entries(&mut Cursor::new(input.as_bytes().to_vec()), 0);
    assert!(matches!(result, Err(Error::InvalidLineCount { .. })));
}

#[test]
fn vimball_missing_count() {
    let input = "UseVimball\nfinish\ndocs/foo.txt\t[[[1\n";
    let result = VimballArchive.entries(&mut Cursor::new(input.as_bytes().to_vec()), 0);
    assert!(matches!(result, Err(Error::MissingLineCount { .. })));
}

#[test]
fn vimball_truncated_record() {
    let input = "UseVimball\nfinish\ndocs/foo.txt\t[[[1\n3\nonly one\n";
    let dir = tempfile::tempdir().unwrap();
    let result = VimballArchive.extract(
        dir.path(),
        &mut Cursor::new(input.as_bytes().to_vec()),
        0,
    );
    assert!(matches!(
        result,
        Err(Error::Truncated { expected: 3, read: 1, .. })
    ));
}

#[test]
fn vimball_has_no_absolute_path_guard() {
    // Unlike tar and zip, an absolute record name is accepted and re-rooted
    // below the target directory.
    let input = "UseVimball\nfinish\n/plugin/abs.vim\t[[[1\n1\nx\n";
    let names = VimballArchive
        .entries(&mut Cursor::new(input.as_bytes().to_vec()), 0)
        .unwrap();
    assert_eq!(names, vec!["/plugin/abs.vim"]);

    let dir = tempfile::tempdir().unwrap();
    let written = VimballArchive
        .extract(dir.path(), &mut Cursor::new(input.as_bytes().to_vec()), 0)
        .unwrap();
    assert_eq!(written, vec![dir.path().join("plugin/abs.vim")]);
}

#[test]
fn gzip_decorated_vimball() {
    let format = Compressed::new(Compression::Gzip, VimballArchive);
    let names = format
        .entries(&mut Cursor::new(gzip(VIMBALL.as_bytes())), 0)
        .unwrap();
    assert_eq!(names, vec!["docs/foo.txt"]);
}

#[test]
fn registry_dispatches_to_matching_format() {
    let registry = FormatRegistry::standard();
    let tar = build_tar(&plugin_items());

    let format = registry.detect("vim-foo-master.tar.gz").unwrap();
    let names = format.entries(&mut Cursor::new(gzip(&tar)), 1).unwrap();
    assert_eq!(names.len(), 3);

    let format = registry.detect("foo.vba").unwrap();
    let names = format
        .entries(&mut Cursor::new(VIMBALL.as_bytes().to_vec()), 0)
        .unwrap();
    assert_eq!(names, vec!["docs/foo.txt"]);
}
