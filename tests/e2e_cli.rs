//! CLI end-to-end tests
//!
//! Tests for the mkvtool command-line interface. Every command runs inside a
//! scratch directory with `HOME` pointed at it, so no user config leaks in.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the mkvtool binary, isolated in `dir`
#[allow(deprecated)]
fn mkvtool_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mkvtool").unwrap();
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    let dir = tempdir().unwrap();
    mkvtool_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let dir = tempdir().unwrap();
    mkvtool_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mkvtool"))
        .stdout(predicate::str::contains("setdefaultbylang"));
}

#[test]
fn test_cli_version_command() {
    let dir = tempdir().unwrap();
    mkvtool_cmd(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Build Version: {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_cli_print_scene_name() {
    let dir = tempdir().unwrap();
    mkvtool_cmd(dir.path())
        .args(["print", "--format", "%{title}.%{container}", "My.Show.S01E02.1080p.mkv"])
        .assert()
        .success()
        .stdout(predicate::str::diff("My Show.mkv\n"));
}

#[test]
fn test_cli_print_default_format() {
    let dir = tempdir().unwrap();
    mkvtool_cmd(dir.path())
        .args(["print", "Some.Show.S02E10.720p.HDTV.avi", "holiday.mp4"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Some Show.mkv\nholiday.mkv\n"));
}

#[test]
fn test_cli_print_uses_config_format() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("mkvtool.toml"),
        "[print]\nformat = \"%{title} (%{year}).%{container}\"\n",
    )
    .unwrap();

    mkvtool_cmd(dir.path())
        .args(["print", "The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv"])
        .assert()
        .success()
        .stdout(predicate::str::diff("The Matrix (1999).mkv\n"));
}

#[test]
fn test_cli_invalid_config_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("mkvtool.toml"), "[rename]\nformat = \"\"\n").unwrap();

    mkvtool_cmd(dir.path())
        .args(["print", "holiday.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("format cannot be empty"));
}

#[test]
fn test_cli_print_empty_result_fails() {
    let dir = tempdir().unwrap();
    mkvtool_cmd(dir.path())
        .args(["print", "-f", "%{group}", "holiday.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("holiday.mkv"))
        .stderr(predicate::str::contains("Execution failed"));
}

#[test]
fn test_cli_rename_dry_run() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("My.Show.S01E02.1080p.mkv");
    fs::write(&src, b"matroska").unwrap();

    mkvtool_cmd(dir.path())
        .args(["--dry-run", "rename", "My.Show.S01E02.1080p.mkv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry-run mode: Will not modify any files."))
        .stdout(predicate::str::contains("mv My.Show.S01E02.1080p.mkv 'My Show.mkv'"));

    assert!(src.exists());
    assert!(!dir.path().join("My Show.mkv").exists());
}

#[test]
fn test_cli_rename_live() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("My.Show.S01E02.1080p.mkv");
    fs::write(&src, b"matroska").unwrap();

    mkvtool_cmd(dir.path())
        .args(["rename", "My.Show.S01E02.1080p.mkv"])
        .assert()
        .success();

    assert!(!src.exists());
    assert_eq!(fs::read(dir.path().join("My Show.mkv")).unwrap(), b"matroska");
}

#[test]
fn test_cli_rename_skips_unreadable() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("Other.Show.S01E01.mkv");
    fs::write(&src, b"matroska").unwrap();

    mkvtool_cmd(dir.path())
        .args(["rename", "Missing.Show.S01E01.mkv", "Other.Show.S01E01.mkv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("is not readable. Skipping."));

    assert!(dir.path().join("Other Show.mkv").exists());
}

#[test]
fn test_cli_missing_tools_abort_before_work() {
    let dir = tempdir().unwrap();
    let empty_bin = dir.path().join("bin");
    fs::create_dir(&empty_bin).unwrap();
    fs::write(dir.path().join("movie.mkv"), b"matroska").unwrap();

    mkvtool_cmd(dir.path())
        .env("PATH", &empty_bin)
        .args(["setdefault", "2", "movie.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Requirements check"));
}

#[test]
fn test_cli_print_needs_no_tools() {
    let dir = tempdir().unwrap();
    let empty_bin = dir.path().join("bin");
    fs::create_dir(&empty_bin).unwrap();

    mkvtool_cmd(dir.path())
        .env("PATH", &empty_bin)
        .args(["print", "holiday.mkv"])
        .assert()
        .success();
}

#[cfg(unix)]
mod fake_tools {
    //! Stand-in MKVToolNix scripts: `mkvmerge -J` prints a fixed track list
    //! (and fails for any `*bad.mkv`), `mkvpropedit` records its arguments
    //! next to itself.

    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    const IDENTIFY: &str = r#"{"container":{"recognized":true,"supported":true,"type":"Matroska"},"errors":[],"warnings":[],"tracks":[{"codec":"AVC/H.264/MPEG-4p10","id":0,"type":"video","properties":{"number":1,"uid":101,"codec_id":"V_MPEG4/ISO/AVC","language":"und"}},{"codec":"SubRip/SRT","id":1,"type":"subtitles","properties":{"number":2,"uid":102,"codec_id":"S_TEXT/UTF8","language":"fre","track_name":"Francais","default_track":true}},{"codec":"SubRip/SRT","id":2,"type":"subtitles","properties":{"number":3,"uid":103,"codec_id":"S_TEXT/UTF8","language":"eng","track_name":"Commentary"}}]}"#;

    fn write_script(bin: &Path, name: &str, body: &str) {
        let path = bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Scratch dir with fake tools in `bin/` and an input `movie.mkv`.
    fn setup() -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();

        write_script(
            &bin,
            "mkvmerge",
            &format!(
                "if [ \"$1\" = \"-J\" ]; then\n\
                 case \"$2\" in *bad.mkv) printf '%s\\n' 'Error: The file could not be opened'; exit 2;; esac\n\
                 printf '%s\\n' '{IDENTIFY}'\n\
                 fi\n\
                 exit 0"
            ),
        );
        write_script(&bin, "mkvextract", "exit 0");
        write_script(&bin, "mkvpropedit", "printf '%s\\n' \"$*\" > \"$0.log\"");
        fs::write(dir.path().join("movie.mkv"), b"matroska").unwrap();
        fs::write(dir.path().join("bad.mkv"), b"garbage").unwrap();

        (dir, bin)
    }

    #[test]
    fn test_show_lists_tracks() {
        let (dir, bin) = setup();

        mkvtool_cmd(dir.path())
            .env("PATH", &bin)
            .args(["show", "--uid", "movie.mkv"])
            .assert()
            .success()
            .stdout(predicate::str::contains("File: movie.mkv"))
            .stdout(predicate::str::contains(
                "Track 2: subtitles, SubRip/SRT, language: fre, name: \"Francais\", default, uid: 102",
            ));
    }

    #[test]
    fn test_setdefault_live() {
        let (dir, bin) = setup();

        mkvtool_cmd(dir.path())
            .env("PATH", &bin)
            .args(["setdefault", "3", "movie.mkv"])
            .assert()
            .success();

        let recorded = fs::read_to_string(bin.join("mkvpropedit.log")).unwrap();
        assert_eq!(
            recorded.trim(),
            "movie.mkv --edit track:@2 --set flag-default=0 --edit track:@3 --set flag-default=1"
        );
    }

    #[test]
    fn test_setdefault_dry_run_does_not_run_tool() {
        let (dir, bin) = setup();

        mkvtool_cmd(dir.path())
            .env("PATH", &bin)
            .args(["-n", "setdefault", "2", "movie.mkv"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "movie.mkv --edit track:@2 --set flag-default=1 --edit track:@3 --set flag-default=0",
            ));

        assert!(!bin.join("mkvpropedit.log").exists());
    }

    #[test]
    fn test_setdefaultbylang_honors_ignore_list() {
        let (dir, bin) = setup();

        mkvtool_cmd(dir.path())
            .env("PATH", &bin)
            .args([
                "setdefaultbylang",
                "--lang",
                "eng",
                "--lang",
                "fre",
                "--ignore",
                "Commentary",
                "movie.mkv",
            ])
            .assert()
            .success();

        let recorded = fs::read_to_string(bin.join("mkvpropedit.log")).unwrap();
        assert!(recorded.contains("--edit track:@2 --set flag-default=1"));
    }

    #[test]
    fn test_setdefaultbylang_no_match_fails_without_mutation() {
        let (dir, bin) = setup();

        mkvtool_cmd(dir.path())
            .env("PATH", &bin)
            .args(["setdefaultbylang", "--lang", "spa", "movie.mkv"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("movie.mkv"))
            .stderr(predicate::str::contains("Execution failed"));

        assert!(!bin.join("mkvpropedit.log").exists());
    }

    #[test]
    fn test_setdefault_rejects_non_subtitle_track() {
        let (dir, bin) = setup();

        mkvtool_cmd(dir.path())
            .env("PATH", &bin)
            .args(["setdefault", "1", "movie.mkv"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a subtitle track"));

        assert!(!bin.join("mkvpropedit.log").exists());
    }

    #[test]
    fn test_setdefault_continues_past_failing_file() {
        let (dir, bin) = setup();

        mkvtool_cmd(dir.path())
            .env("PATH", &bin)
            .args(["setdefault", "2", "bad.mkv", "movie.mkv"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("bad.mkv: "))
            .stderr(predicate::str::contains("could not be opened"))
            .stderr(predicate::str::contains("Execution failed"));

        let recorded = fs::read_to_string(bin.join("mkvpropedit.log")).unwrap();
        assert_eq!(
            recorded.trim(),
            "movie.mkv --edit track:@2 --set flag-default=1 --edit track:@3 --set flag-default=0"
        );
    }

    #[test]
    fn test_missing_configured_tool_warns_once() {
        let (dir, bin) = setup();
        fs::write(
            dir.path().join("mkvtool.toml"),
            "[tools]\nmkvmerge = \"/nonexistent/mkvmerge\"\n",
        )
        .unwrap();

        mkvtool_cmd(dir.path())
            .env("PATH", &bin)
            .args(["show", "movie.mkv"])
            .assert()
            .success()
            .stderr(predicate::str::contains("does not exist").count(1));
    }
}
