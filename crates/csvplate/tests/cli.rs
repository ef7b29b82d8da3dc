//! End-to-end runs through `run_cli` against temporary directories.

use std::fs;
use std::path::Path;

use csvplate::{run_cli, Io};
use csvplate_input::MockStdin;
use tempfile::TempDir;

struct Outcome {
    code: u8,
    stdout: String,
    stderr: String,
}

fn run_with_stdin(args: &[&str], stdin: MockStdin) -> Outcome {
    let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
    let code = {
        let mut io = Io {
            stdin: &stdin,
            stdout: &mut stdout,
            stderr: &mut stderr,
            color: false,
        };
        let mut argv = vec!["csvplate"];
        argv.extend_from_slice(args);
        run_cli(argv, &mut io)
    };
    Outcome {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

fn run(args: &[&str]) -> Outcome {
    run_with_stdin(args, MockStdin::terminal())
}

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn path_in(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

const PEOPLE: &str = "Name,City\nAda,London\nGrace,Arlington\nLinus,Helsinki\n";

#[test]
fn single_file_mode_writes_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "people.csv", PEOPLE);
    let tmpl = write(
        &dir,
        "report.tmpl",
        "{% for r in rows %}{{ r._index_ }}. {{ r.Name }} ({{ r.City }})\n{% endfor %}",
    );
    let out = path_in(&dir, "nested/report.txt");

    let outcome = run(&["-i", &csv, "-t", &tmpl, "-o", &out]);

    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(
        read(&out),
        "1. Ada (London)\n2. Grace (Arlington)\n3. Linus (Helsinki)\n"
    );
    assert_eq!(outcome.stdout, format!("result saved in {out}\n"));
    assert!(outcome.stderr.is_empty());
}

#[test]
fn single_file_mode_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "people.csv", PEOPLE);

    let outcome = run(&["-i", &csv, "-t", "{{ headers | join('|') }}", "-o", "-"]);

    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "Name|City");
}

#[test]
fn per_row_mode_writes_one_file_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "people.csv", PEOPLE);
    let out = format!("{}/{{{{ Name | lower }}}}.txt", dir.path().display());

    let outcome = run(&["-i", &csv, "-t", "Dear {{ Name }} of {{ City }}\n", "-o", &out]);

    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(read(dir.path().join("ada.txt")), "Dear Ada of London\n");
    assert_eq!(read(dir.path().join("grace.txt")), "Dear Grace of Arlington\n");
    assert_eq!(read(dir.path().join("linus.txt")), "Dear Linus of Helsinki\n");

    let lines: Vec<&str> = outcome.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            path_in(&dir, "ada.txt"),
            path_in(&dir, "grace.txt"),
            path_in(&dir, "linus.txt"),
        ]
    );
}

#[test]
fn per_row_partial_failure_is_counted() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "people.csv", PEOPLE);
    write(&dir, "grace.txt", "already here");
    let out = format!("{}/{{{{ Name | lower }}}}.txt", dir.path().display());

    let outcome = run(&["-i", &csv, "-t", "hello {{ Name }}", "-o", &out]);

    assert_eq!(outcome.code, 1);
    assert_eq!(read(dir.path().join("ada.txt")), "hello Ada");
    assert_eq!(read(dir.path().join("grace.txt")), "already here");
    assert_eq!(read(dir.path().join("linus.txt")), "hello Linus");
    assert_eq!(outcome.stdout.lines().count(), 2);

    let stderr: Vec<&str> = outcome.stderr.lines().collect();
    assert_eq!(stderr.len(), 2);
    assert!(stderr[0].starts_with("  "));
    assert!(stderr[0].contains("grace.txt"));
    assert_eq!(stderr[1], "csvplate: 1 file(s) not written");
}

#[test]
fn force_overwrites_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "people.csv", PEOPLE);
    let tmpl = write(&dir, "t.tmpl", "{{ _index_ }}:{{ Name | slugify }}:{{ City }}\n");
    let out = format!("{}/out/{{{{ _index_ }}}}.txt", dir.path().display());
    let args = ["-i", csv.as_str(), "-t", tmpl.as_str(), "-o", out.as_str()];

    assert_eq!(run(&args).code, 0);
    let first: Vec<Vec<u8>> = (1..=3)
        .map(|i| fs::read(dir.path().join(format!("out/{i}.txt"))).unwrap())
        .collect();

    let refused = run(&args);
    assert_eq!(refused.code, 1);
    assert!(refused.stderr.contains("3 file(s) not written"));

    let mut forced = args.to_vec();
    forced.push("-f");
    let outcome = run(&forced);
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);

    let second: Vec<Vec<u8>> = (1..=3)
        .map(|i| fs::read(dir.path().join(format!("out/{i}.txt"))).unwrap())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn force_overwrites_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = write(&dir, "report.txt", "stale content that is longer");

    let outcome = run(&["-i", "a\n1\n", "-t", "fresh", "-o", &out]);
    assert_eq!(outcome.code, 1);
    assert!(outcome.stderr.contains("already exists (use --force to overwrite)"));
    assert_eq!(read(&out), "stale content that is longer");

    let outcome = run(&["-i", "a\n1\n", "-t", "fresh", "-o", &out, "--force"]);
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(read(&out), "fresh");
}

#[test]
fn empty_csv_fails_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "empty.csv", "");
    let out = path_in(&dir, "out.txt");

    let outcome = run(&["-i", &csv, "-t", "x", "-o", &out]);

    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stderr, "csvplate: read csv: csv is empty\n");
    assert!(!Path::new(&out).exists());
}

#[test]
fn header_only_csv_renders_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = format!("{}/{{{{ a }}}}.txt", dir.path().display());

    let outcome = run(&["-i", "a,b\n", "-t", "x", "-o", &out]);

    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert!(outcome.stdout.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_template_file_is_used_as_literal() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "people.csv", PEOPLE);
    let missing = path_in(&dir, "no-such-template.tmpl");

    let outcome = run(&["-i", &csv, "-t", &missing]);

    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, missing);
}

#[test]
fn constant_output_template_still_renders_per_row() {
    let dir = tempfile::tempdir().unwrap();
    let out = format!("{}/{{{{ 'same' }}}}.txt", dir.path().display());

    let outcome = run(&["-i", "a\n1\n2\n", "-t", "{{ a }}", "-o", &out]);

    assert_eq!(outcome.code, 1);
    assert_eq!(read(dir.path().join("same.txt")), "1");
    assert_eq!(outcome.stdout.lines().count(), 1);
    assert!(outcome.stderr.contains("1 file(s) not written"));
}

#[test]
fn noheader_synthesizes_column_names() {
    let outcome = run(&[
        "-i",
        "x,y\n1,2\n",
        "-n",
        "-t",
        "{% for r in rows %}{{ r.C1 }}{{ r.C2 }}{{ r._index_ }} {% endfor %}",
    ]);
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "xy1 122 ");
}

#[test]
fn custom_counter_and_separator() {
    let outcome = run(&[
        "-i",
        "a;b\n1;2\n3;4\n",
        "--csv-sep",
        ";",
        "-c",
        "n",
        "-t",
        "{% for r in rows %}{{ r.n }}={{ r.b }} {% endfor %}",
    ]);
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "1=2 2=4 ");
}

#[test]
fn non_ascii_separator() {
    let outcome = run(&["-i", "a§b\n1§2\n", "--csv-sep", "§", "-t", "{{ rows[0].b }}"]);
    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "2");
}

#[test]
fn template_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "people.csv", PEOPLE);

    let outcome = run_with_stdin(
        &["-i", &csv, "-t", "-"],
        MockStdin::piped("{{ rows | length }} people"),
    );

    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "3 people");
}

#[test]
fn windows_1252_csv_is_decoded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin.csv");
    fs::write(&path, b"Name\nZo\xeb\n").unwrap();

    let outcome = run(&[
        "-i",
        path.to_str().unwrap(),
        "-t",
        "{{ rows[0].Name }}",
    ]);

    assert_eq!(outcome.code, 0, "{}", outcome.stderr);
    assert_eq!(outcome.stdout, "Zoë");
}

#[test]
fn malformed_csv_is_fatal() {
    let outcome = run(&["-i", "a,b\n\"unterminated,2\n", "-t", "x"]);
    assert_eq!(outcome.code, 1);
    assert!(outcome.stderr.starts_with("csvplate: read csv: line "));
    assert!(outcome.stdout.is_empty());
}

#[test]
fn both_sources_on_stdin_is_rejected() {
    let outcome = run_with_stdin(&["-i", "-"], MockStdin::piped("a\n1\n"));
    assert_eq!(outcome.code, 1);
    assert!(outcome
        .stderr
        .starts_with("csvplate: --csv and --template cannot both read from stdin"));
}

#[test]
fn invalid_separator_is_rejected() {
    let outcome = run(&["-i", "a\n1\n", "-t", "x", "--csv-sep", "::"]);
    assert_eq!(outcome.code, 1);
    assert!(outcome
        .stderr
        .starts_with("csvplate: --csv-sep must be a single character"));
}

#[test]
fn no_arguments_prints_usage() {
    let outcome = run(&[]);
    assert_eq!(outcome.code, 0);
    assert!(outcome.stdout.contains("Usage"));
    assert!(outcome.stderr.is_empty());
}
