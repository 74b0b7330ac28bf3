use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_smi") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("smi");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "smi_cli_{}_{}_{}.smi",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(bin_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait")
}

#[test]
fn renders_file_argument() {
    let input = temp_file("file", "# Title\n\nSome *text*.\n");
    let output = Command::new(bin_path())
        .arg(input.to_str().expect("path"))
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "<h1>\nTitle</h1>\n<p>\nSome <em>text</em>.</p>\n"
    );
}

#[test]
fn reads_stdin_without_argument_or_with_dash() {
    for args in [&[][..], &["-"][..]] {
        let output = run_with_stdin(args, "- a\n- b\n");
        assert!(output.status.success(), "expected success exit code");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
        );
    }
}

#[test]
fn no_html_flag_escapes_markup() {
    let html = "<div>\n<b>x</b>\n</div>\n\nA & B\n";

    let permissive = run_with_stdin(&[], html);
    assert!(String::from_utf8_lossy(&permissive.stdout).starts_with("<div>\n<b>x</b>\n</div>"));

    for flag in ["-n", "--no-html"] {
        let output = run_with_stdin(&[flag], html);
        assert!(output.status.success(), "expected success exit code");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("<div>"), "raw html leaked: {stdout}");
        assert!(stdout.contains("&lt;b&gt;x&lt;/b&gt;"), "{stdout}");
        assert!(stdout.contains("A &amp; B"), "{stdout}");
    }
}

#[test]
fn sanitized_flag_drops_script_blocks() {
    let output = run_with_stdin(&["--sanitized"], "<script>\nalert(1)\n</script>\n\nok\n");
    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("script"), "{stdout}");
    assert!(stdout.contains("<p>\nok</p>"), "{stdout}");
}

#[test]
fn missing_file_reports_error_and_exit_code() {
    let missing = env::temp_dir().join("smi_cli_definitely_missing_input.smi");
    let output = Command::new(bin_path())
        .arg(missing.to_str().expect("path"))
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn depth_limit_reports_error() {
    let output = run_with_stdin(&["--max-depth", "4"], "> > > > > deep\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nested too deeply"), "stderr: {stderr}");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = Command::new(bin_path())
        .arg("--bogus")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
}
