//! Forked process execution with concurrent output streaming

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::debug;

/// Runs the program to completion, draining its output concurrently.
///
/// Standard output and standard error are piped and read line-by-line by
/// two independent tasks, each feeding its caller-supplied callback; the
/// full output is never buffered in memory, and a full pipe can never
/// deadlock the child. Both drains are joined before the exit status is
/// returned, so every line has reached its callback by then.
pub async fn run<O, E>(
    program: &Path,
    working_dir: &Path,
    classpath: &OsStr,
    args: &[String],
    on_stdout: O,
    on_stderr: E,
) -> std::io::Result<i32>
where
    O: FnMut(String) + Send + 'static,
    E: FnMut(String) + Send + 'static,
{
    debug!(program = %program.display(), working_dir = %working_dir.display(), "spawning");

    let mut child = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .env("CLASSPATH", classpath)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout_drain = child.stdout.take().map(|stream| drain(stream, on_stdout));
    let stderr_drain = child.stderr.take().map(|stream| drain(stream, on_stderr));

    let status = child.wait().await?;

    for handle in [stdout_drain, stderr_drain].into_iter().flatten() {
        let _ = handle.await;
    }

    Ok(status.code().unwrap_or(-1))
}

fn drain<R, F>(stream: R, mut consume: F) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
    F: FnMut(String) + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            consume(line);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Arc, Mutex};

    fn collector() -> (Arc<Mutex<Vec<String>>>, impl FnMut(String) + Send + 'static) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        (lines, move |line| sink.lock().unwrap().push(line))
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_run_streams_both_pipes() {
        let (out_lines, on_stdout) = collector();
        let (err_lines, on_stderr) = collector();

        let status = run(
            Path::new("/bin/sh"),
            Path::new("."),
            &OsString::from("unused"),
            &[
                "-c".to_string(),
                "echo one; echo two; echo oops >&2".to_string(),
            ],
            on_stdout,
            on_stderr,
        )
        .await
        .unwrap();

        assert_eq!(status, 0);
        assert_eq!(*out_lines.lock().unwrap(), vec!["one", "two"]);
        assert_eq!(*err_lines.lock().unwrap(), vec!["oops"]);
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_run_reports_exit_status() {
        let (_, on_stdout) = collector();
        let (_, on_stderr) = collector();

        let status = run(
            Path::new("/bin/sh"),
            Path::new("."),
            &OsString::from("unused"),
            &["-c".to_string(), "exit 3".to_string()],
            on_stdout,
            on_stderr,
        )
        .await
        .unwrap();

        assert_eq!(status, 3);
    }

    #[tokio::test]
    async fn test_run_missing_program_is_io_error() {
        let (_, on_stdout) = collector();
        let (_, on_stderr) = collector();

        let result = run(
            Path::new("/definitely/not/a/program"),
            Path::new("."),
            &OsString::from("unused"),
            &[],
            on_stdout,
            on_stderr,
        )
        .await;

        assert!(result.is_err());
    }
}
