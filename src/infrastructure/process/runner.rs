//! Process Runner
//!
//! Runs tools as child processes with `std::process::Command`.

use std::process::{Command, ExitStatus, Stdio};

use super::interrupt::{ChildActivity, CHILD_ACTIVITY};
use crate::domain::ports::{ToolInvocation, ToolRunner};
use crate::domain::value_objects::{ProcessFailure, StageOutcome};

/// Where a child's standard output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildOutput {
    /// Pass through to our stdout
    #[default]
    Inherit,
    /// Drop it (keeps a JSON event stream on stdout clean)
    Discard,
}

/// Tool runner backed by real child processes.
///
/// Children never see our stdin, so they cannot swallow the confirmation
/// answer. Their stderr is always passed through.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    stdout: ChildOutput,
    activity: &'static ChildActivity,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self {
            stdout: ChildOutput::default(),
            activity: &CHILD_ACTIVITY,
        }
    }
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout(mut self, stdout: ChildOutput) -> Self {
        self.stdout = stdout;
        self
    }

    /// Report running children to `activity` instead of the process-wide flag
    #[cfg(test)]
    pub(crate) fn with_activity(mut self, activity: &'static ChildActivity) -> Self {
        self.activity = activity;
        self
    }

    fn command(&self, invocation: &ToolInvocation) -> Command {
        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.args())
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());

        match self.stdout {
            ChildOutput::Inherit => cmd.stdout(Stdio::inherit()),
            ChildOutput::Discard => cmd.stdout(Stdio::null()),
        };

        if let Some(dir) = invocation.working_dir() {
            cmd.current_dir(dir);
        }

        cmd
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> StageOutcome {
        let _guard = self.activity.enter();
        let mut child = match self.command(invocation).spawn() {
            Ok(child) => child,
            Err(e) => {
                return StageOutcome::ProcessError(ProcessFailure::Spawn {
                    message: e.to_string(),
                });
            }
        };

        match child.wait() {
            Ok(status) => classify(status),
            Err(_) => StageOutcome::ProcessError(ProcessFailure::Abnormal),
        }
    }
}

/// Map an exit status onto a stage outcome
pub fn classify(status: ExitStatus) -> StageOutcome {
    if let Some(code) = status.code() {
        return if code == 0 {
            StageOutcome::Success
        } else {
            StageOutcome::ToolFailure { code }
        };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return StageOutcome::ProcessError(ProcessFailure::Signal { signal });
        }
    }

    StageOutcome::ProcessError(ProcessFailure::Abnormal)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn sh(script: &str) -> ToolInvocation {
        ToolInvocation::new("sh").arg("-c").arg(script)
    }

    #[test]
    fn zero_exit_is_success() {
        assert_eq!(ProcessRunner::new().run(&sh("exit 0")), StageOutcome::Success);
    }

    #[test]
    fn non_zero_exit_is_tool_failure() {
        assert_eq!(
            ProcessRunner::new().run(&sh("exit 3")),
            StageOutcome::ToolFailure { code: 3 }
        );
    }

    #[test]
    fn signal_is_process_error() {
        assert_eq!(
            ProcessRunner::new().run(&sh("kill -9 $$")),
            StageOutcome::ProcessError(ProcessFailure::Signal { signal: 9 })
        );
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let outcome = ProcessRunner::new().run(&ToolInvocation::new("dirpress-no-such-tool-7f3a"));
        assert!(matches!(
            outcome,
            StageOutcome::ProcessError(ProcessFailure::Spawn { .. })
        ));
    }

    #[test]
    fn working_dir_is_honoured() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "x").unwrap();

        let outcome = ProcessRunner::new().run(&sh("test -f marker").in_dir(dir.path()));
        assert_eq!(outcome, StageOutcome::Success);
    }

    #[test]
    fn arguments_are_not_shell_expanded() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a b"), "x").unwrap();

        // One argv entry containing a space; a shell would split it.
        let outcome = ProcessRunner::new().run(
            &ToolInvocation::new("test")
                .arg("-f")
                .arg("a b")
                .in_dir(dir.path()),
        );
        assert_eq!(outcome, StageOutcome::Success);
    }

    #[test]
    fn child_stdin_is_closed() {
        // `cat` with a null stdin reads EOF and exits 0 immediately.
        let outcome = ProcessRunner::new()
            .with_stdout(ChildOutput::Discard)
            .run(&ToolInvocation::new("cat"));
        assert_eq!(outcome, StageOutcome::Success);
    }

    #[test]
    fn activity_is_marked_while_child_runs() {
        static ACTIVITY: ChildActivity = ChildActivity::new();
        let runner = ProcessRunner::new().with_activity(&ACTIVITY);

        let handle = thread::spawn(move || runner.run(&sh("sleep 0.5")));

        let deadline = Instant::now() + Duration::from_secs(5);
        while !ACTIVITY.is_active() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(ACTIVITY.is_active());

        assert_eq!(handle.join().unwrap(), StageOutcome::Success);
        assert!(!ACTIVITY.is_active());
    }

    #[test]
    fn activity_is_cleared_when_spawn_fails() {
        static ACTIVITY: ChildActivity = ChildActivity::new();
        let runner = ProcessRunner::new().with_activity(&ACTIVITY);

        let outcome = runner.run(&ToolInvocation::new("dirpress-no-such-tool-7f3a"));

        assert!(matches!(
            outcome,
            StageOutcome::ProcessError(ProcessFailure::Spawn { .. })
        ));
        assert!(!ACTIVITY.is_active());
    }
}
