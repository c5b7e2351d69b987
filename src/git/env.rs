use std::env;
use std::ffi::OsString;
use std::process::Command;

/// Environment handed to every `git` child.
///
/// The child environment is cleared and rebuilt from these values only, so
/// output language and lookup paths do not depend on the caller's shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitEnv {
    pub lang: String,
    pub home: Option<OsString>,
    pub path: Option<OsString>,
}

impl Default for GitEnv {
    fn default() -> Self {
        Self {
            lang: "C".to_string(),
            home: None,
            path: None,
        }
    }
}

impl GitEnv {
    /// Capture `HOME` and `PATH` from the current process, forcing `LANG=C`.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            home: env::var_os("HOME"),
            path: env::var_os("PATH"),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, cmd: &mut Command) {
        cmd.env_clear().env("LANG", &self.lang);
        if let Some(home) = &self.home {
            cmd.env("HOME", home);
        }
        if let Some(path) = &self.path {
            cmd.env("PATH", path);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    fn child_env(cmd: &Command) -> Vec<(String, Option<String>)> {
        cmd.get_envs()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().to_string(),
                    v.map(OsStr::to_string_lossy).map(|s| s.to_string()),
                )
            })
            .collect()
    }

    #[test]
    fn apply_forwards_only_pinned_vars() {
        let env = GitEnv {
            lang: "C".to_string(),
            home: Some("/home/tester".into()),
            path: Some("/opt/bin:/usr/bin".into()),
        };
        let mut cmd = Command::new("git");
        env.apply(&mut cmd);
        let mut vars = child_env(&cmd);
        vars.sort();
        assert_eq!(
            vars,
            vec![
                ("HOME".to_string(), Some("/home/tester".to_string())),
                ("LANG".to_string(), Some("C".to_string())),
                ("PATH".to_string(), Some("/opt/bin:/usr/bin".to_string())),
            ]
        );
    }

    #[test]
    fn apply_skips_missing_vars() {
        let mut cmd = Command::new("git");
        GitEnv::default().apply(&mut cmd);
        assert_eq!(
            child_env(&cmd),
            vec![("LANG".to_string(), Some("C".to_string()))]
        );
    }
}
