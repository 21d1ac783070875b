use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use super::project::{ProjectDirectory, ProjectEntry};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The signed-in user; absent means the profile is not loaded
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceConfig>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub slug: String,
    pub name: String,
    /// Project new tasks land in when no directive names a known project
    #[serde(default = "default_project_name")]
    pub default_project: String,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

impl WorkspaceConfig {
    pub fn directory(&self) -> ProjectDirectory {
        ProjectDirectory::new(self.projects.clone())
    }
}

fn default_project_name() -> String {
    "General".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Config {
    /// Index of the workspace matching `slug`, else of the first one
    /// configured. An unmatched slug is logged.
    pub fn select_workspace_index(&self, slug: Option<&str>) -> Option<usize> {
        let matched = slug.and_then(|s| self.workspaces.iter().position(|w| w.slug == s));
        let index = matched.or_else(|| (!self.workspaces.is_empty()).then_some(0));
        if let (Some(slug), None, Some(i)) = (slug, matched, index) {
            warn!(requested = %slug, using = %self.workspaces[i].slug, "unknown workspace");
        }
        index
    }

    /// Pick the workspace matching `slug`, else the first one configured
    pub fn select_workspace(&self, slug: Option<&str>) -> Option<&WorkspaceConfig> {
        self.select_workspace_index(slug)
            .and_then(|i| self.workspaces.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    const SAMPLE: &str = r#"
[user]
id = "u-1"
name = "Sam"

[[workspaces]]
slug = "acme"
name = "Acme"
projects = [{ name = "Core" }, { name = "Launch" }]

[[workspaces]]
slug = "side"
name = "Side Projects"
default_project = "Ideas"
"#;

    #[test]
    fn test_parse_sample_config() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.user.as_ref().unwrap().id, "u-1");
        assert_eq!(config.workspaces.len(), 2);
        assert_eq!(config.workspaces[0].default_project, "General");
        assert_eq!(config.workspaces[1].default_project, "Ideas");
        assert_eq!(config.workspaces[0].directory().entries().len(), 2);
        assert!(config.workspaces[1].projects.is_empty());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.user.is_none());
        assert!(config.workspaces.is_empty());
        assert!(config.select_workspace(None).is_none());
    }

    #[test]
    fn test_select_workspace() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.select_workspace(Some("side")).unwrap().slug, "side");
        // Unknown slug falls back to the first workspace
        assert_eq!(config.select_workspace(Some("nope")).unwrap().slug, "acme");
        assert_eq!(config.select_workspace(None).unwrap().slug, "acme");
    }

    /// Collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let buf = LogBuffer::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_unknown_slug_is_logged() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let logs = captured_logs(|| {
            assert_eq!(config.select_workspace_index(Some("nope")), Some(0));
        });
        assert!(logs.contains("unknown workspace"), "logs: {logs}");
        assert!(logs.contains("requested=nope"), "logs: {logs}");
        assert!(logs.contains("using=acme"), "logs: {logs}");

        let logs = captured_logs(|| {
            assert_eq!(config.select_workspace_index(Some("side")), Some(1));
            assert_eq!(config.select_workspace_index(None), Some(0));
        });
        assert_eq!(logs, "");
    }

    #[test]
    fn test_unknown_slug_without_workspaces() {
        let logs = captured_logs(|| {
            assert_eq!(Config::default().select_workspace_index(Some("nope")), None);
        });
        assert_eq!(logs, "");
    }
}
