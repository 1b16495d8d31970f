use crate::error::Result;
use crate::git::{Repository, TagDetails};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// What a mock repository has been asked to do, in call order
#[derive(Debug, Default)]
struct MockState {
    staged: Vec<PathBuf>,
    commits: Vec<String>,
    annotated_tags: Vec<(String, String)>,
    pushed_branches: Vec<String>,
    pushed_tags: Vec<(String, String)>,
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    head_id: String,
    tag_details: Vec<TagDetails>,
    state: Mutex<MockState>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            head_id: "abc1234".to_string(),
            tag_details: Vec::new(),
            state: Mutex::new(MockState::default()),
        }
    }

    /// Preload a tag for `list_tag_details` and `tag_exists`
    pub fn add_tag(&mut self, details: TagDetails) {
        self.tag_details.push(details);
    }

    /// Set the short hash reported for HEAD
    pub fn set_head_id(&mut self, id: impl Into<String>) {
        self.head_id = id.into();
    }

    /// Paths staged so far
    pub fn staged_paths(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().staged.clone()
    }

    /// Commit messages recorded so far
    pub fn commits(&self) -> Vec<String> {
        self.state.lock().unwrap().commits.clone()
    }

    /// (name, message) pairs of annotated tags created so far
    pub fn annotated_tags(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().annotated_tags.clone()
    }

    /// Remotes the current branch was pushed to
    pub fn pushed_branches(&self) -> Vec<String> {
        self.state.lock().unwrap().pushed_branches.clone()
    }

    /// (remote, tag) pairs pushed so far
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().pushed_tags.clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_commit_id(&self) -> Result<String> {
        Ok(self.head_id.clone())
    }

    fn stage_path(&self, path: &Path) -> Result<()> {
        self.state.lock().unwrap().staged.push(path.to_path_buf());
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.state.lock().unwrap().commits.push(message.to_string());
        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .annotated_tags
            .push((name.to_string(), message.to_string()));
        Ok(())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let preloaded = self.tag_details.iter().any(|d| d.name == name);
        let created = self
            .state
            .lock()
            .unwrap()
            .annotated_tags
            .iter()
            .any(|(n, _)| n == name);
        Ok(preloaded || created)
    }

    fn push_branch(&self, remote: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .pushed_branches
            .push(remote.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .pushed_tags
            .push((remote.to_string(), tag_name.to_string()));
        Ok(())
    }

    fn list_tag_details(&self) -> Result<Vec<TagDetails>> {
        Ok(self.tag_details.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, message: &str, when_unix: i64) -> TagDetails {
        TagDetails {
            name: name.to_string(),
            message: message.to_string(),
            tagger: "Test Tagger".to_string(),
            when_unix,
        }
    }

    #[test]
    fn test_mock_repository_records_operations() {
        let repo = MockRepository::new();

        repo.stage_path(Path::new("Properties/AssemblyInfo.cs"))
            .unwrap();
        repo.commit("Change version to: v1.0.0.1 Mode: revision")
            .unwrap();
        repo.create_annotated_tag("v1.0.0.1", "revision").unwrap();
        repo.push_branch("origin").unwrap();
        repo.push_tag("origin", "v1.0.0.1").unwrap();

        assert_eq!(repo.staged_paths().len(), 1);
        assert_eq!(repo.commits().len(), 1);
        assert_eq!(
            repo.annotated_tags(),
            vec![("v1.0.0.1".to_string(), "revision".to_string())]
        );
        assert_eq!(repo.pushed_branches(), vec!["origin".to_string()]);
        assert_eq!(
            repo.pushed_tags(),
            vec![("origin".to_string(), "v1.0.0.1".to_string())]
        );
    }

    #[test]
    fn test_mock_repository_tag_exists() {
        let mut repo = MockRepository::new();
        repo.add_tag(details("v1.0.0.0", "major", 100));

        assert!(repo.tag_exists("v1.0.0.0").unwrap());
        assert!(!repo.tag_exists("v2.0.0.0").unwrap());

        repo.create_annotated_tag("v2.0.0.0", "major").unwrap();
        assert!(repo.tag_exists("v2.0.0.0").unwrap());
    }

    #[test]
    fn test_mock_repository_list_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag(details("v1.0.0.0", "production", 100));
        repo.add_tag(details("v1.0.1.0", "build", 200));

        let tags = repo.list_tag_details().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "v1.0.0.0");
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tag_details().unwrap().is_empty());
        assert_eq!(repo.head_commit_id().unwrap(), "abc1234");
    }
}
