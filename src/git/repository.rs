use crate::error::{PublishError, Result};
use crate::git::TagDetails;
use git2::{Repository as Git2Repo, Signature};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn signature(&self) -> Result<Signature<'_>> {
        self.repo
            .signature()
            .map_err(|e| PublishError::config(format!("No git signature configured: {}", e)))
    }

    /// Push refspecs to a remote with SSH credential callbacks.
    ///
    /// Tries SSH keys from ~/.ssh/ in order of preference, then the SSH agent,
    /// then default credentials.
    fn push_refspecs(&self, remote_name: &str, refspecs: &[&str]) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| PublishError::remote(format!("No remote named '{}' found", remote_name)))?;

        let mut push_options = git2::PushOptions::new();

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        // Catch per-reference errors during push
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                eprintln!(
                    "Warning: Could not update reference {}: {}",
                    refname, status
                );
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}",
                    refname
                )))
            } else {
                Ok(())
            }
        });

        push_options.remote_callbacks(callbacks);

        match remote.push(refspecs, Some(&mut push_options)) {
            Ok(_) => Ok(()),
            Err(e) => {
                if e.class() == git2::ErrorClass::Net {
                    Err(PublishError::remote(format!(
                        "Network error during push: {}",
                        e
                    )))
                } else if e.class() == git2::ErrorClass::Reference {
                    Err(PublishError::remote(format!(
                        "Reference error during push: {}",
                        e
                    )))
                } else {
                    Err(PublishError::remote(format!("Push failed: {}", e)))
                }
            }
        }
    }
}

impl super::Repository for Git2Repository {
    fn head_commit_id(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;
        let full = head.id().to_string();

        // Short hash, like `git log --format=%h`
        Ok(full.chars().take(7).collect())
    }

    fn stage_path(&self, path: &Path) -> Result<()> {
        let mut index = self.repo.index()?;

        index.add_path(path).map_err(|e| {
            PublishError::metadata(format!("Cannot stage '{}': {}", path.display(), e))
        })?;
        index.write()?;

        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let signature = self.signature()?;

        self.repo
            .tag(name, head.as_object(), &signature, message, false)
            .map_err(|e| PublishError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(PublishError::tag(format!(
                "Cannot look up tag '{}': {}",
                name, e
            ))),
        }
    }

    fn push_branch(&self, remote: &str) -> Result<()> {
        let head = self.repo.head()?;
        let branch = head
            .shorthand()
            .ok_or_else(|| PublishError::remote("HEAD is not on a named branch"))?;

        let refspec = format!("refs/heads/{}:refs/heads/{}", branch, branch);
        self.push_refspecs(remote, &[refspec.as_str()])
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let refspec = format!("refs/tags/{}:refs/tags/{}", tag_name, tag_name);
        self.push_refspecs(remote, &[refspec.as_str()])
    }

    fn list_tag_details(&self) -> Result<Vec<TagDetails>> {
        let names = self.repo.tag_names(None)?;
        let mut details = Vec::new();

        for name in names.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(r) => r,
                Err(_) => continue,
            };

            if let Ok(tag_obj) = reference.peel_to_tag() {
                // Annotated tag: tagger signature and annotation subject
                let message = tag_obj
                    .message()
                    .unwrap_or("")
                    .lines()
                    .next()
                    .unwrap_or("")
                    .to_string();

                let (tagger, when_unix) = match tag_obj.tagger() {
                    Some(sig) => (
                        sig.name().unwrap_or("unknown").to_string(),
                        sig.when().seconds(),
                    ),
                    None => ("unknown".to_string(), 0),
                };

                details.push(TagDetails {
                    name: name.to_string(),
                    message,
                    tagger,
                    when_unix,
                });
            } else if let Ok(commit) = reference.peel_to_commit() {
                // Lightweight tag: fall back to the target commit's author
                details.push(TagDetails {
                    name: name.to_string(),
                    message: String::new(),
                    tagger: commit.author().name().unwrap_or("unknown").to_string(),
                    when_unix: commit.time().seconds(),
                });
            }
        }

        Ok(details)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send.
// git2 is thread-safe for these operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
