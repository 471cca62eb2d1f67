#![allow(dead_code)]

use schedag::config::{ConfigSection, RawConfigFile, TaskConfig};
use schedag::dag::{SchedulingProblem, TaskSpec};
use schedag::errors::Result;
use schedag::types::UnknownDependencyPolicy;

/// Builder for `SchedulingProblem` to simplify test setup.
pub struct ProblemBuilder {
    tasks: Vec<(String, u64, Vec<String>)>,
    resources: Vec<String>,
    policy: UnknownDependencyPolicy,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            resources: Vec::new(),
            policy: UnknownDependencyPolicy::default(),
        }
    }

    pub fn with_resources(mut self, names: &[&str]) -> Self {
        self.resources.extend(names.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_task(mut self, id: &str, duration: u64, after: &[&str]) -> Self {
        self.tasks.push((
            id.to_string(),
            duration,
            after.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    pub fn with_policy(mut self, policy: UnknownDependencyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build, returning the validation error if the input is malformed.
    pub fn try_build(self) -> Result<SchedulingProblem> {
        let tasks = self
            .tasks
            .into_iter()
            .map(|(id, duration, after)| TaskSpec::new(id, duration, after))
            .collect::<Result<Vec<_>>>()?;
        SchedulingProblem::new(tasks, self.resources, self.policy)
    }

    pub fn build(self) -> SchedulingProblem {
        self.try_build()
            .expect("Failed to build valid problem from builder")
    }
}

impl Default for ProblemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RawConfigFile`, for exercising the config validation path
/// without touching the filesystem.
pub struct RawConfigBuilder {
    config: RawConfigFile,
}

impl RawConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                resources: Vec::new(),
                config: ConfigSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn resource(mut self, name: &str) -> Self {
        self.config.resources.push(name.to_string());
        self
    }

    pub fn task(mut self, id: &str, duration: u64, after: &[&str]) -> Self {
        self.config.task.push(TaskConfig {
            id: id.to_string(),
            duration,
            after: after.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn unknown_dependencies(mut self, policy: UnknownDependencyPolicy) -> Self {
        self.config.config.unknown_dependencies = policy;
        self
    }

    pub fn build(self) -> RawConfigFile {
        self.config
    }
}

impl Default for RawConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
