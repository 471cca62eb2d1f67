// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::dag::{SchedulingProblem, TaskSpec};
use crate::errors::{Result, SchedagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = SchedagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_tasks(&raw)?;

        let tasks = raw
            .task
            .into_iter()
            .map(|t| TaskSpec::new(t.id, t.duration, t.after))
            .collect::<Result<Vec<_>>>()?;

        let problem =
            SchedulingProblem::new(tasks, raw.resources, raw.config.unknown_dependencies)?;

        Ok(ConfigFile::new_unchecked(problem))
    }
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(SchedagError::ConfigError(
            "task file must contain at least one [[task]] section".to_string(),
        ));
    }
    Ok(())
}
