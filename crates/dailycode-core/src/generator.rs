//! Daily generation pipeline: select, render, write.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::params::Params;
use crate::render::{render, Rendered};
use crate::selector::{rng_for_seed, seed_for_date, select, select_named};
use crate::template::{Template, TemplateRegistry};
use crate::writer::{OutputWriter, WrittenFile};

/// Everything decided for one invocation before touching the filesystem.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub date: NaiveDate,
    pub seed: u64,
    pub template: Template,
    pub params: Params,
    pub rendered: Rendered,
}

/// Result of a completed invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    #[serde(flatten)]
    pub plan: Plan,
    pub written: WrittenFile,
}

/// Wires the registry, configuration and clock together.
pub struct DailyGenerator<C: Clock> {
    registry: TemplateRegistry,
    config: GeneratorConfig,
    clock: C,
}

impl<C: Clock> DailyGenerator<C> {
    pub fn new(registry: TemplateRegistry, config: GeneratorConfig, clock: C) -> Self {
        Self {
            registry,
            config,
            clock,
        }
    }

    /// Select and render today's file without writing it.
    pub fn plan(&self) -> Result<Plan> {
        self.plan_with(None)
    }

    /// Like [`plan`](Self::plan), optionally forcing a template by name.
    ///
    /// A forced template still draws its parameters from the date seed.
    pub fn plan_with(&self, template: Option<&str>) -> Result<Plan> {
        let date = self.clock.today();
        let seed = seed_for_date(date);
        let mut rng = rng_for_seed(seed);
        debug!(%date, seed, "seeded generator");

        let selection = match template {
            Some(name) => select_named(&self.registry, name, &mut rng)?,
            None => select(&self.registry, &mut rng)?,
        };
        let rendered = render(
            &selection.template,
            &selection.params,
            date,
            &self.config.provenance,
        )?;

        Ok(Plan {
            date,
            seed,
            template: selection.template,
            params: selection.params,
            rendered,
        })
    }

    /// Generate today's file and record it in the index.
    pub fn run(&self) -> Result<Generation> {
        self.run_with(None)
    }

    pub fn run_with(&self, template: Option<&str>) -> Result<Generation> {
        let plan = self.plan_with(template)?;
        let writer = OutputWriter::from_config(&self.config);
        let written = writer.write(&plan.rendered, &plan.template, self.clock.now())?;
        Ok(Generation { plan, written })
    }
}
