use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

pub struct PlanEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> PlanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Building schedule plan...");
        let plan = self.pipeline.plan().await?;
        tracing::info!("Planned {} leaf path(s)", plan.len());
        self.monitor.log_stats("Plan");

        tracing::info!("Executing plan...");
        let summary = self.pipeline.execute(plan).await?;
        self.monitor.log_stats("Execute");
        self.monitor.log_final_stats();

        Ok(summary)
    }
}
