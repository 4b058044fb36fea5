#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

/// Samples process resource usage between run phases. Disabled instances
/// never touch sysinfo.
#[cfg(feature = "cli")]
pub struct RunMonitor {
    system: Option<Mutex<System>>,
    pid: Pid,
    started: Instant,
}

#[cfg(feature = "cli")]
impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let system = enabled.then(|| {
            let mut system = System::new_with_specifics(RefreshKind::everything());
            system.refresh_all();
            Mutex::new(system)
        });

        Self {
            system,
            pid: sysinfo::get_current_pid().unwrap_or(Pid::from_u32(0)),
            started: Instant::now(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.system.is_some()
    }

    pub fn log_stats(&self, phase: &str) {
        let Some(system) = &self.system else {
            return;
        };
        let Ok(mut system) = system.lock() else {
            return;
        };
        system.refresh_all();

        if let Some(process) = system.process(self.pid) {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Time: {:?}",
                phase,
                process.cpu_usage(),
                process.memory() / 1024 / 1024,
                self.started.elapsed()
            );
        }
    }

    pub fn log_final_stats(&self) {
        if self.is_enabled() {
            tracing::info!("📊 Final Stats - Total Time: {:?}", self.started.elapsed());
        }
    }
}

// Stub so the library builds without the cli feature.
#[cfg(not(feature = "cli"))]
pub struct RunMonitor;

#[cfg(not(feature = "cli"))]
impl RunMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}
}
