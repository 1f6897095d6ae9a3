use crate::status::Outcome;
use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

/// Maximum number of background jobs tracked at once.
pub const MAXJOBS: usize = 20;

/// A background job that has finished since the last check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub pid: Pid,
    pub outcome: Outcome,
}

/// Fixed set of slots holding the pids of running background jobs.
#[derive(Debug, Default)]
pub struct JobList {
    slots: [Option<Pid>; MAXJOBS],
}

impl JobList {
    /// Creates a new, empty job list.
    pub fn new() -> Self {
        JobList::default()
    }

    /// Stores `pid` in the first free slot. Returns false when the pid is
    /// invalid or every slot is taken; the job is then not tracked.
    pub fn add_job(&mut self, pid: Pid) -> bool {
        if pid.as_raw() < 1 {
            return false;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(pid);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pids(&self) -> impl Iterator<Item = Pid> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Polls every tracked job without blocking, clears the slots of the
    /// ones that have terminated and returns them in slot order.
    pub fn reap_finished(&mut self) -> Vec<Completion> {
        let mut done = Vec::new();
        for slot in self.slots.iter_mut() {
            let Some(pid) = *slot else { continue };
            match waitpid(pid, Some(WaitPidFlag::WNOHANG)) {
                Ok(WaitStatus::StillAlive) => {}
                Ok(status) => {
                    if let Some((pid, outcome)) = Outcome::from_wait_status(status) {
                        log::debug!("reaped background pid {}: {}", pid, outcome);
                        done.push(Completion { pid, outcome });
                        *slot = None;
                    }
                }
                Err(Errno::ECHILD) => {
                    log::warn!("background pid {} is no longer our child", pid);
                    *slot = None;
                }
                Err(e) => log::warn!("waitpid({}) failed: {}", pid, e),
            }
        }
        done
    }
}

/// Reaps finished background jobs and prints one line for each.
pub fn report_finished_jobs(job_list: &mut JobList) {
    for job in job_list.reap_finished() {
        println!("background pid {} is done: {}", job.pid, job.outcome);
    }
}
