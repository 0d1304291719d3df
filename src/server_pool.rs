/// A fixed pool of identical agents, tracked only by how many are currently busy.
///
/// The pool is the admission policy of the simulation: a call is admitted straight to service whenever an agent is
/// free, and otherwise must join the [`WaitingQueue`].
///
/// [`WaitingQueue`]: crate::WaitingQueue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerPool {
    num_agents: usize,
    busy: usize,
}

impl ServerPool {
    pub fn new(num_agents: usize) -> Self {
        Self { num_agents, busy: 0 }
    }

    /// Claim a free agent if one exists. A `true` result obliges the caller to schedule a departure for the admitted
    /// call; `false` means every agent is busy and the call should be queued.
    pub fn try_admit(&mut self) -> bool {
        if self.busy < self.num_agents {
            self.busy += 1;
            true
        } else {
            false
        }
    }

    /// Return an agent to the idle set after it finished a call and found nobody waiting.
    pub fn release(&mut self) {
        debug_assert!(self.busy > 0, "released an agent while none were busy");
        self.busy = self.busy.saturating_sub(1);
    }

    pub fn busy(&self) -> usize {
        self.busy
    }

    pub fn idle(&self) -> usize {
        self.num_agents - self.busy
    }

    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    pub fn all_busy(&self) -> bool {
        self.busy == self.num_agents
    }
}
