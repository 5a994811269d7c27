//! 提交状态机
//!
//! ```text
//! idle --begin--> submitting --resolve(ok)--> success --dismiss--> idle
//!                            \--resolve(err)--> error --begin--> submitting
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{Resolution, SubmissionState, SubmissionTicket};

/// Submit lifecycle of one form.
#[derive(Debug, Default)]
pub struct SubmissionMachine {
    state: SubmissionState,
    issued: u64,
    /// 正在等待应答的请求
    in_flight: Option<SubmissionTicket>,
    /// 成功后等待自动关闭的请求
    settled: Option<SubmissionTicket>,
}

impl SubmissionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn in_flight(&self) -> Option<SubmissionTicket> {
        self.in_flight
    }

    /// Inputs and the submit control are usable only in `idle` and `error`.
    pub fn inputs_enabled(&self) -> bool {
        matches!(self.state, SubmissionState::Idle | SubmissionState::Error)
    }

    /// `idle | error -> submitting`, issuing a fresh ticket.
    pub fn begin(&mut self) -> CoreResult<SubmissionTicket> {
        match self.state {
            SubmissionState::Idle | SubmissionState::Error => {
                self.issued += 1;
                let ticket = SubmissionTicket(self.issued);
                self.state = SubmissionState::Submitting;
                self.in_flight = Some(ticket);
                self.settled = None;
                Ok(ticket)
            }
            from @ (SubmissionState::Submitting | SubmissionState::Success) => {
                Err(CoreError::InvalidTransition {
                    from,
                    action: "submit",
                })
            }
        }
    }

    /// Apply the relay outcome for `ticket`.
    pub fn resolve(&mut self, ticket: SubmissionTicket, succeeded: bool) -> Resolution {
        if self.state != SubmissionState::Submitting || self.in_flight != Some(ticket) {
            return Resolution::Stale;
        }

        self.in_flight = None;
        if succeeded {
            self.state = SubmissionState::Success;
            self.settled = Some(ticket);
            Resolution::Succeeded
        } else {
            self.state = SubmissionState::Error;
            Resolution::Failed
        }
    }

    /// `success -> idle` for the request that succeeded.
    pub fn dismiss(&mut self, ticket: SubmissionTicket) -> bool {
        if self.state == SubmissionState::Success && self.settled == Some(ticket) {
            self.state = SubmissionState::Idle;
            self.settled = None;
            true
        } else {
            false
        }
    }

    /// Back to `idle`; any outstanding ticket becomes stale.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
        self.in_flight = None;
        self.settled = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_happy_path() {
        let mut machine = SubmissionMachine::new();
        let ticket = machine.begin().unwrap();
        assert_eq!(machine.state(), SubmissionState::Submitting);
        assert!(!machine.inputs_enabled());

        assert_eq!(machine.resolve(ticket, true), Resolution::Succeeded);
        assert_eq!(machine.state(), SubmissionState::Success);
        assert!(!machine.inputs_enabled());

        assert!(machine.dismiss(ticket));
        assert_eq!(machine.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_error_allows_retry() {
        let mut machine = SubmissionMachine::new();
        let first = machine.begin().unwrap();
        assert_eq!(machine.resolve(first, false), Resolution::Failed);
        assert!(machine.inputs_enabled());

        let second = machine.begin().unwrap();
        assert_ne!(first, second);
        assert_eq!(machine.resolve(first, true), Resolution::Stale);
        assert_eq!(machine.resolve(second, true), Resolution::Succeeded);
    }

    #[test]
    fn test_begin_rejected_while_busy() {
        let mut machine = SubmissionMachine::new();
        let ticket = machine.begin().unwrap();
        assert!(matches!(
            machine.begin(),
            Err(CoreError::InvalidTransition {
                from: SubmissionState::Submitting,
                ..
            })
        ));

        machine.resolve(ticket, true);
        assert!(matches!(
            machine.begin(),
            Err(CoreError::InvalidTransition {
                from: SubmissionState::Success,
                ..
            })
        ));
    }

    #[test]
    fn test_reset_makes_ticket_stale() {
        let mut machine = SubmissionMachine::new();
        let ticket = machine.begin().unwrap();
        machine.reset();

        assert_eq!(machine.resolve(ticket, true), Resolution::Stale);
        assert_eq!(machine.state(), SubmissionState::Idle);
        assert!(!machine.dismiss(ticket));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Begin,
        ResolveCurrent(bool),
        ResolveOld(bool),
        DismissCurrent,
        Reset,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Begin),
            any::<bool>().prop_map(Op::ResolveCurrent),
            any::<bool>().prop_map(Op::ResolveOld),
            Just(Op::DismissCurrent),
            Just(Op::Reset),
        ]
    }

    /// State after `op`, assuming `ResolveCurrent`/`DismissCurrent` carry the latest ticket.
    fn expected(op: &Op, from: SubmissionState) -> SubmissionState {
        use SubmissionState::{Error, Idle, Submitting, Success};
        match (op, from) {
            (Op::Begin, Idle | Error) => Submitting,
            (Op::ResolveCurrent(true), Submitting) => Success,
            (Op::ResolveCurrent(false), Submitting) => Error,
            (Op::DismissCurrent, Success) | (Op::Reset, _) => Idle,
            _ => from,
        }
    }

    proptest! {
        #[test]
        fn prop_transitions_follow_the_table(ops in proptest::collection::vec(op(), 1..64)) {
            let mut machine = SubmissionMachine::new();
            let mut last: Option<SubmissionTicket> = None;

            for op in ops {
                let before = machine.state();
                match op {
                    Op::Begin => {
                        if let Ok(ticket) = machine.begin() {
                            last = Some(ticket);
                        }
                    }
                    Op::ResolveCurrent(ok) => {
                        if let Some(ticket) = last {
                            machine.resolve(ticket, ok);
                        }
                    }
                    Op::ResolveOld(ok) => {
                        machine.resolve(SubmissionTicket(0), ok);
                    }
                    Op::DismissCurrent => {
                        if let Some(ticket) = last {
                            machine.dismiss(ticket);
                        }
                    }
                    Op::Reset => machine.reset(),
                }
                let after = machine.state();

                prop_assert_eq!(after, expected(&op, before), "{} via {:?}", before, op);
                prop_assert_eq!(
                    machine.inputs_enabled(),
                    matches!(after, SubmissionState::Idle | SubmissionState::Error)
                );
                if after != SubmissionState::Submitting {
                    prop_assert!(machine.in_flight().is_none());
                }
            }
        }
    }
}
