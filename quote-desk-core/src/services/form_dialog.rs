//! 表单对话框服务
//!
//! 组合一个对话框控制器、一个提交状态机、一份草稿和一个自动关闭定时器。

use std::sync::Arc;

use crate::dialog::{ClickTarget, DialogController, DialogId, DialogView};
use crate::error::{CoreError, CoreResult};
use crate::services::{DialogContext, DialogEvent};
use crate::submission::{DismissTimer, SubmissionMachine};
use crate::types::{FormDraft, FormField, FormKind, Resolution, SubmissionState, SubmissionTicket};

/// Message shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Success(&'static str),
    Error(&'static str),
}

impl Feedback {
    pub fn text(self) -> &'static str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// One contact/quote dialog.
pub struct FormDialog {
    kind: FormKind,
    ctx: Arc<DialogContext>,
    controller: DialogController,
    machine: SubmissionMachine,
    draft: FormDraft,
    timer: DismissTimer,
    category: Option<String>,
    focus: FormField,
}

impl FormDialog {
    pub fn new(kind: FormKind, ctx: Arc<DialogContext>) -> Self {
        let controller = DialogController::new(ctx.scroll_lock.clone(), ctx.key_listeners.clone());
        Self {
            kind,
            ctx,
            controller,
            machine: SubmissionMachine::new(),
            draft: FormDraft::new(),
            timer: DismissTimer::new(),
            category: None,
            focus: FormField::Name,
        }
    }

    // ===== 查询 =====

    pub fn id(&self) -> DialogId {
        self.controller.id()
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn state(&self) -> SubmissionState {
        self.machine.state()
    }

    pub fn inputs_enabled(&self) -> bool {
        self.machine.inputs_enabled()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn title(&self) -> String {
        self.kind.title(self.category())
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Whether the post-success close is still pending.
    pub fn dismiss_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// `None` while closed.
    pub fn view(&self) -> Option<DialogView> {
        self.controller.view()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        match self.machine.state() {
            SubmissionState::Success => Some(Feedback::Success(self.kind.success_message())),
            SubmissionState::Error => Some(Feedback::Error(self.kind.error_message())),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    pub fn missing_required(&self) -> Vec<FormField> {
        self.draft.missing_required()
    }

    // ===== 生命周期 =====

    /// Open with a clean form. Quote requests take their category here.
    pub fn open(&mut self, category: Option<String>) {
        self.timer.cancel();
        self.machine.reset();
        self.draft.clear();
        self.focus = FormField::Name;
        self.category = if self.kind.carries_category() {
            category
        } else {
            None
        };
        self.controller.open(Some(self.title()));
        log::debug!("{} opened: {}", self.id(), self.title());
    }

    /// Close and abandon any in-flight request. Idempotent.
    pub fn close(&mut self) -> bool {
        self.timer.cancel();
        if let Some(ticket) = self.machine.in_flight() {
            log::debug!("{} closed with request {ticket} in flight", self.id());
        }
        self.machine.reset();
        self.controller.close()
    }

    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Overlay => self.close(),
            ClickTarget::Content => self.controller.handle_click(target),
        }
    }

    pub fn handle_escape(&mut self) -> bool {
        if self.controller.handle_escape() {
            self.timer.cancel();
            self.machine.reset();
            true
        } else {
            false
        }
    }

    // ===== 编辑 =====

    fn ensure_editable(&self) -> CoreResult<()> {
        if !self.controller.is_open() {
            return Err(CoreError::DialogClosed);
        }
        if !self.machine.inputs_enabled() {
            return Err(CoreError::InputLocked);
        }
        Ok(())
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Replace the value of `field`.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) -> CoreResult<()> {
        self.ensure_editable()?;
        self.draft.set(field, value);
        Ok(())
    }

    /// Type one character into the focused field.
    pub fn input_char(&mut self, c: char) -> CoreResult<()> {
        self.ensure_editable()?;
        // 只有 message 是多行输入
        if c == '\n' && self.focus != FormField::Message {
            return Ok(());
        }
        self.draft.push_char(self.focus, c);
        Ok(())
    }

    pub fn backspace(&mut self) -> CoreResult<()> {
        self.ensure_editable()?;
        self.draft.pop_char(self.focus);
        Ok(())
    }

    // ===== 提交 =====

    /// Validate, move to `submitting` and post the field set once.
    ///
    /// The outcome arrives later as [`DialogEvent::Delivered`].
    pub fn submit(&mut self) -> CoreResult<SubmissionTicket> {
        if !self.controller.is_open() {
            return Err(CoreError::DialogClosed);
        }
        if !self.machine.inputs_enabled() {
            return Err(CoreError::InvalidTransition {
                from: self.machine.state(),
                action: "submit",
            });
        }
        if let Some(field) = self.draft.missing_required().first() {
            self.focus = *field;
            return Err(CoreError::MissingField(*field));
        }
        if !self.draft.email_is_plausible() {
            self.focus = FormField::Email;
            return Err(CoreError::InvalidEmail(
                self.draft.get(FormField::Email).trim().to_string(),
            ));
        }

        let fields = self
            .draft
            .to_field_set(&self.ctx.sender, self.kind, self.category());
        let ticket = self.machine.begin()?;

        let dialog = self.id();
        let relay = Arc::clone(&self.ctx.relay);
        let events = self.ctx.events();
        log::info!(
            "{dialog} submitting {ticket} via {}: {}",
            relay.id(),
            fields.metadata.subject
        );
        self.ctx.runtime.spawn(async move {
            let outcome = relay.submit(&fields).await;
            // 接收端已关闭说明界面已退出
            let _ = events.send(DialogEvent::Delivered {
                dialog,
                ticket,
                outcome,
            });
        });

        Ok(ticket)
    }

    /// Apply a background event addressed to this dialog.
    ///
    /// Returns `false` for events meant for another dialog or for a ticket
    /// that is no longer current.
    pub fn handle_event(&mut self, event: DialogEvent) -> bool {
        if event.dialog() != self.id() {
            return false;
        }

        match event {
            DialogEvent::Delivered {
                ticket, outcome, ..
            } => match self.machine.resolve(ticket, outcome.is_ok()) {
                Resolution::Succeeded => {
                    log::info!("{} request {ticket} delivered", self.id());
                    self.draft.clear();
                    self.schedule_dismiss(ticket);
                    true
                }
                Resolution::Failed => {
                    if let Err(e) = outcome {
                        if e.is_expected() {
                            log::warn!("{} request {ticket} failed: {e}", self.id());
                        } else {
                            log::error!("{} request {ticket} failed: {e}", self.id());
                        }
                    }
                    true
                }
                Resolution::Stale => {
                    log::debug!("{} dropping stale response for {ticket}", self.id());
                    false
                }
            },
            DialogEvent::AutoDismiss { ticket, .. } => {
                if self.machine.dismiss(ticket) {
                    self.controller.close();
                    log::debug!("{} auto-dismissed after {ticket}", self.id());
                    true
                } else {
                    log::debug!("{} ignoring stale dismiss for {ticket}", self.id());
                    false
                }
            }
        }
    }

    fn schedule_dismiss(&mut self, ticket: SubmissionTicket) {
        let dialog = self.id();
        let events = self.ctx.events();
        self.timer
            .schedule(&self.ctx.runtime, self.ctx.dismiss_after, move || {
                let _ = events.send(DialogEvent::AutoDismiss { dialog, ticket });
            });
    }
}

impl std::fmt::Debug for FormDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormDialog")
            .field("id", &self.id())
            .field("kind", &self.kind)
            .field("open", &self.is_open())
            .field("state", &self.state())
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_utils::{MockRelay, create_test_context, settle};

    fn fill(dialog: &mut FormDialog) {
        dialog.edit(FormField::Name, "Jane").unwrap();
        dialog.edit(FormField::Email, "jane@x.com").unwrap();
        dialog.edit(FormField::Message, "Need 5 laptops").unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn success_then_auto_dismiss_after_3000ms() {
        let relay = MockRelay::succeeding();
        let (ctx, mut rx) = create_test_context(relay.clone());
        let mut dialog = FormDialog::new(FormKind::QuoteRequest, ctx.clone());

        dialog.open(Some("Computers".into()));
        fill(&mut dialog);
        let ticket = dialog.submit().unwrap();
        assert_eq!(dialog.state(), SubmissionState::Submitting);
        assert!(!dialog.inputs_enabled());

        let event = rx.recv().await.unwrap();
        assert_eq!(event.ticket(), ticket);
        assert!(dialog.handle_event(event));
        assert_eq!(dialog.state(), SubmissionState::Success);
        assert_eq!(
            dialog.feedback(),
            Some(Feedback::Success("Thank you! Your quote request has been sent."))
        );
        assert!(dialog.draft().is_empty());
        assert!(matches!(
            dialog.edit(FormField::Name, "x"),
            Err(CoreError::InputLocked)
        ));

        tokio::time::advance(Duration::from_millis(2999)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        assert!(dialog.is_open());

        tokio::time::advance(Duration::from_millis(1)).await;
        let event = rx.recv().await.unwrap();
        assert!(dialog.handle_event(event));
        assert_eq!(dialog.state(), SubmissionState::Idle);
        assert!(!dialog.is_open());
        assert!(!ctx.scroll_lock.is_locked());
        assert_eq!(relay.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_keeps_dialog_open_and_editable() {
        let relay = MockRelay::failing(500);
        let (ctx, mut rx) = create_test_context(relay.clone());
        let mut dialog = FormDialog::new(FormKind::ContactUs, ctx);

        dialog.open(None);
        fill(&mut dialog);
        dialog.submit().unwrap();
        let event = rx.recv().await.unwrap();
        assert!(dialog.handle_event(event));

        assert_eq!(dialog.state(), SubmissionState::Error);
        assert_eq!(
            dialog.feedback().map(Feedback::text),
            Some("Oops! Something went wrong. Please try again later.")
        );
        assert!(dialog.is_open());
        assert!(!dialog.dismiss_pending());
        assert_eq!(dialog.draft().get(FormField::Name), "Jane");
        dialog.edit(FormField::Message, "retry").unwrap();

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert!(dialog.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn error_then_retry_succeeds() {
        let relay = MockRelay::scripted(&[500], 200);
        let (ctx, mut rx) = create_test_context(relay.clone());
        let mut dialog = FormDialog::new(FormKind::FreeQuote, ctx);

        dialog.open(None);
        fill(&mut dialog);
        dialog.submit().unwrap();
        dialog.handle_event(rx.recv().await.unwrap());
        assert_eq!(dialog.state(), SubmissionState::Error);

        dialog.submit().unwrap();
        dialog.handle_event(rx.recv().await.unwrap());
        assert_eq!(dialog.state(), SubmissionState::Success);
        assert_eq!(relay.request_count(), 2);
    }

    #[tokio::test]
    async fn missing_fields_block_submission() {
        let relay = MockRelay::succeeding();
        let (ctx, _rx) = create_test_context(relay.clone());
        let mut dialog = FormDialog::new(FormKind::ContactUs, ctx);

        dialog.open(None);
        dialog.edit(FormField::Name, "Jane").unwrap();
        assert_eq!(
            dialog.missing_required(),
            vec![FormField::Email, FormField::Message]
        );
        assert!(matches!(
            dialog.submit(),
            Err(CoreError::MissingField(FormField::Email))
        ));
        assert_eq!(dialog.focus(), FormField::Email);
        assert_eq!(dialog.state(), SubmissionState::Idle);

        dialog.edit(FormField::Email, "jane").unwrap();
        dialog.edit(FormField::Message, "hi").unwrap();
        assert!(matches!(dialog.submit(), Err(CoreError::InvalidEmail(_))));

        settle().await;
        assert_eq!(relay.request_count(), 0);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let relay = MockRelay::succeeding();
        let (ctx, _rx) = create_test_context(relay.clone());
        let mut dialog = FormDialog::new(FormKind::ContactUs, ctx);

        dialog.open(None);
        fill(&mut dialog);
        dialog.submit().unwrap();
        assert!(matches!(
            dialog.submit(),
            Err(CoreError::InvalidTransition {
                from: SubmissionState::Submitting,
                ..
            })
        ));

        settle().await;
        assert_eq!(relay.request_count(), 1);
    }

    #[tokio::test]
    async fn response_after_close_is_stale() {
        let relay = MockRelay::succeeding();
        let (ctx, mut rx) = create_test_context(relay.clone());
        let mut dialog = FormDialog::new(FormKind::ContactUs, ctx);

        dialog.open(None);
        fill(&mut dialog);
        dialog.submit().unwrap();
        assert!(dialog.close());

        let event = rx.recv().await.unwrap();
        assert!(!dialog.handle_event(event));
        assert_eq!(dialog.state(), SubmissionState::Idle);
        assert!(!dialog.is_open());
        assert!(!dialog.dismiss_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn closing_during_success_cancels_timer() {
        let relay = MockRelay::succeeding();
        let (ctx, mut rx) = create_test_context(relay);
        let mut dialog = FormDialog::new(FormKind::ContactUs, ctx);

        dialog.open(None);
        fill(&mut dialog);
        dialog.submit().unwrap();
        dialog.handle_event(rx.recv().await.unwrap());
        assert!(dialog.dismiss_pending());

        dialog.close();
        assert!(!dialog.dismiss_pending());

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert!(rx.try_recv().is_err());

        // 重新打开后的对话框不受旧定时器影响
        dialog.open(None);
        assert!(dialog.is_open());
        assert_eq!(dialog.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn events_for_other_dialogs_are_ignored() {
        let relay = MockRelay::succeeding();
        let (ctx, mut rx) = create_test_context(relay);
        let mut a = FormDialog::new(FormKind::ContactUs, ctx.clone());
        let mut b = FormDialog::new(FormKind::FreeQuote, ctx);

        a.open(None);
        fill(&mut a);
        a.submit().unwrap();
        let event = rx.recv().await.unwrap();
        assert!(!b.handle_event(event));
        assert_eq!(a.state(), SubmissionState::Submitting);
    }

    #[tokio::test]
    async fn editing_closed_dialog_fails() {
        let (ctx, _rx) = create_test_context(MockRelay::succeeding());
        let mut dialog = FormDialog::new(FormKind::ContactUs, ctx);

        assert!(matches!(
            dialog.edit(FormField::Name, "x"),
            Err(CoreError::DialogClosed)
        ));
        assert!(matches!(dialog.submit(), Err(CoreError::DialogClosed)));
    }

    #[tokio::test]
    async fn typing_follows_focus() {
        let (ctx, _rx) = create_test_context(MockRelay::succeeding());
        let mut dialog = FormDialog::new(FormKind::ContactUs, ctx);
        dialog.open(None);

        for c in "Jo".chars() {
            dialog.input_char(c).unwrap();
        }
        dialog.input_char('\n').unwrap();
        dialog.focus_next();
        dialog.input_char('j').unwrap();
        dialog.backspace().unwrap();
        dialog.focus_prev();
        dialog.backspace().unwrap();

        assert_eq!(dialog.draft().get(FormField::Name), "J");
        assert_eq!(dialog.draft().get(FormField::Email), "");
    }

    #[tokio::test]
    async fn drop_releases_scroll_lock() {
        let (ctx, _rx) = create_test_context(MockRelay::succeeding());
        let mut dialog = FormDialog::new(FormKind::ContactUs, ctx.clone());
        dialog.open(None);
        assert!(ctx.scroll_lock.is_locked());

        drop(dialog);
        assert!(!ctx.scroll_lock.is_locked());
        assert!(ctx.key_listeners.is_empty());
    }
}
