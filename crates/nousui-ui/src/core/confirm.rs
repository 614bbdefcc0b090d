//! Single-slot confirmation service.
//!
//! # Design
//! - At most one question is pending; asking again answers the previous caller `false`.
//! - The caller awaits a oneshot receiver; a dropped service also reads as `false`.
//! - One observer (the overlay) is told whenever the pending question changes.

use futures::channel::oneshot;
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Question shown by the confirmation overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    /// Dialog heading.
    pub title: String,
    /// Question body.
    pub message: String,
}

struct Pending {
    request: ConfirmRequest,
    reply: oneshot::Sender<bool>,
}

type Observer = Rc<dyn Fn(Option<ConfirmRequest>)>;

#[derive(Default)]
struct Slot {
    pending: Option<Pending>,
    observer: Option<Observer>,
}

/// Shared handle to the confirmation slot; clones address the same slot.
#[derive(Clone, Default)]
pub struct ConfirmService {
    slot: Rc<RefCell<Slot>>,
}

impl fmt::Debug for ConfirmService {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConfirmService")
            .field("pending", &self.pending())
            .finish()
    }
}

impl PartialEq for ConfirmService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl ConfirmService {
    /// Fresh, empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask a question; the returned future yields the answer.
    ///
    /// The question is registered immediately, before the future is polled.
    pub fn confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> impl Future<Output = bool> + 'static {
        let (reply, answer) = oneshot::channel();
        let request = ConfirmRequest {
            title: title.into(),
            message: message.into(),
        };
        let previous = self.slot.borrow_mut().pending.replace(Pending {
            request: request.clone(),
            reply,
        });
        if let Some(previous) = previous {
            let _ = previous.reply.send(false);
        }
        self.notify(Some(request));
        async move { answer.await.unwrap_or(false) }
    }

    /// Answer the pending question. Returns `false` when nothing was pending.
    pub fn resolve(&self, accepted: bool) -> bool {
        let pending = self.slot.borrow_mut().pending.take();
        let Some(pending) = pending else {
            return false;
        };
        let _ = pending.reply.send(accepted);
        self.notify(None);
        true
    }

    /// Question currently awaiting an answer.
    #[must_use]
    pub fn pending(&self) -> Option<ConfirmRequest> {
        self.slot
            .borrow()
            .pending
            .as_ref()
            .map(|pending| pending.request.clone())
    }

    /// Install the observer told about every change of the pending question.
    pub fn observe(&self, observer: impl Fn(Option<ConfirmRequest>) + 'static) {
        self.slot.borrow_mut().observer = Some(Rc::new(observer));
    }

    /// Remove the observer.
    pub fn unobserve(&self) {
        self.slot.borrow_mut().observer = None;
    }

    fn notify(&self, request: Option<ConfirmRequest>) {
        let observer = self.slot.borrow().observer.clone();
        if let Some(observer) = observer {
            observer(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn yes_and_no_reach_the_caller() {
        let service = ConfirmService::new();
        let answer = service.confirm("Delete component", "Delete \"Header\"?");
        assert_eq!(
            service.pending().map(|request| request.title),
            Some("Delete component".to_string())
        );
        assert!(service.resolve(true));
        assert!(block_on(answer));
        assert!(service.pending().is_none());

        let answer = service.confirm("Reset database", "Clear?");
        assert!(service.resolve(false));
        assert!(!block_on(answer));
    }

    #[test]
    fn re_entry_answers_the_previous_caller_false() {
        let service = ConfirmService::new();
        let first = service.confirm("First", "one");
        let second = service.confirm("Second", "two");
        assert!(!block_on(first));
        assert_eq!(
            service.pending().map(|request| request.message),
            Some("two".to_string())
        );
        service.resolve(true);
        assert!(block_on(second));
    }

    #[test]
    fn resolve_without_question_is_ignored() {
        assert!(!ConfirmService::new().resolve(true));
    }

    #[test]
    fn observer_sees_open_and_close() {
        let service = ConfirmService::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            service.observe(move |request| seen.borrow_mut().push(request.is_some()));
        }
        let answer = service.confirm("t", "m");
        service.resolve(false);
        assert!(!block_on(answer));
        assert_eq!(*seen.borrow(), vec![true, false]);
        service.unobserve();
    }
}
