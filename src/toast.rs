use std::rc::Rc;

use yew::Reducible;

/// Toasts kept on screen at once; older ones are dropped first.
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    pub items: Vec<(u64, Toast)>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                next.items.push((next.next_id, toast));
                next.next_id += 1;
                if next.items.len() > MAX_VISIBLE {
                    let overflow = next.items.len() - MAX_VISIBLE;
                    next.items.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => next.items.retain(|(item_id, _)| *item_id != id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_assigns_ids_and_dismisses() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(Toast::success("saved")));
        let queue = queue.reduce(ToastAction::Push(Toast::error("failed")));

        assert_eq!(queue.items.len(), 2);

        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.items, vec![(1, Toast::error("failed"))]);
    }

    #[test]
    fn queue_drops_the_oldest_beyond_capacity() {
        let mut queue = Rc::new(ToastQueue::default());
        for i in 0..7 {
            queue = queue.reduce(ToastAction::Push(Toast::success(format!("t{}", i))));
        }

        assert_eq!(queue.items.len(), MAX_VISIBLE);
        assert_eq!(queue.items[0].1.message, "t2");
    }
}
