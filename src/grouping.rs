//! Conversation grouping: split a chronological message list into maximal
//! runs of consecutive same-side messages.

use crate::message::{Message, Side};

/// A maximal run of consecutive messages from the same side. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageGroup<'a> {
    side: Side,
    messages: Vec<&'a Message>,
}

impl<'a> MessageGroup<'a> {
    fn start(msg: &'a Message) -> Self {
        Self {
            side: msg.side(),
            messages: vec![msg],
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn messages(&self) -> &[&'a Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The message whose timestamp labels the group.
    pub fn last(&self) -> &'a Message {
        // Groups are created with one message and only ever grow.
        self.messages[self.messages.len() - 1]
    }
}

/// Group consecutive messages by side in a single pass.
pub fn group_messages(messages: &[Message]) -> Vec<MessageGroup<'_>> {
    let mut groups: Vec<MessageGroup<'_>> = Vec::new();
    let mut current: Option<MessageGroup<'_>> = None;

    for (i, msg) in messages.iter().enumerate() {
        if i == 0 || messages[i - 1].side() != msg.side() {
            if let Some(done) = current.take() {
                groups.push(done);
            }
            current = Some(MessageGroup::start(msg));
        } else if let Some(open) = current.as_mut() {
            open.messages.push(msg);
        }
    }

    if let Some(done) = current {
        groups.push(done);
    }

    groups
}

/// Where a bubble sits inside its group; drives corner styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubblePosition {
    Only,
    First,
    Middle,
    Last,
}

impl BubblePosition {
    pub fn of(index: usize, len: usize) -> Self {
        match (index, len) {
            (_, 0 | 1) => BubblePosition::Only,
            (0, _) => BubblePosition::First,
            (i, n) if i + 1 >= n => BubblePosition::Last,
            _ => BubblePosition::Middle,
        }
    }
}
