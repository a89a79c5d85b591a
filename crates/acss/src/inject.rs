//! Publishing generated CSS.
//!
//! A [`StylesheetPublisher`] is the consumer side of the registry: it
//! subscribes to change notification, marks itself dirty, and hands the
//! current CSS text to its publish callback on [`flush`]. Any number of
//! registrations between two flushes produce at most one publish.
//!
//! [`flush`]: StylesheetPublisher::flush

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::registry::ListenerId;
use crate::session::Session;

pub struct StylesheetPublisher<F>
where
    F: FnMut(&str),
{
    publish: F,
    dirty: Arc<AtomicBool>,
    listener: ListenerId,
    published: Option<String>,
}

impl<F> StylesheetPublisher<F>
where
    F: FnMut(&str),
{
    /// Subscribes to `session`. The publisher starts dirty so the first
    /// flush always publishes.
    pub fn attach(session: &mut Session, publish: F) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&dirty);
        let listener = session.on_change(move || flag.store(true, Ordering::Release));
        Self {
            publish,
            dirty,
            listener,
            published: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// The text handed to the publish callback last.
    pub fn published(&self) -> Option<&str> {
        self.published.as_deref()
    }

    /// Publishes `session`'s CSS if anything was registered since the last
    /// flush and the text actually changed. Returns whether it published.
    pub fn flush(&mut self, session: &Session) -> bool {
        if !self.dirty.swap(false, Ordering::AcqRel) {
            return false;
        }
        let css = session.generate_css();
        if self.published.as_deref() == Some(css.as_str()) {
            return false;
        }
        log::debug!("publishing stylesheet ({} bytes)", css.len());
        (self.publish)(&css);
        self.published = Some(css);
        true
    }

    /// Unsubscribes from `session`.
    pub fn detach(self, session: &mut Session) -> bool {
        session.unsubscribe(self.listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[test]
    fn batches_registrations_into_one_publish() {
        let mut session = Session::new();
        let mut sheets = Vec::new();
        {
            let mut publisher = StylesheetPublisher::attach(&mut session, |css: &str| sheets.push(css.to_string()));
            assert!(publisher.flush(&session));

            session.cx([Rule::new([("color", "red")])]);
            session.cx([Rule::new([("color", "blue")])]);
            assert!(publisher.is_dirty());
            assert!(publisher.flush(&session));
            assert!(!publisher.flush(&session));
            assert!(publisher.detach(&mut session));
        }
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0], "");
        assert!(sheets[1].contains("color: red;"));
        assert!(sheets[1].contains("color: blue;"));
    }

    #[test]
    fn repeat_registration_does_not_dirty() {
        let mut session = Session::new();
        let mut count = 0;
        let mut publisher = StylesheetPublisher::attach(&mut session, |_: &str| count += 1);
        session.cx([Rule::new([("margin", "0")])]);
        publisher.flush(&session);
        session.cx([Rule::new([("margin", "0")])]);
        assert!(!publisher.is_dirty());
        assert!(!publisher.flush(&session));
        drop(publisher);
        assert_eq!(count, 1);
    }
}
