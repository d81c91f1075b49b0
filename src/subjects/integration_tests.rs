use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::observers::{ConsoleObserver, RecordingObserver};
use crate::subjects::StateSubject;
use crate::traits::{ObserverRef, Subject};

/// Single buffer shared by several console observers, so interleaving is visible.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// End-to-end: the demonstration scenario with stand-in observers
#[test]
fn test_demo_scenario_with_recording_observers() {
    let mut subject = StateSubject::new("Inicial");
    let a = Arc::new(RecordingObserver::new("Observador 1"));
    let b = Arc::new(RecordingObserver::new("Observador 2"));

    assert!(subject.add_observer(a.clone()));
    assert!(subject.add_observer(b.clone()));

    let delivered = subject.set_state("Nuevo estado").unwrap();

    assert_eq!(delivered, 2);
    assert_eq!(subject.get_state(), "Nuevo estado");
    assert_eq!(a.messages(), vec!["Estado actualizado a Nuevo estado"]);
    assert_eq!(b.messages(), vec!["Estado actualizado a Nuevo estado"]);
}

/// End-to-end: the demonstration scenario prints one line per observer, A then B
#[test]
fn test_demo_scenario_console_output_order() {
    let buffer = SharedBuffer::default();
    let mut subject = StateSubject::new("Inicial");
    subject.add_observer(Arc::new(ConsoleObserver::with_writer(
        "Observador 1",
        buffer.clone(),
    )));
    subject.add_observer(Arc::new(ConsoleObserver::with_writer(
        "Observador 2",
        buffer.clone(),
    )));

    subject.set_state("Nuevo estado").unwrap();

    assert_eq!(
        buffer.lines(),
        vec![
            "Observador 1 has received the message: Estado actualizado a Nuevo estado",
            "Observador 2 has received the message: Estado actualizado a Nuevo estado",
        ]
    );
}

#[test]
fn test_re_adding_observer_does_not_duplicate_notifications() {
    let mut subject = StateSubject::new("Inicial");
    let a = Arc::new(RecordingObserver::new("a"));
    let handle: ObserverRef = a.clone();

    assert!(subject.add_observer(handle.clone()));
    assert!(!subject.add_observer(handle.clone()));
    assert!(!subject.add_observer(handle));
    subject.set_state("x").unwrap();

    assert_eq!(subject.observer_count(), 1);
    assert_eq!(a.update_count(), 1);
}

#[test]
fn test_observer_outlives_subject_and_can_join_another() {
    let a = Arc::new(RecordingObserver::new("a"));
    {
        let mut first = StateSubject::new("one");
        first.add_observer(a.clone());
        first.set_state("two").unwrap();
    }

    let mut second = StateSubject::new("alpha");
    second.add_observer(a.clone());
    second.set_state("beta").unwrap();

    assert_eq!(
        a.messages(),
        vec!["Estado actualizado a two", "Estado actualizado a beta"]
    );
}

#[test]
fn test_notify_directly_sends_message_verbatim() {
    let mut subject = StateSubject::new("Inicial");
    let a = Arc::new(RecordingObserver::new("a"));
    subject.add_observer(a.clone());

    subject.notify("raw message").unwrap();

    assert_eq!(a.messages(), vec!["raw message"]);
    assert_eq!(subject.get_state(), "Inicial");
}
